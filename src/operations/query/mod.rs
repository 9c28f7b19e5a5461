mod evaluate_catch;
mod net_length;

pub use evaluate_catch::{CatchReport, EvaluateCatch};
pub use net_length::NetLength;
