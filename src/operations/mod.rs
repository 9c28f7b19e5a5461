pub mod generation;
pub mod query;
