mod fly;
mod skeleton;
mod trapping_net;

pub use fly::Fly;
pub use skeleton::Skeleton;
pub use trapping_net::{TrappingNet, TrappingNetRing};
