mod generate_skeleton;
mod grow_trapping_net;
mod scatter_flies;

pub use generate_skeleton::GenerateSkeleton;
pub use grow_trapping_net::GrowTrappingNet;
pub use scatter_flies::ScatterFlies;
