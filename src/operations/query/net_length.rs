use crate::geometry::{TrappingNet, TrappingNetRing};

/// Computes the total thread length of a trapping net.
pub struct NetLength<'a> {
    net: &'a TrappingNet,
}

impl<'a> NetLength<'a> {
    /// Creates a new `NetLength` query.
    #[must_use]
    pub fn new(net: &'a TrappingNet) -> Self {
        Self { net }
    }

    /// Executes the query, returning the sum of all ring perimeters.
    #[must_use]
    pub fn execute(&self) -> f64 {
        self.net.rings().iter().map(TrappingNetRing::perimeter).sum()
    }
}
