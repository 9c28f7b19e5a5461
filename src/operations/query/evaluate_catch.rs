use crate::geometry::{Fly, TrappingNet};
use crate::math::{polygon_2d, Point2};

/// Outcome of scoring a fly population against a trapping net.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatchReport {
    /// Indices of caught flies, ascending.
    pub caught: Vec<usize>,
    /// `caught.len() / fly count`, or 0 when there are no flies.
    pub efficiency: f64,
}

/// Determines which flies touch any edge of any trapping-net ring.
///
/// Fly rectangles and ring vertices share the same center-relative frame.
pub struct EvaluateCatch<'a> {
    net: &'a TrappingNet,
    flies: &'a [Fly],
}

impl<'a> EvaluateCatch<'a> {
    /// Creates a new `EvaluateCatch` query.
    #[must_use]
    pub fn new(net: &'a TrappingNet, flies: &'a [Fly]) -> Self {
        Self { net, flies }
    }

    /// Executes the query.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> CatchReport {
        if self.flies.is_empty() {
            return CatchReport::default();
        }

        let rings: Vec<Vec<Point2>> = self
            .net
            .rings()
            .iter()
            .map(|ring| ring.local_vertices())
            .collect();

        let caught: Vec<usize> = self
            .flies
            .iter()
            .enumerate()
            .filter(|(_, fly)| is_caught(fly, &rings))
            .map(|(i, _)| i)
            .collect();

        let efficiency = caught.len() as f64 / self.flies.len() as f64;
        CatchReport { caught, efficiency }
    }
}

fn is_caught(fly: &Fly, rings: &[Vec<Point2>]) -> bool {
    rings
        .iter()
        .any(|ring| polygon_2d::closed_edges(ring).any(|(a, b)| fly.hit_by(a, b)))
}
