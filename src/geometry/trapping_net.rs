use crate::math::{polygon_2d, Point2, PolarPoint};

/// One closed ring of the trapping net, with exactly one vertex per skeleton spoke.
#[derive(Debug, Clone, PartialEq)]
pub struct TrappingNetRing {
    points: Vec<PolarPoint>,
}

impl TrappingNetRing {
    /// Creates a ring from spoke-indexed points.
    #[must_use]
    pub fn new(points: Vec<PolarPoint>) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[PolarPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Distance of the vertex on spoke `index`.
    #[must_use]
    pub fn distance_at(&self, index: usize) -> Option<u32> {
        self.points.get(index).map(PolarPoint::distance)
    }

    /// Vertices as offsets from the web center.
    #[must_use]
    pub fn local_vertices(&self) -> Vec<Point2> {
        self.points
            .iter()
            .map(|p| Point2::from(p.to_cartesian()))
            .collect()
    }

    /// Vertices in canvas coordinates.
    #[must_use]
    pub fn vertices(&self, center: &Point2) -> Vec<Point2> {
        self.points.iter().map(|p| p.to_point(center)).collect()
    }

    /// Length of the closed ring boundary.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        polygon_2d::perimeter(&self.local_vertices())
    }
}

/// Nested rings grown outwards from the center, innermost first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrappingNet {
    rings: Vec<TrappingNetRing>,
}

impl TrappingNet {
    #[must_use]
    pub fn new(rings: Vec<TrappingNetRing>) -> Self {
        Self { rings }
    }

    #[must_use]
    pub fn rings(&self) -> &[TrappingNetRing] {
        &self.rings
    }

    /// The outermost ring, if any.
    #[must_use]
    pub fn last(&self) -> Option<&TrappingNetRing> {
        self.rings.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    pub(crate) fn push(&mut self, ring: TrappingNetRing) {
        self.rings.push(ring);
    }

    /// Per-ring vertex lists in canvas coordinates.
    #[must_use]
    pub fn ring_vertices(&self, center: &Point2) -> Vec<Vec<Point2>> {
        self.rings.iter().map(|r| r.vertices(center)).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn square_ring(distance: u32) -> TrappingNetRing {
        TrappingNetRing::new(
            [0.0, FRAC_PI_2, PI, 1.5 * PI]
                .into_iter()
                .map(|a| PolarPoint::new(a, distance))
                .collect(),
        )
    }

    #[test]
    fn ring_perimeter() {
        // Diamond with vertices at distance 10: four edges of length 10·√2.
        let ring = square_ring(10);
        assert_relative_eq!(ring.perimeter(), 40.0 * 2.0_f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn ring_vertices_translate() {
        let v = square_ring(10).vertices(&Point2::new(5.0, 5.0));
        assert_relative_eq!(v[0].x, 15.0, epsilon = 1e-9);
        assert_relative_eq!(v[1].y, 15.0, epsilon = 1e-9);
    }

    #[test]
    fn net_accessors() {
        let mut net = TrappingNet::default();
        assert!(net.is_empty());
        net.push(square_ring(5));
        net.push(square_ring(9));
        assert_eq!(net.len(), 2);
        assert_eq!(net.last().unwrap().distance_at(0), Some(9));
        assert_eq!(net.ring_vertices(&Point2::origin()).len(), 2);
    }
}
