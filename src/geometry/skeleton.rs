use crate::math::{polygon_2d, Point2, PolarPoint};

/// The outer boundary of a web: one polar point per spoke, sorted by angle.
#[derive(Debug, Clone, PartialEq)]
pub struct Skeleton {
    points: Vec<PolarPoint>,
    center: Point2,
}

impl Skeleton {
    /// Builds a skeleton from spoke points, sorting them by ascending angle.
    #[must_use]
    pub fn new(mut points: Vec<PolarPoint>, center: Point2) -> Self {
        points.sort_by(PolarPoint::angle_order);
        Self { points, center }
    }

    /// Spoke points in ascending angle order.
    #[must_use]
    pub fn points(&self) -> &[PolarPoint] {
        &self.points
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Number of spokes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Distance of spoke `index` from the center, or `None` past the last spoke.
    #[must_use]
    pub fn distance_at(&self, index: usize) -> Option<u32> {
        self.points.get(index).map(PolarPoint::distance)
    }

    /// Angle of spoke `index`, or `None` past the last spoke.
    #[must_use]
    pub fn angle_at(&self, index: usize) -> Option<f64> {
        self.points.get(index).map(PolarPoint::angle)
    }

    /// Polygon vertices in canvas coordinates.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point2> {
        self.points.iter().map(|p| p.to_point(&self.center)).collect()
    }

    /// Radial lines from the center to each skeleton vertex, in canvas coordinates.
    #[must_use]
    pub fn spokes(&self) -> Vec<(Point2, Point2)> {
        self.vertices()
            .into_iter()
            .map(|v| (self.center, v))
            .collect()
    }

    /// Whether the skeleton polygon contains `point` (canvas coordinates).
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        polygon_2d::contains_point(&self.vertices(), point)
    }

    /// Checks that the 3x3 grid of points at `±shift` around the center lies
    /// inside the polygon.
    #[must_use]
    pub fn encloses_center(&self, shift: u32) -> bool {
        let polygon = self.vertices();
        let shift = f64::from(shift);
        (-1..=1).all(|dx| {
            (-1..=1).all(|dy| {
                let sample = Point2::new(
                    self.center.x + f64::from(dx) * shift,
                    self.center.y + f64::from(dy) * shift,
                );
                polygon_2d::contains_point(&polygon, &sample)
            })
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn diamond(radius: u32) -> Skeleton {
        // Deliberately unsorted.
        let points = vec![
            PolarPoint::new(PI, radius),
            PolarPoint::new(0.0, radius),
            PolarPoint::new(1.5 * PI, radius),
            PolarPoint::new(FRAC_PI_2, radius),
        ];
        Skeleton::new(points, Point2::new(100.0, 100.0))
    }

    #[test]
    fn points_are_sorted_by_angle() {
        let s = diamond(50);
        let angles: Vec<f64> = s.points().iter().map(PolarPoint::angle).collect();
        assert!(angles.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(s.len(), 4);
        assert_relative_eq!(s.angle_at(1).unwrap(), FRAC_PI_2);
        assert_eq!(s.distance_at(3), Some(50));
        assert_eq!(s.distance_at(4), None);
    }

    #[test]
    fn vertices_are_translated() {
        let v = diamond(50).vertices();
        assert_relative_eq!(v[0].x, 150.0, epsilon = 1e-9);
        assert_relative_eq!(v[0].y, 100.0, epsilon = 1e-9);
        assert_relative_eq!(v[2].x, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn spokes_start_at_center() {
        let spokes = diamond(50).spokes();
        assert_eq!(spokes.len(), 4);
        assert!(spokes.iter().all(|(c, _)| *c == Point2::new(100.0, 100.0)));
    }

    #[test]
    fn large_diamond_encloses_center_grid() {
        let s = diamond(50);
        assert!(s.encloses_center(10));
        assert!(s.contains(&Point2::new(110.0, 95.0)));
    }

    #[test]
    fn small_diamond_misses_corner_samples() {
        // Corner samples at (±20, ±20) lie outside a diamond of radius 30.
        assert!(!diamond(30).encloses_center(20));
    }
}
