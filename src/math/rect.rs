use super::intersect_2d::segments_touch_2d;
use super::{Point2, Vector2};

/// An axis-aligned rectangle given by its minimum corner and extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Point2,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(min: Point2, width: f64, height: f64) -> Self {
        Self { min, width, height }
    }

    /// A square with top-left corner `min` and side `size`.
    #[must_use]
    pub fn square(min: Point2, size: f64) -> Self {
        Self::new(min, size, size)
    }

    #[must_use]
    pub fn max(&self) -> Point2 {
        Point2::new(self.min.x + self.width, self.min.y + self.height)
    }

    /// The four corners in boundary order.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        let max = self.max();
        [
            self.min,
            Point2::new(max.x, self.min.y),
            max,
            Point2::new(self.min.x, max.y),
        ]
    }

    /// Returns the same rectangle shifted by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector2) -> Self {
        Self::new(self.min + offset, self.width, self.height)
    }

    /// Closed containment test: points on the boundary count as inside.
    #[must_use]
    pub fn contains_point(&self, p: &Point2) -> bool {
        let max = self.max();
        p.x >= self.min.x && p.x <= max.x && p.y >= self.min.y && p.y <= max.y
    }

    /// Returns `true` if the segment `a`-`b` has an endpoint inside the rectangle
    /// or crosses any of its four sides.
    #[must_use]
    pub fn intersects_segment(&self, a: &Point2, b: &Point2) -> bool {
        if self.contains_point(a) || self.contains_point(b) {
            return true;
        }
        let max = self.max();
        if a.x.max(b.x) < self.min.x
            || a.x.min(b.x) > max.x
            || a.y.max(b.y) < self.min.y
            || a.y.min(b.y) > max.y
        {
            return false;
        }
        let corners = self.corners();
        (0..4).any(|i| segments_touch_2d(a, b, &corners[i], &corners[(i + 1) % 4]))
    }
}
