use crate::math::{Point2, Rect};

/// A square target placed relative to the web center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fly {
    rect: Rect,
}

impl Fly {
    /// Creates a fly whose top-left corner sits at `corner` (center-relative).
    #[must_use]
    pub fn new(corner: Point2, size: f64) -> Self {
        Self {
            rect: Rect::square(corner, size),
        }
    }

    /// The target square relative to the web center.
    #[must_use]
    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    /// The target square in canvas coordinates.
    #[must_use]
    pub fn canvas_rect(&self, center: &Point2) -> Rect {
        self.rect.translated(&center.coords)
    }

    /// Whether the segment `a`-`b` (center-relative) touches this fly.
    #[must_use]
    pub fn hit_by(&self, a: &Point2, b: &Point2) -> bool {
        self.rect.intersects_segment(a, b)
    }
}
