use super::{Point2, Vector2, TOLERANCE};

/// Bounded segment-segment intersection in 2D.
///
/// Returns `(intersection_point, t, u)` where `t` and `u` are in `[0, 1]`.
/// Parallel segments never intersect under this test.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<(Point2, f64, f64)> {
    let da: Vector2 = a1 - a0;
    let db: Vector2 = b1 - b0;

    let cross = da.x * db.y - da.y * db.x;
    if cross.abs() < TOLERANCE {
        return None;
    }

    let dx = b0.x - a0.x;
    let dy = b0.y - a0.y;
    let t = (dx * db.y - dy * db.x) / cross;
    let u = (dx * da.y - dy * da.x) / cross;

    // Use a small epsilon to include endpoints.
    let eps = TOLERANCE;
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        let t_clamped = t.clamp(0.0, 1.0);
        let pt = *a0 + da * t_clamped;
        Some((pt, t_clamped, u.clamp(0.0, 1.0)))
    } else {
        None
    }
}

/// Returns `true` if the two closed segments share at least one point.
///
/// Unlike [`segment_segment_intersect_2d`], collinear overlapping segments
/// count as intersecting.
#[must_use]
pub fn segments_touch_2d(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    if segment_segment_intersect_2d(a0, a1, b0, b1).is_some() {
        return true;
    }
    let da = a1 - a0;
    let cross_b0 = da.x * (b0.y - a0.y) - da.y * (b0.x - a0.x);
    let cross_b1 = da.x * (b1.y - a0.y) - da.y * (b1.x - a0.x);
    if cross_b0.abs() > TOLERANCE || cross_b1.abs() > TOLERANCE {
        return false;
    }
    within_span(a0, a1, b0)
        || within_span(a0, a1, b1)
        || within_span(b0, b1, a0)
        || within_span(b0, b1, a1)
}

/// Whether a point already known to be collinear lies within the segment's bounding span.
fn within_span(s0: &Point2, s1: &Point2, p: &Point2) -> bool {
    p.x >= s0.x.min(s1.x) - TOLERANCE
        && p.x <= s0.x.max(s1.x) + TOLERANCE
        && p.y >= s0.y.min(s1.y) - TOLERANCE
        && p.y <= s0.y.max(s1.y) + TOLERANCE
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn segment_segment_crossing() {
        let a0 = Point2::new(0.0, 0.0);
        let a1 = Point2::new(2.0, 2.0);
        let b0 = Point2::new(0.0, 2.0);
        let b1 = Point2::new(2.0, 0.0);
        let (pt, t, u) = segment_segment_intersect_2d(&a0, &a1, &b0, &b1).unwrap();
        assert!((pt.x - 1.0).abs() < TOLERANCE);
        assert!((pt.y - 1.0).abs() < TOLERANCE);
        assert!((t - 0.5).abs() < TOLERANCE);
        assert!((u - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn segment_segment_no_crossing() {
        let a0 = Point2::new(0.0, 0.0);
        let a1 = Point2::new(1.0, 0.0);
        let b0 = Point2::new(0.0, 1.0);
        let b1 = Point2::new(1.0, 1.0);
        assert!(segment_segment_intersect_2d(&a0, &a1, &b0, &b1).is_none());
    }

    #[test]
    fn segment_segment_shared_endpoint() {
        let a0 = Point2::new(0.0, 0.0);
        let a1 = Point2::new(1.0, 0.0);
        let b0 = Point2::new(1.0, 0.0);
        let b1 = Point2::new(1.0, 3.0);
        let (pt, t, u) = segment_segment_intersect_2d(&a0, &a1, &b0, &b1).unwrap();
        assert!((pt.x - 1.0).abs() < TOLERANCE);
        assert!((t - 1.0).abs() < TOLERANCE);
        assert!(u.abs() < TOLERANCE);
    }

    #[test]
    fn segments_touch_collinear_overlap() {
        let a0 = Point2::new(0.0, 0.0);
        let a1 = Point2::new(4.0, 0.0);
        let b0 = Point2::new(3.0, 0.0);
        let b1 = Point2::new(6.0, 0.0);
        assert!(segments_touch_2d(&a0, &a1, &b0, &b1));
    }

    #[test]
    fn segments_touch_collinear_disjoint() {
        let a0 = Point2::new(0.0, 0.0);
        let a1 = Point2::new(1.0, 0.0);
        let b0 = Point2::new(2.0, 0.0);
        let b1 = Point2::new(3.0, 0.0);
        assert!(!segments_touch_2d(&a0, &a1, &b0, &b1));
    }

    #[test]
    fn segments_touch_parallel_offset() {
        let a0 = Point2::new(0.0, 0.0);
        let a1 = Point2::new(4.0, 0.0);
        let b0 = Point2::new(0.0, 1.0);
        let b1 = Point2::new(4.0, 1.0);
        assert!(!segments_touch_2d(&a0, &a1, &b0, &b1));
    }
}
