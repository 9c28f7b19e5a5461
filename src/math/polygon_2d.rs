use super::Point2;

/// Even-odd point-in-polygon test for a closed polygon.
///
/// Casts a ray towards +x and counts edge crossings. Points exactly on the
/// boundary may fall either way.
#[must_use]
pub fn contains_point(polygon: &[Point2], point: &Point2) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (a, b) = (&polygon[i], &polygon[j]);
        if (a.y > point.y) != (b.y > point.y) {
            let x_cross = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Total length of the closed polygon boundary, including the closing edge.
#[must_use]
pub fn perimeter(polygon: &[Point2]) -> f64 {
    if polygon.len() < 2 {
        return 0.0;
    }
    closed_edges(polygon).map(|(a, b)| (b - a).norm()).sum()
}

/// Iterates over the edges of a closed polygon, wrapping the last vertex to the first.
pub fn closed_edges(polygon: &[Point2]) -> impl Iterator<Item = (&Point2, &Point2)> {
    let n = polygon.len();
    (0..n).map(move |i| (&polygon[i], &polygon[(i + 1) % n]))
}
