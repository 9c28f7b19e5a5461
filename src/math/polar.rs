use std::cmp::Ordering;
use std::f64::consts::TAU;

use super::{Point2, Vector2};

/// A point given as `(angle, distance)` relative to a fixed center.
///
/// Angles are radians in `[0, 2π)`; distances are whole canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarPoint {
    angle: f64,
    distance: u32,
}

impl PolarPoint {
    /// Creates a polar point, normalizing the angle into `[0, 2π)`.
    #[must_use]
    pub fn new(angle: f64, distance: u32) -> Self {
        Self {
            angle: normalize_angle(angle),
            distance,
        }
    }

    /// Recovers the polar form of a Cartesian offset from the center.
    ///
    /// The distance is rounded to the nearest whole unit.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_cartesian(offset: &Vector2) -> Self {
        let angle = offset.y.atan2(offset.x);
        let distance = offset.x.hypot(offset.y).round() as u32;
        Self::new(angle, distance)
    }

    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[must_use]
    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// Offset from the center in Cartesian coordinates.
    #[must_use]
    pub fn to_cartesian(&self) -> Vector2 {
        let r = f64::from(self.distance);
        Vector2::new(r * self.angle.cos(), r * self.angle.sin())
    }

    /// Absolute position when the center sits at `center`.
    #[must_use]
    pub fn to_point(&self, center: &Point2) -> Point2 {
        *center + self.to_cartesian()
    }

    /// Orders two points by angle only; distance is ignored.
    #[must_use]
    pub fn angle_order(&self, other: &Self) -> Ordering {
        self.angle.total_cmp(&other.angle)
    }
}

/// Wraps an angle into `[0, 2π)`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Smallest angular separation between two directions, accounting for wraparound.
///
/// The result lies in `[0, π]`.
#[must_use]
pub fn angular_separation(a: f64, b: f64) -> f64 {
    let diff = normalize_angle(a - b);
    diff.min(TAU - diff)
}
