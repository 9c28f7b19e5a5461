use std::f64::consts::TAU;

use tracing::{debug, warn};

use crate::config::WebConfig;
use crate::error::{GenerationError, Result};
use crate::geometry::Skeleton;
use crate::math::polar::angular_separation;
use crate::math::{Point2, PolarPoint};
use crate::random::RandomSource;

/// Generates a web skeleton by rejection sampling.
///
/// Spoke points are drawn one at a time; a candidate is rejected when it is
/// too close to the center or to another spoke's angle. A complete point set
/// is then accepted only if its polygon encloses a 3x3 grid of sample points around
/// the center. Both loops are capped, so infeasible parameters surface as a
/// [`GenerationError`] instead of spinning forever.
pub struct GenerateSkeleton {
    sides_count: usize,
    center: Point2,
    width: u32,
    height: u32,
    min_distance_between_points: u32,
    min_distance_from_center: u32,
    min_angle_between_lines: f64,
    sample_shift: u32,
    max_point_attempts: usize,
    max_skeleton_attempts: usize,
}

impl GenerateSkeleton {
    /// Creates a new `GenerateSkeleton` operation from a validated configuration.
    #[must_use]
    pub fn new(config: &WebConfig) -> Self {
        Self {
            sides_count: config.sides_count(),
            center: config.center(),
            width: config.width(),
            height: config.height(),
            min_distance_between_points: config.min_distance_between_skeleton_points(),
            min_distance_from_center: config.min_skeleton_distance_from_center(),
            min_angle_between_lines: config.min_angle_between_skeleton_lines(),
            sample_shift: config.center_sample_shift(),
            max_point_attempts: config.max_point_attempts(),
            max_skeleton_attempts: config.max_skeleton_attempts(),
        }
    }

    /// Executes the operation, returning a skeleton that satisfies every
    /// distance, angle and center-containment constraint.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::PointSamplingExhausted` if no attempt ever
    /// managed to place all spoke points, or
    /// `GenerationError::SkeletonExhausted` if full point sets were found but
    /// none enclosed the center samples.
    pub fn execute<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Skeleton> {
        let mut any_complete = false;
        for attempt in 1..=self.max_skeleton_attempts {
            let Some(points) = self.sample_points(rng) else {
                debug!(attempt, "skeleton rejected: spoke sampling stalled");
                continue;
            };
            any_complete = true;

            let skeleton = Skeleton::new(points, self.center);
            if skeleton.encloses_center(self.sample_shift) {
                debug!(attempt, sides = self.sides_count, "skeleton accepted");
                return Ok(skeleton);
            }
            debug!(attempt, "skeleton rejected: center samples outside polygon");
        }

        warn!(
            attempts = self.max_skeleton_attempts,
            sides = self.sides_count,
            "skeleton generation exhausted its retries"
        );
        let err = if any_complete {
            GenerationError::SkeletonExhausted {
                attempts: self.max_skeleton_attempts,
            }
        } else {
            GenerationError::PointSamplingExhausted {
                attempts: self.max_point_attempts,
            }
        };
        Err(err.into())
    }

    /// Draws a full set of spoke points, or `None` if one point could not be
    /// placed within the per-point retry cap.
    fn sample_points<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<Vec<PolarPoint>> {
        let mut points = Vec::with_capacity(self.sides_count);
        for _ in 0..self.sides_count {
            let point = self.sample_point(rng, &points)?;
            points.push(point);
        }
        Some(points)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn sample_point<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        accepted: &[PolarPoint],
    ) -> Option<PolarPoint> {
        for _ in 0..self.max_point_attempts {
            let angle = rng.next_f64() * TAU;
            let max_distance = self.max_distance_along(angle);
            if max_distance <= self.min_distance_from_center {
                continue;
            }

            let span = f64::from(max_distance - self.min_distance_from_center);
            let distance = self.min_distance_from_center + (rng.next_f64() * span) as u32;
            let candidate = PolarPoint::new(angle, distance);
            if self.is_valid_point(&candidate, accepted) {
                return Some(candidate);
            }
        }
        None
    }

    /// Farthest admissible distance along `angle`: the radius of the ellipse
    /// inscribed in the canvas, truncated to whole units.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn max_distance_along(&self, angle: f64) -> u32 {
        let bx = 0.5 * f64::from(self.width) * angle.cos();
        let by = 0.5 * f64::from(self.height) * angle.sin();
        bx.hypot(by) as u32
    }

    fn is_valid_point(&self, candidate: &PolarPoint, accepted: &[PolarPoint]) -> bool {
        if candidate.distance() <= self.min_distance_between_points {
            return false;
        }
        accepted.iter().all(|p| {
            angular_separation(candidate.angle(), p.angle()) >= self.min_angle_between_lines
        })
    }
}
