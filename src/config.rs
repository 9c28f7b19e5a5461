//! Generation parameters.
//!
//! [`WebConfig`] is an immutable value validated when it is built. The
//! canvas-derived constants are computed once but stay individually
//! overridable, so tests can pin any of them.

use std::f64::consts::TAU;

use crate::error::{ConfigError, Result};
use crate::math::Point2;

/// Smallest accepted number of skeleton sides.
pub const MIN_SIDES: usize = 3;
/// Largest accepted number of skeleton sides.
pub const MAX_SIDES: usize = 30;
/// Smallest accepted `min(width, height)`; keeps every derived gap at least 1.
pub const MIN_CANVAS_EXTENT: u32 = 75;

pub const DEFAULT_FLY_COUNT: usize = 1000;
pub const DEFAULT_DISPERSION: f64 = 7.0;
pub const DEFAULT_MAX_POINT_ATTEMPTS: usize = 10_000;
pub const DEFAULT_MAX_SKELETON_ATTEMPTS: usize = 1_000;

/// All parameters consumed by web generation.
#[derive(Debug, Clone, PartialEq)]
pub struct WebConfig {
    sides_count: usize,
    width: u32,
    height: u32,
    fly_count: usize,
    min_distance_between_skeleton_points: u32,
    min_skeleton_distance_from_center: u32,
    min_trapping_net_circle_distance: u32,
    fly_size: u32,
    min_angle_between_skeleton_lines: f64,
    min_angle_overridden: bool,
    trapping_net_circles_dispersion: f64,
    max_trapping_net_length: Option<f64>,
    max_point_attempts: usize,
    max_skeleton_attempts: usize,
    random_seed: Option<u64>,
    show_flies: bool,
    dynamic_flies: bool,
    normal_flies_distribution: bool,
}

impl WebConfig {
    /// Creates a configuration for a `width` x `height` canvas, deriving the
    /// distance and angle constants from the canvas and sides count.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParameterOutOfRange` if `sides_count` is outside
    /// `[3, 30]` or `min(width, height)` is below 75.
    pub fn new(sides_count: usize, width: u32, height: u32) -> Result<Self> {
        validate_sides_count(sides_count)?;
        let extent = width.min(height);
        if extent < MIN_CANVAS_EXTENT {
            return Err(out_of_range(
                "min(width, height)",
                f64::from(extent),
                f64::from(MIN_CANVAS_EXTENT),
                f64::from(u32::MAX),
            ));
        }

        let min_distance_between_skeleton_points = extent / 5;
        Ok(Self {
            sides_count,
            width,
            height,
            fly_count: DEFAULT_FLY_COUNT,
            min_distance_between_skeleton_points,
            min_skeleton_distance_from_center: 2 * min_distance_between_skeleton_points,
            min_trapping_net_circle_distance: extent / 75,
            fly_size: extent / 50,
            min_angle_between_skeleton_lines: min_angle_for(sides_count),
            min_angle_overridden: false,
            trapping_net_circles_dispersion: DEFAULT_DISPERSION,
            max_trapping_net_length: None,
            max_point_attempts: DEFAULT_MAX_POINT_ATTEMPTS,
            max_skeleton_attempts: DEFAULT_MAX_SKELETON_ATTEMPTS,
            random_seed: None,
            show_flies: false,
            dynamic_flies: false,
            normal_flies_distribution: false,
        })
    }

    /// Changes the sides count.
    ///
    /// A minimum skeleton angle set through
    /// [`with_min_angle_between_skeleton_lines`](Self::with_min_angle_between_skeleton_lines)
    /// is kept while it still fits `2π / count`. Otherwise, or if it was never
    /// overridden, the angle is recomputed as `2π / (3 · count)`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParameterOutOfRange` if `count` is outside `[3, 30]`.
    #[allow(clippy::cast_precision_loss)]
    pub fn with_sides_count(mut self, count: usize) -> Result<Self> {
        validate_sides_count(count)?;
        self.sides_count = count;
        let keeps_override = self.min_angle_overridden
            && self.min_angle_between_skeleton_lines <= TAU / count as f64;
        if !keeps_override {
            self.min_angle_between_skeleton_lines = min_angle_for(count);
            self.min_angle_overridden = false;
        }
        Ok(self)
    }

    #[must_use]
    pub fn with_fly_count(mut self, count: usize) -> Self {
        self.fly_count = count;
        self
    }

    #[must_use]
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_show_flies(mut self, show: bool) -> Self {
        self.show_flies = show;
        self
    }

    #[must_use]
    pub fn with_dynamic_flies(mut self, dynamic: bool) -> Self {
        self.dynamic_flies = dynamic;
        self
    }

    /// Draws fly corners from a normal distribution centered in the quadrant
    /// instead of uniformly.
    #[must_use]
    pub fn with_normal_flies_distribution(mut self, normal: bool) -> Self {
        self.normal_flies_distribution = normal;
        self
    }

    /// Sets how far past its lower bound a ring vertex may land, in multiples
    /// of the minimum ring gap.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParameterOutOfRange` for negative or non-finite values.
    pub fn with_dispersion(mut self, dispersion: f64) -> Result<Self> {
        if !dispersion.is_finite() || dispersion < 0.0 {
            return Err(out_of_range("dispersion", dispersion, 0.0, f64::MAX));
        }
        self.trapping_net_circles_dispersion = dispersion;
        Ok(self)
    }

    /// Caps the total perimeter of the trapping net.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParameterOutOfRange` for non-positive or non-finite values.
    pub fn with_max_trapping_net_length(mut self, length: f64) -> Result<Self> {
        if !length.is_finite() || length <= 0.0 {
            return Err(out_of_range("max_trapping_net_length", length, 0.0, f64::MAX));
        }
        self.max_trapping_net_length = Some(length);
        Ok(self)
    }

    /// Overrides the minimum ring-to-ring (and ring-to-skeleton) gap.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParameterOutOfRange` if `gap` is zero, since net
    /// growth would then never reach the skeleton.
    pub fn with_min_trapping_net_circle_distance(mut self, gap: u32) -> Result<Self> {
        if gap == 0 {
            return Err(out_of_range(
                "min_trapping_net_circle_distance",
                0.0,
                1.0,
                f64::from(u32::MAX),
            ));
        }
        self.min_trapping_net_circle_distance = gap;
        Ok(self)
    }

    /// Overrides the minimum angle between any two skeleton spokes.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParameterOutOfRange` for values outside `[0, 2π / sides]`.
    pub fn with_min_angle_between_skeleton_lines(mut self, angle: f64) -> Result<Self> {
        #[allow(clippy::cast_precision_loss)]
        let max = TAU / self.sides_count as f64;
        if !(0.0..=max).contains(&angle) {
            return Err(out_of_range("min_angle_between_skeleton_lines", angle, 0.0, max));
        }
        self.min_angle_between_skeleton_lines = angle;
        self.min_angle_overridden = true;
        Ok(self)
    }

    /// Overrides the skeleton distance constraints.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if `min_from_center` is not below the
    /// half-extent of the canvas, which would leave no room to sample distances.
    pub fn with_skeleton_distances(
        mut self,
        min_between_points: u32,
        min_from_center: u32,
    ) -> Result<Self> {
        let half_extent = self.width.min(self.height) / 2;
        if min_from_center >= half_extent {
            return Err(ConfigError::Invalid(format!(
                "minimum skeleton distance {min_from_center} must be below half the canvas extent {half_extent}"
            ))
            .into());
        }
        self.min_distance_between_skeleton_points = min_between_points;
        self.min_skeleton_distance_from_center = min_from_center;
        Ok(self)
    }

    /// Sets the rejection-sampling retry caps.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParameterOutOfRange` if either cap is zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn with_retry_limits(
        mut self,
        point_attempts: usize,
        skeleton_attempts: usize,
    ) -> Result<Self> {
        for (name, value) in [
            ("max_point_attempts", point_attempts),
            ("max_skeleton_attempts", skeleton_attempts),
        ] {
            if value == 0 {
                return Err(out_of_range(name, 0.0, 1.0, usize::MAX as f64));
            }
        }
        self.max_point_attempts = point_attempts;
        self.max_skeleton_attempts = skeleton_attempts;
        Ok(self)
    }

    #[must_use]
    pub fn sides_count(&self) -> usize {
        self.sides_count
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Canvas center, `(width / 2, height / 2)` in whole units.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(f64::from(self.width / 2), f64::from(self.height / 2))
    }

    #[must_use]
    pub fn fly_count(&self) -> usize {
        self.fly_count
    }

    #[must_use]
    pub fn min_distance_between_skeleton_points(&self) -> u32 {
        self.min_distance_between_skeleton_points
    }

    #[must_use]
    pub fn min_skeleton_distance_from_center(&self) -> u32 {
        self.min_skeleton_distance_from_center
    }

    #[must_use]
    pub fn min_trapping_net_circle_distance(&self) -> u32 {
        self.min_trapping_net_circle_distance
    }

    #[must_use]
    pub fn fly_size(&self) -> u32 {
        self.fly_size
    }

    #[must_use]
    pub fn min_angle_between_skeleton_lines(&self) -> f64 {
        self.min_angle_between_skeleton_lines
    }

    #[must_use]
    pub fn trapping_net_circles_dispersion(&self) -> f64 {
        self.trapping_net_circles_dispersion
    }

    #[must_use]
    pub fn max_trapping_net_length(&self) -> Option<f64> {
        self.max_trapping_net_length
    }

    #[must_use]
    pub fn max_point_attempts(&self) -> usize {
        self.max_point_attempts
    }

    #[must_use]
    pub fn max_skeleton_attempts(&self) -> usize {
        self.max_skeleton_attempts
    }

    #[must_use]
    pub fn random_seed(&self) -> Option<u64> {
        self.random_seed
    }

    #[must_use]
    pub fn show_flies(&self) -> bool {
        self.show_flies
    }

    #[must_use]
    pub fn dynamic_flies(&self) -> bool {
        self.dynamic_flies
    }

    #[must_use]
    pub fn normal_flies_distribution(&self) -> bool {
        self.normal_flies_distribution
    }

    /// Half-distance of the center-containment sample grid, `min(width, height) / 10`.
    #[must_use]
    pub fn center_sample_shift(&self) -> u32 {
        self.width.min(self.height) / 10
    }
}

#[allow(clippy::cast_precision_loss)]
fn validate_sides_count(count: usize) -> Result<()> {
    if (MIN_SIDES..=MAX_SIDES).contains(&count) {
        return Ok(());
    }
    Err(out_of_range(
        "sides_count",
        count as f64,
        MIN_SIDES as f64,
        MAX_SIDES as f64,
    ))
}

#[allow(clippy::cast_precision_loss)]
fn min_angle_for(sides_count: usize) -> f64 {
    TAU / (3.0 * sides_count as f64)
}

fn out_of_range(parameter: &'static str, value: f64, min: f64, max: f64) -> crate::error::WebError {
    ConfigError::ParameterOutOfRange {
        parameter,
        value,
        min,
        max,
    }
    .into()
}
