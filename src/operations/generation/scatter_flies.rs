use crate::config::WebConfig;
use crate::geometry::Fly;
use crate::math::Point2;
use crate::random::RandomSource;

/// Scatters square flies over the quadrant right of and below the center.
///
/// Each corner is drawn from `[0, width/2 - size) x [0, height/2 - size)`,
/// relative to the center, so every fly lies fully inside that quadrant.
/// Corners are uniform by default. With a normal distribution each axis is
/// centered on the middle of its range with a deviation of a sixth of the
/// range, and draws beyond the range are clamped to its ends.
pub struct ScatterFlies {
    count: usize,
    half_width: u32,
    half_height: u32,
    size: u32,
    normal: bool,
}

impl ScatterFlies {
    /// Creates a new `ScatterFlies` operation from a validated configuration.
    #[must_use]
    pub fn new(config: &WebConfig) -> Self {
        Self {
            count: config.fly_count(),
            half_width: config.width() / 2,
            half_height: config.height() / 2,
            size: config.fly_size(),
            normal: config.normal_flies_distribution(),
        }
    }

    /// Executes the operation. Placement never fails.
    pub fn execute<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Vec<Fly> {
        let x_range = self.half_width.saturating_sub(self.size);
        let y_range = self.half_height.saturating_sub(self.size);
        let size = f64::from(self.size);
        (0..self.count)
            .map(|_| {
                let (x, y) = if self.normal {
                    (normal_offset(rng, x_range), normal_offset(rng, y_range))
                } else {
                    (rng.next_below(x_range), rng.next_below(y_range))
                };
                Fly::new(Point2::new(f64::from(x), f64::from(y)), size)
            })
            .collect()
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn normal_offset<R: RandomSource + ?Sized>(rng: &mut R, range: u32) -> u32 {
    if range == 0 {
        return 0;
    }
    let range = f64::from(range);
    let value = rng.next_normal(range / 2.0, range / 6.0);
    value.floor().clamp(0.0, range - 1.0) as u32
}
