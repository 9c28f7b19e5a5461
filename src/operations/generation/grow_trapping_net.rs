use tracing::trace;

use crate::config::WebConfig;
use crate::geometry::{Skeleton, TrappingNet, TrappingNetRing};
use crate::math::PolarPoint;
use crate::random::RandomSource;

/// Grows nested rings outwards from the center until the next ring no longer
/// fits inside the skeleton.
///
/// On every spoke a ring vertex lies at least `min_gap` beyond the previous
/// ring's vertex (or the center) and at least `min_gap` inside the skeleton.
/// Within that window it lands at most `dispersion * min_gap` past its lower
/// bound. The first ring that cannot satisfy some spoke is discarded and
/// growth stops, so the result may be empty.
pub struct GrowTrappingNet {
    min_gap: u32,
    dispersion: f64,
    max_length: Option<f64>,
}

impl GrowTrappingNet {
    /// Creates a new `GrowTrappingNet` operation from a validated configuration.
    #[must_use]
    pub fn new(config: &WebConfig) -> Self {
        Self {
            min_gap: config.min_trapping_net_circle_distance(),
            dispersion: config.trapping_net_circles_dispersion(),
            max_length: config.max_trapping_net_length(),
        }
    }

    /// Executes the operation against `skeleton`.
    pub fn execute<R: RandomSource + ?Sized>(
        &self,
        skeleton: &Skeleton,
        rng: &mut R,
    ) -> TrappingNet {
        let mut net = TrappingNet::default();
        if skeleton.is_empty() || self.min_gap == 0 {
            return net;
        }

        let mut total_length = 0.0;
        while let Some(ring) = self.next_ring(skeleton, net.last(), rng) {
            if let Some(max_length) = self.max_length {
                let length = ring.perimeter();
                if total_length + length > max_length {
                    trace!(rings = net.len(), total_length, "net length cap reached");
                    break;
                }
                total_length += length;
            }
            trace!(ring = net.len(), "trapping net ring fits");
            net.push(ring);
        }
        net
    }

    /// Builds the ring following `previous`, or `None` once some spoke has no room left.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn next_ring<R: RandomSource + ?Sized>(
        &self,
        skeleton: &Skeleton,
        previous: Option<&TrappingNetRing>,
        rng: &mut R,
    ) -> Option<TrappingNetRing> {
        let slack = (self.dispersion * f64::from(self.min_gap)) as u32;
        let mut points = Vec::with_capacity(skeleton.len());

        for (i, spoke) in skeleton.points().iter().enumerate() {
            let inner = previous.and_then(|ring| ring.distance_at(i)).unwrap_or(0);
            let lower_bound = inner.saturating_add(self.min_gap);
            let max_distance = spoke.distance().checked_sub(self.min_gap)?;
            if lower_bound > max_distance {
                return None;
            }

            let upper_bound = max_distance.min(lower_bound.saturating_add(slack));
            let span = f64::from(upper_bound - lower_bound);
            let distance = lower_bound + (rng.next_f64() * span) as u32;
            points.push(PolarPoint::new(spoke.angle(), distance));
        }
        Some(TrappingNetRing::new(points))
    }
}
