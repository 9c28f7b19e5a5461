//! The web model: one skeleton, its trapping net, and the fly population it
//! is scored against.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::config::WebConfig;
use crate::error::Result;
use crate::geometry::{Fly, Skeleton, TrappingNet};
use crate::math::{Point2, Rect};
use crate::operations::generation::{GenerateSkeleton, GrowTrappingNet, ScatterFlies};
use crate::operations::query::{CatchReport, EvaluateCatch, NetLength};
use crate::random::RandomSource;

/// One generated web together with its score against a fly population.
#[derive(Debug, Clone, PartialEq)]
pub struct Web {
    skeleton: Skeleton,
    net: TrappingNet,
    report: CatchReport,
    length: f64,
}

impl Web {
    /// Generates a skeleton, grows a net inside it and scores it against `flies`.
    ///
    /// # Errors
    ///
    /// Returns a `GenerationError` if the skeleton cannot be generated within
    /// the configured retry caps.
    pub fn generate<R: RandomSource + ?Sized>(
        config: &WebConfig,
        flies: &[Fly],
        rng: &mut R,
    ) -> Result<Self> {
        let skeleton = GenerateSkeleton::new(config).execute(rng)?;
        let net = GrowTrappingNet::new(config).execute(&skeleton, rng);
        let report = EvaluateCatch::new(&net, flies).execute();
        let length = NetLength::new(&net).execute();
        debug!(
            rings = net.len(),
            caught = report.caught.len(),
            efficiency = report.efficiency,
            length,
            "web generated"
        );
        Ok(Self {
            skeleton,
            net,
            report,
            length,
        })
    }

    /// The same geometry scored against a different fly population.
    #[must_use]
    pub fn rescored(&self, flies: &[Fly]) -> Self {
        Self {
            report: EvaluateCatch::new(&self.net, flies).execute(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    #[must_use]
    pub fn trapping_net(&self) -> &TrappingNet {
        &self.net
    }

    #[must_use]
    pub fn report(&self) -> &CatchReport {
        &self.report
    }

    #[must_use]
    pub fn efficiency(&self) -> f64 {
        self.report.efficiency
    }

    /// Total perimeter of all rings.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }
}

/// Read-only geometry handed to a renderer, in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct WebSnapshot {
    pub center: Point2,
    pub skeleton: Vec<Point2>,
    pub spokes: Vec<(Point2, Point2)>,
    pub rings: Vec<Vec<Point2>>,
    /// Caught fly squares; empty unless `show_flies` is set.
    pub caught_flies: Vec<Rect>,
    pub efficiency: f64,
}

/// Owns the configuration, random source, fly population and current web.
///
/// Flies persist across [`WebModel::build`] calls unless the configuration
/// asks for dynamic flies.
pub struct WebModel<R: RandomSource = StdRng> {
    config: WebConfig,
    rng: R,
    flies: Vec<Fly>,
    web: Web,
    generation: u64,
}

impl WebModel<StdRng> {
    /// Creates a model seeded from `config.random_seed()`, or from system
    /// entropy when no seed is set, and builds the first web.
    ///
    /// # Errors
    ///
    /// Returns a `GenerationError` if the first web cannot be generated.
    pub fn new(config: WebConfig) -> Result<Self> {
        let rng = match config.random_seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_source(config, rng)
    }
}

impl<R: RandomSource> WebModel<R> {
    /// Creates a model drawing from `rng`, scatters the flies and builds the first web.
    ///
    /// # Errors
    ///
    /// Returns a `GenerationError` if the first web cannot be generated.
    pub fn with_source(config: WebConfig, mut rng: R) -> Result<Self> {
        let flies = ScatterFlies::new(&config).execute(&mut rng);
        let web = Web::generate(&config, &flies, &mut rng)?;
        info!(
            sides = config.sides_count(),
            flies = flies.len(),
            efficiency = web.efficiency(),
            "web model created"
        );
        Ok(Self {
            config,
            rng,
            flies,
            web,
            generation: 0,
        })
    }

    /// Regenerates the skeleton and net and rescores them.
    ///
    /// On failure the previous web (and fly population) is kept.
    ///
    /// # Errors
    ///
    /// Returns a `GenerationError` if skeleton generation exhausts its retries.
    pub fn build(&mut self) -> Result<()> {
        let fresh = self.fresh_flies();
        let flies = fresh.as_deref().unwrap_or(&self.flies);
        let web = Web::generate(&self.config, flies, &mut self.rng)?;
        if let Some(fresh) = fresh {
            self.flies = fresh;
        }
        self.web = web;
        Ok(())
    }

    /// Runs one evolution step: generates `offspring` candidate webs and keeps
    /// the most efficient of them and the current web. Returns the resulting
    /// efficiency, which never drops below the current one for a fixed fly
    /// population.
    ///
    /// # Errors
    ///
    /// Returns a `GenerationError` if a candidate cannot be generated; the
    /// model is left unchanged.
    pub fn reproduce(&mut self, offspring: usize) -> Result<f64> {
        let fresh = self.fresh_flies();
        let flies = fresh.as_deref().unwrap_or(&self.flies);

        let mut best = match &fresh {
            Some(fresh) => self.web.rescored(fresh),
            None => self.web.clone(),
        };
        for _ in 0..offspring {
            let child = Web::generate(&self.config, flies, &mut self.rng)?;
            if child.efficiency() > best.efficiency() {
                best = child;
            }
        }

        if let Some(fresh) = fresh {
            self.flies = fresh;
        }
        self.web = best;
        self.generation += 1;
        debug!(
            generation = self.generation,
            efficiency = self.web.efficiency(),
            "reproduction step"
        );
        Ok(self.web.efficiency())
    }

    /// Replaces the configuration, rescatters the flies and starts over at
    /// generation 0.
    ///
    /// # Errors
    ///
    /// Returns a `GenerationError` if no web can be generated under the new
    /// configuration; the model is left unchanged.
    pub fn reset(&mut self, config: WebConfig) -> Result<()> {
        let flies = ScatterFlies::new(&config).execute(&mut self.rng);
        let web = Web::generate(&config, &flies, &mut self.rng)?;
        self.config = config;
        self.flies = flies;
        self.web = web;
        self.generation = 0;
        Ok(())
    }

    /// Changes the sides count and resets the model.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParameterOutOfRange` for counts outside `[3, 30]`
    /// before touching any state, or a `GenerationError` from the rebuild.
    pub fn set_sides_count(&mut self, count: usize) -> Result<()> {
        let config = self.config.clone().with_sides_count(count)?;
        self.reset(config)
    }

    /// Changes the fly population size and resets the model.
    ///
    /// # Errors
    ///
    /// Returns a `GenerationError` from the rebuild.
    pub fn set_fly_count(&mut self, count: usize) -> Result<()> {
        let config = self.config.clone().with_fly_count(count);
        self.reset(config)
    }

    /// Toggles whether the snapshot includes caught flies. Geometry is untouched.
    pub fn set_show_flies(&mut self, show: bool) {
        self.config = self.config.clone().with_show_flies(show);
    }

    #[must_use]
    pub fn config(&self) -> &WebConfig {
        &self.config
    }

    #[must_use]
    pub fn web(&self) -> &Web {
        &self.web
    }

    #[must_use]
    pub fn skeleton(&self) -> &Skeleton {
        self.web.skeleton()
    }

    #[must_use]
    pub fn trapping_net(&self) -> &TrappingNet {
        self.web.trapping_net()
    }

    #[must_use]
    pub fn flies(&self) -> &[Fly] {
        &self.flies
    }

    /// Flies touching the current net, in population order.
    pub fn caught_flies(&self) -> impl Iterator<Item = &Fly> + '_ {
        self.web
            .report()
            .caught
            .iter()
            .filter_map(|&i| self.flies.get(i))
    }

    #[must_use]
    pub fn efficiency(&self) -> f64 {
        self.web.efficiency()
    }

    #[must_use]
    pub fn trapping_net_length(&self) -> f64 {
        self.web.length()
    }

    /// Number of completed [`WebModel::reproduce`] steps since the last reset.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Copies the current geometry out in canvas coordinates.
    #[must_use]
    pub fn snapshot(&self) -> WebSnapshot {
        let center = self.config.center();
        let caught_flies = if self.config.show_flies() {
            self.caught_flies().map(|f| f.canvas_rect(&center)).collect()
        } else {
            Vec::new()
        };
        WebSnapshot {
            center,
            skeleton: self.skeleton().vertices(),
            spokes: self.skeleton().spokes(),
            rings: self.trapping_net().ring_vertices(&center),
            caught_flies,
            efficiency: self.efficiency(),
        }
    }

    /// A new fly population when flies are dynamic, otherwise `None`.
    fn fresh_flies(&mut self) -> Option<Vec<Fly>> {
        self.config
            .dynamic_flies()
            .then(|| ScatterFlies::new(&self.config).execute(&mut self.rng))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, WebError};
    use crate::geometry::TrappingNetRing;

    fn seeded(sides: usize, flies: usize, seed: u64) -> WebModel {
        let config = WebConfig::new(sides, 600, 600)
            .unwrap()
            .with_fly_count(flies)
            .with_random_seed(seed);
        WebModel::new(config).unwrap()
    }

    #[test]
    fn hexagonal_web_scores_between_zero_and_one() {
        let model = seeded(6, 100, 2024);
        assert_eq!(model.skeleton().len(), 6);
        assert!(!model.trapping_net().is_empty());
        assert_eq!(model.flies().len(), 100);
        let e = model.efficiency();
        assert!(e > 0.0 && e < 1.0, "efficiency {e}");
    }

    #[test]
    fn same_seed_reproduces_web() {
        let a = seeded(9, 200, 77);
        let b = seeded(9, 200, 77);
        assert_eq!(a.web(), b.web());
        assert_eq!(a.flies(), b.flies());
    }

    #[test]
    fn build_keeps_flies_and_recomputes_efficiency() {
        let mut model = seeded(5, 300, 8);
        let flies_before = model.flies().to_vec();
        let skeleton_before = model.skeleton().clone();
        model.build().unwrap();
        assert_eq!(model.flies(), flies_before.as_slice());
        assert_ne!(model.skeleton(), &skeleton_before);
        let expected = EvaluateCatch::new(model.trapping_net(), model.flies()).execute();
        assert_eq!(model.web().report(), &expected);
    }

    #[test]
    fn dynamic_flies_are_rescattered() {
        let config = WebConfig::new(6, 600, 600)
            .unwrap()
            .with_fly_count(50)
            .with_dynamic_flies(true);
        let mut model = WebModel::with_source(config, StdRng::seed_from_u64(3)).unwrap();
        let before = model.flies().to_vec();
        model.build().unwrap();
        assert_ne!(model.flies(), before.as_slice());
        assert_eq!(model.flies().len(), 50);
    }

    #[test]
    fn reproduce_never_lowers_efficiency() {
        let mut model = seeded(6, 300, 41);
        let mut last = model.efficiency();
        for step in 1..=4 {
            let e = model.reproduce(3).unwrap();
            assert!(e >= last);
            assert_eq!(model.generation(), step);
            last = e;
        }
    }

    #[test]
    fn invalid_sides_count_leaves_model_untouched() {
        let mut model = seeded(6, 50, 1);
        let web_before = model.web().clone();
        let err = model.set_sides_count(31).unwrap_err();
        assert!(matches!(
            err,
            WebError::Config(ConfigError::ParameterOutOfRange { .. })
        ));
        assert_eq!(model.config().sides_count(), 6);
        assert_eq!(model.web(), &web_before);
        assert!(model.set_sides_count(2).is_err());
    }

    #[test]
    fn reset_applies_new_sides_and_flies() {
        let mut model = seeded(6, 50, 1);
        model.reproduce(1).unwrap();
        model.set_sides_count(12).unwrap();
        assert_eq!(model.skeleton().len(), 12);
        assert_eq!(model.generation(), 0);
        model.set_fly_count(80).unwrap();
        assert_eq!(model.flies().len(), 80);
    }

    #[test]
    fn zero_flies_score_zero() {
        let model = seeded(6, 0, 5);
        assert!(model.efficiency().abs() < f64::EPSILON);
        assert_eq!(model.caught_flies().count(), 0);
    }

    #[test]
    fn net_length_matches_rings() {
        let model = seeded(7, 10, 12);
        let expected = NetLength::new(model.trapping_net()).execute();
        assert!((model.trapping_net_length() - expected).abs() < 1e-9);
        assert!(model.trapping_net_length() > 0.0);
    }

    #[test]
    fn length_cap_from_config_truncates_net() {
        let uncapped = seeded(6, 100, 3);
        let rings = uncapped.trapping_net().rings();
        assert!(rings.len() > 2);
        let cap = rings[..2].iter().map(TrappingNetRing::perimeter).sum::<f64>() + 1.0;

        let config = WebConfig::new(6, 600, 600)
            .unwrap()
            .with_fly_count(100)
            .with_random_seed(3)
            .with_max_trapping_net_length(cap)
            .unwrap();
        let capped = WebModel::new(config).unwrap();
        assert_eq!(capped.skeleton(), uncapped.skeleton());
        assert_eq!(capped.trapping_net().rings(), &rings[..2]);
        assert!(capped.trapping_net_length() <= cap);
        assert!(capped.trapping_net_length() < uncapped.trapping_net_length());
    }

    #[test]
    fn snapshot_gates_caught_flies() {
        let mut model = seeded(6, 400, 19);
        let hidden = model.snapshot();
        assert!(hidden.caught_flies.is_empty());
        assert_eq!(hidden.skeleton.len(), 6);
        assert_eq!(hidden.spokes.len(), 6);
        assert_eq!(hidden.rings.len(), model.trapping_net().len());
        assert_eq!(hidden.center, Point2::new(300.0, 300.0));

        model.set_show_flies(true);
        let shown = model.snapshot();
        assert_eq!(shown.caught_flies.len(), model.caught_flies().count());
        assert!(shown
            .caught_flies
            .iter()
            .all(|r| r.min.x >= 300.0 && r.min.y >= 300.0));
    }
}
