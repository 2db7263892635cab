//! Simulation hub: the outer loop over trials.
//!
//! The hub borrows a scheme (which carries the model and mesh) and a pricer,
//! generates `n_paths` independent trajectories and hands each completed path
//! to the pricer. After the last trial the pricer is finalised exactly once.
//!
//! # Parallel runs
//!
//! [`SimulationHub::run_parallel`] splits the trials into `workers`
//! partitions. Each partition owns its random source, path buffer and
//! [`RunningStatistics`]; the scheme and the pricer's payoff closure are only
//! read. Partitions are collected in worker order once all of them have
//! finished, merged into the pricer, and only then is the price finalised.
//! For a fixed seed and worker count the result is reproducible.
//!
//! ```text
//! worker 0: [source 0] → paths → stats 0 ┐
//! worker 1: [source 1] → paths → stats 1 ├─ barrier → merge 0,1,..,w-1 → finalize
//! worker w: [source w] → paths → stats w ┘
//! ```

use rayon::prelude::*;
use tracing::{debug, info_span};

use super::config::{ExecutionMode, MonteCarloConfig};
use super::error::{McError, PricerError, StatsError};
use super::paths::fill_path;
use super::pricer::PathPricer;
use super::result::PricingResult;
use super::stats::RunningStatistics;
use crate::rng::{NormalSource, PricerRng, SeededStreams, SourceFactory};
use crate::scheme::DiscretisationScheme;

/// Trials between progress log lines.
pub const PROGRESS_INTERVAL: usize = 5000;

/// Drives scheme, random source and pricer through a full run.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use pricer_models::models::{GbmSde, ModelParameters};
/// use pricer_models::payoff::{call, flat_discount};
/// use pricer_pricing::mc::{EuropeanPricer, MonteCarloConfig, SimulationHub};
/// use pricer_pricing::rng::PricerRng;
/// use pricer_pricing::scheme::ExplicitEuler;
///
/// let params = ModelParameters::default();
/// let model = Arc::new(GbmSde::new(params).unwrap());
/// let scheme = ExplicitEuler::new(model, 50).unwrap();
/// let mut pricer = EuropeanPricer::new(call(100.0), flat_discount(0.05, 1.0));
/// let config = MonteCarloConfig::builder().n_paths(2000).n_steps(50).build().unwrap();
///
/// let mut hub = SimulationHub::builder()
///     .scheme(&scheme)
///     .pricer(&mut pricer)
///     .config(config)
///     .build()
///     .unwrap();
///
/// let result = hub.run(&mut PricerRng::from_seed(42)).unwrap();
/// assert!(result.price > 5.0 && result.price < 16.0);
/// ```
pub struct SimulationHub<'a, S, P> {
    scheme: &'a S,
    pricer: &'a mut P,
    config: MonteCarloConfig,
    path: Vec<f64>,
}

impl<'a, S, P> SimulationHub<'a, S, P>
where
    S: DiscretisationScheme,
    P: PathPricer,
{
    /// Starts a builder.
    pub fn builder() -> SimulationHubBuilder<'a, S, P> {
        SimulationHubBuilder::default()
    }

    /// Run configuration.
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Runs all trials on the current thread with one source.
    ///
    /// # Errors
    ///
    /// [`McError::Pricer`] if the pricer rejects a path or was already
    /// finalised; reset it before reusing.
    pub fn run<R>(&mut self, source: &mut R) -> Result<PricingResult, McError>
    where
        R: NormalSource + ?Sized,
    {
        let n_paths = self.config.n_paths();
        let span = info_span!("mc_run", scheme = self.scheme.name(), n_paths, workers = 1);
        let _guard = span.enter();

        for trial in 0..n_paths {
            fill_path(self.scheme, source, &mut self.path);
            self.pricer.consume(&self.path)?;

            if (trial + 1) % PROGRESS_INTERVAL == 0 {
                debug!(completed = trial + 1, total = n_paths, "trials completed");
            }
        }

        self.finish()
    }

    /// Runs the trials on the rayon pool in `config.mode().workers()`
    /// partitions, worker `i` drawing from `factory.create(i)`.
    ///
    /// # Errors
    ///
    /// [`McError::Pricer`] if any partition fails or the pricer was already
    /// finalised. Nothing is merged unless every partition succeeded.
    pub fn run_parallel<F>(&mut self, factory: &F) -> Result<PricingResult, McError>
    where
        F: SourceFactory,
    {
        if self.pricer.statistics().is_finalised() {
            return Err(PricerError::from(StatsError::AlreadyFinalised).into());
        }

        let n_paths = self.config.n_paths();
        let workers = self.config.mode().workers().clamp(1, n_paths);
        let span = info_span!("mc_run", scheme = self.scheme.name(), n_paths, workers);
        let _guard = span.enter();

        let scheme = self.scheme;
        let pricer: &P = &*self.pricer;
        let path_len = self.path.len();

        let partitions: Vec<Result<RunningStatistics, PricerError>> = (0..workers)
            .into_par_iter()
            .map(|worker| -> Result<RunningStatistics, PricerError> {
                let trials = partition_size(n_paths, workers, worker);
                let mut source = factory.create(worker);
                let mut path = vec![0.0; path_len];
                let mut stats = RunningStatistics::new();

                for trial in 0..trials {
                    fill_path(scheme, &mut source, &mut path);
                    stats.record(pricer.path_payoff(&path)?)?;

                    if (trial + 1) % PROGRESS_INTERVAL == 0 {
                        debug!(worker, completed = trial + 1, total = trials, "trials completed");
                    }
                }
                debug!(worker, trials, "partition finished");
                Ok(stats)
            })
            .collect();

        let partitions = partitions.into_iter().collect::<Result<Vec<_>, _>>()?;
        for partition in &partitions {
            self.pricer.absorb(partition)?;
        }

        self.finish()
    }

    /// Dispatches on the configured [`ExecutionMode`].
    ///
    /// Sequential runs draw from `factory.create(0)`.
    ///
    /// # Errors
    ///
    /// See [`run`](Self::run) and [`run_parallel`](Self::run_parallel).
    pub fn run_with_mode<F>(&mut self, factory: &F) -> Result<PricingResult, McError>
    where
        F: SourceFactory,
    {
        match self.config.mode() {
            ExecutionMode::Sequential => {
                let mut source = factory.create(0);
                self.run(&mut source)
            }
            ExecutionMode::Parallel { .. } => self.run_parallel(factory),
        }
    }

    /// Runs in the configured mode on [`SeededStreams`] derived from
    /// `config.seed()`. Without a configured seed one is drawn from entropy
    /// and logged so the run can be replayed.
    ///
    /// # Errors
    ///
    /// See [`run_with_mode`](Self::run_with_mode).
    pub fn run_seeded(&mut self) -> Result<PricingResult, McError> {
        let seed = match self.config.seed() {
            Some(seed) => seed,
            None => {
                let seed = PricerRng::from_entropy().seed();
                debug!(seed, "no seed configured, drew one from entropy");
                seed
            }
        };
        self.run_with_mode(&SeededStreams::new(seed))
    }

    fn finish(&mut self) -> Result<PricingResult, McError> {
        let price = self.pricer.finalize()?;
        let stats = self.pricer.statistics();
        let result = PricingResult {
            price,
            n_paths: stats.count() as usize,
            discount_factor: self.pricer.discount_factor(),
            dispersion: stats.dispersion().ok(),
        };
        debug!(
            price = result.price,
            std_error = result.std_error().unwrap_or(f64::NAN),
            "run finalised"
        );
        Ok(result)
    }
}

/// Trials assigned to `worker`: an even split, the first `n % workers`
/// partitions taking one extra.
#[inline]
fn partition_size(n_paths: usize, workers: usize, worker: usize) -> usize {
    n_paths / workers + usize::from(worker < n_paths % workers)
}

/// Builder for [`SimulationHub`]; every collaborator is required.
pub struct SimulationHubBuilder<'a, S, P> {
    scheme: Option<&'a S>,
    pricer: Option<&'a mut P>,
    config: Option<MonteCarloConfig>,
}

impl<S, P> Default for SimulationHubBuilder<'_, S, P> {
    fn default() -> Self {
        Self {
            scheme: None,
            pricer: None,
            config: None,
        }
    }
}

impl<'a, S, P> SimulationHubBuilder<'a, S, P>
where
    S: DiscretisationScheme,
    P: PathPricer,
{
    /// Sets the scheme (and through it, the model and mesh).
    pub fn scheme(mut self, scheme: &'a S) -> Self {
        self.scheme = Some(scheme);
        self
    }

    /// Sets the pricer that receives the paths.
    pub fn pricer(mut self, pricer: &'a mut P) -> Self {
        self.pricer = Some(pricer);
        self
    }

    /// Sets the run configuration.
    pub fn config(mut self, config: MonteCarloConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the hub and allocates the path buffer.
    ///
    /// # Errors
    ///
    /// - [`McError::MissingCollaborator`] if scheme, pricer or config is absent
    /// - [`McError::StepMismatch`] if the config step count differs from the
    ///   scheme mesh
    pub fn build(self) -> Result<SimulationHub<'a, S, P>, McError> {
        let scheme = self.scheme.ok_or(McError::MissingCollaborator("scheme"))?;
        let pricer = self.pricer.ok_or(McError::MissingCollaborator("pricer"))?;
        let config = self.config.ok_or(McError::MissingCollaborator("config"))?;

        config.validate()?;
        if config.n_steps() != scheme.n_steps() {
            return Err(McError::StepMismatch {
                config: config.n_steps(),
                scheme: scheme.n_steps(),
            });
        }

        Ok(SimulationHub {
            scheme,
            pricer,
            path: vec![0.0; scheme.mesh().len()],
            config,
        })
    }
}
