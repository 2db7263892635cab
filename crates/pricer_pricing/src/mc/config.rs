//! Monte Carlo run configuration.

use super::error::ConfigError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 100_000;

/// How trials are distributed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum ExecutionMode {
    /// Single thread, one random source.
    #[default]
    Sequential,

    /// `workers` partitions on the rayon pool, one random source and one
    /// statistics partition each, merged after all partitions complete.
    Parallel {
        /// Number of partitions
        workers: usize,
    },
}

impl ExecutionMode {
    /// Number of partitions this mode runs.
    #[inline]
    pub fn workers(&self) -> usize {
        match self {
            Self::Sequential => 1,
            Self::Parallel { workers } => *workers,
        }
    }
}

/// Immutable Monte Carlo configuration.
///
/// Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{ExecutionMode, MonteCarloConfig};
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(50_000)
///     .n_steps(1000)
///     .seed(42)
///     .mode(ExecutionMode::Parallel { workers: 4 })
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 50_000);
/// assert_eq!(config.mode().workers(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonteCarloConfig {
    n_paths: usize,
    n_steps: usize,
    seed: Option<u64>,
    mode: ExecutionMode,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Number of trials.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Seed for reproducible runs, `None` for an entropy seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Execution mode.
    #[inline]
    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_paths` is 0 or greater than 10,000,000
    /// - `n_steps` is 0 or greater than 100,000
    /// - the parallel mode asks for zero workers
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if self.n_steps == 0 || self.n_steps > MAX_STEPS {
            return Err(ConfigError::InvalidStepCount(self.n_steps));
        }
        if let ExecutionMode::Parallel { workers: 0 } = self.mode {
            return Err(ConfigError::InvalidWorkerCount(0));
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_paths: Option<usize>,
    n_steps: Option<usize>,
    seed: Option<u64>,
    mode: ExecutionMode,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of trials, in [1, 10_000_000].
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of time steps per path, in [1, 100_000].
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets an optional seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the execution mode.
    #[inline]
    pub fn mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a count is missing or out of range.
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let n_paths = self.n_paths.ok_or(ConfigError::InvalidParameter {
            name: "n_paths",
            value: "must be specified".to_string(),
        })?;

        let n_steps = self.n_steps.ok_or(ConfigError::InvalidParameter {
            name: "n_steps",
            value: "must be specified".to_string(),
        })?;

        let config = MonteCarloConfig {
            n_paths,
            n_steps,
            seed: self.seed,
            mode: self.mode,
        };

        config.validate()?;
        Ok(config)
    }
}
