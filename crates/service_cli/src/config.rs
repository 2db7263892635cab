//! Run configuration for `mcpricer`.
//!
//! Sources, highest priority first:
//! 1. command-line flags
//! 2. `MCPRICER_*` environment variables
//! 3. TOML configuration file
//! 4. built-in defaults

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use pricer_models::models::ModelParameters;
use pricer_pricing::mc::{ExecutionMode, MonteCarloConfig};
use pricer_pricing::scheme::SchemeKind;
use serde::Deserialize;

use crate::error::{CliError, Result};

/// Log levels accepted by `--log-level` and `MCPRICER_LOG_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(CliError::InvalidArgument(format!(
                "log level '{}': must be one of trace, debug, info, warn, error",
                s
            ))),
        }
    }
}

impl LogLevel {
    /// Filter directive for `tracing_subscriber::EnvFilter`.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Option and market inputs.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarketConfig {
    pub strike: f64,
    pub maturity: f64,
    pub rate: f64,
    pub volatility: f64,
    pub dividend: f64,
    pub spot: f64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            strike: 65.0,
            maturity: 0.25,
            rate: 0.08,
            volatility: 0.3,
            dividend: 0.0,
            spot: 60.0,
        }
    }
}

impl MarketConfig {
    /// Validated model parameters.
    pub fn to_params(&self) -> Result<ModelParameters> {
        Ok(ModelParameters::builder()
            .strike(self.strike)
            .maturity(self.maturity)
            .rate(self.rate)
            .volatility(self.volatility)
            .dividend(self.dividend)
            .spot(self.spot)
            .build()?)
    }
}

/// Simulation settings.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Trials per option.
    pub paths: usize,
    /// Time steps per path.
    pub steps: usize,
    /// Base seed; drawn from entropy when absent.
    pub seed: Option<u64>,
    /// 1 runs sequentially, 0 uses every logical CPU.
    pub workers: usize,
    pub scheme: SchemeKind,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            paths: 50_000,
            steps: 1000,
            seed: None,
            workers: 1,
            scheme: SchemeKind::predictor_corrector(),
        }
    }
}

impl SimulationConfig {
    /// Worker count after resolving 0 to the number of logical CPUs.
    pub fn resolved_workers(&self) -> usize {
        if self.workers == 0 {
            num_cpus::get()
        } else {
            self.workers
        }
    }

    /// Execution mode for the engine.
    pub fn mode(&self) -> ExecutionMode {
        match self.resolved_workers() {
            1 => ExecutionMode::Sequential,
            workers => ExecutionMode::Parallel { workers },
        }
    }

    /// Engine configuration with `seed`.
    pub fn to_mc_config(&self, seed: u64) -> Result<MonteCarloConfig> {
        Ok(MonteCarloConfig::builder()
            .n_paths(self.paths)
            .n_steps(self.steps)
            .seed(seed)
            .mode(self.mode())
            .build()?)
    }
}

/// Complete resolved configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    pub market: MarketConfig,
    pub simulation: SimulationConfig,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> std::result::Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

/// Scheme selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SchemeArg {
    /// Explicit Euler-Maruyama
    Euler,
    /// Predictor-corrector
    #[value(alias = "pc")]
    PredictorCorrector,
}

impl FromStr for SchemeArg {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "euler" => Ok(SchemeArg::Euler),
            "predictor-corrector" | "pc" => Ok(SchemeArg::PredictorCorrector),
            _ => Err(CliError::InvalidArgument(format!(
                "scheme '{}': must be euler or predictor-corrector",
                s
            ))),
        }
    }
}

/// Overrides collected from flags or environment variables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub log_level: Option<String>,
    pub paths: Option<usize>,
    pub steps: Option<usize>,
    pub workers: Option<usize>,
    pub seed: Option<u64>,
    pub scheme: Option<SchemeArg>,
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
}

fn parse_var<T: FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidArgument(format!("{}={}", name, value)))
}

impl Overrides {
    /// Reads `MCPRICER_*` variables through `lookup`.
    pub fn from_env_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut out = Self {
            log_level: lookup("MCPRICER_LOG_LEVEL"),
            ..Self::default()
        };
        if let Some(v) = lookup("MCPRICER_PATHS") {
            out.paths = Some(parse_var("MCPRICER_PATHS", &v)?);
        }
        if let Some(v) = lookup("MCPRICER_STEPS") {
            out.steps = Some(parse_var("MCPRICER_STEPS", &v)?);
        }
        if let Some(v) = lookup("MCPRICER_WORKERS") {
            out.workers = Some(parse_var("MCPRICER_WORKERS", &v)?);
        }
        if let Some(v) = lookup("MCPRICER_SEED") {
            out.seed = Some(parse_var("MCPRICER_SEED", &v)?);
        }
        if let Some(v) = lookup("MCPRICER_SCHEME") {
            out.scheme = Some(SchemeArg::from_str(&v)?);
        }
        if let Some(v) = lookup("MCPRICER_ALPHA") {
            out.alpha = Some(parse_var("MCPRICER_ALPHA", &v)?);
        }
        if let Some(v) = lookup("MCPRICER_BETA") {
            out.beta = Some(parse_var("MCPRICER_BETA", &v)?);
        }
        Ok(out)
    }

    /// Reads `MCPRICER_*` variables from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|name| std::env::var(name).ok())
    }
}

impl AppConfig {
    /// Loads a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Applies `overrides` on top of the current values.
    pub fn apply(&mut self, overrides: &Overrides) -> Result<()> {
        if let Some(level) = &overrides.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        let sim = &mut self.simulation;
        if let Some(paths) = overrides.paths {
            sim.paths = paths;
        }
        if let Some(steps) = overrides.steps {
            sim.steps = steps;
        }
        if let Some(workers) = overrides.workers {
            sim.workers = workers;
        }
        if let Some(seed) = overrides.seed {
            sim.seed = Some(seed);
        }

        match overrides.scheme {
            Some(SchemeArg::Euler) => sim.scheme = SchemeKind::Euler,
            Some(SchemeArg::PredictorCorrector) if sim.scheme == SchemeKind::Euler => {
                sim.scheme = SchemeKind::predictor_corrector();
            }
            _ => {}
        }
        if let SchemeKind::PredictorCorrector { alpha, beta } = &mut sim.scheme {
            if let Some(a) = overrides.alpha {
                *alpha = a;
            }
            if let Some(b) = overrides.beta {
                *beta = b;
            }
        }
        Ok(())
    }

    /// Checks market inputs, simulation counts and scheme weights.
    pub fn validate(&self) -> Result<()> {
        self.market.to_params()?;
        self.simulation.to_mc_config(0)?;
        if let SchemeKind::PredictorCorrector { alpha, beta } = self.simulation.scheme {
            for (name, w) in [("alpha", alpha), ("beta", beta)] {
                if !(0.0..=1.0).contains(&w) {
                    return Err(CliError::InvalidArgument(format!(
                        "{} = {}: must be in [0, 1]",
                        name, w
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Builds the configuration from all sources.
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(
    config_file: Option<&PathBuf>,
    env: &Overrides,
    cli: &Overrides,
) -> Result<AppConfig> {
    let mut config = match config_file {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    config.apply(env)?;
    config.apply(cli)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> Result<Overrides> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Overrides::from_env_with(|name| map.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.market.strike, 65.0);
        assert_eq!(config.market.spot, 60.0);
        assert_eq!(config.simulation.paths, 50_000);
        assert_eq!(config.simulation.steps, 1000);
        assert_eq!(config.simulation.mode(), ExecutionMode::Sequential);
        assert_eq!(config.simulation.scheme, SchemeKind::predictor_corrector());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("warn").unwrap(), LogLevel::Warn);
        assert!(LogLevel::from_str("loud").is_err());
        assert_eq!(LogLevel::Trace.to_string(), "trace");
    }

    #[test]
    fn test_toml_deserialization() {
        let config: AppConfig = toml::from_str(
            r#"
            log_level = "debug"

            [market]
            strike = 100.0
            spot = 100.0

            [simulation]
            paths = 1000
            steps = 50
            seed = 7
            workers = 4
            scheme = { type = "euler" }
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.market.strike, 100.0);
        assert_eq!(config.market.maturity, 0.25);
        assert_eq!(config.simulation.seed, Some(7));
        assert_eq!(config.simulation.mode(), ExecutionMode::Parallel { workers: 4 });
        assert_eq!(config.simulation.scheme, SchemeKind::Euler);
    }

    #[test]
    fn test_toml_predictor_corrector_weights() {
        let config: AppConfig = toml::from_str(
            r#"
            [simulation.scheme]
            type = "predictor-corrector"
            alpha = 0.25
            "#,
        )
        .unwrap();
        assert_eq!(
            config.simulation.scheme,
            SchemeKind::PredictorCorrector {
                alpha: 0.25,
                beta: 0.5
            }
        );
    }

    #[test]
    fn test_toml_rejects_unknown_keys() {
        assert!(toml::from_str::<AppConfig>("[market]\nvol = 0.2").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let overrides = env(&[
            ("MCPRICER_PATHS", "2000"),
            ("MCPRICER_SCHEME", "euler"),
            ("MCPRICER_SEED", " 99 "),
        ])
        .unwrap();
        let mut config = AppConfig::default();
        config.apply(&overrides).unwrap();

        assert_eq!(config.simulation.paths, 2000);
        assert_eq!(config.simulation.seed, Some(99));
        assert_eq!(config.simulation.scheme, SchemeKind::Euler);
    }

    #[test]
    fn test_env_parse_error() {
        assert!(matches!(
            env(&[("MCPRICER_STEPS", "many")]),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_cli_beats_env() {
        let env_overrides = env(&[("MCPRICER_PATHS", "2000"), ("MCPRICER_WORKERS", "2")]).unwrap();
        let cli = Overrides {
            paths: Some(3000),
            ..Overrides::default()
        };
        let config = build_config(None, &env_overrides, &cli).unwrap();
        assert_eq!(config.simulation.paths, 3000);
        assert_eq!(config.simulation.workers, 2);
    }

    #[test]
    fn test_scheme_switch_and_weights() {
        let mut config = AppConfig::default();
        config
            .apply(&Overrides {
                scheme: Some(SchemeArg::Euler),
                ..Overrides::default()
            })
            .unwrap();
        assert_eq!(config.simulation.scheme, SchemeKind::Euler);

        config
            .apply(&Overrides {
                scheme: Some(SchemeArg::PredictorCorrector),
                beta: Some(0.0),
                ..Overrides::default()
            })
            .unwrap();
        assert_eq!(
            config.simulation.scheme,
            SchemeKind::PredictorCorrector {
                alpha: 0.5,
                beta: 0.0
            }
        );
    }

    #[test]
    fn test_validation_errors() {
        let mut config = AppConfig::default();
        config.simulation.paths = 0;
        assert!(matches!(config.validate(), Err(CliError::Simulation(_))));

        let mut config = AppConfig::default();
        config.market.maturity = 0.0;
        assert!(matches!(config.validate(), Err(CliError::Model(_))));

        let mut config = AppConfig::default();
        config.simulation.scheme = SchemeKind::PredictorCorrector {
            alpha: 2.0,
            beta: 0.5,
        };
        assert!(matches!(config.validate(), Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn test_zero_workers_uses_all_cpus() {
        let sim = SimulationConfig {
            workers: 0,
            ..SimulationConfig::default()
        };
        assert_eq!(sim.resolved_workers(), num_cpus::get());
    }

    #[test]
    fn test_missing_file() {
        let path = PathBuf::from("/nonexistent/mcpricer.toml");
        assert!(matches!(
            build_config(Some(&path), &Overrides::default(), &Overrides::default()),
            Err(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_file_round_trip_through_disk() {
        let path = std::env::temp_dir().join(format!("mcpricer-test-{}.toml", std::process::id()));
        std::fs::write(&path, "[simulation]\npaths = 123\nsteps = 10\n").unwrap();
        let config = build_config(Some(&path), &Overrides::default(), &Overrides::default());
        std::fs::remove_file(&path).ok();

        let config = config.unwrap();
        assert_eq!(config.simulation.paths, 123);
        assert_eq!(config.simulation.steps, 10);
    }
}
