//! Environment-driven service configuration

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Current deployment environment (`ENVIRONMENT` env var, defaults to "sandbox")
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Configuration for the prediction pipeline and data acquisition.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the market data source
    pub data_source_url: String,
    /// Number of trailing bars fed to the forecasting capability
    pub look_back: usize,
    /// Calendar days of history requested per prediction
    pub days_back: u32,
    /// Maximum real-fetch attempts before falling back to synthetic data
    pub max_retries: u32,
    /// Call budget per rolling one-minute window
    pub max_calls_per_minute: u32,
    /// Minimum rows for a real response to be considered viable
    pub min_viable_days: usize,
    /// Base delay for exponential backoff
    pub base_delay: Duration,
    /// Upper bound on the uniform jitter added to each backoff delay
    pub jitter_ceiling: Duration,
    /// Timeout for the connectivity probe
    pub probe_timeout: Duration,
    /// Location of the trained model artifact
    pub model_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_source_url: "http://localhost:9100".to_string(),
            look_back: 60,
            days_back: 365,
            max_retries: 4,
            max_calls_per_minute: 5,
            min_viable_days: 10,
            base_delay: Duration::from_secs(1),
            jitter_ceiling: Duration::from_secs(1),
            probe_timeout: Duration::from_secs(10),
            model_path: PathBuf::from("stockcast_model.json"),
        }
    }
}

impl Config {
    /// Build a config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            data_source_url: env::var("DATA_SOURCE_URL").unwrap_or(defaults.data_source_url),
            look_back: parse_env("LOOK_BACK", defaults.look_back),
            days_back: parse_env("DAYS_BACK", defaults.days_back),
            max_retries: parse_env("MAX_RETRIES", defaults.max_retries),
            max_calls_per_minute: parse_env("MAX_CALLS_PER_MINUTE", defaults.max_calls_per_minute),
            min_viable_days: parse_env("MIN_VIABLE_DAYS", defaults.min_viable_days),
            base_delay: Duration::from_millis(parse_env(
                "BACKOFF_BASE_DELAY_MS",
                defaults.base_delay.as_millis() as u64,
            )),
            jitter_ceiling: Duration::from_millis(parse_env(
                "BACKOFF_JITTER_MS",
                defaults.jitter_ceiling.as_millis() as u64,
            )),
            probe_timeout: Duration::from_secs(parse_env(
                "PROBE_TIMEOUT_SECS",
                defaults.probe_timeout.as_secs(),
            )),
            model_path: env::var("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
