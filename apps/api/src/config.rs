use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::explore::fit_scoring::ScoringParams;

/// Application configuration loaded from environment variables.
/// Every variable is optional; defaults reproduce the built-in behavior.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON catalog file read once at startup. `None` uses the built-in catalog.
    pub catalog_path: Option<PathBuf>,
    /// How many ranked jobs the explore report shows.
    pub top_k: usize,
    /// Upper bound on active interests. The combination space is 2^N - 1,
    /// so anything past ~20 is neither computable nor displayable.
    pub max_interests: usize,
    /// Default page size for combination listings.
    pub combination_preview: usize,
    pub scoring: ScoringParams,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            catalog_path: None,
            top_k: 10,
            max_interests: 20,
            combination_preview: 50,
            scoring: ScoringParams::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let scoring = ScoringParams {
            precision_weight: env_or("FIT_PRECISION_WEIGHT", defaults.scoring.precision_weight)?,
            coverage_weight: env_or("FIT_COVERAGE_WEIGHT", defaults.scoring.coverage_weight)?,
            penalty_rate: env_or("FIT_PENALTY_RATE", defaults.scoring.penalty_rate)?,
            ..defaults.scoring
        };
        if let Err(reason) = scoring.validate() {
            anyhow::bail!("Invalid scoring parameters: {reason}");
        }

        let max_interests = env_or("MAX_INTERESTS", defaults.max_interests)?;
        // 2^N - 1 must fit in a u64
        if max_interests == 0 || max_interests > 63 {
            anyhow::bail!("MAX_INTERESTS must be between 1 and 63, got {max_interests}");
        }

        Ok(Config {
            port: env_or("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            catalog_path: std::env::var("CATALOG_PATH").ok().map(PathBuf::from),
            top_k: env_or("TOP_K", defaults.top_k)?,
            max_interests,
            combination_preview: env_or("COMBINATION_PREVIEW", defaults.combination_preview)?,
            scoring,
        })
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_builtin_behavior() {
        let config = Config::default();
        assert_eq!(config.top_k, 10);
        assert_eq!(config.max_interests, 20);
        assert_eq!(config.combination_preview, 50);
        assert!(config.catalog_path.is_none());
        assert!((config.scoring.precision_weight - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_env_rejects_nan_and_negative_penalty_rate() {
        // Only this test touches FIT_PENALTY_RATE, so parallel tests cannot race on it.
        for bad in ["NaN", "-1"] {
            std::env::set_var("FIT_PENALTY_RATE", bad);
            let result = Config::from_env();
            std::env::remove_var("FIT_PENALTY_RATE");
            let err = result.expect_err(bad);
            assert!(err.to_string().contains("penalty_rate"), "error was {err}");
        }
    }

    #[test]
    fn test_env_or_falls_back_when_unset() {
        let value: usize = env_or("EXPLORER_TEST_SURELY_UNSET_VARIABLE", 7).unwrap();
        assert_eq!(value, 7);
    }
}
