use std::str::FromStr;

use anyhow::{Context, Result};

use crate::matching::aggregator::DEFAULT_RECOMMENDATION_LIMIT;

const DEFAULT_MAX_JOBS_PER_REQUEST: usize = 500;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Used when a recommendations request omits `limit`.
    pub default_recommendation_limit: usize,
    pub max_jobs_per_request: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            default_recommendation_limit: DEFAULT_RECOMMENDATION_LIMIT,
            max_jobs_per_request: DEFAULT_MAX_JOBS_PER_REQUEST,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let config = Config {
            port: env_or("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            default_recommendation_limit: env_or(
                "DEFAULT_RECOMMENDATION_LIMIT",
                defaults.default_recommendation_limit,
            )?,
            max_jobs_per_request: env_or("MAX_JOBS_PER_REQUEST", defaults.max_jobs_per_request)?,
        };

        if config.default_recommendation_limit == 0 {
            anyhow::bail!("DEFAULT_RECOMMENDATION_LIMIT must be at least 1");
        }
        Ok(config)
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
    fn test_env_or_uses_default_when_unset() {
        let port: u16 = env_or("JOBMATCH_TEST_UNSET_PORT", 8080).unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_env_or_parses_value() {
        std::env::set_var("JOBMATCH_TEST_LIMIT", " 25 ");
        let limit: usize = env_or("JOBMATCH_TEST_LIMIT", 10).unwrap();
        assert_eq!(limit, 25);
    }

    #[test]
    fn test_env_or_rejects_garbage() {
        std::env::set_var("JOBMATCH_TEST_BAD_PORT", "eighty");
        let err = env_or::<u16>("JOBMATCH_TEST_BAD_PORT", 8080).unwrap_err();
        assert!(err.to_string().contains("JOBMATCH_TEST_BAD_PORT"));
    }
}
