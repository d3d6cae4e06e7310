use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory backing the key-value store (one JSON file per key).
    pub storage_dir: PathBuf,
    pub chat_delay_min_ms: u64,
    pub chat_delay_max_ms: u64,
    pub resume_delay_ms: u64,
    /// When set, every randomized reply and score is reproducible.
    pub rng_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            storage_dir: PathBuf::from("./data"),
            chat_delay_min_ms: 1000,
            chat_delay_max_ms: 3000,
            resume_delay_ms: 2000,
            rng_seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let config = Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            storage_dir: std::env::var("STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_dir),
            chat_delay_min_ms: parse_env("CHAT_DELAY_MIN_MS", defaults.chat_delay_min_ms)?,
            chat_delay_max_ms: parse_env("CHAT_DELAY_MAX_MS", defaults.chat_delay_max_ms)?,
            resume_delay_ms: parse_env("RESUME_DELAY_MS", defaults.resume_delay_ms)?,
            rng_seed: match std::env::var("RNG_SEED") {
                Ok(raw) => Some(
                    raw.parse::<u64>()
                        .context("RNG_SEED must be an unsigned integer")?,
                ),
                Err(_) => None,
            },
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.chat_delay_min_ms > self.chat_delay_max_ms {
            bail!(
                "CHAT_DELAY_MIN_MS ({}) must not exceed CHAT_DELAY_MAX_MS ({})",
                self.chat_delay_min_ms,
                self.chat_delay_max_ms
            );
        }
        Ok(())
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
