//! Generator configuration: defaults, environment overrides and JSON files

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, SumForgeError};

pub const ENV_TARGET_SUM: &str = "SUM_FORGE_TARGET_SUM";
pub const ENV_MAX_LENGTH: &str = "SUM_FORGE_MAX_LENGTH";
pub const ENV_SAMPLE_SIZE: &str = "SUM_FORGE_SAMPLE_SIZE";
pub const ENV_ATTEMPT_BUDGET_FACTOR: &str = "SUM_FORGE_ATTEMPT_BUDGET_FACTOR";
pub const ENV_MAX_ATTEMPTS: &str = "SUM_FORGE_MAX_ATTEMPTS";
pub const ENV_SPACE_CEILING: &str = "SUM_FORGE_SPACE_CEILING";
pub const ENV_SEED: &str = "SUM_FORGE_SEED";

/// Configuration for string generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Required sum of all codes
    pub target_sum: i64,
    /// Longest length accepted by the generators
    pub max_length: usize,
    /// Number of samples `generate` asks the collector for
    pub sample_size: usize,
    /// Collector budget as a multiple of `sample_size`
    pub attempt_budget_factor: usize,
    /// Construction attempts per sampler call
    pub max_attempts: usize,
    /// Largest space enumerated exhaustively
    pub space_ceiling: u128,
    /// RNG seed; entropy when unset
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            target_sum: 867,
            max_length: 20,
            sample_size: 1000,
            attempt_budget_factor: 10,
            max_attempts: 100_000,
            space_ceiling: 10_000_000,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Defaults overridden by `SUM_FORGE_*` environment variables.
    ///
    /// Loads `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let defaults = Self::default();
        let config = Self {
            target_sum: env_or(ENV_TARGET_SUM, defaults.target_sum)?,
            max_length: env_or(ENV_MAX_LENGTH, defaults.max_length)?,
            sample_size: env_or(ENV_SAMPLE_SIZE, defaults.sample_size)?,
            attempt_budget_factor: env_or(
                ENV_ATTEMPT_BUDGET_FACTOR,
                defaults.attempt_budget_factor,
            )?,
            max_attempts: env_or(ENV_MAX_ATTEMPTS, defaults.max_attempts)?,
            space_ceiling: env_or(ENV_SPACE_CEILING, defaults.space_ceiling)?,
            seed: match std::env::var(ENV_SEED) {
                Ok(raw) => Some(parse_var(ENV_SEED, &raw)?),
                Err(_) => defaults.seed,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SumForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })?;

        let config: Self = serde_json::from_str(&content)
            .map_err(|e| SumForgeError::parse(e.to_string(), Some(content)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SumForgeError::io(e.to_string(), Some(parent.to_string_lossy().to_string()))
            })?;
        }

        let content = serde_json::to_string_pretty(self)?;

        std::fs::write(path, content).map_err(|e| {
            SumForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_length == 0 {
            return Err(SumForgeError::config("max_length must be at least 1"));
        }
        if self.sample_size == 0 {
            return Err(SumForgeError::config("sample_size must be at least 1"));
        }
        if self.attempt_budget_factor == 0 {
            return Err(SumForgeError::config("attempt_budget_factor must be at least 1"));
        }
        if self.max_attempts == 0 {
            return Err(SumForgeError::config("max_attempts must be at least 1"));
        }
        Ok(())
    }

    /// Collector budget derived from `sample_size`
    pub fn attempt_budget(&self) -> usize {
        self.sample_size.saturating_mul(self.attempt_budget_factor)
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => parse_var(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_var<T: FromStr>(key: &str, raw: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| crate::config_error!("invalid value '{}' for {}: {}", raw, key, e))
}
