//! Engine configuration.
//!
//! Uses Figment to merge built-in defaults, an optional `recommender.toml`
//! and `RECOMMENDER_*` environment variables (last one wins).

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const CONFIG_FILE: &str = "recommender.toml";
pub const ENV_PREFIX: &str = "RECOMMENDER_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Ranking window used by `recommend_default`
    pub default_top_n: usize,
    /// Scores strictly above this are always accepted inside the window
    pub score_threshold: f64,
    /// Results accepted regardless of score until this many are collected
    pub min_results: usize,
    /// Query token substituted when a profile has no skills
    pub default_skill: String,
    /// Vocabulary cap for the primary vectorizer
    pub max_features: usize,
    /// Vocabulary cap for the permissive fallback vectorizer
    pub fallback_max_features: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_top_n: 5,
            score_threshold: 0.01,
            min_results: 3,
            default_skill: "developer".to_string(),
            max_features: 500,
            fallback_max_features: 1000,
        }
    }
}

impl EngineConfig {
    /// Load from `recommender.toml` in the working directory and the environment.
    pub fn load() -> Result<Self> {
        Self::from_figment(Self::figment(CONFIG_FILE))
    }

    /// Same as [`EngineConfig::load`] with an explicit file path.
    pub fn load_from(path: &str) -> Result<Self> {
        Self::from_figment(Self::figment(path))
    }

    pub fn figment(path: &str) -> Figment {
        Figment::from(Serialized::defaults(EngineConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: EngineConfig = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_top_n == 0 {
            return Err(Error::Config("default_top_n must be positive".to_string()));
        }
        if !self.score_threshold.is_finite() || !(0.0..=1.0).contains(&self.score_threshold) {
            return Err(Error::Config(format!(
                "score_threshold must be within [0, 1], got {}",
                self.score_threshold
            )));
        }
        if self.default_skill.trim().is_empty() {
            return Err(Error::Config("default_skill must not be empty".to_string()));
        }
        if self.max_features == 0 || self.fallback_max_features == 0 {
            return Err(Error::Config("vocabulary caps must be positive".to_string()));
        }
        Ok(())
    }
}
