//! Engine configuration for scrollkeep
//!
//! The same structure is embedded as `config` in the JSON state and can be
//! kept as a standalone TOML file. Every field has a default, so an absent or
//! partial configuration falls back to constructor defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScrollError};

/// Tunable parameters of the memory engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of essence fragments kept per scroll
    #[serde(default = "default_k_modes")]
    pub k_modes: usize,

    /// Softmax sharpness used for attention weights during recall
    #[serde(default = "default_beta_focus")]
    pub beta_focus: f64,

    /// Exponential decay rate per day since last access
    #[serde(default = "default_gamma_decay")]
    pub gamma_decay: f64,

    /// Multiplicative boost for scrolls sharing a theme with the query
    #[serde(default = "default_theme_boost")]
    pub theme_boost: f64,

    /// Token capacity of the surrounding context window
    #[serde(default = "default_capacity")]
    pub capacity: f64,
}

fn default_k_modes() -> usize {
    5
}

fn default_beta_focus() -> f64 {
    2.0
}

fn default_gamma_decay() -> f64 {
    0.05
}

fn default_theme_boost() -> f64 {
    0.3
}

fn default_capacity() -> f64 {
    190_000.0
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            k_modes: default_k_modes(),
            beta_focus: default_beta_focus(),
            gamma_decay: default_gamma_decay(),
            theme_boost: default_theme_boost(),
            capacity: default_capacity(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ScrollError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Fraction of capacity still free once `current_tokens` are in use.
    ///
    /// Available capacity is floored at one token, so the factor never reaches
    /// zero or goes negative.
    pub fn breath_factor(&self, current_tokens: usize) -> f64 {
        if self.capacity <= 0.0 {
            return 0.0;
        }
        let available = (self.capacity - current_tokens as f64).max(1.0);
        available / self.capacity
    }
}
