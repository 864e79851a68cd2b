//! Balancer configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config and
//! callers only spell out what they change.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::roster::{Role, RoleCapacity, ALL_ROLES};

/// Default cap on improver outer iterations.
pub const DEFAULT_MAX_SWAP_ITERATIONS: usize = 50;

/// Default fraction of a member's rating charged when they play off-preference.
pub const DEFAULT_PREFERENCE_PENALTY_RATE: f64 = 0.1;

/// Default charge for each repeated preferred hero within one team.
pub const DEFAULT_HERO_OVERLAP_PENALTY: f64 = 500.0;

/// Upper bound on slots per role on one team.
pub const MAX_ROLE_SLOTS: usize = 5;

/// Upper bound on improver outer iterations accepted from a session.
pub const MAX_SWAP_ITERATIONS: usize = 10_000;

/// Upper bound on seeds tried by one sweep.
pub const MAX_SWEEP_SEEDS: usize = 4096;

/// Errors that can occur while loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("max_swap_iterations must be at least 1")]
    ZeroIterations,

    #[error("{role} capacity {slots} exceeds the maximum of {max} slots per team")]
    CapacityTooLarge { role: Role, slots: usize, max: usize },

    #[error("preference_penalty_rate must be finite and non-negative, got {0}")]
    InvalidPenaltyRate(f64),

    #[error("hero_overlap_penalty must be finite and non-negative, got {0}")]
    InvalidOverlapPenalty(f64),
}

/// Weights of the balance score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub preference_penalty_rate: f64,
    /// Adds the within-team hero overlap term. Off by default.
    pub hero_overlap: bool,
    pub hero_overlap_penalty: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            preference_penalty_rate: DEFAULT_PREFERENCE_PENALTY_RATE,
            hero_overlap: false,
            hero_overlap_penalty: DEFAULT_HERO_OVERLAP_PENALTY,
        }
    }
}

/// Random hero ban settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BanPickSettings {
    pub enabled: bool,
    pub max_bans_per_role: usize,
    pub max_bans_per_position: usize,
}

impl Default for BanPickSettings {
    fn default() -> Self {
        BanPickSettings {
            enabled: false,
            max_bans_per_role: 1,
            max_bans_per_position: 1,
        }
    }
}

/// Configuration for one balancing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceConfig {
    pub capacity: RoleCapacity,
    pub max_swap_iterations: usize,
    /// Runs the swap improver after greedy assignment.
    pub improve: bool,
    pub scoring: ScoringConfig,
    pub ban_pick: BanPickSettings,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        BalanceConfig {
            capacity: RoleCapacity::default(),
            max_swap_iterations: DEFAULT_MAX_SWAP_ITERATIONS,
            improve: true,
            scoring: ScoringConfig::default(),
            ban_pick: BanPickSettings::default(),
        }
    }
}

impl BalanceConfig {
    /// Checks the numeric fields.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_swap_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        for role in ALL_ROLES {
            let slots = self.capacity.get(role);
            if slots > MAX_ROLE_SLOTS {
                return Err(ConfigError::CapacityTooLarge {
                    role,
                    slots,
                    max: MAX_ROLE_SLOTS,
                });
            }
        }
        let rate = self.scoring.preference_penalty_rate;
        if !rate.is_finite() || rate < 0.0 {
            return Err(ConfigError::InvalidPenaltyRate(rate));
        }
        let overlap = self.scoring.hero_overlap_penalty;
        if !overlap.is_finite() || overlap < 0.0 {
            return Err(ConfigError::InvalidOverlapPenalty(overlap));
        }
        Ok(())
    }
}

/// Loads and validates a config from a JSON file.
pub fn load_config(path: &Path) -> Result<BalanceConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    load_config_from_str(&data)
}

/// Loads and validates a config from a JSON string.
pub fn load_config_from_str(json: &str) -> Result<BalanceConfig, ConfigError> {
    let config: BalanceConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}
