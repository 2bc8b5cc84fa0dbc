//! Engine configuration.
//!
//! Defaults encode the retention and progression constants of the learner
//! model; hosts may deserialize overrides from their own config source.

use serde::{Deserialize, Serialize};

use crate::domain::memory::{MemoryTier, TierLimits};

/// Retention limits for the three memory tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryConfig {
    pub short_term: TierLimits,
    pub medium_term: TierLimits,
    pub long_term: TierLimits,
}

impl MemoryConfig {
    pub fn limits(&self, tier: MemoryTier) -> &TierLimits {
        match tier {
            MemoryTier::ShortTerm => &self.short_term,
            MemoryTier::MediumTerm => &self.medium_term,
            MemoryTier::LongTerm => &self.long_term,
        }
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            short_term: TierLimits::new(24 * 3_600, 10),
            medium_term: TierLimits::new(7 * 24 * 3_600, 50),
            long_term: TierLimits::new(30 * 24 * 3_600, 200),
        }
    }
}

/// Progression tracking constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Maximum progression path samples kept (FIFO beyond this).
    pub path_capacity: usize,
    /// Velocity reported while the path holds fewer than two samples.
    pub default_velocity: f32,
    /// Upper bound on learning velocity.
    pub velocity_cap: f32,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            path_capacity: 50,
            default_velocity: 0.5,
            velocity_cap: 2.0,
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub memory: MemoryConfig,
    pub progression: ProgressionConfig,
    /// Default number of history entries selected for cross-conversation
    /// context.
    pub max_cross_context: usize,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            memory: MemoryConfig::default(),
            progression: ProgressionConfig::default(),
            max_cross_context: 5,
        }
    }
}
