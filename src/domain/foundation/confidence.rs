//! Confidence value object - accumulated evidence strength for a dimension.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Scalar in [0, 1] representing accumulated evidence strength.
///
/// Confidence is monotonically non-decreasing over a profile's lifetime:
/// `raise` only ever moves the value up, and the value clamps at 1.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(f32);

impl Confidence {
    /// Starting confidence for a freshly created profile dimension.
    pub const INITIAL: f32 = 0.1;

    /// Creates a confidence value, rejecting anything outside [0, 1].
    pub fn new(value: f32) -> Result<Self, ValidationError> {
        if !(0.0..=1.0).contains(&value) || value.is_nan() {
            return Err(ValidationError::invalid_format(
                "confidence",
                format!("must be within [0.0, 1.0], got {value}"),
            ));
        }
        Ok(Self(value))
    }

    /// Starting confidence for a fresh dimension.
    pub fn initial() -> Self {
        Self(Self::INITIAL)
    }

    /// Raises confidence by `amount`, clamping at 1.0.
    ///
    /// Non-positive amounts are ignored so the value never decreases.
    pub fn raise(&mut self, amount: f32) {
        if amount <= 0.0 || amount.is_nan() {
            return;
        }
        self.0 = (self.0 + amount).min(1.0);
    }

    /// Returns the inner value.
    pub fn value(&self) -> f32 {
        self.0
    }

    /// Checks whether the value strictly exceeds a threshold.
    pub fn exceeds(&self, threshold: f32) -> bool {
        self.0 > threshold
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
