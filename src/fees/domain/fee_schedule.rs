use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::FeeTier;

/// Multiplier applied to the fast tier when an upstream has no instant tier.
pub const INSTANT_FROM_FAST: f64 = 1.5;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FeeSchedule {
    pub slow: f64,
    pub standard: f64,
    pub fast: f64,
    pub instant: f64,
    pub unit: String,
    pub timestamp: DateTime<Utc>,
}

impl FeeSchedule {
    /// Builds a schedule stamped with the current time.
    ///
    /// Negative or non-finite values are clamped to zero and every tier is
    /// raised to at least the tier below it, so `slow <= standard <= fast <= instant`
    /// holds even when upstream values and per-field defaults are mixed.
    pub fn new(slow: f64, standard: f64, fast: f64, instant: f64, unit: &str) -> Self {
        let slow = non_negative(slow);
        let standard = non_negative(standard).max(slow);
        let fast = non_negative(fast).max(standard);
        let instant = non_negative(instant).max(fast);
        Self {
            slow,
            standard,
            fast,
            instant,
            unit: unit.to_owned(),
            timestamp: Utc::now(),
        }
    }

    pub fn tier(&self, tier: FeeTier) -> f64 {
        match tier {
            FeeTier::Slow => self.slow,
            FeeTier::Standard => self.standard,
            FeeTier::Fast => self.fast,
            FeeTier::Instant => self.instant,
        }
    }

    pub fn tiers(&self) -> [(FeeTier, f64); 4] {
        FeeTier::ALL.map(|tier| (tier, self.tier(tier)))
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// `floor(fast * 1.5)`, the instant tier used by both fee oracles.
pub fn derive_instant(fast: f64) -> f64 {
    (fast * INSTANT_FROM_FAST).floor()
}
