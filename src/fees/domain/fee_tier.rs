use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FeeTier {
    Slow,
    Standard,
    Fast,
    Instant,
}

impl FeeTier {
    /// Ordered from cheapest to most urgent.
    pub const ALL: [FeeTier; 4] = [
        FeeTier::Slow,
        FeeTier::Standard,
        FeeTier::Fast,
        FeeTier::Instant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeeTier::Slow => "slow",
            FeeTier::Standard => "standard",
            FeeTier::Fast => "fast",
            FeeTier::Instant => "instant",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FeeTier::Slow => "Save money",
            FeeTier::Standard => "Balanced",
            FeeTier::Fast => "Quick confirm",
            FeeTier::Instant => "Emergency",
        }
    }

    pub fn expected_confirmation(&self) -> &'static str {
        match self {
            FeeTier::Slow => "~5 min",
            FeeTier::Standard => "~2 min",
            FeeTier::Fast => "~30s",
            FeeTier::Instant => "~15s",
        }
    }
}
