use super::gas_oracle::fee_rate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// mempool.space `/api/v1/fees/recommended`, in sat/vB. Fields are kept raw
/// so one unreadable rate only loses that tier.
#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedFees {
    pub fastest_fee: Option<Value>,
    pub half_hour_fee: Option<Value>,
    pub hour_fee: Option<Value>,
    pub economy_fee: Option<Value>,
    pub minimum_fee: Option<Value>,
}

impl RecommendedFees {
    pub fn hour(&self) -> Option<f64> {
        fee_rate(self.hour_fee.as_ref())
    }

    pub fn half_hour(&self) -> Option<f64> {
        fee_rate(self.half_hour_fee.as_ref())
    }

    pub fn fastest(&self) -> Option<f64> {
        fee_rate(self.fastest_fee.as_ref())
    }
}
