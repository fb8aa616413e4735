use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope returned by the Etherscan gas tracker. `result` is an object on
/// success and a plain error string when `status` is `"0"`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GasOracleResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub result: Value,
}

impl GasOracleResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "1" && self.result.is_object()
    }
}

#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct GasOracleResult {
    pub safe_gas_price: Option<Value>,
    pub propose_gas_price: Option<Value>,
    pub fast_gas_price: Option<Value>,
    pub suggest_base_fee: Option<Value>,
}

impl GasOracleResult {
    pub fn safe(&self) -> Option<f64> {
        fee_rate(self.safe_gas_price.as_ref())
    }

    pub fn propose(&self) -> Option<f64> {
        fee_rate(self.propose_gas_price.as_ref())
    }

    pub fn fast(&self) -> Option<f64> {
        fee_rate(self.fast_gas_price.as_ref())
    }
}

// Rates may arrive string-encoded; zero means the upstream had nothing to report.
pub(crate) fn fee_rate(raw: Option<&Value>) -> Option<f64> {
    let parsed = match raw? {
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        Value::Number(number) => number.as_f64()?,
        _ => return None,
    };
    (parsed.is_finite() && parsed > 0.0).then_some(parsed)
}
