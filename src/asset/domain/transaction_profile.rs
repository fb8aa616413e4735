use serde::Serialize;

/// A representative transaction used to populate the cost table.
/// `fee_units` is gas for Ethereum, vBytes for Bitcoin and unused for Solana.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionProfile {
    pub label: &'static str,
    pub fee_units: u64,
}

impl TransactionProfile {
    pub const fn new(label: &'static str, fee_units: u64) -> Self {
        Self { label, fee_units }
    }
}
