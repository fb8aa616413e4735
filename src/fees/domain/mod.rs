mod fee_schedule;
mod fee_tier;
mod gas_oracle;
mod recommended_fees;

pub use fee_schedule::*;
pub use fee_tier::*;
pub use gas_oracle::*;
pub use recommended_fees::*;
