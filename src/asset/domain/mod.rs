mod asset;
mod transaction_profile;

pub use asset::*;
pub use transaction_profile::*;
