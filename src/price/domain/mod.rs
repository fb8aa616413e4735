mod price_quote;
mod price_snapshot;

pub use price_quote::*;
pub use price_snapshot::*;
