mod domain;
mod fee_fetcher;

pub use domain::*;
pub use fee_fetcher::*;
