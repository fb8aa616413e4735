mod domain;
mod price_fetcher;

pub use domain::*;
pub use price_fetcher::*;
