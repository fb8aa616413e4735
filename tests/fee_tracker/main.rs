mod fee_fetcher;
mod helpers;
mod price_fetcher;
