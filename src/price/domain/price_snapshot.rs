use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::PriceQuotes;
use crate::asset::Asset;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct AssetPrice {
    pub usd: f64,
    pub change_24h_pct: f64,
}

/// USD price and 24h trend for every supported asset.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PriceSnapshot(HashMap<Asset, AssetPrice>);

impl PriceSnapshot {
    /// Prices shown before the first successful fetch.
    pub fn bootstrap() -> Self {
        Self(HashMap::from([
            (
                Asset::Ethereum,
                AssetPrice {
                    usd: 2500.0,
                    change_24h_pct: 2.5,
                },
            ),
            (
                Asset::Bitcoin,
                AssetPrice {
                    usd: 45000.0,
                    change_24h_pct: -1.2,
                },
            ),
            (
                Asset::Solana,
                AssetPrice {
                    usd: 100.0,
                    change_24h_pct: 5.8,
                },
            ),
        ]))
    }

    pub fn get(&self, asset: Asset) -> Option<&AssetPrice> {
        self.0.get(&asset)
    }

    pub fn usd(&self, asset: Asset) -> Option<f64> {
        self.get(asset).map(|price| price.usd)
    }

    /// A new snapshot with `quotes` laid over this one. Assets or trends the
    /// quotes do not carry keep their previous values.
    pub fn merged(&self, quotes: &PriceQuotes) -> Self {
        let mut next = self.0.clone();
        for (asset, quote) in quotes.iter() {
            let previous_change = self.get(*asset).map(|price| price.change_24h_pct);
            next.insert(
                *asset,
                AssetPrice {
                    usd: quote.usd,
                    change_24h_pct: quote
                        .change_24h_pct
                        .or(previous_change)
                        .unwrap_or_default(),
                },
            );
        }
        Self(next)
    }
}

impl FromIterator<(Asset, AssetPrice)> for PriceSnapshot {
    fn from_iter<I: IntoIterator<Item = (Asset, AssetPrice)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
