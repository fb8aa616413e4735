use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{asset::Asset, error::TrackerError};

/// One entry of CoinGecko's `/simple/price` response.
#[derive(Default, Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CoinGeckoQuote {
    pub usd: Option<f64>,
    pub usd_24h_change: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PriceQuote {
    pub usd: f64,
    pub change_24h_pct: Option<f64>,
}

/// The usable part of a single price response. Assets the source left out
/// are simply absent.
#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PriceQuotes(HashMap<Asset, PriceQuote>);

impl PriceQuotes {
    /// Accepts the response only when the first requested asset carries a
    /// usable USD price; the rest are taken where present.
    pub fn from_simple_prices(
        assets: &[Asset],
        raw: &HashMap<String, CoinGeckoQuote>,
    ) -> Result<Self, TrackerError> {
        let first = assets
            .first()
            .ok_or_else(|| TrackerError::malformed("no assets were requested"))?;
        if quote_for(first, raw).is_none() {
            return Err(TrackerError::malformed(format!(
                "price response has no usable entry for {}",
                first
            )));
        }

        let quotes = assets
            .iter()
            .filter_map(|asset| quote_for(asset, raw).map(|quote| (*asset, quote)))
            .collect();
        Ok(Self(quotes))
    }

    pub fn get(&self, asset: Asset) -> Option<&PriceQuote> {
        self.0.get(&asset)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Asset, &PriceQuote)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Asset, PriceQuote)> for PriceQuotes {
    fn from_iter<I: IntoIterator<Item = (Asset, PriceQuote)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn quote_for(asset: &Asset, raw: &HashMap<String, CoinGeckoQuote>) -> Option<PriceQuote> {
    let entry = raw.get(asset.id())?;
    let usd = entry.usd.filter(|usd| usd.is_finite() && *usd > 0.0)?;
    Some(PriceQuote {
        usd,
        change_24h_pct: entry.usd_24h_change.filter(|change| change.is_finite()),
    })
}
