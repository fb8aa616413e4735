use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{
    error::TrackerError,
    network::{Bitcoin, Ethereum, FeeNetwork, Solana},
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Asset {
    Ethereum,
    Bitcoin,
    Solana,
}

impl Asset {
    /// Every supported asset, in the order the price source is queried.
    pub const ALL: [Asset; 3] = [Asset::Ethereum, Asset::Bitcoin, Asset::Solana];

    pub fn id(&self) -> &'static str {
        match self {
            Asset::Ethereum => "ethereum",
            Asset::Bitcoin => "bitcoin",
            Asset::Solana => "solana",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Asset::Ethereum => "Ethereum",
            Asset::Bitcoin => "Bitcoin",
            Asset::Solana => "Solana",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Asset::Ethereum => "ETH",
            Asset::Bitcoin => "BTC",
            Asset::Solana => "SOL",
        }
    }

    /// The fee capabilities of the network this asset is native to.
    pub fn network(&self) -> &'static dyn FeeNetwork {
        match self {
            Asset::Ethereum => &Ethereum,
            Asset::Bitcoin => &Bitcoin,
            Asset::Solana => &Solana,
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Asset {
    type Err = TrackerError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        let normalized = id.trim().to_lowercase();
        Asset::ALL
            .into_iter()
            .find(|asset| asset.id() == normalized)
            .ok_or_else(|| TrackerError::UnsupportedAsset(id.to_owned()))
    }
}
