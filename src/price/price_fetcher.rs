use crate::{asset::Asset, error::TrackerError};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};
use tracing::instrument;

use super::{PriceQuotes, PriceSnapshot};

#[async_trait]
pub trait PriceSource: Debug + Send + Sync {
    async fn fetch_quotes(&self, assets: &[Asset]) -> Result<PriceQuotes, TrackerError>;
}

#[derive(Debug, Clone)]
pub struct PriceFetcher {
    source: Arc<dyn PriceSource>,
}

impl PriceFetcher {
    pub fn new(source: Arc<dyn PriceSource>) -> Self {
        Self { source }
    }

    /// Raw outcome of one price call; the caller decides what a failure means.
    #[instrument(skip(self))]
    pub async fn fetch_quotes(&self, assets: &[Asset]) -> Result<PriceQuotes, TrackerError> {
        self.source.fetch_quotes(assets).await.map_err(|e| {
            tracing::warn!("price source failed: {:?}", e);
            e
        })
    }

    /// Returns the merged snapshot and whether the call succeeded. On failure
    /// `previous` comes back unchanged.
    #[instrument(skip(self, previous))]
    pub async fn fetch(&self, assets: &[Asset], previous: &PriceSnapshot) -> (PriceSnapshot, bool) {
        match self.fetch_quotes(assets).await {
            Ok(quotes) => {
                tracing::info!("live prices loaded for {} assets", quotes.len());
                (previous.merged(&quotes), true)
            }
            Err(_) => (previous.clone(), false),
        }
    }
}
