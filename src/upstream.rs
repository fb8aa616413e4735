//! HTTP access to the fee oracles and the price source.

use crate::{
    asset::Asset,
    configuration::UpstreamSettings,
    error::TrackerError,
    fees::{FeeSchedule, FeeSource, GasOracleResponse, RecommendedFees},
    price::{CoinGeckoQuote, PriceQuotes, PriceSource},
};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use std::{collections::HashMap, time::Duration};
use tracing::instrument;

#[derive(Debug, Clone)]
pub struct Upstream {
    http_client: Client,
    gas_oracle_url: String,
    mempool_url: String,
    price_url: String,
    etherscan_api_key: Option<Secret<String>>,
    coingecko_api_key: Option<Secret<String>>,
}

impl Upstream {
    /// Every request made through this client is bounded by `timeout`.
    pub fn build(settings: &UpstreamSettings, timeout: Duration) -> Result<Self, TrackerError> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            gas_oracle_url: settings.gas_oracle_url.trim_end_matches('/').to_owned(),
            mempool_url: settings.mempool_url.trim_end_matches('/').to_owned(),
            price_url: settings.price_url.trim_end_matches('/').to_owned(),
            etherscan_api_key: settings.etherscan_api_key.clone(),
            coingecko_api_key: settings.coingecko_api_key.clone(),
        })
    }

    #[instrument(skip(self))]
    pub async fn gas_oracle(&self) -> Result<GasOracleResponse, TrackerError> {
        let mut query = vec![("module", "gastracker"), ("action", "gasoracle")];
        if let Some(key) = &self.etherscan_api_key {
            query.push(("apikey", key.expose_secret().as_str()));
        }
        self.get_json(&self.gas_oracle_url, &query).await
    }

    #[instrument(skip(self))]
    pub async fn recommended_fees(&self) -> Result<RecommendedFees, TrackerError> {
        let url = format!("{}/api/v1/fees/recommended", self.mempool_url);
        self.get_json(&url, &[]).await
    }

    #[instrument(skip(self))]
    pub async fn simple_prices(
        &self,
        assets: &[Asset],
    ) -> Result<HashMap<String, CoinGeckoQuote>, TrackerError> {
        let url = format!("{}/api/v3/simple/price", self.price_url);
        let ids = assets
            .iter()
            .map(|asset| asset.id())
            .collect::<Vec<_>>()
            .join(",");
        let mut query = vec![
            ("ids", ids.as_str()),
            ("vs_currencies", "usd"),
            ("include_24hr_change", "true"),
        ];
        if let Some(key) = &self.coingecko_api_key {
            query.push(("x_cg_demo_api_key", key.expose_secret().as_str()));
        }
        self.get_json(&url, &query).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, TrackerError> {
        let response = self
            .http_client
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| {
                tracing::error!("unexpected status from {}: {:?}", url, e.status());
                e
            })?;
        let body = response.text().await?;
        tracing::trace!("response from {}: {}", url, body);
        serde_json::from_str(&body)
            .map_err(|e| TrackerError::malformed(format!("{}: {}", url, e)))
    }
}

#[async_trait]
impl FeeSource for Upstream {
    async fn fetch_schedule(&self, asset: Asset) -> Result<FeeSchedule, TrackerError> {
        asset.network().fetch_schedule(self).await
    }
}

#[async_trait]
impl PriceSource for Upstream {
    async fn fetch_quotes(&self, assets: &[Asset]) -> Result<PriceQuotes, TrackerError> {
        let raw = self.simple_prices(assets).await?;
        PriceQuotes::from_simple_prices(assets, &raw)
    }
}
