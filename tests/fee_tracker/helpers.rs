use async_trait::async_trait;
use multichain_fee_tracker::{
    asset::Asset,
    configuration::UpstreamSettings,
    error::TrackerError,
    fees::{FeeSchedule, FeeSource},
    price::{PriceQuote, PriceQuotes, PriceSource},
    startup::build_tracker,
    telemetry::{get_subscriber, init_subscriber},
    tracker::SchedulerHandle,
    upstream::Upstream,
};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::{
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    };
});

pub const REFRESH_INTERVAL: Duration = Duration::from_secs(30);

pub struct TestUpstream {
    pub server: MockServer,
    pub upstream: Arc<Upstream>,
}

pub fn upstream_settings(base_url: &str) -> UpstreamSettings {
    UpstreamSettings {
        gas_oracle_url: format!("{}/api", base_url),
        mempool_url: base_url.to_owned(),
        price_url: base_url.to_owned(),
        etherscan_api_key: None,
        coingecko_api_key: None,
    }
}

pub async fn spawn_upstream() -> TestUpstream {
    spawn_upstream_with_timeout(Duration::from_secs(2)).await
}

pub async fn spawn_upstream_with_timeout(timeout: Duration) -> TestUpstream {
    Lazy::force(&TRACING);
    let server = MockServer::start().await;
    let upstream = Upstream::build(&upstream_settings(&server.uri()), timeout)
        .expect("Failed to build upstream client");
    TestUpstream {
        server,
        upstream: Arc::new(upstream),
    }
}

impl TestUpstream {
    pub async fn mount_gas_oracle(&self, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/api"))
            .and(query_param("module", "gastracker"))
            .and(query_param("action", "gasoracle"))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    pub async fn mount_recommended_fees(&self, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/api/v1/fees/recommended"))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    pub async fn mount_prices(&self, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/api/v3/simple/price"))
            .and(query_param("ids", "ethereum,bitcoin,solana"))
            .and(query_param("vs_currencies", "usd"))
            .and(query_param("include_24hr_change", "true"))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }
}

pub fn json_response(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

pub fn tiers(schedule: &FeeSchedule) -> [f64; 4] {
    [
        schedule.slow,
        schedule.standard,
        schedule.fast,
        schedule.instant,
    ]
}

/// Fee source that counts calls and can hold one asset's response back.
#[derive(Debug, Default)]
pub struct FakeFees {
    pub calls: AtomicUsize,
    pub delayed: Option<(Asset, Duration)>,
}

impl FakeFees {
    pub fn delaying(asset: Asset, delay: Duration) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            delayed: Some((asset, delay)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeeSource for FakeFees {
    async fn fetch_schedule(&self, asset: Asset) -> Result<FeeSchedule, TrackerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some((slow_asset, delay)) = self.delayed {
            if slow_asset == asset {
                tokio::time::sleep(delay).await;
            }
        }
        Ok(FeeSchedule::new(1.0, 2.0, 3.0, 4.0, asset.network().unit()))
    }
}

/// Price source returning a fixed ETH quote, or failing once `fail` is set.
#[derive(Debug, Default)]
pub struct FakePrices {
    pub calls: AtomicUsize,
    pub fail: AtomicBool,
}

impl FakePrices {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PriceSource for FakePrices {
    async fn fetch_quotes(&self, _assets: &[Asset]) -> Result<PriceQuotes, TrackerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(TrackerError::malformed("price source unavailable"));
        }
        Ok([(
            Asset::Ethereum,
            PriceQuote {
                usd: 2000.0,
                change_24h_pct: Some(1.0),
            },
        )]
        .into_iter()
        .collect())
    }
}

pub fn start_fake_tracker(
    fees: Arc<FakeFees>,
    prices: Arc<FakePrices>,
    initial_asset: Asset,
) -> SchedulerHandle {
    start_fake_tracker_with_kill_signal(
        fees,
        prices,
        initial_asset,
        Arc::new(AtomicBool::new(false)),
    )
}

pub fn start_fake_tracker_with_kill_signal(
    fees: Arc<FakeFees>,
    prices: Arc<FakePrices>,
    initial_asset: Asset,
    kill_signal: Arc<AtomicBool>,
) -> SchedulerHandle {
    Lazy::force(&TRACING);
    build_tracker(
        fees,
        prices,
        REFRESH_INTERVAL,
        initial_asset,
        kill_signal,
    )
    .expect("Failed to start tracker")
}
