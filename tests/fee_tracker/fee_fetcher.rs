use crate::helpers::{json_response, spawn_upstream, spawn_upstream_with_timeout, tiers};
use chrono::Utc;
use multichain_fee_tracker::{asset::Asset, fees::FeeFetcher};
use serde_json::json;
use std::time::Duration;
use wiremock::{matchers::any, Mock, ResponseTemplate};

fn default_tiers(asset: Asset) -> [f64; 4] {
    tiers(&asset.network().default_schedule())
}

#[tokio::test]
async fn ethereum_oracle_prices_become_the_schedule() {
    let app = spawn_upstream().await;
    app.mount_gas_oracle(json_response(json!({
        "status": "1",
        "message": "OK",
        "result": {
            "LastBlock": "19000000",
            "SafeGasPrice": "10",
            "ProposeGasPrice": "20",
            "FastGasPrice": "30",
            "suggestBaseFee": "9.5",
        }
    })))
    .await;

    let schedule = FeeFetcher::new(app.upstream.clone())
        .fetch(Asset::Ethereum)
        .await;

    assert_eq!(tiers(&schedule), [10.0, 20.0, 30.0, 45.0]);
    assert_eq!(schedule.unit, "gwei");
}

#[tokio::test]
async fn ethereum_rate_limit_falls_back_to_defaults() {
    let app = spawn_upstream().await;
    app.mount_gas_oracle(json_response(json!({
        "status": "0",
        "message": "NOTOK",
        "result": "Max rate limit reached",
    })))
    .await;

    let before = Utc::now();
    let schedule = FeeFetcher::new(app.upstream.clone())
        .fetch(Asset::Ethereum)
        .await;

    assert_eq!(tiers(&schedule), default_tiers(Asset::Ethereum));
    assert!(schedule.timestamp >= before);
}

#[tokio::test]
async fn ethereum_server_error_falls_back_to_defaults() {
    let app = spawn_upstream().await;
    app.mount_gas_oracle(ResponseTemplate::new(502)).await;

    let schedule = FeeFetcher::new(app.upstream.clone())
        .fetch(Asset::Ethereum)
        .await;

    assert_eq!(tiers(&schedule), default_tiers(Asset::Ethereum));
    assert_eq!(schedule.unit, "gwei");
}

#[tokio::test]
async fn ethereum_bad_field_falls_back_for_that_tier_only() {
    let app = spawn_upstream().await;
    app.mount_gas_oracle(json_response(json!({
        "status": "1",
        "message": "OK",
        "result": {
            "SafeGasPrice": "12",
            "ProposeGasPrice": "not a number",
            "FastGasPrice": "40",
        }
    })))
    .await;

    let schedule = FeeFetcher::new(app.upstream.clone())
        .fetch(Asset::Ethereum)
        .await;

    assert_eq!(tiers(&schedule), [12.0, 25.0, 40.0, 60.0]);
}

#[tokio::test]
async fn bitcoin_recommended_fees_become_the_schedule() {
    let app = spawn_upstream().await;
    app.mount_recommended_fees(json_response(json!({
        "fastestFee": 12,
        "halfHourFee": 8,
        "hourFee": 4,
        "economyFee": 2,
        "minimumFee": 1,
    })))
    .await;

    let schedule = FeeFetcher::new(app.upstream.clone())
        .fetch(Asset::Bitcoin)
        .await;

    assert_eq!(tiers(&schedule), [4.0, 8.0, 12.0, 18.0]);
    assert_eq!(schedule.unit, "sat/vB");
}

#[tokio::test]
async fn bitcoin_bad_field_falls_back_for_that_tier_only() {
    let app = spawn_upstream().await;
    app.mount_recommended_fees(json_response(json!({
        "fastestFee": 12,
        "halfHourFee": 8,
        "hourFee": "x",
    })))
    .await;

    let schedule = FeeFetcher::new(app.upstream.clone())
        .fetch(Asset::Bitcoin)
        .await;

    assert_eq!(tiers(&schedule), [5.0, 8.0, 12.0, 18.0]);
}

#[tokio::test]
async fn bitcoin_malformed_body_falls_back_to_defaults() {
    let app = spawn_upstream().await;
    app.mount_recommended_fees(ResponseTemplate::new(200).set_body_string("{broken"))
        .await;

    let before = Utc::now();
    let schedule = FeeFetcher::new(app.upstream.clone())
        .fetch(Asset::Bitcoin)
        .await;

    assert_eq!(tiers(&schedule), default_tiers(Asset::Bitcoin));
    assert!(schedule.timestamp >= before);
}

#[tokio::test]
async fn hung_oracle_times_out_to_defaults() {
    let app = spawn_upstream_with_timeout(Duration::from_millis(200)).await;
    app.mount_recommended_fees(
        json_response(json!({ "fastestFee": 50, "halfHourFee": 40, "hourFee": 30 }))
            .set_delay(Duration::from_secs(2)),
    )
    .await;

    let schedule = tokio::time::timeout(
        Duration::from_secs(1),
        FeeFetcher::new(app.upstream.clone()).fetch(Asset::Bitcoin),
    )
    .await
    .expect("fee fetch was not bounded by the request timeout");

    assert_eq!(tiers(&schedule), default_tiers(Asset::Bitcoin));
}

#[tokio::test]
async fn solana_never_calls_upstream() {
    let app = spawn_upstream().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&app.server)
        .await;

    let schedule = FeeFetcher::new(app.upstream.clone())
        .fetch(Asset::Solana)
        .await;

    assert_eq!(tiers(&schedule), default_tiers(Asset::Solana));
    assert_eq!(schedule.unit, "SOL");
}
