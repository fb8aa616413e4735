use crate::helpers::{json_response, spawn_upstream};
use multichain_fee_tracker::{
    asset::Asset,
    price::{PriceFetcher, PriceSnapshot},
};
use serde_json::json;
use wiremock::ResponseTemplate;

#[tokio::test]
async fn full_response_replaces_every_price() {
    let app = spawn_upstream().await;
    app.mount_prices(json_response(json!({
        "ethereum": { "usd": 2000.0, "usd_24h_change": 1.25 },
        "bitcoin": { "usd": 60000.0, "usd_24h_change": -0.5 },
        "solana": { "usd": 150.0, "usd_24h_change": 3.0 },
    })))
    .await;

    let (snapshot, succeeded) = PriceFetcher::new(app.upstream.clone())
        .fetch(&Asset::ALL, &PriceSnapshot::bootstrap())
        .await;

    assert!(succeeded);
    assert_eq!(snapshot.usd(Asset::Ethereum), Some(2000.0));
    assert_eq!(snapshot.usd(Asset::Bitcoin), Some(60000.0));
    assert_eq!(snapshot.get(Asset::Solana).unwrap().change_24h_pct, 3.0);
}

#[tokio::test]
async fn missing_asset_keeps_its_previous_price() {
    let app = spawn_upstream().await;
    app.mount_prices(json_response(json!({
        "ethereum": { "usd": 2000.0, "usd_24h_change": 1.25 },
        "bitcoin": { "usd": 60000.0, "usd_24h_change": -0.5 },
    })))
    .await;
    let previous = PriceSnapshot::bootstrap();

    let (snapshot, succeeded) = PriceFetcher::new(app.upstream.clone())
        .fetch(&Asset::ALL, &previous)
        .await;

    assert!(succeeded);
    assert_eq!(snapshot.get(Asset::Solana), previous.get(Asset::Solana));
    assert_eq!(snapshot.usd(Asset::Bitcoin), Some(60000.0));
}

#[tokio::test]
async fn response_without_the_first_asset_is_a_failure() {
    let app = spawn_upstream().await;
    app.mount_prices(json_response(json!({
        "bitcoin": { "usd": 60000.0, "usd_24h_change": -0.5 },
        "solana": { "usd": 150.0, "usd_24h_change": 3.0 },
    })))
    .await;
    let previous = PriceSnapshot::bootstrap();

    let (snapshot, succeeded) = PriceFetcher::new(app.upstream.clone())
        .fetch(&Asset::ALL, &previous)
        .await;

    assert!(!succeeded);
    assert_eq!(snapshot, previous);
}

#[tokio::test]
async fn rate_limited_price_source_keeps_the_previous_snapshot() {
    let app = spawn_upstream().await;
    app.mount_prices(ResponseTemplate::new(429)).await;
    let previous = PriceSnapshot::bootstrap();

    let (snapshot, succeeded) = PriceFetcher::new(app.upstream.clone())
        .fetch(&Asset::ALL, &previous)
        .await;

    assert!(!succeeded);
    assert_eq!(snapshot, previous);
}
