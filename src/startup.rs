use crate::{
    asset::Asset,
    configuration::Settings,
    error::TrackerError,
    fees::{FeeFetcher, FeeSource, FeeTier},
    price::{PriceFetcher, PriceSource},
    tracker::{AggregateState, RefreshScheduler, SchedulerHandle},
    upstream::Upstream,
};
use signal_hook::flag;
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::io::{AsyncBufReadExt, BufReader};

pub struct Application {
    tracker: SchedulerHandle,
    kill_signal: Arc<AtomicBool>,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let initial_asset: Asset = configuration.application.initial_asset.parse()?;
        let upstream = Arc::new(Upstream::build(
            &configuration.upstream,
            configuration.application.request_timeout(),
        )?);
        let kill_signal = Arc::new(AtomicBool::new(false));
        let tracker = build_tracker(
            upstream.clone(),
            upstream,
            configuration.application.refresh_interval()?,
            initial_asset,
            kill_signal.clone(),
        )?;
        Ok(Self {
            tracker,
            kill_signal,
        })
    }

    pub fn tracker(&self) -> &SchedulerHandle {
        &self.tracker
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        flag::register(signal_hook::consts::SIGTERM, Arc::clone(&self.kill_signal))?;

        let mut updates = self.tracker.subscribe();
        report_state(&updates.borrow_and_update());
        let mut commands = BufReader::new(tokio::io::stdin()).lines();
        let mut stdin_open = true;
        let mut watchdog = tokio::time::interval(Duration::from_millis(500));

        loop {
            if self.kill_signal.load(Ordering::Relaxed) {
                tracing::info!("kill signal received");
                break;
            }
            tokio::select! {
                changed = updates.changed() => {
                    if changed.is_err() {
                        tracing::warn!("tracker stopped publishing updates");
                        break;
                    }
                    let state = updates.borrow_and_update().clone();
                    report_state(&state);
                }
                line = commands.next_line(), if stdin_open => match line {
                    Ok(Some(line)) => {
                        if !handle_command(&self.tracker, line.trim()) {
                            break;
                        }
                    }
                    Ok(None) => stdin_open = false,
                    Err(e) => {
                        tracing::warn!("error reading stdin, ignoring further commands: {:?}", e);
                        stdin_open = false;
                    }
                },
                _ = tokio::signal::ctrl_c() => break,
                _ = watchdog.tick() => {}
            }
        }

        self.tracker.shutdown().await;
        Ok(())
    }
}

/// Wires fee and price sources into a running [`RefreshScheduler`].
pub fn build_tracker(
    fee_source: Arc<dyn FeeSource>,
    price_source: Arc<dyn PriceSource>,
    refresh_interval: Duration,
    initial_asset: Asset,
    kill_signal: Arc<AtomicBool>,
) -> Result<SchedulerHandle, TrackerError> {
    let scheduler = RefreshScheduler::new(
        FeeFetcher::new(fee_source),
        PriceFetcher::new(price_source),
        refresh_interval,
        kill_signal,
    )?;
    Ok(scheduler.start(initial_asset))
}

// Returns false when the user asked to quit.
fn handle_command(tracker: &SchedulerHandle, command: &str) -> bool {
    match command {
        "" => true,
        "/quit" => false,
        "/help" => {
            tracing::info!("{}", help());
            true
        }
        asset_id => {
            match tracker.select_asset_id(asset_id) {
                Ok(asset) => tracing::info!("selected {}", asset.name()),
                Err(TrackerError::UnsupportedAsset(id)) => {
                    tracing::warn!("unsupported asset {:?}, send /help to see all commands", id)
                }
                Err(e) => tracing::error!("could not switch asset: {:?}", e),
            }
            true
        }
    }
}

fn help() -> String {
    let mut output = String::new();
    output.push_str("Commands:\n");
    for asset in Asset::ALL {
        output.push_str(&format!(
            "{} - Track {} ({}) fees\n",
            asset.id(),
            asset.name(),
            asset.symbol()
        ));
    }
    output.push_str("/quit - Stop the tracker\n");
    output.push_str("/help - Help");
    output
}

fn report_state(state: &AggregateState) {
    let asset = state.selected_asset;
    let price = state.prices.get(asset);
    let tiers = FeeTier::ALL
        .iter()
        .map(|tier| {
            format!(
                "{}: {} ({}, {})",
                tier.as_str(),
                state.formatted_tier(*tier),
                tier.description(),
                tier.expected_confirmation()
            )
        })
        .collect::<Vec<_>>()
        .join(" | ");
    tracing::info!(
        asset = asset.symbol(),
        usd = price.map(|p| p.usd),
        change_24h_pct = price.map(|p| p.change_24h_pct),
        data = if state.is_live { "live" } else { "demo" },
        updated = %state.schedule.timestamp,
        "{} fees: {}",
        asset.name(),
        tiers
    );
    for row in state.cost_table() {
        let costs = row
            .costs
            .iter()
            .map(|(tier, cost)| format!("{} ${:.4}", tier.as_str(), cost))
            .collect::<Vec<_>>()
            .join(", ");
        tracing::info!(
            "{} ({} {}): {}",
            row.profile.label,
            row.profile.fee_units,
            state.schedule.unit,
            costs
        );
    }
}
