use super::{AggregateState, CycleOutcome, SchedulerCommand};
use crate::{
    asset::{Asset, TransactionProfile},
    error::TrackerError,
    fees::FeeFetcher,
    price::PriceFetcher,
};
use futures_util::future::join;
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
    time::{interval, Interval, MissedTickBehavior},
};
use tracing::{instrument, Instrument};

/// Drives fee and price refreshes for the selected asset and owns the
/// published [`AggregateState`].
#[derive(Debug, Clone)]
pub struct RefreshScheduler {
    fee_fetcher: FeeFetcher,
    price_fetcher: PriceFetcher,
    refresh_interval: Duration,
    kill_signal: Arc<AtomicBool>,
}

/// Returned by [`RefreshScheduler::start`]; the only way to talk to a running scheduler.
#[derive(Debug)]
pub struct SchedulerHandle {
    commands: mpsc::UnboundedSender<SchedulerCommand>,
    state: watch::Receiver<Arc<AggregateState>>,
    kill_signal: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl RefreshScheduler {
    pub fn new(
        fee_fetcher: FeeFetcher,
        price_fetcher: PriceFetcher,
        refresh_interval: Duration,
        kill_signal: Arc<AtomicBool>,
    ) -> Result<Self, TrackerError> {
        if refresh_interval.is_zero() {
            return Err(TrackerError::InvalidConfiguration(
                "refresh interval must be non-zero".into(),
            ));
        }
        Ok(Self {
            fee_fetcher,
            price_fetcher,
            refresh_interval,
            kill_signal,
        })
    }

    /// Publishes the bootstrap state for `initial_asset` and issues the
    /// first cycle right away.
    pub fn start(self, initial_asset: Asset) -> SchedulerHandle {
        let (commands, command_listener) = mpsc::unbounded_channel();
        let (state_publisher, state) =
            watch::channel(Arc::new(AggregateState::bootstrap(initial_asset)));
        let kill_signal = self.kill_signal.clone();
        let task = tokio::spawn(self.run(initial_asset, command_listener, state_publisher));
        SchedulerHandle {
            commands,
            state,
            kill_signal,
            task,
        }
    }

    #[instrument(skip_all)]
    async fn run(
        self,
        initial_asset: Asset,
        mut commands: mpsc::UnboundedReceiver<SchedulerCommand>,
        state_publisher: watch::Sender<Arc<AggregateState>>,
    ) {
        let (send_outcome, mut listen_outcome) = mpsc::unbounded_channel::<CycleOutcome>();
        let mut selected = initial_asset;
        let mut generation = 0;
        let mut issued = 0;
        let mut applied = 0;
        let mut in_flight: Option<u64> = None;
        let mut clock = self.clock();
        tracing::info!("refresh scheduler started for {}", selected);

        loop {
            if self.is_killed() {
                break;
            }
            tokio::select! {
                command = commands.recv() => match command {
                    Some(SchedulerCommand::SelectAsset(asset)) => {
                        if asset == selected {
                            tracing::debug!("{} is already selected", asset);
                            continue;
                        }
                        tracing::info!("switching from {} to {}", selected, asset);
                        selected = asset;
                        generation += 1;
                        in_flight = None;
                        // a fresh interval ticks immediately
                        clock = self.clock();
                    }
                    Some(SchedulerCommand::Shutdown) | None => break,
                },
                _ = clock.tick() => {
                    // SIGTERM only flips the flag, so it may have been set while parked here
                    if self.is_killed() {
                        break;
                    }
                    if let Some(sequence) = in_flight {
                        tracing::debug!("cycle {} still outstanding, skipping tick", sequence);
                        continue;
                    }
                    issued += 1;
                    in_flight = Some(issued);
                    self.spawn_cycle(selected, generation, issued, send_outcome.clone());
                }
                Some(outcome) = listen_outcome.recv() => {
                    if self.is_killed() {
                        break;
                    }
                    if in_flight == Some(outcome.sequence) {
                        in_flight = None;
                    }
                    if outcome.generation != generation || outcome.sequence < applied {
                        tracing::debug!(
                            "discarding superseded cycle {} for {}",
                            outcome.sequence,
                            outcome.asset
                        );
                        continue;
                    }
                    applied = outcome.sequence;
                    let next = state_publisher.borrow().advance(outcome);
                    tracing::info!(
                        "publishing {} fees (live: {}): {:?}",
                        next.selected_asset,
                        next.is_live,
                        next.schedule
                    );
                    state_publisher.send_replace(Arc::new(next));
                }
            }
        }
        tracing::info!("refresh scheduler stopped");
    }

    fn is_killed(&self) -> bool {
        self.kill_signal.load(Ordering::Relaxed)
    }

    fn clock(&self) -> Interval {
        let mut clock = interval(self.refresh_interval);
        clock.set_missed_tick_behavior(MissedTickBehavior::Delay);
        clock
    }

    fn spawn_cycle(
        &self,
        asset: Asset,
        generation: u64,
        sequence: u64,
        send_outcome: mpsc::UnboundedSender<CycleOutcome>,
    ) {
        let fee_fetcher = self.fee_fetcher.clone();
        let price_fetcher = self.price_fetcher.clone();
        let span = tracing::info_span!("refresh_cycle", %asset, generation, sequence);
        tokio::spawn(
            async move {
                let (schedule, prices) =
                    join(fee_fetcher.fetch(asset), price_fetcher.fetch_quotes(&Asset::ALL)).await;
                let outcome = CycleOutcome {
                    asset,
                    generation,
                    sequence,
                    schedule,
                    prices,
                };
                if send_outcome.send(outcome).is_err() {
                    tracing::debug!("scheduler gone, dropping cycle result");
                }
            }
            .instrument(span),
        );
    }
}

impl SchedulerHandle {
    /// The snapshot currently on display.
    pub fn state(&self) -> Arc<AggregateState> {
        self.state.borrow().clone()
    }

    /// A receiver that is notified every time a new snapshot is published.
    pub fn subscribe(&self) -> watch::Receiver<Arc<AggregateState>> {
        self.state.clone()
    }

    pub fn transaction_profiles(&self) -> &'static [TransactionProfile] {
        self.state().transaction_profiles()
    }

    pub fn select_asset(&self, asset: Asset) -> Result<(), TrackerError> {
        self.commands
            .send(SchedulerCommand::SelectAsset(asset))
            .map_err(|_| TrackerError::SchedulerStopped)
    }

    pub fn select_asset_id(&self, asset_id: &str) -> Result<Asset, TrackerError> {
        let asset: Asset = asset_id.parse()?;
        self.select_asset(asset)?;
        Ok(asset)
    }

    pub fn is_stopped(&self) -> bool {
        self.kill_signal.load(Ordering::Relaxed) || self.task.is_finished()
    }

    /// Cancels the refresh timer. Safe to call any number of times; cycles
    /// already in flight finish but their results are dropped.
    pub fn stop(&self) {
        if !self.kill_signal.swap(true, Ordering::SeqCst) {
            tracing::info!("stopping refresh scheduler");
        }
        let _ = self.commands.send(SchedulerCommand::Shutdown);
    }

    /// Stops the scheduler and waits for its task to exit.
    pub async fn shutdown(self) {
        self.stop();
        if let Err(e) = self.task.await {
            tracing::error!("refresh scheduler task failed: {:?}", e);
        }
    }
}
