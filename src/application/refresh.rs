//! Periodic snapshot refresh for live displays.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use super::aggregator::PriceAggregator;
use crate::domain::{PriceSnapshot, Symbol};

/// Default refresh cadence.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(15);

/// Re-fetches a snapshot on a fixed interval and publishes the latest one.
///
/// Cycles never overlap: the next tick is only awaited after the previous
/// fetch settles, and ticks missed while a fetch was running are skipped.
#[derive(Debug, Clone)]
pub struct RefreshLoop {
    aggregator: PriceAggregator,
    interval: Duration,
}

/// Handle to a running [`RefreshLoop`].
#[derive(Debug)]
pub struct RefreshHandle {
    snapshots: watch::Receiver<Option<PriceSnapshot>>,
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl RefreshHandle {
    /// Receiver for the most recent snapshot (`None` until the first cycle).
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<PriceSnapshot>> {
        self.snapshots.clone()
    }

    /// Stop the loop and wait for it to exit.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }
}

impl RefreshLoop {
    #[must_use]
    pub fn new(aggregator: PriceAggregator, interval: Duration) -> Self {
        Self {
            aggregator,
            interval,
        }
    }

    /// Spawn the loop for `symbol`. The first fetch starts immediately.
    #[must_use]
    pub fn spawn(self, symbol: Symbol) -> RefreshHandle {
        let (snapshot_tx, snapshots) = watch::channel(None);
        let (shutdown, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(self.run(symbol, snapshot_tx, shutdown_rx));

        RefreshHandle {
            snapshots,
            shutdown,
            task,
        }
    }

    async fn run(
        self,
        symbol: Symbol,
        snapshots: watch::Sender<Option<PriceSnapshot>>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut cycle: u64 = 0;

        info!(symbol = %symbol, interval_secs = self.interval.as_secs_f64(), "Refresh loop started");

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = shutdown.changed() => break,
            }

            cycle += 1;
            let snapshot = tokio::select! {
                snapshot = self.aggregator.fetch_snapshot(&symbol) => snapshot,
                _ = shutdown.changed() => break,
            };

            debug!(cycle, known = snapshot.known_count(), "Publishing snapshot");
            if snapshots.send(Some(snapshot)).is_err() {
                debug!("All snapshot receivers dropped");
                break;
            }
        }

        info!(symbol = %symbol, cycles = cycle, "Refresh loop stopped");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::domain::ExchangeId;
    use crate::error::QuoteError;
    use crate::port::QuoteSource;

    struct CountingSource {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl QuoteSource for CountingSource {
        fn exchange(&self) -> ExchangeId {
            ExchangeId::Binance
        }

        async fn quote(&self, _symbol: &Symbol) -> Result<f64, QuoteError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(n as f64)
        }
    }

    fn refresh_loop(calls: Arc<AtomicUsize>, interval: Duration) -> RefreshLoop {
        let aggregator = PriceAggregator::new(
            vec![Arc::new(CountingSource { calls })],
            Duration::from_secs(1),
        );
        RefreshLoop::new(aggregator, interval)
    }

    #[tokio::test]
    async fn publishes_fresh_snapshots_each_cycle() {
        let calls = Arc::new(AtomicUsize::new(0));
        let handle = refresh_loop(Arc::clone(&calls), Duration::from_millis(20))
            .spawn(Symbol::default());
        let mut rx = handle.subscribe();

        rx.changed().await.unwrap();
        let first = rx.borrow_and_update().clone().unwrap();
        rx.changed().await.unwrap();
        let second = rx.borrow_and_update().clone().unwrap();

        assert_eq!(first.price(ExchangeId::Binance), Some(1.0));
        assert!(second.price(ExchangeId::Binance).unwrap() >= 2.0);
        assert!(second.captured_at() >= first.captured_at());

        handle.stop().await;
    }

    #[tokio::test]
    async fn stop_ends_the_loop() {
        let calls = Arc::new(AtomicUsize::new(0));
        let handle = refresh_loop(Arc::clone(&calls), Duration::from_secs(3600))
            .spawn(Symbol::default());
        let mut rx = handle.subscribe();
        rx.changed().await.unwrap();

        tokio::time::timeout(Duration::from_secs(2), handle.stop())
            .await
            .expect("loop should stop promptly");

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
