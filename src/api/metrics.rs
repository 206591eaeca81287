use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use tracing::{Instrument, info_span};

const LOG_PERIOD: Duration = Duration::from_secs(60);

/// Request counters of one client, logged periodically by [`RequestMetrics::log_loop`].
#[derive(Debug)]
pub struct RequestMetrics {
    start: Instant,
    dispatched: AtomicU64,
    failed: AtomicU64,
    name: &'static str,
}

/// Point in time view of a [`RequestMetrics`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsSnapshot {
    pub dispatched: u64,
    pub failed: u64,
    pub per_minute: f64,
}

impl MetricsSnapshot {
    pub fn succeeded(&self) -> u64 {
        self.dispatched.saturating_sub(self.failed)
    }
}

impl RequestMetrics {
    pub fn new(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            start: Instant::now(),
            dispatched: AtomicU64::new(0),
            failed: AtomicU64::new(0),
            name,
        })
    }

    /// A permit was granted and the request is about to leave.
    pub fn record_dispatch(&self) {
        self.dispatched.fetch_add(1, Ordering::Relaxed);
    }

    /// A dispatched request did not produce a successful response.
    pub fn record_failure(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn dispatched(&self) -> u64 {
        self.dispatched.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let dispatched = self.dispatched();
        let elapsed_min = self.start.elapsed().as_secs_f64() / 60.0;

        MetricsSnapshot {
            dispatched,
            failed: self.failed.load(Ordering::Relaxed),
            per_minute: if elapsed_min > 0.0 {
                dispatched as f64 / elapsed_min
            } else {
                0.0
            },
        }
    }

    pub async fn log_loop(self: Arc<Self>) {
        let mut interval = tokio::time::interval(LOG_PERIOD);
        loop {
            let span = info_span!("📊 ", client = self.name);
            async {
                interval.tick().await;
                let snapshot = self.snapshot();
                tracing::info!(
                    failed = snapshot.failed,
                    "{} requests dispatched (avg {:.2} req/min)",
                    snapshot.dispatched,
                    snapshot.per_minute
                );
            }
            .instrument(span)
            .await
        }
    }
}
