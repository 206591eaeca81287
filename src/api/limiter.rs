use std::{collections::HashMap, sync::Arc};

use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use nonzero_ext::nonzero;
use tokio::sync::RwLock;

use crate::config::ClientConfig;

pub type DirectLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// One token bucket per routing value, created the first time the value is used.
///
/// A routing value is either a routing cluster (`europe`) or a platform (`euw1`): the
/// registry does not care, every distinct string gets its own limiter.
#[derive(Debug)]
pub struct LimiterRegistry {
    limiters: RwLock<HashMap<String, Arc<DirectLimiter>>>,
    quota: Quota,
}

impl LimiterRegistry {
    pub fn new(quota: Quota) -> Self {
        Self {
            limiters: RwLock::new(HashMap::new()),
            quota,
        }
    }

    /// `requests_per_minute / 60` permits per second, one permit of burst.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(Quota::per_minute(config.requests_per_minute).allow_burst(nonzero!(1_u32)))
    }

    pub fn quota(&self) -> Quota {
        self.quota
    }

    /// Limiter of `routing`. At most one limiter is ever created for a given value, no
    /// matter how many callers race on its first use.
    pub async fn get_or_create(&self, routing: &str) -> Arc<DirectLimiter> {
        if let Some(limiter) = self.limiters.read().await.get(routing) {
            return limiter.clone();
        }

        let mut limiters = self.limiters.write().await;
        // Another caller may have created it between the two locks.
        if let Some(limiter) = limiters.get(routing) {
            return limiter.clone();
        }

        let limiter = Arc::new(RateLimiter::direct(self.quota));
        limiters.insert(routing.to_string(), limiter.clone());
        tracing::info!(routing, "🚦 Created new limiter");

        limiter
    }

    pub async fn len(&self) -> usize {
        self.limiters.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.limiters.read().await.is_empty()
    }
}
