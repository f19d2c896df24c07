use std::sync::Arc;
use tokio::time::{Duration, Instant, interval};
use tracing::{debug, info};

use crate::metrics::TRACKED_CLIENTS;
use crate::state::AppState;

// Drops expired rate limit windows so idle clients don't pile up in memory.
pub async fn sweep_expired_entries(state: Arc<AppState>, sweep_interval: Duration) {
    let mut interval = interval(sweep_interval);

    info!(interval = ?sweep_interval, "Rate limit sweeper started");

    loop {
        interval.tick().await;

        // tokio's clock, so paused-time tests drive the sweep
        let removed = state.rate_limiter.sweep_expired(Instant::now().into_std());
        let tracked = state.rate_limiter.tracked_clients();
        TRACKED_CLIENTS.set(tracked as f64);

        if removed > 0 {
            debug!(removed, tracked, "Swept expired rate limit entries");
        }
    }
}
