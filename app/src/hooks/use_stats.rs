use badgrid_api::prelude::*;
use dioxus::prelude::*;

use super::gateway::fetch_stats_row;
use crate::{StatsState, STATS_POLL_MS};

pub fn use_stats() -> Signal<StatsState> {
    let mut stats = use_context::<Signal<StatsState>>();

    // Poll the aggregate record; other sessions' purchases move it too.
    use_future(move || async move {
        loop {
            if let Err(e) = load_stats(stats).await {
                tracing::error!("Failed to fetch stats: {}", e);
                stats.write().loading = false;
            }

            gloo_timers::future::TimeoutFuture::new(STATS_POLL_MS).await;
        }
    });

    stats
}

/// Fetch the single stats row. An absent row is treated as all
/// zero/blank, not as an error.
pub async fn load_stats(mut state: Signal<StatsState>) -> Result<(), String> {
    let row = fetch_stats_row().await?;

    let mut state_mut = state.write();
    state_mut.stats = row.map(LotteryStats::from).unwrap_or_else(LotteryStats::absent);
    state_mut.loading = false;
    Ok(())
}
