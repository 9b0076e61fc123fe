use std::cell::Cell;
use std::rc::Rc;

use badgrid_api::prelude::*;
use dioxus::prelude::*;

use super::gateway::{delete_ticket_rows, fetch_ticket_rows};
use crate::{GridState, TICKET_POLL_MS};

pub fn use_tickets() -> Signal<GridState> {
    let mut grid = use_context::<Signal<GridState>>();

    // Track if polling has started to prevent multiple loops
    let polling_started = use_hook(|| Rc::new(Cell::new(false)));

    use_effect(move || {
        if !polling_started.get() {
            polling_started.set(true);

            spawn(async move {
                loop {
                    if let Err(e) = load_tickets(grid).await {
                        // Read failures degrade to the all-unsold cache,
                        // no user-facing alert.
                        tracing::error!("Ticket fetch error: {}", e);
                        grid.write().loading = false;
                    }

                    gloo_timers::future::TimeoutFuture::new(TICKET_POLL_MS).await;
                }
            });
        }
    });

    grid
}

/// Rebuild the grid from the remote ownership rows. Rows arrive for the
/// active round only; tickets without a row stay unsold. The pending
/// selection is re-checked against the fresh grid so tickets bought by
/// another session fall out of it.
pub async fn load_tickets(mut state: Signal<GridState>) -> Result<(), String> {
    let rows = fetch_ticket_rows(LOTTERY_ROUND).await?;

    let mut fresh = TicketGrid::new();
    fresh.merge_rows(&rows);

    let mut state_mut = state.write();
    state_mut.grid = fresh;
    let GridState { grid, selection, .. } = &mut *state_mut;
    selection.retain_unowned(grid);
    state_mut.loading = false;
    Ok(())
}

/// Clear the round's ownership remotely and recreate the local grid.
/// The pending selection dies with the old grid.
pub async fn reset_grid(mut state: Signal<GridState>) -> Result<(), String> {
    delete_ticket_rows(LOTTERY_ROUND).await?;

    let mut state_mut = state.write();
    state_mut.grid.reset();
    state_mut.selection.clear();
    state_mut.loading = false;
    Ok(())
}
