use badgrid_api::prelude::*;
use dioxus::prelude::*;

use crate::components::{AdminPanel, DrawModal, PurchaseDialog, StatsCards, TicketGrid, WinnerModal};
use crate::hooks::{complete_draw, load_stats, load_tickets, reset_grid, use_stats, use_tickets};
use crate::{Toasts, WalletState};

/// Draw outcome held for the winner modal after the grid resets.
#[derive(Clone, Debug, PartialEq)]
struct DrawOutcome {
    winning_ticket: u32,
    prize_amount: u64,
    is_winner: bool,
}

#[component]
pub fn Grid() -> Element {
    let wallet = use_context::<Signal<WalletState>>();
    let mut toasts = use_context::<Signal<Toasts>>();
    let mut grid = use_tickets();
    let stats = use_stats();

    let mut show_purchase = use_signal(|| false);
    let mut show_admin = use_signal(|| false);
    let mut show_draw = use_signal(|| false);
    let mut draw_outcome = use_signal(|| None::<DrawOutcome>);

    // Extract grid state values
    let grid_read = grid.read();
    let tickets = grid_read.grid.tickets().to_vec();
    let selected = grid_read.selection.ids().to_vec();
    let sold_tickets = grid_read.grid.sold_count();
    drop(grid_read);

    let wallet_read = wallet.read();
    let connected = wallet_read.connected;
    let user_address = wallet_read.address.clone();
    let is_admin = wallet_read.is_admin();
    drop(wallet_read);

    let user_tickets = user_address
        .as_deref()
        .map(|address| grid.read().grid.count_owned_by(address))
        .unwrap_or(0);

    let stats_read = stats.read();
    let lottery_stats = stats_read.stats.clone();
    drop(stats_read);

    // Prize pool between stats reloads: half of every sold ticket.
    let prize_pool = cost_breakdown(sold_tickets).prize;

    // Toggle ticket selection (multi-select). The cell already guards
    // sold/disconnected clicks.
    let toggle_ticket = move |id: u32| {
        grid.write().selection.toggle(id);
    };

    let on_purchase_complete = {
        let user_address = user_address.clone();
        move |ids: Vec<u32>| {
            // Reflect ownership immediately, then reconcile with the
            // backend in the background.
            if let Some(address) = user_address.as_deref() {
                let mut state_mut = grid.write();
                if let Err(e) = state_mut.grid.assign(&ids, address) {
                    tracing::warn!("Local ownership update skipped: {}", e);
                }
                state_mut.selection.clear();
            }
            show_purchase.set(false);

            spawn(async move {
                if let Err(e) = load_tickets(grid).await {
                    tracing::error!("Ticket reload error: {}", e);
                }
                if let Err(e) = load_stats(stats).await {
                    tracing::error!("Stats reload error: {}", e);
                }
            });
        }
    };

    let on_draw_complete = {
        let user_address = user_address.clone();
        move |winning: u32| {
            // Look the winner up before the reset clears ownership.
            let (owner, prize_amount) = {
                let state_read = grid.read();
                (
                    state_read.grid.owner_of(winning).map(str::to_string),
                    cost_breakdown(state_read.grid.sold_count()).prize,
                )
            };
            let is_winner = owner.is_some() && owner.as_deref() == user_address.as_deref();
            draw_outcome.set(Some(DrawOutcome {
                winning_ticket: winning,
                prize_amount,
                is_winner,
            }));
            show_draw.set(false);

            // Persist the result, clear the round, re-sync stats.
            spawn(async move {
                if let Err(e) = complete_draw(winning).await {
                    toasts.write().destructive("Draw", format!("Failed to record draw: {e}"));
                }
                if let Err(e) = reset_grid(grid).await {
                    toasts.write().destructive("Draw", format!("Failed to reset the grid: {e}"));
                }
                if let Err(e) = load_stats(stats).await {
                    tracing::error!("Stats reload error: {}", e);
                }
            });
        }
    };

    rsx! {
        div { class: "max-w-4xl mx-auto",
            // Hero
            div { class: "text-center mb-6",
                h1 { class: "text-4xl md:text-5xl font-bold mb-3",
                    span { class: "text-gold", "{crate::TOKEN_SYMBOL} GRID" }
                }
                p { class: "text-lg text-mid mb-3", "100-Slot Token Lottery" }
                p { class: "text-xs text-gold mb-4 font-mono", "{crate::TOKEN_CONTRACT}" }

                if !connected {
                    p { class: "text-low text-sm mb-4",
                        "Connect a wallet to purchase tickets with {crate::TOKEN_SYMBOL} tokens."
                    }
                }

                // Admin entry
                if is_admin {
                    div { class: "flex items-center justify-center gap-2 mb-4",
                        button {
                            class: "btn btn-secondary text-sm",
                            onclick: move |_| show_admin.set(true),
                            "Admin Panel"
                        }
                        button {
                            class: "btn btn-secondary text-sm",
                            onclick: move |_| show_draw.set(true),
                            "Draw"
                        }
                    }
                }

                // Purchase call-to-action
                if !selected.is_empty() {
                    button {
                        class: "controls-primary py-3 px-6 rounded-lg font-semibold",
                        onclick: move |_| show_purchase.set(true),
                        {format!("PURCHASE {} TICKETS", selected.len())}
                    }
                }
            }

            StatsCards {
                prize_pool: prize_pool,
                sold_tickets: sold_tickets,
                user_tickets: user_tickets,
                total_won: lottery_stats.total_won,
                total_burnt: lottery_stats.total_burnt,
                draw_date: lottery_stats.draw_date.clone(),
                draw_time: lottery_stats.draw_time.clone(),
            }

            TicketGrid {
                tickets: tickets,
                selected: selected.clone(),
                user_address: user_address.clone(),
                connected: connected,
                winning_ticket: lottery_stats.last_winning_number,
                on_select: toggle_ticket,
            }

            if *show_purchase.read() {
                PurchaseDialog {
                    selected: selected.clone(),
                    user_address: user_address.clone().unwrap_or_default(),
                    on_close: move |_| show_purchase.set(false),
                    on_complete: on_purchase_complete,
                }
            }

            if *show_admin.read() {
                AdminPanel {
                    on_close: move |_| show_admin.set(false),
                    on_open_draw: move |_| {
                        show_admin.set(false);
                        show_draw.set(true);
                    },
                }
            }

            if *show_draw.read() {
                DrawModal {
                    on_close: move |_| show_draw.set(false),
                    on_complete: on_draw_complete,
                }
            }

            if let Some(outcome) = draw_outcome.read().clone() {
                WinnerModal {
                    winning_ticket: outcome.winning_ticket,
                    prize_amount: outcome.prize_amount,
                    is_winner: outcome.is_winner,
                    on_close: move |_| draw_outcome.set(None),
                }
            }
        }
    }
}
