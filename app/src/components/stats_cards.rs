use badgrid_api::prelude::*;
use dioxus::prelude::*;

use crate::TOKEN_SYMBOL;

#[derive(Props, Clone, PartialEq)]
pub struct StatsCardsProps {
    pub prize_pool: u64,
    pub sold_tickets: usize,
    pub user_tickets: usize,
    pub total_won: u64,
    pub total_burnt: u64,
    pub draw_date: String,
    pub draw_time: String,
}

#[component]
pub fn StatsCards(props: StatsCardsProps) -> Element {
    let sold_pct = (props.sold_tickets as f64 / TICKET_COUNT as f64) * 100.0;
    let win_chance = (props.user_tickets as f64 / TICKET_COUNT as f64) * 100.0;

    rsx! {
        div { class: "grid grid-cols-2 md:grid-cols-3 gap-3 mb-6",
            StatCard {
                label: "PRIZE",
                value: format!("{} {}", format_tokens(props.prize_pool), TOKEN_SYMBOL),
            }

            StatCard {
                label: "SOLD",
                value: format!("{}/{}", props.sold_tickets, TICKET_COUNT),
                detail: Some(format!("{sold_pct:.0}% of grid")),
            }

            StatCard {
                label: "YOURS",
                value: props.user_tickets.to_string(),
                detail: Some(format!("{win_chance:.1}% chance")),
            }

            StatCard {
                label: "WON",
                value: format_tokens(props.total_won),
                detail: Some("Cumulative".to_string()),
            }

            StatCard {
                label: "BURNT",
                value: format_tokens(props.total_burnt),
                detail: Some("Cumulative".to_string()),
            }

            StatCard {
                label: "DRAW",
                value: format_date(&props.draw_date),
                detail: Some(format!("{} UTC", format_time(&props.draw_time))),
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct StatCardProps {
    label: &'static str,
    value: String,
    #[props(default)]
    detail: Option<String>,
}

#[component]
fn StatCard(props: StatCardProps) -> Element {
    rsx! {
        div { class: "card elevated rounded-lg p-4 elevated-border border",
            p { class: "text-low text-sm font-medium mb-1", "{props.label}" }
            p { class: "text-high text-lg font-bold font-mono", "{props.value}" }
            if let Some(detail) = &props.detail {
                p { class: "text-low text-xs mt-1", "{detail}" }
            }
        }
    }
}

/// Compact token amounts: 200_000_000 -> "200M".
pub fn format_tokens(amount: u64) -> String {
    if amount >= 1_000_000_000 {
        format!("{}B", amount / 1_000_000_000)
    } else if amount >= 1_000_000 {
        format!("{}M", amount / 1_000_000)
    } else if amount >= 1_000 {
        format!("{:.1}K", amount as f64 / 1_000.0)
    } else {
        amount.to_string()
    }
}

fn format_date(date: &str) -> String {
    if date.is_empty() {
        "TBD".to_string()
    } else {
        date.to_string()
    }
}

fn format_time(time: &str) -> String {
    if time.is_empty() {
        "TBD".to_string()
    } else {
        // "18:00:00" columns display as "18:00"
        time.chars().take(5).collect()
    }
}
