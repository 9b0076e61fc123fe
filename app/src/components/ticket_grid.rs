use badgrid_api::prelude::*;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct TicketGridProps {
    /// The full 100-ticket collection.
    pub tickets: Vec<Ticket>,
    /// Currently selected ticket ids (multi-select)
    #[props(default)]
    pub selected: Vec<u32>,
    /// Connected wallet, used to highlight the user's own tickets
    #[props(default)]
    pub user_address: Option<String>,
    /// Whether a wallet is connected; unsold tickets are locked otherwise
    #[props(default = false)]
    pub connected: bool,
    /// Winning ticket (highlighted after a draw)
    #[props(default)]
    pub winning_ticket: Option<u32>,
    /// Callback when an unsold ticket is clicked
    #[props(default)]
    pub on_select: Option<EventHandler<u32>>,
    /// Whether the grid is disabled (purchase in flight)
    #[props(default = false)]
    pub disabled: bool,
}

#[component]
pub fn TicketGrid(props: TicketGridProps) -> Element {
    rsx! {
        div { class: "grid-container rounded-lg p-4 mb-6",
            div { class: "grid grid-cols-5 gap-1 max-w-sm mx-auto",
                for ticket in props.tickets.iter() {
                    TicketCell {
                        id: ticket.id,
                        owner: ticket.owner.clone(),
                        selected: props.selected.contains(&ticket.id),
                        winning: props.winning_ticket == Some(ticket.id),
                        mine: ticket.owner.is_some()
                            && ticket.owner.as_deref() == props.user_address.as_deref(),
                        connected: props.connected,
                        disabled: props.disabled,
                        on_click: {
                            let id = ticket.id;
                            let sold = ticket.owner.is_some();
                            move |_| {
                                if let Some(handler) = &props.on_select {
                                    // Sold tickets cannot be re-selected;
                                    // disconnected users cannot select at all.
                                    if !sold && props.connected && !props.disabled {
                                        handler.call(id);
                                    }
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct TicketCellProps {
    id: u32,
    owner: Option<String>,
    selected: bool,
    winning: bool,
    mine: bool,
    connected: bool,
    disabled: bool,
    on_click: EventHandler<()>,
}

#[component]
fn TicketCell(props: TicketCellProps) -> Element {
    let sold = props.owner.is_some();

    let base_class = "ticket-cell h-10 w-full p-0 text-xs font-bold relative rounded transition-all duration-300";

    let state_class = if props.winning {
        "ticket-cell-winning"
    } else if props.mine {
        "ticket-cell-mine"
    } else if sold {
        "ticket-cell-sold"
    } else if props.selected {
        "ticket-cell-selected"
    } else if !props.connected {
        "ticket-cell-locked"
    } else {
        "ticket-cell-open"
    };

    let full_class = format!("{} {}", base_class, state_class);

    rsx! {
        button {
            class: "{full_class}",
            disabled: sold || !props.connected || props.disabled,
            onclick: move |_| props.on_click.call(()),

            // Corner marker: yours / selected
            if props.mine {
                span { class: "absolute -top-1 -right-1 text-cyan-300 text-xs animate-pulse", "✦" }
            } else if props.selected {
                span { class: "absolute -top-1 -right-1 text-yellow-300 text-xs animate-pulse", "✓" }
            }

            // Lock marker when browsing without a wallet
            if !sold && !props.connected {
                span { class: "absolute top-1 left-1 text-xs opacity-50", "🔒" }
            }

            span { class: "font-mono", "{props.id}" }
        }
    }
}
