use dioxus::prelude::*;

use crate::components::format_tokens;
use crate::TOKEN_SYMBOL;

#[derive(Props, Clone, PartialEq)]
pub struct WinnerModalProps {
    pub winning_ticket: u32,
    /// Prize pool at the moment the draw completed.
    pub prize_amount: u64,
    /// Whether the connected wallet owned the winning ticket.
    pub is_winner: bool,
    pub on_close: EventHandler<()>,
}

#[component]
pub fn WinnerModal(props: WinnerModalProps) -> Element {
    rsx! {
        div { class: "modal-backdrop fixed inset-0 z-50 flex items-center justify-center p-4",
            div { class: "modal elevated rounded-lg p-6 w-full max-w-md elevated-border border text-center",
                if props.is_winner {
                    h2 { class: "text-2xl font-bold text-gold mb-4", "Congratulations!" }
                    div { class: "elevated-control rounded-lg p-6 mb-4",
                        h3 { class: "text-xl font-bold text-high mb-2", "You Won!" }
                        p { class: "text-lg text-high mb-2", "Winning Ticket: #{props.winning_ticket}" }
                        p { class: "text-2xl font-bold text-gold font-mono",
                            {format!("{} {}", format_tokens(props.prize_amount), TOKEN_SYMBOL)}
                        }
                    }
                } else {
                    h2 { class: "text-2xl font-bold text-low mb-4", "Lottery Results" }
                    div { class: "elevated-control rounded-lg p-6 mb-4",
                        h3 { class: "text-xl font-bold text-high mb-2", "Better Luck Next Time!" }
                        p { class: "text-lg text-high mb-2", "Winning Ticket: #{props.winning_ticket}" }
                        p { class: "text-lg text-low font-mono",
                            {format!("Prize: {} {}", format_tokens(props.prize_amount), TOKEN_SYMBOL)}
                        }
                    }
                }

                button {
                    class: "w-full controls-primary py-3 rounded-lg font-semibold",
                    onclick: move |_| props.on_close.call(()),
                    if props.is_winner { "Claim Prize" } else { "Close" }
                }
            }
        }
    }
}
