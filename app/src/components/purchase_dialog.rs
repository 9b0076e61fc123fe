use badgrid_api::prelude::*;
use dioxus::prelude::*;

use crate::components::format_tokens;
use crate::hooks::purchase_tickets;
use crate::{Toasts, TOKEN_SYMBOL};

#[derive(Props, Clone, PartialEq)]
pub struct PurchaseDialogProps {
    /// Tickets pending purchase, in selection order.
    pub selected: Vec<u32>,
    pub user_address: String,
    pub on_close: EventHandler<()>,
    /// Called with the purchased ids after the gateway confirms.
    pub on_complete: EventHandler<Vec<u32>>,
}

#[component]
pub fn PurchaseDialog(props: PurchaseDialogProps) -> Element {
    let mut toasts = use_context::<Signal<Toasts>>();
    let mut processing = use_signal(|| false);

    let breakdown = cost_breakdown(props.selected.len());
    let count = props.selected.len();

    let mut boxes = props.selected.clone();
    boxes.sort_unstable();
    let boxes_display = boxes
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let confirm = {
        let ids = props.selected.clone();
        let address = props.user_address.clone();
        let on_complete = props.on_complete;
        move |_| {
            let ids = ids.clone();
            let address = address.clone();
            processing.set(true);

            spawn(async move {
                match purchase_tickets(&ids, &address).await {
                    Ok(_tx_hash) => {
                        toasts.write().success(
                            "Purchase Successful!",
                            format!("Successfully purchased {} tickets", ids.len()),
                        );
                        on_complete.call(ids);
                    }
                    Err(e) => {
                        // Remote failure is terminal for this action;
                        // nothing was applied locally.
                        toasts.write().destructive("Purchase Failed", e);
                    }
                }
                processing.set(false);
            });
        }
    };

    rsx! {
        div { class: "modal-backdrop fixed inset-0 z-50 flex items-center justify-center p-4",
            div { class: "modal elevated rounded-lg p-6 w-full max-w-md elevated-border border",
                div { class: "flex justify-between items-center mb-4",
                    h2 { class: "text-xl font-bold text-high", "PURCHASE TICKETS" }
                    button {
                        class: "text-low hover:text-high",
                        onclick: move |_| props.on_close.call(()),
                        "✕"
                    }
                }

                // Cost summary
                div { class: "elevated-control rounded-lg p-4 mb-4 text-center",
                    p { class: "text-2xl font-bold text-high font-mono",
                        {format!("{} {}", format_tokens(breakdown.total), TOKEN_SYMBOL)}
                    }
                    p { class: "text-sm text-low",
                        {format!("Total Cost ({count} tickets)")}
                    }

                    div { class: "grid grid-cols-2 gap-4 text-sm mt-4",
                        div { class: "text-center",
                            p { class: "text-green-400 font-bold font-mono",
                                {format_tokens(breakdown.prize)}
                            }
                            p { class: "text-low", "To Prize Pool" }
                        }
                        div { class: "text-center",
                            p { class: "text-red-400 font-bold font-mono",
                                {format_tokens(breakdown.burn)}
                            }
                            p { class: "text-low", "To Burn" }
                        }
                    }
                }

                // Selected tickets
                div { class: "elevated-control rounded-lg p-3 mb-4",
                    p { class: "text-sm text-low mb-2", "Selected Tickets:" }
                    p { class: "text-sm text-high font-mono", "Boxes: {boxes_display}" }
                }

                div { class: "text-center text-sm text-low mb-4",
                    "Gas fees paid by the site wallet - {TOKEN_SYMBOL} only"
                }

                button {
                    class: "w-full controls-primary py-3 rounded-lg font-semibold",
                    disabled: *processing.read() || count == 0,
                    onclick: confirm,
                    if *processing.read() { "PROCESSING..." } else { "CONFIRM PURCHASE" }
                }
            }
        }
    }
}
