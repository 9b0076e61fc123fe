use badgrid_api::prelude::*;
use dioxus::prelude::*;

use crate::hooks::gather_entropy;
use crate::{DrawPhase, Toasts, DRAW_DELAY_MS};

#[derive(Props, Clone, PartialEq)]
pub struct DrawModalProps {
    pub on_close: EventHandler<()>,
    /// Called with the winning number when the admin confirms the
    /// result. Dismissing the modal instead persists nothing.
    pub on_complete: EventHandler<u32>,
}

#[component]
pub fn DrawModal(props: DrawModalProps) -> Element {
    let mut toasts = use_context::<Signal<Toasts>>();
    let mut phase = use_signal(|| DrawPhase::Idle);
    let mut winning_number = use_signal(|| None::<u32>);

    let perform_draw = move |_| {
        phase.set(DrawPhase::Drawing);

        spawn(async move {
            // Hash first, reveal after the suspense delay.
            let entropy = gather_entropy();
            let result = draw_number(&entropy);

            gloo_timers::future::TimeoutFuture::new(DRAW_DELAY_MS).await;

            winning_number.set(Some(result));
            phase.set(DrawPhase::Result);
            toasts
                .write()
                .success("Draw Complete!", format!("Winning number: {result}"));
        });
    };

    let complete = move |_| {
        if let Some(result) = *winning_number.read() {
            props.on_complete.call(result);
            winning_number.set(None);
            phase.set(DrawPhase::Idle);
            props.on_close.call(());
        }
    };

    let current_phase = *phase.read();

    rsx! {
        div { class: "modal-backdrop fixed inset-0 z-50 flex items-center justify-center p-4",
            div { class: "modal elevated rounded-lg p-6 w-full max-w-md elevated-border border",
                div { class: "flex justify-between items-center mb-4",
                    h2 { class: "text-xl font-bold text-high", "LOTTERY DRAW" }
                    button {
                        class: "text-low hover:text-high",
                        onclick: move |_| props.on_close.call(()),
                        "✕"
                    }
                }

                if current_phase != DrawPhase::Result {
                    div { class: "space-y-6 text-center",
                        div { class: "elevated-control rounded-lg p-6",
                            p { class: "text-high mb-4", "Ready to draw the winning number?" }
                            p { class: "text-low text-sm mb-4",
                                "Using transparent randomization based on:"
                                br {}
                                "- Current timestamp"
                                br {}
                                "- Browser entropy"
                                br {}
                                "- System parameters"
                            }
                            if current_phase == DrawPhase::Drawing {
                                p { class: "text-gold animate-pulse", "Drawing..." }
                            }
                        }

                        button {
                            class: "w-full controls-primary py-3 rounded-lg font-semibold",
                            disabled: current_phase == DrawPhase::Drawing,
                            onclick: perform_draw,
                            if current_phase == DrawPhase::Drawing { "DRAWING..." } else { "DRAW NOW" }
                        }
                    }
                } else if let Some(result) = *winning_number.read() {
                    div { class: "space-y-6 text-center",
                        div { class: "elevated-control rounded-lg p-6",
                            h3 { class: "text-2xl font-bold text-high mb-2", "WINNING NUMBER" }
                            span { class: "inline-block text-3xl font-bold font-mono text-gold px-6 py-2",
                                "{result}"
                            }
                        }

                        button {
                            class: "w-full controls-gold py-3 rounded-lg font-semibold",
                            onclick: complete,
                            "COMPLETE DRAW"
                        }
                    }
                }
            }
        }
    }
}
