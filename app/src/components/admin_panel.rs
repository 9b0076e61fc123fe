use dioxus::prelude::*;

use crate::hooks::{fetch_stats_row, save_settings};
use crate::Toasts;

#[derive(Props, Clone, PartialEq)]
pub struct AdminPanelProps {
    pub on_close: EventHandler<()>,
    /// Opens the draw modal in place of the settings panel.
    pub on_open_draw: EventHandler<()>,
}

#[component]
pub fn AdminPanel(props: AdminPanelProps) -> Element {
    let mut toasts = use_context::<Signal<Toasts>>();
    let mut draw_date = use_signal(String::new);
    let mut draw_time = use_signal(String::new);
    let mut total_won = use_signal(String::new);
    let mut total_burnt = use_signal(String::new);
    let mut saving = use_signal(|| false);

    // Pre-fill the form with the current settings.
    use_future(move || async move {
        match fetch_stats_row().await {
            Ok(Some(row)) => {
                draw_date.set(row.draw_date.unwrap_or_default());
                draw_time.set(row.draw_time.unwrap_or_default());
                total_won.set(row.total_won.unwrap_or_default().to_string());
                total_burnt.set(row.total_burnt.unwrap_or_default().to_string());
            }
            Ok(None) => {
                total_won.set("0".to_string());
                total_burnt.set("0".to_string());
            }
            Err(e) => {
                tracing::error!("Failed to load settings: {}", e);
            }
        }
    });

    let save = move |_| {
        // Validation happens before any network call.
        if draw_date.read().is_empty() || draw_time.read().is_empty() {
            toasts
                .write()
                .destructive("Error", "Please fill in both date and time");
            return;
        }
        let (Ok(won), Ok(burnt)) = (
            total_won.read().parse::<u64>(),
            total_burnt.read().parse::<u64>(),
        ) else {
            toasts
                .write()
                .destructive("Error", "Totals must be whole token amounts");
            return;
        };

        saving.set(true);
        let on_close = props.on_close;

        spawn(async move {
            let date = draw_date.read().clone();
            let time = draw_time.read().clone();
            match save_settings(&date, &time, won, burnt).await {
                Ok(()) => {
                    toasts
                        .write()
                        .success("Success", "Draw date and time updated successfully");
                    on_close.call(());
                }
                Err(e) => {
                    tracing::error!("Failed to save settings: {}", e);
                    toasts.write().destructive("Error", "Failed to update settings");
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        div { class: "modal-backdrop fixed inset-0 z-50 flex items-center justify-center p-4",
            div { class: "modal elevated rounded-lg p-6 w-full max-w-md elevated-border border",
                div { class: "flex justify-between items-center mb-4",
                    h2 { class: "text-xl font-bold text-high", "ADMIN PANEL" }
                    button {
                        class: "text-low hover:text-high",
                        onclick: move |_| props.on_close.call(()),
                        "✕"
                    }
                }

                div { class: "space-y-4",
                    div { class: "elevated-control rounded-lg p-4 space-y-4",
                        div { class: "space-y-2",
                            label { class: "text-low text-sm font-medium", "Draw Date (DD/MM/YYYY)" }
                            input {
                                class: "w-full elevated rounded px-3 py-2 text-high outline-none",
                                r#type: "date",
                                value: "{draw_date}",
                                oninput: move |e| draw_date.set(e.value()),
                            }
                        }
                        div { class: "space-y-2",
                            label { class: "text-low text-sm font-medium", "Draw Time (24hr UTC)" }
                            input {
                                class: "w-full elevated rounded px-3 py-2 text-high outline-none",
                                r#type: "time",
                                value: "{draw_time}",
                                oninput: move |e| draw_time.set(e.value()),
                            }
                        }
                        div { class: "space-y-2",
                            label { class: "text-low text-sm font-medium", "Total Won (base units)" }
                            input {
                                class: "w-full elevated rounded px-3 py-2 text-high font-mono outline-none",
                                r#type: "number",
                                min: "0",
                                value: "{total_won}",
                                oninput: move |e| total_won.set(e.value()),
                            }
                        }
                        div { class: "space-y-2",
                            label { class: "text-low text-sm font-medium", "Total Burnt (base units)" }
                            input {
                                class: "w-full elevated rounded px-3 py-2 text-high font-mono outline-none",
                                r#type: "number",
                                min: "0",
                                value: "{total_burnt}",
                                oninput: move |e| total_burnt.set(e.value()),
                            }
                        }
                    }

                    button {
                        class: "w-full controls-primary py-3 rounded-lg font-semibold",
                        disabled: *saving.read(),
                        onclick: save,
                        if *saving.read() { "SAVING..." } else { "SAVE SETTINGS" }
                    }

                    button {
                        class: "w-full controls-gold py-3 rounded-lg font-semibold",
                        onclick: move |_| props.on_open_draw.call(()),
                        "OPEN DRAW"
                    }
                }
            }
        }
    }
}
