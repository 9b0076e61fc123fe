use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::{ToastVariant, Toasts, TOAST_TTL_MS};

#[component]
pub fn ToastViewport() -> Element {
    let mut toasts = use_context::<Signal<Toasts>>();

    // Track which toasts already have an expiry timer scheduled.
    let scheduled = use_hook(|| Rc::new(RefCell::new(HashSet::<u64>::new())));

    use_effect(move || {
        let ids: Vec<u64> = toasts.read().items.iter().map(|t| t.id).collect();
        for id in ids {
            if scheduled.borrow_mut().insert(id) {
                spawn(async move {
                    gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
                    toasts.write().dismiss(id);
                });
            }
        }
    });

    rsx! {
        div { class: "fixed bottom-4 right-4 z-50 space-y-2 w-80",
            for toast in toasts.read().items.iter() {
                div {
                    key: "{toast.id}",
                    class: match toast.variant {
                        ToastVariant::Success => "toast elevated rounded-lg p-3 border border-green-500/30",
                        ToastVariant::Destructive => "toast elevated rounded-lg p-3 border border-red-500/30",
                    },
                    div { class: "flex justify-between items-start",
                        p { class: "text-high font-semibold text-sm", "{toast.title}" }
                        button {
                            class: "text-low hover:text-high text-xs",
                            onclick: {
                                let id = toast.id;
                                move |_| toasts.write().dismiss(id)
                            },
                            "✕"
                        }
                    }
                    p { class: "text-low text-sm", "{toast.description}" }
                }
            }
        }
    }
}
