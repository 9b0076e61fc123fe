use dioxus::prelude::*;
use futures::StreamExt;

use crate::{GridState, Toasts, WalletState};

#[derive(Clone)]
enum WalletAction {
    Connect,
}

#[component]
pub fn WalletButton() -> Element {
    let mut wallet = use_context::<Signal<WalletState>>();
    let mut grid = use_context::<Signal<GridState>>();
    let mut toasts = use_context::<Signal<Toasts>>();
    let mut connecting = use_signal(|| false);

    // Restore a previously connected session from local storage.
    use_effect(move || {
        #[cfg(feature = "web")]
        {
            if let Some(address) = restore_session() {
                wallet.write().connected = true;
                wallet.write().address = Some(address);
            }
        }
    });

    // Use coroutine for lifecycle-safe async operations
    let wallet_coro = use_coroutine(move |mut rx: UnboundedReceiver<WalletAction>| {
        async move {
            while let Some(action) = rx.next().await {
                match action {
                    WalletAction::Connect => {
                        #[cfg(feature = "web")]
                        {
                            connecting.set(true);
                            let address = connect_simulated().await;
                            persist_session(&address);
                            wallet.write().connected = true;
                            wallet.write().address = Some(address);
                            connecting.set(false);
                            toasts.write().success(
                                "Wallet Connected!",
                                "You can now purchase lottery tickets.",
                            );
                        }
                    }
                }
            }
        }
    });

    let connect_wallet = move |_| {
        wallet_coro.send(WalletAction::Connect);
    };

    // Teardown clears the session, the pending selection, and storage.
    let disconnect_wallet = move |_| {
        wallet.write().connected = false;
        wallet.write().address = None;
        grid.write().selection.clear();
        #[cfg(feature = "web")]
        clear_session();
    };

    let wallet_read = wallet.read();

    if wallet_read.connected {
        let address = wallet_read.address.clone().unwrap_or_default();
        let short_address = if address.len() > 10 {
            format!("{}...{}", &address[..6], &address[address.len() - 4..])
        } else {
            address.clone()
        };

        rsx! {
            div { class: "flex items-center space-x-2",
                span { class: "text-sm text-gray-400 font-mono", "{short_address}" }
                button {
                    class: "btn btn-secondary text-sm",
                    onclick: disconnect_wallet,
                    "Disconnect"
                }
            }
        }
    } else {
        rsx! {
            button {
                class: "btn btn-primary",
                disabled: *connecting.read(),
                onclick: connect_wallet,
                if *connecting.read() { "CONNECTING..." } else { "CONNECT WALLET" }
            }
        }
    }
}

/// Simulated wallet handshake: a fixed delay, then an address derived
/// from local entropy. No provider is contacted.
#[cfg(feature = "web")]
async fn connect_simulated() -> String {
    gloo_timers::future::TimeoutFuture::new(crate::CONNECT_DELAY_MS).await;
    crate::hooks::mock_wallet_address()
}

#[cfg(feature = "web")]
fn persist_session(address: &str) {
    use gloo_storage::Storage;
    if let Err(e) = gloo_storage::LocalStorage::set(crate::WALLET_STORAGE_KEY, address) {
        tracing::error!("Failed to persist wallet session: {}", e);
    }
}

#[cfg(feature = "web")]
fn restore_session() -> Option<String> {
    use gloo_storage::Storage;
    gloo_storage::LocalStorage::get::<String>(crate::WALLET_STORAGE_KEY).ok()
}

#[cfg(feature = "web")]
fn clear_session() {
    use gloo_storage::Storage;
    gloo_storage::LocalStorage::delete(crate::WALLET_STORAGE_KEY);
}
