//! Locally sourced values for the draw and the simulated wallet.

use sha2::{Digest, Sha256};

/// Concatenate the entropy sources the draw hashes over: current
/// timestamp, a generated random value, client identification, and
/// display resolution. All of these are controlled by the client
/// running the draw, which is exactly why the result carries no
/// fairness guarantee.
#[cfg(feature = "web")]
pub fn gather_entropy() -> String {
    let timestamp = js_sys::Date::now();
    let random_seed = js_sys::Math::random();

    let window = web_sys::window();
    let user_agent = window
        .as_ref()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default();
    let screen_res = window
        .as_ref()
        .and_then(|w| w.screen().ok())
        .and_then(|s| match (s.width(), s.height()) {
            (Ok(width), Ok(height)) => Some(format!("{width}x{height}")),
            _ => None,
        })
        .unwrap_or_default();

    format!("{timestamp}-{random_seed}-{user_agent}-{screen_res}")
}

#[cfg(not(feature = "web"))]
pub fn gather_entropy() -> String {
    String::new()
}

/// Derive a plausible 0x address for the simulated connect flow. No
/// cryptographic handshake happens here.
pub fn mock_wallet_address() -> String {
    let digest = Sha256::digest(gather_entropy().as_bytes());
    let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
    format!("0x{}", &hex[..40])
}

/// Current time as an ISO-8601 string for `last_updated` columns.
#[cfg(feature = "web")]
pub fn now_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

#[cfg(not(feature = "web"))]
pub fn now_iso() -> String {
    String::new()
}
