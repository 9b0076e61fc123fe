use badgrid_api::prelude::*;

use super::entropy::now_iso;
use super::gateway::{invoke_gasless_purchase, patch_stats, upsert_stats};

/// Run a purchase through the gasless function and return the
/// transaction hash. The function is the atomicity boundary: it writes
/// the ticket rows and bumps the aggregate stats server-side, so two
/// concurrent purchasers can no longer lose each other's increments to
/// a client-side read-modify-write.
pub async fn purchase_tickets(ticket_ids: &[u32], user_address: &str) -> Result<String, String> {
    let breakdown = cost_breakdown(ticket_ids.len());

    let request = GaslessRequest {
        ticket_ids: ticket_ids.to_vec(),
        user_address: user_address.to_string(),
        total_amount: breakdown.total,
    };

    let response = invoke_gasless_purchase(&request).await?;

    if response.success {
        Ok(response.transaction_hash.unwrap_or_default())
    } else {
        Err(response
            .error
            .unwrap_or_else(|| "There was an error processing your purchase".to_string()))
    }
}

/// Persist a confirmed draw: record the winning number and zero the
/// prize pool. Cumulative totals are left alone; they only ever grow
/// through purchases. The grid itself is cleared by `reset_grid`.
pub async fn complete_draw(winning_number: u32) -> Result<(), String> {
    patch_stats(&DrawPatch {
        last_winning_number: winning_number,
        current_prize: 0,
        last_updated: now_iso(),
    })
    .await
}

/// Save the admin draw schedule and the cumulative totals. The upsert
/// is column-scoped: the prize pool is never part of this write, so it
/// needs no read-first preservation.
pub async fn save_settings(
    draw_date: &str,
    draw_time: &str,
    total_won: u64,
    total_burnt: u64,
) -> Result<(), String> {
    upsert_stats(&SettingsUpsert {
        id: 1,
        draw_date: draw_date.to_string(),
        draw_time: draw_time.to_string(),
        total_won,
        total_burnt,
        last_updated: now_iso(),
    })
    .await
}
