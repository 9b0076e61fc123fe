use badgrid_api::prelude::*;
use reqwest::RequestBuilder;
use serde::Serialize;

use crate::{SUPABASE_ANON_KEY, SUPABASE_URL};

fn rest_url(table: &str) -> String {
    format!("{}/rest/v1/{}", SUPABASE_URL, table)
}

fn function_url(name: &str) -> String {
    format!("{}/functions/v1/{}", SUPABASE_URL, name)
}

fn authorize(request: RequestBuilder) -> RequestBuilder {
    request
        .header("apikey", SUPABASE_ANON_KEY)
        .header("Authorization", format!("Bearer {}", SUPABASE_ANON_KEY))
}

/// Fetch ownership rows for one lottery round.
pub async fn fetch_ticket_rows(round: u32) -> Result<Vec<TicketRow>, String> {
    let client = reqwest::Client::new();
    let round_filter = format!("eq.{round}");

    let response = authorize(client.get(rest_url("lottery_tickets")))
        .query(&[
            ("select", "ticket_number,wallet_address,transaction_hash,lottery_round"),
            ("lottery_round", round_filter.as_str()),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.status().is_success() {
        return Err(format!("ticket fetch failed: {}", response.status()));
    }

    response.json().await.map_err(|e| e.to_string())
}

/// Fetch the single stats row. An empty result set is not an error:
/// the row simply hasn't been created yet.
pub async fn fetch_stats_row() -> Result<Option<StatsRow>, String> {
    let client = reqwest::Client::new();

    let response = authorize(client.get(rest_url("lottery_stats")))
        .query(&[("select", "*"), ("id", "eq.1")])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.status().is_success() {
        return Err(format!("stats fetch failed: {}", response.status()));
    }

    let rows: Vec<StatsRow> = response.json().await.map_err(|e| e.to_string())?;
    Ok(rows.into_iter().next())
}

/// Patch columns of the stats row. Callers pass a column-scoped body
/// (`DrawPatch`) so unrelated columns are never written.
pub async fn patch_stats<T: Serialize>(patch: &T) -> Result<(), String> {
    let client = reqwest::Client::new();

    let response = authorize(client.patch(rest_url("lottery_stats")))
        .query(&[("id", "eq.1")])
        .header("Prefer", "return=minimal")
        .json(patch)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.status().is_success() {
        return Err(format!("stats update failed: {}", response.status()));
    }

    Ok(())
}

/// Upsert the settings columns of the stats row, creating the row if it
/// does not exist yet.
pub async fn upsert_stats(upsert: &SettingsUpsert) -> Result<(), String> {
    let client = reqwest::Client::new();

    let response = authorize(client.post(rest_url("lottery_stats")))
        .header("Prefer", "resolution=merge-duplicates,return=minimal")
        .json(upsert)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.status().is_success() {
        return Err(format!("settings save failed: {}", response.status()));
    }

    Ok(())
}

/// Delete all ticket rows of a round (grid reset after a draw).
pub async fn delete_ticket_rows(round: u32) -> Result<(), String> {
    let client = reqwest::Client::new();
    let round_filter = format!("eq.{round}");

    let response = authorize(client.delete(rest_url("lottery_tickets")))
        .query(&[("lottery_round", round_filter.as_str())])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.status().is_success() {
        return Err(format!("ticket reset failed: {}", response.status()));
    }

    Ok(())
}

/// Invoke the gasless purchase function. Payment, ticket rows, and the
/// stats increments all happen server-side in one transaction.
pub async fn invoke_gasless_purchase(request: &GaslessRequest) -> Result<GaslessResponse, String> {
    let client = reqwest::Client::new();

    let response = authorize(client.post(function_url("gasless-purchase")))
        .json(request)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.status().is_success() {
        return Err(format!("purchase invocation failed: {}", response.status()));
    }

    response.json().await.map_err(|e| e.to_string())
}
