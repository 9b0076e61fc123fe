use serde::{Deserialize, Serialize};

use crate::consts::TICKET_PRICE;

/// Cost of a pending selection, split between the prize pool and the
/// burn address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CostBreakdown {
    /// Total cost of the batch.
    pub total: u64,

    /// Half routed to the prize pool.
    pub prize: u64,

    /// Half permanently removed from circulation.
    pub burn: u64,
}

/// Split a batch of `count` tickets 50/50 between prize and burn. The
/// burn side takes any odd unit so the two halves always sum to the
/// total.
pub fn cost_breakdown(count: usize) -> CostBreakdown {
    let total = TICKET_PRICE * count as u64;
    let prize = total / 2;
    CostBreakdown {
        total,
        prize,
        burn: total - prize,
    }
}

/// Batch request body for the `gasless-purchase` function. The function
/// moves the payment, writes the ticket rows, and bumps the aggregate
/// stats in one server-side transaction.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GaslessRequest {
    pub ticket_ids: Vec<u32>,
    pub user_address: String,
    pub total_amount: u64,
}

/// Legacy single-ticket request shape, still accepted by the function.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GaslessSingleRequest {
    pub ticket_id: u32,
    pub user_address: String,
    pub payment_method: String,
}

/// Function response. `error` carries the server's message when
/// `success` is false.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GaslessResponse {
    pub success: bool,
    #[serde(default)]
    pub transaction_hash: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_breakdown_splits_in_half() {
        // Selection {3, 47} at 100M per ticket.
        let breakdown = cost_breakdown(2);
        assert_eq!(breakdown.total, 200_000_000);
        assert_eq!(breakdown.prize, 100_000_000);
        assert_eq!(breakdown.burn, 100_000_000);
    }

    #[test]
    fn test_cost_breakdown_always_sums() {
        for count in 0..=100 {
            let breakdown = cost_breakdown(count);
            assert_eq!(breakdown.total, TICKET_PRICE * count as u64);
            assert_eq!(breakdown.prize + breakdown.burn, breakdown.total);
            assert_eq!(breakdown.prize, breakdown.burn);
        }
    }

    #[test]
    fn test_gasless_request_wire_names() {
        let request = GaslessRequest {
            ticket_ids: vec![3, 47],
            user_address: "0xabc".to_string(),
            total_amount: 200_000_000,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["ticketIds"], serde_json::json!([3, 47]));
        assert_eq!(json["userAddress"], "0xabc");
        assert_eq!(json["totalAmount"], 200_000_000);
    }

    #[test]
    fn test_legacy_single_request_wire_names() {
        let request = GaslessSingleRequest {
            ticket_id: 47,
            user_address: "0xabc".to_string(),
            payment_method: "bad-token".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["ticketId"], 47);
        assert_eq!(json["paymentMethod"], "bad-token");
    }

    #[test]
    fn test_gasless_response_optional_fields() {
        let failure: GaslessResponse =
            serde_json::from_str(r#"{"success":false,"error":"X"}"#).unwrap();
        assert!(!failure.success);
        assert_eq!(failure.error.as_deref(), Some("X"));
        assert!(failure.transaction_hash.is_none());

        let success: GaslessResponse =
            serde_json::from_str(r#"{"success":true,"transactionHash":"0x01"}"#).unwrap();
        assert!(success.success);
        assert_eq!(success.transaction_hash.as_deref(), Some("0x01"));
    }
}
