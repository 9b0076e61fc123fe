use serde::{Deserialize, Serialize};

/// Client-side aggregate of the lottery's single stats record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LotteryStats {
    /// Accumulated prize amount for the current round. Zeroed by a
    /// completed draw.
    pub prize_pool: u64,

    /// Cumulative prize amount across all draws. Never reset.
    pub total_won: u64,

    /// Cumulative burnt amount across all purchases. Never reset.
    pub total_burnt: u64,

    /// Scheduled draw date, admin-set, blank until configured.
    pub draw_date: String,

    /// Scheduled draw time (24h UTC), admin-set, blank until configured.
    pub draw_time: String,

    /// Result of the most recent draw, 1..=100.
    pub last_winning_number: Option<u32>,
}

impl LotteryStats {
    /// Fallback when the remote row does not exist yet: all fields
    /// zero/blank, no error raised.
    pub fn absent() -> Self {
        Self::default()
    }
}

/// The remote `lottery_stats` row (`id = 1`), every column nullable.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StatsRow {
    #[serde(default)]
    pub draw_date: Option<String>,
    #[serde(default)]
    pub draw_time: Option<String>,
    #[serde(default)]
    pub total_won: Option<u64>,
    #[serde(default)]
    pub total_burnt: Option<u64>,
    #[serde(default)]
    pub current_prize: Option<u64>,
    #[serde(default)]
    pub last_winning_number: Option<u32>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

impl From<StatsRow> for LotteryStats {
    fn from(row: StatsRow) -> Self {
        Self {
            prize_pool: row.current_prize.unwrap_or_default(),
            total_won: row.total_won.unwrap_or_default(),
            total_burnt: row.total_burnt.unwrap_or_default(),
            draw_date: row.draw_date.unwrap_or_default(),
            draw_time: row.draw_time.unwrap_or_default(),
            last_winning_number: row.last_winning_number,
        }
    }
}

/// Upsert body for the admin settings save: the schedule and the
/// cumulative totals, keyed to the single row. The prize pool column is
/// not part of the write, so a concurrent purchase cannot be clobbered
/// by a settings save.
#[derive(Clone, Debug, Serialize)]
pub struct SettingsUpsert {
    pub id: u32,
    pub draw_date: String,
    pub draw_time: String,
    pub total_won: u64,
    pub total_burnt: u64,
    pub last_updated: String,
}

/// Column-scoped body for draw completion: record the winner and zero
/// the prize pool, leaving the cumulative totals alone.
#[derive(Clone, Debug, Serialize)]
pub struct DrawPatch {
    pub last_winning_number: u32,
    pub current_prize: u64,
    pub last_updated: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_row_yields_defaults() {
        let stats = LotteryStats::absent();
        assert_eq!(stats.prize_pool, 0);
        assert_eq!(stats.total_won, 0);
        assert_eq!(stats.total_burnt, 0);
        assert_eq!(stats.draw_date, "");
        assert_eq!(stats.draw_time, "");
        assert_eq!(stats.last_winning_number, None);
    }

    #[test]
    fn test_null_columns_decode_to_defaults() {
        let row: StatsRow = serde_json::from_str(
            r#"{"draw_date":null,"draw_time":null,"total_won":null,
                "total_burnt":null,"current_prize":null,
                "last_winning_number":null,"last_updated":null}"#,
        )
        .unwrap();
        let stats = LotteryStats::from(row);
        assert_eq!(stats, LotteryStats::absent());
    }

    #[test]
    fn test_populated_row_maps_fields() {
        let row: StatsRow = serde_json::from_str(
            r#"{"draw_date":"2026-08-15","draw_time":"18:00",
                "total_won":500000000,"total_burnt":500000000,
                "current_prize":200000000,"last_winning_number":47,
                "last_updated":"2026-08-01T00:00:00Z"}"#,
        )
        .unwrap();
        let stats = LotteryStats::from(row);
        assert_eq!(stats.prize_pool, 200_000_000);
        assert_eq!(stats.total_won, 500_000_000);
        assert_eq!(stats.total_burnt, 500_000_000);
        assert_eq!(stats.draw_date, "2026-08-15");
        assert_eq!(stats.draw_time, "18:00");
        assert_eq!(stats.last_winning_number, Some(47));
    }

    #[test]
    fn test_settings_upsert_never_touches_prize_pool() {
        let upsert = SettingsUpsert {
            id: 1,
            draw_date: "2026-08-15".to_string(),
            draw_time: "18:00".to_string(),
            total_won: 500_000_000,
            total_burnt: 500_000_000,
            last_updated: "2026-08-01T00:00:00Z".to_string(),
        };
        let json = serde_json::to_value(&upsert).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("current_prize"));
        assert_eq!(object["id"], 1);
        assert_eq!(object["total_won"], 500_000_000);
    }

    #[test]
    fn test_draw_patch_zeroes_prize_and_leaves_totals() {
        let patch = DrawPatch {
            last_winning_number: 47,
            current_prize: 0,
            last_updated: "2026-08-01T00:00:00Z".to_string(),
        };
        let json = serde_json::to_value(&patch).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object["current_prize"], 0);
        assert_eq!(object["last_winning_number"], 47);
        assert!(!object.contains_key("total_won"));
        assert!(!object.contains_key("total_burnt"));
    }
}
