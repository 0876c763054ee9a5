use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct ActiveShift {
    pub user_id: i64,
    pub checkin_ts: i64,
}

/// A completed shift. Rows are append-only.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct ShiftRecord {
    pub id: i64,
    pub user_id: i64,
    pub checkin_ts: i64,
    pub checkout_ts: i64,
    pub duration_seconds: i64,
}

impl ShiftRecord {
    pub fn duration(&self) -> u64 {
        self.duration_seconds.max(0) as u64
    }
}
