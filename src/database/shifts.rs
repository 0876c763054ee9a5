use crate::database::models::{ActiveShift, ShiftRecord};
use sqlx::SqlitePool;
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum ShiftError {
    /// The user already has an open shift, started at `since`.
    #[error("already checked in since {since}")]
    AlreadyCheckedIn { since: i64 },

    #[error("not checked in")]
    NotCheckedIn,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Owner of the `active_shifts` and `shift_history` tables.
///
/// `begin` and `end` each run in one transaction whose first statement is the
/// write, so SQLite's write lock and the `active_shifts` primary key decide
/// races between concurrent commands.
#[derive(Debug, Clone)]
pub struct ShiftStore {
    pool: SqlitePool,
}

impl ShiftStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Checkin timestamp of the user's open shift, if any.
    pub async fn open(&self, user_id: i64) -> Result<Option<i64>, ShiftError> {
        let shift = sqlx::query_as::<_, ActiveShift>(
            "SELECT user_id, checkin_ts FROM active_shifts WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(shift.map(|shift| shift.checkin_ts))
    }

    pub async fn begin(&self, user_id: i64, now: i64) -> Result<(), ShiftError> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query(
            "INSERT INTO active_shifts (user_id, checkin_ts) VALUES (?, ?)
             ON CONFLICT(user_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(now)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if inserted == 0 {
            let since: i64 =
                sqlx::query_scalar("SELECT checkin_ts FROM active_shifts WHERE user_id = ?")
                    .bind(user_id)
                    .fetch_one(&mut *tx)
                    .await?;
            tx.rollback().await?;
            return Err(ShiftError::AlreadyCheckedIn { since });
        }

        tx.commit().await?;
        Ok(())
    }

    /// Closes the user's open shift and appends it to the history.
    ///
    /// A `now` earlier than the checkin (clock skew) is clamped to the
    /// checkin time, so the recorded duration is never negative.
    pub async fn end(&self, user_id: i64, now: i64) -> Result<ShiftRecord, ShiftError> {
        let mut tx = self.pool.begin().await?;

        let checkin_ts: Option<i64> =
            sqlx::query_scalar("DELETE FROM active_shifts WHERE user_id = ? RETURNING checkin_ts")
                .bind(user_id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(checkin_ts) = checkin_ts else {
            tx.rollback().await?;
            return Err(ShiftError::NotCheckedIn);
        };

        if now < checkin_ts {
            warn!(
                "Checkout before checkin for user_id={}: checkin_ts={}, now={}; clamping duration to 0",
                user_id, checkin_ts, now
            );
        }
        let checkout_ts = now.max(checkin_ts);
        let duration_seconds = checkout_ts - checkin_ts;

        let id = sqlx::query(
            "INSERT INTO shift_history (user_id, checkin_ts, checkout_ts, duration_seconds)
             VALUES (?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(checkin_ts)
        .bind(checkout_ts)
        .bind(duration_seconds)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        tx.commit().await?;

        Ok(ShiftRecord {
            id,
            user_id,
            checkin_ts,
            checkout_ts,
            duration_seconds,
        })
    }

    /// Completed shifts of a user, oldest first.
    pub async fn history(&self, user_id: i64) -> Result<Vec<ShiftRecord>, ShiftError> {
        let records = sqlx::query_as::<_, ShiftRecord>(
            "SELECT id, user_id, checkin_ts, checkout_ts, duration_seconds
             FROM shift_history
             WHERE user_id = ?
             ORDER BY id ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
