use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, PgPool};

use crate::common::{ChurchId, CountId, MemberId};

/// Count status
///
/// A count is mutable while `Open`. Once finalized or closed only the
/// status may change, and nothing reads it as editable again.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "count_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum CountStatus {
    Open,
    Finalized,
    Closed,
}

impl CountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CountStatus::Open => "OPEN",
            CountStatus::Finalized => "FINALIZED",
            CountStatus::Closed => "CLOSED",
        }
    }
}

impl std::fmt::Display for CountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Count - one collection batch (e.g. the plate from a Sunday service)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Count {
    pub id: CountId,
    pub church_id: ChurchId,
    pub name: String,
    pub status: CountStatus,
    pub count_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A count with its donation totals, as listed for finalized batches
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CountSummary {
    pub id: CountId,
    pub name: String,
    pub status: CountStatus,
    pub count_date: NaiveDate,
    pub donation_count: i64,
    pub total_amount: Decimal,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Count {
    /// Create a count for a church
    pub async fn create(
        church_id: &ChurchId,
        name: &str,
        status: CountStatus,
        count_date: NaiveDate,
        pool: &PgPool,
    ) -> Result<Self> {
        let count = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO counts (church_id, name, status, count_date)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(church_id)
        .bind(name)
        .bind(status)
        .bind(count_date)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    /// Move a count to a new status
    pub async fn update_status(
        id: CountId,
        church_id: &ChurchId,
        status: CountStatus,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE counts
            SET status = $3, updated_at = NOW()
            WHERE id = $1 AND church_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(church_id)
        .bind(status)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Names of open counts holding donations from a member, one row per donation.
    ///
    /// Rows come back in donation insertion order and may repeat a name when a
    /// member gave more than once into the same count. Both the donation and the
    /// count must belong to `church_id`.
    pub async fn find_open_names_for_member<'e, E>(
        member_id: MemberId,
        church_id: &ChurchId,
        executor: E,
    ) -> Result<Vec<String>>
    where
        E: PgExecutor<'e>,
    {
        let names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT c.name
            FROM donations d
            JOIN counts c ON c.id = d.count_id
            WHERE d.member_id = $1
              AND d.church_id = $2
              AND c.church_id = $2
              AND c.status = $3
            ORDER BY d.id
            "#,
        )
        .bind(member_id)
        .bind(church_id)
        .bind(CountStatus::Open)
        .fetch_all(executor)
        .await?;
        Ok(names)
    }

    /// Finalized counts of a church with donation totals, most recent first
    pub async fn find_finalized_summaries(
        church_id: &ChurchId,
        pool: &PgPool,
    ) -> Result<Vec<CountSummary>> {
        sqlx::query_as::<_, CountSummary>(
            r#"
            SELECT
                c.id,
                c.name,
                c.status,
                c.count_date,
                COUNT(d.id) AS donation_count,
                COALESCE(SUM(d.amount), 0) AS total_amount
            FROM counts c
            LEFT JOIN donations d ON d.count_id = c.id AND d.church_id = c.church_id
            WHERE c.church_id = $1
              AND c.status = $2
            GROUP BY c.id
            ORDER BY c.count_date DESC, c.id DESC
            "#,
        )
        .bind(church_id)
        .bind(CountStatus::Finalized)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
