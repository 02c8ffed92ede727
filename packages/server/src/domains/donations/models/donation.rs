use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, PgPool};

use crate::common::{ChurchId, CountId, MemberId};

/// Donation - one gift recorded into a count
///
/// `member_id` is `None` for loose cash with no attributed giver.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Donation {
    pub id: i32,
    pub church_id: ChurchId,
    pub member_id: Option<MemberId>,
    pub count_id: CountId,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Donation {
    /// Record a donation into a count
    pub async fn create<'e, E>(
        church_id: &ChurchId,
        member_id: Option<MemberId>,
        count_id: CountId,
        amount: Decimal,
        executor: E,
    ) -> Result<Self>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO donations (church_id, member_id, count_id, amount)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(church_id)
        .bind(member_id)
        .bind(count_id)
        .bind(amount)
        .fetch_one(executor)
        .await
        .map_err(Into::into)
    }

    /// All donations recorded into a count
    pub async fn find_by_count(
        count_id: CountId,
        church_id: &ChurchId,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM donations WHERE count_id = $1 AND church_id = $2 ORDER BY id",
        )
        .bind(count_id)
        .bind(church_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
