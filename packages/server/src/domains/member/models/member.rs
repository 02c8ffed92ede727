use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, PgPool};

use crate::common::{ChurchId, MemberId};

/// Member model - SQL persistence layer
///
/// Every lookup and mutation takes the owning church, so a member id from one
/// church never resolves inside another.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone)]
pub struct Member {
    pub id: MemberId,
    pub church_id: ChurchId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Insert new member
    pub async fn create(
        church_id: &ChurchId,
        first_name: &str,
        last_name: &str,
        email: Option<&str>,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO members (church_id, first_name, last_name, email)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(church_id)
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Find member by ID within a church
    pub async fn find_by_id(
        id: MemberId,
        church_id: &ChurchId,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM members WHERE id = $1 AND church_id = $2")
            .bind(id)
            .bind(church_id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Lock the member row for the rest of the transaction
    pub async fn lock_for_update<'e, E>(
        id: MemberId,
        church_id: &ChurchId,
        executor: E,
    ) -> Result<Option<Self>>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM members WHERE id = $1 AND church_id = $2 FOR UPDATE",
        )
        .bind(id)
        .bind(church_id)
        .fetch_optional(executor)
        .await
        .map_err(Into::into)
    }

    /// Delete member, returning true if a row was removed
    pub async fn delete<'e, E>(id: MemberId, church_id: &ChurchId, executor: E) -> Result<bool>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM members WHERE id = $1 AND church_id = $2")
            .bind(id)
            .bind(church_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
