use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::ChurchId;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Church {
    pub id: ChurchId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Church {
    pub async fn create(id: &ChurchId, name: &str, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>("INSERT INTO churches (id, name) VALUES ($1, $2) RETURNING *")
            .bind(id)
            .bind(name)
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }
}
