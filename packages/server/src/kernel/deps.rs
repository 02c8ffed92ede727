//! Server dependencies (using traits for testability)
//!
//! This module provides the central dependency container used by domain actions.
//! Lookups that tests need to fake go through trait objects.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::common::{ChurchId, MemberId};
use crate::domains::counts::models::Count;
use crate::kernel::BaseOpenCountLookup;

// =============================================================================
// Postgres Open Count Lookup (implements BaseOpenCountLookup trait)
// =============================================================================

/// Open count lookup backed by the `donations` / `counts` tables
pub struct PostgresOpenCountLookup {
    pool: PgPool,
}

impl PostgresOpenCountLookup {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseOpenCountLookup for PostgresOpenCountLookup {
    async fn open_count_names(
        &self,
        member_id: MemberId,
        church_id: &ChurchId,
    ) -> Result<Vec<String>> {
        Count::find_open_names_for_member(member_id, church_id, &self.pool).await
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to actions
#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    pub open_counts: Arc<dyn BaseOpenCountLookup>,
}

impl ServerDeps {
    /// Production wiring: every lookup reads from the given pool
    pub fn new(db_pool: PgPool) -> Self {
        let open_counts = Arc::new(PostgresOpenCountLookup::new(db_pool.clone()));
        Self {
            db_pool,
            open_counts,
        }
    }

    /// Replace the open count lookup (tests)
    pub fn with_open_counts(mut self, open_counts: Arc<dyn BaseOpenCountLookup>) -> Self {
        self.open_counts = open_counts;
        self
    }
}
