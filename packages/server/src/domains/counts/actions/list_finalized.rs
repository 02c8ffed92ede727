//! Finalized count listing
//!
//! Scoped replacement for the old direct-SQL batch endpoints, which pinned a
//! single church id in the query text.

use anyhow::{Context, Result};
use tracing::info;

use crate::common::ChurchId;
use crate::domains::counts::data::CountSummaryData;
use crate::domains::counts::models::Count;
use crate::kernel::ServerDeps;

/// List finalized counts for a church, most recent first
pub async fn list_finalized_counts(
    church_id: &ChurchId,
    deps: &ServerDeps,
) -> Result<Vec<CountSummaryData>> {
    info!(church_id = %church_id, "Listing finalized counts");

    let summaries = Count::find_finalized_summaries(church_id, &deps.db_pool)
        .await
        .with_context(|| format!("Failed to load finalized counts for church {}", church_id))?;

    Ok(summaries.into_iter().map(CountSummaryData::from).collect())
}
