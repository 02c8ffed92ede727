//! Guarded member deletion
//!
//! Runs the open count check and the delete in one transaction with the member
//! row locked, so a donation recorded between check and delete cannot slip by.

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::common::{ChurchId, MemberId, UniqueNames};
use crate::domains::counts::models::Count;
use crate::domains::member::models::member::Member;
use crate::kernel::ServerDeps;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    /// Member still has donations in these open counts
    Blocked { open_counts: Vec<String> },
}

/// Delete a member if no donation of theirs sits in an OPEN count
///
/// Unlike the eligibility check, database errors propagate: a failed delete
/// is reported as an error, never as success.
pub async fn delete_member(
    member_id: MemberId,
    church_id: &ChurchId,
    deps: &ServerDeps,
) -> Result<DeleteOutcome> {
    let mut tx = deps
        .db_pool
        .begin()
        .await
        .context("Failed to begin transaction")?;

    if Member::lock_for_update(member_id, church_id, &mut *tx)
        .await?
        .is_none()
    {
        return Ok(DeleteOutcome::NotFound);
    }

    let rows = Count::find_open_names_for_member(member_id, church_id, &mut *tx)
        .await
        .context("Failed to check open counts")?;
    let open_counts: UniqueNames = rows.into_iter().collect();

    if !open_counts.is_empty() {
        let open_counts = open_counts.into_vec();
        warn!(
            member_id = %member_id,
            church_id = %church_id,
            ?open_counts,
            "Refusing to delete member with donations in open counts"
        );
        tx.rollback().await.context("Failed to roll back")?;
        return Ok(DeleteOutcome::Blocked { open_counts });
    }

    if !Member::delete(member_id, church_id, &mut *tx).await? {
        warn!(
            member_id = %member_id,
            church_id = %church_id,
            "Locked member row was already gone at delete"
        );
    }
    tx.commit().await.context("Failed to commit member deletion")?;

    info!(member_id = %member_id, church_id = %church_id, "Member deleted");
    Ok(DeleteOutcome::Deleted)
}
