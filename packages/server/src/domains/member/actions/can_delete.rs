//! Member deletion eligibility
//!
//! A member may be deleted only when none of their donations sit in an OPEN
//! count of the same church. The check is read-only and advisory: the real
//! delete (see `delete_member`) repeats it inside its own transaction.

use tracing::{debug, error};

use crate::common::{ChurchId, MemberId, UniqueNames};
use crate::domains::member::data::DeletionEligibility;
use crate::kernel::{BaseOpenCountLookup, ServerDeps};

/// Outcome of the eligibility query before it is flattened for callers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EligibilityCheck {
    /// The query ran; holds distinct open count names in first-seen order
    Checked { open_counts: Vec<String> },
    /// The query could not be completed
    Failed { reason: String },
}

impl EligibilityCheck {
    /// Collapse into the caller-facing result. A failure never reads as deletable.
    pub fn into_eligibility(self) -> DeletionEligibility {
        match self {
            EligibilityCheck::Checked { open_counts } => {
                DeletionEligibility::from_open_counts(open_counts)
            }
            EligibilityCheck::Failed { .. } => DeletionEligibility::check_failed(),
        }
    }
}

/// Run the open count query and dedupe the names, keeping failures distinct
pub async fn check_deletion_eligibility(
    lookup: &dyn BaseOpenCountLookup,
    member_id: MemberId,
    church_id: &ChurchId,
) -> EligibilityCheck {
    match lookup.open_count_names(member_id, church_id).await {
        Ok(rows) => {
            let open_counts: UniqueNames = rows.into_iter().collect();
            EligibilityCheck::Checked {
                open_counts: open_counts.into_vec(),
            }
        }
        Err(e) => EligibilityCheck::Failed {
            reason: format!("{:#}", e),
        },
    }
}

/// Check eligibility against an explicit lookup, failing closed
pub async fn can_delete_member_with(
    lookup: &dyn BaseOpenCountLookup,
    member_id: MemberId,
    church_id: &ChurchId,
) -> DeletionEligibility {
    let check = check_deletion_eligibility(lookup, member_id, church_id).await;

    match &check {
        EligibilityCheck::Checked { open_counts } => {
            debug!(
                member_id = %member_id,
                church_id = %church_id,
                open_counts = open_counts.len(),
                "Checked member deletion eligibility"
            );
        }
        EligibilityCheck::Failed { reason } => {
            error!(
                member_id = %member_id,
                church_id = %church_id,
                error = %reason,
                "Error checking member donations in open counts"
            );
        }
    }

    check.into_eligibility()
}

/// Check whether a member can be deleted (no donations in OPEN counts)
pub async fn can_delete_member(
    member_id: MemberId,
    church_id: &ChurchId,
    deps: &ServerDeps,
) -> DeletionEligibility {
    can_delete_member_with(deps.open_counts.as_ref(), member_id, church_id).await
}
