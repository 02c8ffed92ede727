//! Member endpoints.
//!
//! GET    /api/churches/:church_id/members/:member_id/can-delete
//! DELETE /api/churches/:church_id/members/:member_id

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};

use crate::common::{ChurchId, MemberId};
use crate::domains::member::actions::{can_delete_member, delete_member, DeleteOutcome};
use crate::domains::member::DeletionEligibility;
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

fn parse_path(church_id: &str, member_id: &str) -> Result<(ChurchId, MemberId), ApiError> {
    Ok((ChurchId::parse(church_id)?, MemberId::parse(member_id)?))
}

/// Deletion eligibility check.
///
/// Always 200 once the path is valid: a failed lookup shows up as
/// `canDelete: false` with the error sentinel, not as a 5xx.
pub async fn can_delete_member_handler(
    Extension(state): Extension<AxumAppState>,
    Path((church_id, member_id)): Path<(String, String)>,
) -> Result<Json<DeletionEligibility>, ApiError> {
    let (church_id, member_id) = parse_path(&church_id, &member_id)?;

    let eligibility = can_delete_member(member_id, &church_id, &state.server_deps).await;

    Ok(Json(eligibility))
}

/// Guarded member deletion.
pub async fn delete_member_handler(
    Extension(state): Extension<AxumAppState>,
    Path((church_id, member_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let (church_id, member_id) = parse_path(&church_id, &member_id)?;

    match delete_member(member_id, &church_id, &state.server_deps).await? {
        DeleteOutcome::Deleted => Ok(StatusCode::NO_CONTENT),
        DeleteOutcome::NotFound => Err(ApiError::NotFound(format!(
            "Member {} not found",
            member_id
        ))),
        DeleteOutcome::Blocked { open_counts } => Err(ApiError::OpenCounts { open_counts }),
    }
}
