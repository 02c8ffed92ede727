//! Count endpoints.
//!
//! GET /api/churches/:church_id/counts/finalized

use axum::{
    extract::{Extension, Path},
    Json,
};

use crate::common::ChurchId;
use crate::domains::counts::actions::list_finalized_counts;
use crate::domains::counts::CountSummaryData;
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

/// Finalized counts for one church, most recent first
pub async fn finalized_counts_handler(
    Extension(state): Extension<AxumAppState>,
    Path(church_id): Path<String>,
) -> Result<Json<Vec<CountSummaryData>>, ApiError> {
    let church_id = ChurchId::parse(church_id)?;

    let counts = list_finalized_counts(&church_id, &state.server_deps).await?;

    Ok(Json(counts))
}
