use serde::{Deserialize, Serialize};

/// Placeholder reported in `open_counts` when the check itself failed.
///
/// Not a real count name; callers only display it.
pub const CHECK_FAILED_SENTINEL: &str = "Error checking counts";

/// Whether a member may be deleted, as seen by the caller
///
/// Serialized as `{"canDelete": bool, "openCounts": [..]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletionEligibility {
    pub can_delete: bool,
    /// Distinct open count names, in first-seen order
    pub open_counts: Vec<String>,
}

impl DeletionEligibility {
    pub fn from_open_counts(open_counts: Vec<String>) -> Self {
        Self {
            can_delete: open_counts.is_empty(),
            open_counts,
        }
    }

    /// The conservative answer used when the check could not complete
    pub fn check_failed() -> Self {
        Self {
            can_delete: false,
            open_counts: vec![CHECK_FAILED_SENTINEL.to_string()],
        }
    }
}
