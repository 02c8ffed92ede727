// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business rules (like "may this member be deleted") are domain functions that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseOpenCountLookup)

use anyhow::Result;
use async_trait::async_trait;

use crate::common::{ChurchId, MemberId};

// =============================================================================
// Open Count Lookup
// =============================================================================

#[async_trait]
pub trait BaseOpenCountLookup: Send + Sync {
    /// Names of OPEN counts in `church_id` that hold a donation from `member_id`.
    ///
    /// One entry per matching donation, in query order. Duplicates are expected;
    /// callers dedupe.
    async fn open_count_names(
        &self,
        member_id: MemberId,
        church_id: &ChurchId,
    ) -> Result<Vec<String>>;
}
