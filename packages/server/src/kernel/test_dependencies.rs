// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::BaseOpenCountLookup;
use crate::common::{ChurchId, MemberId};
use crate::domains::counts::models::CountStatus;

// =============================================================================
// Mock Open Count Lookup
// =============================================================================

/// One donation row as the open count query would see it
#[derive(Debug, Clone)]
pub struct MockDonationRow {
    pub church_id: ChurchId,
    pub member_id: MemberId,
    pub count_name: String,
    pub count_status: CountStatus,
}

/// In-memory stand-in for the donations/counts join.
///
/// Applies the same filters as the SQL query, so tests can exercise church
/// isolation and status filtering without a database. `failing()` makes every
/// lookup return an error.
pub struct MockOpenCountLookup {
    rows: Arc<Mutex<Vec<MockDonationRow>>>,
    failure: Option<String>,
    calls: Arc<Mutex<Vec<(MemberId, ChurchId)>>>,
}

impl MockOpenCountLookup {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(Mutex::new(Vec::new())),
            failure: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every lookup fails with the given message
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::new()
        }
    }

    /// Add a donation by `member_id` into a count named `count_name`
    pub fn with_donation(
        self,
        church_id: &str,
        member_id: i32,
        count_name: &str,
        count_status: CountStatus,
    ) -> Self {
        self.rows.lock().unwrap().push(MockDonationRow {
            church_id: ChurchId::parse(church_id).expect("valid church id"),
            member_id: MemberId::from_i32(member_id),
            count_name: count_name.to_string(),
            count_status,
        });
        self
    }

    /// Get the (member, church) pairs this lookup was called with
    pub fn calls(&self) -> Vec<(MemberId, ChurchId)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockOpenCountLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseOpenCountLookup for MockOpenCountLookup {
    async fn open_count_names(
        &self,
        member_id: MemberId,
        church_id: &ChurchId,
    ) -> Result<Vec<String>> {
        self.calls
            .lock()
            .unwrap()
            .push((member_id, church_id.clone()));

        if let Some(message) = &self.failure {
            anyhow::bail!("{}", message);
        }

        let names = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| {
                row.member_id == member_id
                    && &row.church_id == church_id
                    && row.count_status == CountStatus::Open
            })
            .map(|row| row.count_name.clone())
            .collect();

        Ok(names)
    }
}
