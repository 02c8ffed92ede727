mod eligibility;

pub use eligibility::{DeletionEligibility, CHECK_FAILED_SENTINEL};
