//! Member domain - member records and the rules guarding their deletion

pub mod actions;
pub mod data;
pub mod models;

// Re-export commonly used types
pub use data::DeletionEligibility;
pub use models::member::Member;
