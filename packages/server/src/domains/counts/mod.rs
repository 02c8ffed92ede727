//! Counts domain - collection batches and their lifecycle status

pub mod actions;
pub mod data;
pub mod models;

pub use data::CountSummaryData;
pub use models::count::{Count, CountStatus, CountSummary};
