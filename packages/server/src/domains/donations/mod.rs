//! Donations domain - individual gifts recorded into a count

pub mod models;

pub use models::donation::Donation;
