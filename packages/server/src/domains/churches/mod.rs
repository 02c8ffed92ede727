//! Churches domain - the tenant boundary

pub mod models;

pub use models::church::Church;
