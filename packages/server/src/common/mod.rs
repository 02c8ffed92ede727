// Common types and utilities shared across the application

pub mod entity_ids;
pub mod password;
pub mod unique;

pub use entity_ids::*;
pub use unique::UniqueNames;
