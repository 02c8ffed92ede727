//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use deps::{PostgresOpenCountLookup, ServerDeps};
pub use traits::*;
