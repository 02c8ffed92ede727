//! Count actions - business logic functions called from the HTTP layer

mod list_finalized;

pub use list_finalized::list_finalized_counts;
