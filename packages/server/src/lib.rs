// PlateSync - API Core
//
// Backend for tracking church donations in collection batches ("counts").
// Every query is scoped to a church; the church id is never optional.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
