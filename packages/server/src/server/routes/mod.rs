// HTTP routes
pub mod counts;
pub mod health;
pub mod members;

pub use counts::*;
pub use health::*;
pub use members::*;
