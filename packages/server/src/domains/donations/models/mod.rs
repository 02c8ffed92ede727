pub mod donation;

pub use donation::*;
