// Business domains
pub mod churches;
pub mod counts;
pub mod donations;
pub mod member;
