//! Member domain actions - business logic functions
//!
//! Actions are async functions called directly from HTTP handlers.
//! Church scoping is passed explicitly to every action.

mod can_delete;
mod delete_member;

pub use can_delete::{
    can_delete_member, can_delete_member_with, check_deletion_eligibility, EligibilityCheck,
};
pub use delete_member::{delete_member, DeleteOutcome};
