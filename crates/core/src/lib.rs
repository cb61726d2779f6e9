//! Shared domain types for the civicdesk backend.
//!
//! Pure types and helpers with no database or HTTP dependencies: ID and
//! timestamp aliases, the domain error taxonomy, role constants, and list
//! limit clamping.

pub mod error;
pub mod pagination;
pub mod roles;
pub mod types;
