//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts, with `validator` derives where
//!   the API contract constrains a field (email shape, rating range)
//!
//! Field names match column names exactly, so rows decode by name and
//! serialize to the wire contract without renames.

pub mod action;
pub mod assignment;
pub mod audit;
pub mod complaint;
pub mod evidence;
pub mod feedback;
pub mod officer;
pub mod summary;
pub mod user;
