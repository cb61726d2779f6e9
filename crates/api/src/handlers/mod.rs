//! Request handlers, one submodule per HTTP resource.
//!
//! Each submodule provides async handler functions that delegate to the
//! corresponding repository in `civicdesk_db` and map errors via
//! [`AppError`](crate::error::AppError). Every handler translates one
//! request into one parameterized statement (plus explicit existence checks
//! where the contract requires them); no handler holds state beyond the
//! shared pool reference.

pub mod actions;
pub mod assignments;
pub mod audit;
pub mod auth;
pub mod complaints;
pub mod database;
pub mod evidence;
pub mod feedback;
pub mod officers;
pub mod users;
pub mod views;
