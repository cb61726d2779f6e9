//! Credential hashing for the registration flow.

pub mod password;
