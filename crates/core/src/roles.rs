//! Well-known role name constants.
//!
//! Roles are stored as plain text in `users.role`; the allowed set is
//! enforced at the API boundary, not by the schema.

pub const ROLE_CITIZEN: &str = "citizen";
pub const ROLE_OFFICER: &str = "officer";
pub const ROLE_ADMIN: &str = "admin";

/// All roles accepted on user creation and registration.
pub const ALLOWED_ROLES: [&str; 3] = [ROLE_CITIZEN, ROLE_OFFICER, ROLE_ADMIN];

/// Whether `role` is one of the allowed role names.
pub fn is_valid_role(role: &str) -> bool {
    ALLOWED_ROLES.contains(&role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_are_valid() {
        assert!(is_valid_role(ROLE_CITIZEN));
        assert!(is_valid_role(ROLE_OFFICER));
        assert!(is_valid_role(ROLE_ADMIN));
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(!is_valid_role("superuser"));
        assert!(!is_valid_role(""));
        // Role names are case-sensitive.
        assert!(!is_valid_role("Citizen"));
    }
}
