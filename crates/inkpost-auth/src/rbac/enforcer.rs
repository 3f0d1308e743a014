//! Role gate: decides whether an authenticated role may use a route.

use inkpost_core::error::AppError;
use inkpost_entity::user::UserRole;

/// Message returned for every role-gate denial. It never names the role
/// that would have been accepted.
pub const FORBIDDEN_MESSAGE: &str = "Forbidden";

/// Enforces role-based access control for mutating operations.
#[derive(Debug, Clone)]
pub struct RbacEnforcer {
    /// Role required for post create, update and delete.
    editor_role: UserRole,
}

impl RbacEnforcer {
    /// Creates an enforcer where post mutations require the admin role.
    pub fn new() -> Self {
        Self {
            editor_role: UserRole::Admin,
        }
    }

    /// Pure predicate: whether `role` satisfies `required`.
    ///
    /// The rule is exact role equality.
    pub fn allow(&self, role: UserRole, required: UserRole) -> bool {
        role == required
    }

    /// Checks whether the given role has the required role.
    ///
    /// Returns `Ok(())` if allowed, or a generic authorization error if denied.
    pub fn require_role(&self, role: UserRole, required: UserRole) -> Result<(), AppError> {
        if self.allow(role, required) {
            Ok(())
        } else {
            Err(AppError::authorization(FORBIDDEN_MESSAGE))
        }
    }

    /// Checks whether the role may create, update or delete posts.
    pub fn require_editor(&self, role: UserRole) -> Result<(), AppError> {
        self.require_role(role, self.editor_role)
    }

    /// The role post mutations require.
    pub fn editor_role(&self) -> UserRole {
        self.editor_role
    }
}

impl Default for RbacEnforcer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkpost_core::error::ErrorKind;

    #[test]
    fn test_admin_allowed() {
        let rbac = RbacEnforcer::new();
        assert!(rbac.allow(UserRole::Admin, UserRole::Admin));
        assert!(rbac.require_editor(UserRole::Admin).is_ok());
    }

    #[test]
    fn test_user_denied_without_detail() {
        let rbac = RbacEnforcer::new();
        assert!(!rbac.allow(UserRole::User, UserRole::Admin));

        let err = rbac.require_editor(UserRole::User).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
        assert_eq!(err.message, FORBIDDEN_MESSAGE);
        assert!(!err.message.contains("admin"));
    }
}
