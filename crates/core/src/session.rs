//! Per-request session.
//!
//! A [`Session`] is built once from the verified access token and passed
//! explicitly to whatever needs the caller's identity. Nothing reads the
//! caller from ambient state.

use crate::lifecycle::{self, LifecycleError};
use crate::roles::Role;
use crate::status::ComponentStatus;
use crate::types::DbId;

/// The authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub user_id: DbId,
    pub role: Role,
}

impl Session {
    pub fn new(user_id: DbId, role: Role) -> Self {
        Self { user_id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Admins see every project; everyone else needs a membership row.
    pub fn may_access_project(&self, is_member: bool) -> bool {
        self.is_admin() || is_member
    }

    /// Creating and editing projects, sections and components.
    pub fn may_manage_hierarchy(&self) -> bool {
        matches!(self.role, Role::Admin | Role::Manager)
    }

    /// Validate a component status change on behalf of this caller.
    pub fn validate_transition(
        &self,
        current: ComponentStatus,
        target: ComponentStatus,
    ) -> Result<ComponentStatus, LifecycleError> {
        lifecycle::validate_transition(current, target, self.role)
    }

    /// Targets this caller may request from `current`.
    pub fn allowed_targets(&self, current: ComponentStatus) -> &'static [ComponentStatus] {
        lifecycle::allowed_targets(self.role, current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_accesses_any_project() {
        let session = Session::new(1, Role::Admin);
        assert!(session.may_access_project(false));
    }

    #[test]
    fn non_admin_needs_membership() {
        for role in [Role::Manager, Role::SiteUser, Role::User] {
            let session = Session::new(2, role);
            assert!(!session.may_access_project(false));
            assert!(session.may_access_project(true));
        }
    }

    #[test]
    fn only_admin_and_manager_manage_hierarchy() {
        assert!(Session::new(1, Role::Admin).may_manage_hierarchy());
        assert!(Session::new(1, Role::Manager).may_manage_hierarchy());
        assert!(!Session::new(1, Role::SiteUser).may_manage_hierarchy());
        assert!(!Session::new(1, Role::User).may_manage_hierarchy());
    }

    #[test]
    fn session_delegates_to_role_table() {
        let site = Session::new(3, Role::SiteUser);
        assert!(site
            .validate_transition(ComponentStatus::InTransit, ComponentStatus::Transported)
            .is_err());
        assert_eq!(
            site.allowed_targets(ComponentStatus::Transported),
            &[ComponentStatus::Accepted, ComponentStatus::Rejected]
        );
    }
}
