//! Role x status permission table.
//!
//! Admins and managers drive the whole chain. Site users only act once a
//! component has reached site: `transported -> accepted -> installed`, plus
//! rejecting from those stages. Plain users are read-only.

use super::valid_transitions;
use crate::roles::Role;
use crate::status::ComponentStatus;

/// Targets `role` may request while a component sits at `current`.
///
/// An empty slice means the role has no business acting at this stage.
pub fn allowed_targets(role: Role, current: ComponentStatus) -> &'static [ComponentStatus] {
    use ComponentStatus::*;
    match (role, current) {
        (Role::Admin | Role::Manager, status) => valid_transitions(status),
        (Role::SiteUser, Transported) => &[Accepted, Rejected],
        (Role::SiteUser, Accepted) => &[Installed, Rejected],
        (Role::SiteUser, Installed) => &[Installed],
        (Role::SiteUser, _) => &[],
        (Role::User, _) => &[],
    }
}

/// Whether `role` may move anything *into* `target`.
///
/// Used for bucket transfers, which can jump several chain positions at once
/// and therefore do not map onto a single [`allowed_targets`] entry.
pub fn role_may_target(role: Role, target: ComponentStatus) -> bool {
    use ComponentStatus::*;
    match role {
        Role::Admin | Role::Manager => target != Planning,
        Role::SiteUser => matches!(target, Accepted | Installed | Rejected),
        Role::User => false,
    }
}

/// Whether `role` may move bucket units from `from` to `to`.
///
/// Besides the target, a role outside the office must be acting at a stage
/// it owns: site users only move stock that has already reached site.
pub fn role_may_transfer(role: Role, from: ComponentStatus, to: ComponentStatus) -> bool {
    let owns_source = match role {
        Role::Admin | Role::Manager => true,
        Role::SiteUser | Role::User => !allowed_targets(role, from).is_empty(),
    };
    owns_source && role_may_target(role, to)
}
