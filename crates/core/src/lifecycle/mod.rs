//! Component status lifecycle.
//!
//! ```text
//! planning -> manufactured -> in_transit -> transported -> accepted -> installed
//!     \            \               \              \            \
//!      +------------+---------------+--------------+------------+--> rejected
//! ```
//!
//! `installed` and `rejected` are terminal. `installed -> installed` is an
//! accepted no-op so a repeated QR confirmation does not fail. Every request
//! to change a status, however it arrives, goes through
//! [`validate_transition`] (single components) or
//! [`bucket::apply_quantity_transfer`] (quantity-only buckets).
//!
//! Nothing in this module performs I/O or reads the clock.

pub mod bucket;
pub mod permissions;

pub use bucket::{apply_quantity_transfer, OtherComponentBucket};
pub use permissions::{allowed_targets, role_may_target, role_may_transfer};

use crate::roles::Role;
use crate::status::ComponentStatus;

/// Errors raised by the lifecycle. Never clamped or swallowed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifecycleError {
    #[error("Invalid transition: {from} -> {to}")]
    InvalidTransition {
        from: ComponentStatus,
        to: ComponentStatus,
    },

    #[error("Role '{role}' may not move a component from {from} to {to}")]
    Forbidden {
        role: Role,
        from: ComponentStatus,
        to: ComponentStatus,
    },

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
}

/// The single next status in the forward chain. Terminal statuses map to
/// themselves.
pub fn next_status(current: ComponentStatus) -> ComponentStatus {
    use ComponentStatus::*;
    match current {
        Planning => Manufactured,
        Manufactured => InTransit,
        InTransit => Transported,
        Transported => Accepted,
        Accepted => Installed,
        Installed => Installed,
        Rejected => Rejected,
    }
}

/// Statuses reachable from `from` in one step, ignoring roles.
pub fn valid_transitions(from: ComponentStatus) -> &'static [ComponentStatus] {
    use ComponentStatus::*;
    match from {
        Planning => &[Manufactured, Rejected],
        Manufactured => &[InTransit, Rejected],
        InTransit => &[Transported, Rejected],
        Transported => &[Accepted, Rejected],
        Accepted => &[Installed, Rejected],
        // Idempotent re-confirmation.
        Installed => &[Installed],
        Rejected => &[],
    }
}

/// Validate a status change requested by `role`, returning the new status.
///
/// Checks run in this order:
/// 1. a terminal `current` with an unreachable `target` -> `InvalidTransition`
///    (no role can reopen a finished component);
/// 2. `role` has no permitted moves at `current` -> `Forbidden`;
/// 3. `target` is not the successor of `current` (or `Rejected`) ->
///    `InvalidTransition`;
/// 4. `target` is outside what `role` may request -> `Forbidden`.
pub fn validate_transition(
    current: ComponentStatus,
    target: ComponentStatus,
    role: Role,
) -> Result<ComponentStatus, LifecycleError> {
    let reachable = valid_transitions(current);

    if current.is_terminal() && !reachable.contains(&target) {
        return Err(LifecycleError::InvalidTransition {
            from: current,
            to: target,
        });
    }

    let allowed = allowed_targets(role, current);
    if allowed.is_empty() {
        return Err(LifecycleError::Forbidden {
            role,
            from: current,
            to: target,
        });
    }

    if !reachable.contains(&target) {
        return Err(LifecycleError::InvalidTransition {
            from: current,
            to: target,
        });
    }

    if !allowed.contains(&target) {
        return Err(LifecycleError::Forbidden {
            role,
            from: current,
            to: target,
        });
    }

    Ok(target)
}

/// Pure predicate form of [`validate_transition`].
pub fn can_transition(current: ComponentStatus, target: ComponentStatus, role: Role) -> bool {
    validate_transition(current, target, role).is_ok()
}
