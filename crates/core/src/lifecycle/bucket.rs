//! Quantity-only tracking for "other components".
//!
//! A bucket holds a `total` and a count per status. Two kinds of count live
//! side by side:
//!
//! - **held** counts (`planning`, `in_transit`, `accepted`, `installed`,
//!   `rejected`): units currently at that stage.
//! - **cumulative** counts (`manufactured`, `transported`): units that have
//!   ever reached that stage. Moving units out of one does not decrement it;
//!   the move is recorded in `released` instead, and only
//!   `count - released` units can still leave.
//!
//! Units currently sitting at a cumulative stage are `count - released`, so
//! held counts plus those never exceed `total`. A unit can only have been
//! transported if it was manufactured, so `transported <= manufactured`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::LifecycleError;
use crate::status::ComponentStatus;

/// Statuses counted as "ever reached" rather than "currently at", in chain
/// order.
pub const CUMULATIVE_STATUSES: [ComponentStatus; 2] =
    [ComponentStatus::Manufactured, ComponentStatus::Transported];

/// Whether `status` is a cumulative counter (see module docs).
pub fn is_cumulative(status: ComponentStatus) -> bool {
    CUMULATIVE_STATUSES.contains(&status)
}

/// Status counts for a group of identical, individually untracked components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherComponentBucket {
    pub total: i32,
    #[serde(default)]
    pub counts: BTreeMap<ComponentStatus, i32>,
    /// Units that have moved on from each cumulative status.
    #[serde(default)]
    pub released: BTreeMap<ComponentStatus, i32>,
}

impl OtherComponentBucket {
    /// An empty bucket with the given total.
    pub fn new(total: i32) -> Self {
        Self {
            total,
            counts: BTreeMap::new(),
            released: BTreeMap::new(),
        }
    }

    /// Builder-style setter, mostly for seeding and tests.
    pub fn with_count(mut self, status: ComponentStatus, count: i32) -> Self {
        self.counts.insert(status, count);
        self
    }

    /// Builder-style setter for a cumulative status's released count.
    pub fn with_released(mut self, status: ComponentStatus, released: i32) -> Self {
        self.released.insert(status, released);
        self
    }

    /// Count at `status` (zero when absent).
    pub fn count(&self, status: ComponentStatus) -> i32 {
        self.counts.get(&status).copied().unwrap_or(0)
    }

    /// Units moved on from `status`. Always zero for held statuses.
    pub fn released(&self, status: ComponentStatus) -> i32 {
        self.released.get(&status).copied().unwrap_or(0)
    }

    /// Units that can still leave `status`.
    pub fn available(&self, status: ComponentStatus) -> i32 {
        if is_cumulative(status) {
            self.count(status) - self.released(status)
        } else {
            self.count(status)
        }
    }

    /// Units currently at some stage: held counts plus the unreleased part
    /// of each cumulative count.
    pub fn held_total(&self) -> i64 {
        ComponentStatus::ALL
            .into_iter()
            .map(|status| i64::from(self.available(status)))
            .sum()
    }

    /// Check the bucket invariants.
    pub fn check_invariants(&self) -> Result<(), LifecycleError> {
        if self.total < 0 {
            return Err(LifecycleError::InvalidQuantity(format!(
                "Total must not be negative (got {})",
                self.total
            )));
        }
        if let Some((status, count)) = self.counts.iter().find(|(_, c)| **c < 0) {
            return Err(LifecycleError::InvalidQuantity(format!(
                "Count for {status} must not be negative (got {count})"
            )));
        }
        if let Some(status) = self.released.keys().find(|s| !is_cumulative(**s)) {
            return Err(LifecycleError::InvalidQuantity(format!(
                "{status} is not a cumulative status"
            )));
        }
        for status in CUMULATIVE_STATUSES {
            let count = self.count(status);
            let released = self.released(status);
            if count > self.total {
                return Err(LifecycleError::InvalidQuantity(format!(
                    "{status} count {count} exceeds total {}",
                    self.total
                )));
            }
            if released < 0 || released > count {
                return Err(LifecycleError::InvalidQuantity(format!(
                    "Released {status} count {released} must be between 0 and {count}"
                )));
            }
        }
        let [earlier, later] = CUMULATIVE_STATUSES;
        if self.count(later) > self.count(earlier) {
            return Err(LifecycleError::InvalidQuantity(format!(
                "{later} count {} exceeds {earlier} count {}",
                self.count(later),
                self.count(earlier)
            )));
        }
        let held = self.held_total();
        if held > i64::from(self.total) {
            return Err(LifecycleError::InvalidQuantity(format!(
                "Tracked quantity {held} exceeds total {}",
                self.total
            )));
        }
        Ok(())
    }
}

/// Move `quantity` units from `from` to `to`, returning the new bucket.
///
/// Cumulative stages strictly between `from` and `to` count the units as
/// having passed through. The input bucket is left untouched; on error
/// nothing is applied.
pub fn apply_quantity_transfer(
    bucket: &OtherComponentBucket,
    from: ComponentStatus,
    to: ComponentStatus,
    quantity: i32,
) -> Result<OtherComponentBucket, LifecycleError> {
    if quantity <= 0 {
        return Err(LifecycleError::InvalidQuantity(format!(
            "Quantity must be positive (got {quantity})"
        )));
    }

    validate_bucket_move(from, to)?;

    let available = bucket.available(from);
    if quantity > available {
        return Err(LifecycleError::InvalidQuantity(format!(
            "Cannot move {quantity} from {from}: only {available} available"
        )));
    }

    let mut next = bucket.clone();
    if is_cumulative(from) {
        add(&mut next.released, from, quantity)?;
    } else {
        next.counts.insert(from, available - quantity);
    }
    for passed in passed_through(from, to) {
        add(&mut next.counts, passed, quantity)?;
        add(&mut next.released, passed, quantity)?;
    }
    add(&mut next.counts, to, quantity)?;

    next.check_invariants()?;
    Ok(next)
}

/// Cumulative stages a forward move from `from` to `to` skips over.
fn passed_through(
    from: ComponentStatus,
    to: ComponentStatus,
) -> impl Iterator<Item = ComponentStatus> {
    let range = from.chain_position().zip(to.chain_position());
    CUMULATIVE_STATUSES.into_iter().filter(move |status| {
        match (range, status.chain_position()) {
            (Some((start, end)), Some(pos)) => start < pos && pos < end,
            _ => false,
        }
    })
}

fn add(
    map: &mut BTreeMap<ComponentStatus, i32>,
    status: ComponentStatus,
    quantity: i32,
) -> Result<(), LifecycleError> {
    let current = map.get(&status).copied().unwrap_or(0);
    let sum = current.checked_add(quantity).ok_or_else(|| {
        LifecycleError::InvalidQuantity(format!("Count for {status} would overflow"))
    })?;
    map.insert(status, sum);
    Ok(())
}

/// Bucket moves go forward (possibly several stages) or to `Rejected`.
fn validate_bucket_move(from: ComponentStatus, to: ComponentStatus) -> Result<(), LifecycleError> {
    let forward = match (from.chain_position(), to.chain_position()) {
        (Some(a), Some(b)) => b > a,
        (Some(_), None) => true,
        (None, _) => false,
    };
    if from.is_terminal() || !forward {
        return Err(LifecycleError::InvalidTransition { from, to });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use ComponentStatus::*;

    fn scenario_bucket() -> OtherComponentBucket {
        OtherComponentBucket::new(100)
            .with_count(Manufactured, 60)
            .with_count(Transported, 30)
            .with_count(Rejected, 10)
    }

    #[test]
    fn cumulative_source_is_not_decremented() {
        let bucket = scenario_bucket();
        let next = apply_quantity_transfer(&bucket, Manufactured, Transported, 20)
            .expect("transfer should succeed");

        assert_eq!(next.count(Manufactured), 60);
        assert_eq!(next.count(Transported), 50);
        assert_eq!(next.count(Rejected), 10);
        assert!(next.check_invariants().is_ok());
    }

    #[test]
    fn transfer_exceeding_source_fails() {
        let bucket = OtherComponentBucket::new(50).with_count(Planning, 50);
        assert_matches!(
            apply_quantity_transfer(&bucket, Planning, Manufactured, 60),
            Err(LifecycleError::InvalidQuantity(_))
        );
    }

    #[test]
    fn held_source_is_decremented() {
        let bucket = OtherComponentBucket::new(50).with_count(Planning, 50);
        let next = apply_quantity_transfer(&bucket, Planning, Manufactured, 20).unwrap();
        assert_eq!(next.count(Planning), 30);
        assert_eq!(next.count(Manufactured), 20);
    }

    #[test]
    fn target_increases_by_exactly_quantity() {
        let bucket = OtherComponentBucket::new(40)
            .with_count(Manufactured, 40)
            .with_released(Manufactured, 40)
            .with_count(Transported, 40)
            .with_released(Transported, 5)
            .with_count(Accepted, 5);
        let next = apply_quantity_transfer(&bucket, Transported, Accepted, 7).unwrap();
        assert_eq!(next.count(Accepted), bucket.count(Accepted) + 7);
    }

    #[test]
    fn non_positive_quantity_fails() {
        let bucket = OtherComponentBucket::new(10).with_count(Planning, 10);
        for quantity in [0, -1] {
            assert_matches!(
                apply_quantity_transfer(&bucket, Planning, Manufactured, quantity),
                Err(LifecycleError::InvalidQuantity(_))
            );
        }
    }

    #[test]
    fn held_total_may_not_exceed_total() {
        // 30 accepted were never recorded as released from transported, so
        // 20 units sit at transported and 30 at accepted out of 40.
        let bucket = OtherComponentBucket::new(40)
            .with_count(Manufactured, 40)
            .with_released(Manufactured, 40)
            .with_count(Transported, 20)
            .with_count(Accepted, 30);
        assert_matches!(
            apply_quantity_transfer(&bucket, Transported, Accepted, 5),
            Err(LifecycleError::InvalidQuantity(msg)) if msg.contains("exceeds total")
        );
    }

    #[test]
    fn cumulative_source_releases_each_unit_once() {
        let bucket = scenario_bucket();
        let once = apply_quantity_transfer(&bucket, Manufactured, Transported, 20).unwrap();
        assert_eq!(once.released(Manufactured), 20);
        assert_eq!(once.available(Manufactured), 40);

        // Another 20 would make 70 transported out of 60 manufactured.
        assert_matches!(
            apply_quantity_transfer(&once, Manufactured, Transported, 20),
            Err(LifecycleError::InvalidQuantity(msg)) if msg.contains("exceeds manufactured")
        );
    }

    #[test]
    fn cumulative_source_is_exhausted_by_releases() {
        let bucket = OtherComponentBucket::new(30).with_count(Planning, 30);
        let made = apply_quantity_transfer(&bucket, Planning, Manufactured, 30).unwrap();
        let shipped = apply_quantity_transfer(&made, Manufactured, InTransit, 25).unwrap();
        assert_eq!(shipped.count(Manufactured), 30);
        assert_eq!(shipped.available(Manufactured), 5);
        assert_matches!(
            apply_quantity_transfer(&shipped, Manufactured, InTransit, 6),
            Err(LifecycleError::InvalidQuantity(msg)) if msg.contains("only 5 available")
        );
        assert!(apply_quantity_transfer(&shipped, Manufactured, Rejected, 5).is_ok());
    }

    #[test]
    fn transported_units_cannot_be_accepted_twice() {
        let bucket = OtherComponentBucket::new(20).with_count(Planning, 20);
        let b = apply_quantity_transfer(&bucket, Planning, Manufactured, 20).unwrap();
        let b = apply_quantity_transfer(&b, Manufactured, Transported, 20).unwrap();
        let b = apply_quantity_transfer(&b, Transported, Accepted, 15).unwrap();
        assert_eq!(b.available(Transported), 5);
        assert_matches!(
            apply_quantity_transfer(&b, Transported, Accepted, 10),
            Err(LifecycleError::InvalidQuantity(_))
        );
        assert_eq!(b.held_total(), 20);
    }

    #[test]
    fn skipping_a_cumulative_stage_counts_it_as_passed() {
        let bucket = OtherComponentBucket::new(10).with_count(Planning, 10);
        let next = apply_quantity_transfer(&bucket, Planning, Accepted, 4).unwrap();
        assert_eq!(next.count(Manufactured), 4);
        assert_eq!(next.released(Manufactured), 4);
        assert_eq!(next.count(Transported), 4);
        assert_eq!(next.released(Transported), 4);
        assert_eq!(next.count(Accepted), 4);
        assert_eq!(next.held_total(), 10);
    }

    #[test]
    fn rejecting_from_a_held_stage_does_not_free_cumulative_stock() {
        let bucket = OtherComponentBucket::new(10).with_count(Planning, 10);
        let b = apply_quantity_transfer(&bucket, Planning, Manufactured, 10).unwrap();
        let b = apply_quantity_transfer(&b, Manufactured, InTransit, 10).unwrap();
        let b = apply_quantity_transfer(&b, InTransit, Rejected, 10).unwrap();
        assert_eq!(b.available(Manufactured), 0);
        assert_matches!(
            apply_quantity_transfer(&b, Manufactured, InTransit, 1),
            Err(LifecycleError::InvalidQuantity(_))
        );
    }

    #[test]
    fn cumulative_counter_may_not_exceed_total() {
        let bucket = OtherComponentBucket::new(50)
            .with_count(Manufactured, 50)
            .with_count(Transported, 40);
        assert_matches!(
            apply_quantity_transfer(&bucket, Manufactured, Transported, 20),
            Err(LifecycleError::InvalidQuantity(_))
        );
    }

    #[test]
    fn failed_transfer_leaves_input_untouched() {
        let bucket = scenario_bucket();
        let before = bucket.clone();
        let _ = apply_quantity_transfer(&bucket, Manufactured, Transported, 500);
        assert_eq!(bucket, before);
    }

    #[test]
    fn backward_move_is_invalid_transition() {
        let bucket = OtherComponentBucket::new(10).with_count(Accepted, 5);
        assert_matches!(
            apply_quantity_transfer(&bucket, Accepted, InTransit, 1),
            Err(LifecycleError::InvalidTransition { .. })
        );
    }

    #[test]
    fn same_status_move_is_invalid_transition() {
        let bucket = OtherComponentBucket::new(10).with_count(Planning, 5);
        assert_matches!(
            apply_quantity_transfer(&bucket, Planning, Planning, 1),
            Err(LifecycleError::InvalidTransition { .. })
        );
    }

    #[test]
    fn terminal_sources_cannot_move() {
        let bucket = OtherComponentBucket::new(10)
            .with_count(Installed, 5)
            .with_count(Rejected, 5);
        assert_matches!(
            apply_quantity_transfer(&bucket, Rejected, Planning, 1),
            Err(LifecycleError::InvalidTransition { .. })
        );
        assert_matches!(
            apply_quantity_transfer(&bucket, Installed, Rejected, 1),
            Err(LifecycleError::InvalidTransition { .. })
        );
    }

    #[test]
    fn reject_from_any_non_terminal_stage() {
        let bucket = OtherComponentBucket::new(10).with_count(InTransit, 4);
        let next = apply_quantity_transfer(&bucket, InTransit, Rejected, 4).unwrap();
        assert_eq!(next.count(InTransit), 0);
        assert_eq!(next.count(Rejected), 4);
    }

    #[test]
    fn bucket_serializes_counts_by_status_name() {
        let json = serde_json::to_value(scenario_bucket()).unwrap();
        assert_eq!(json["total"], 100);
        assert_eq!(json["counts"]["manufactured"], 60);
        assert_eq!(json["counts"]["rejected"], 10);
        assert!(json["released"].as_object().unwrap().is_empty());
    }
}
