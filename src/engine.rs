//! Priority escalation engine - computes effective priority and triage order
//!
//! This module contains pure escalation logic with no I/O dependencies.
//! The current time is always passed in by the caller, never read here, so
//! every function is deterministic given identical inputs and can be driven
//! against any point in time.

use chrono::{DateTime, Utc};

use crate::models::{Item, Priority, Status};

/// Hours a pending item may sit before it escalates to at least high
pub const ESCALATE_HIGH_HOURS: f64 = 48.0;

/// Hours a pending item may sit before it escalates to urgent
pub const ESCALATE_URGENT_HOURS: f64 = 72.0;

/// Compute the priority an item should be triaged at
///
/// Pending items escalate as they age: at 48 hours the effective priority
/// becomes at least `high`, at 72 hours it becomes `urgent`. Escalation only
/// ever moves upward - the result never ranks below the declared priority.
///
/// Items that are not pending, or that carry no submission timestamp, keep
/// their declared priority unchanged.
#[must_use]
pub fn effective_priority(item: &Item, now: DateTime<Utc>) -> Priority {
    if item.status != Status::Pending {
        return item.declared_priority;
    }

    let Some(hours) = item.age_hours(now) else {
        return item.declared_priority;
    };

    if hours >= ESCALATE_URGENT_HOURS {
        Priority::Urgent
    } else if hours >= ESCALATE_HIGH_HOURS {
        item.declared_priority.max(Priority::High)
    } else {
        item.declared_priority
    }
}

/// Whether the engine raised this item above its declared priority
#[must_use]
pub fn is_escalated(item: &Item, now: DateTime<Utc>) -> bool {
    effective_priority(item, now).rank() > item.declared_priority.rank()
}

/// Order items for triage display
///
/// Returns a new sequence; the input is not mutated. Most urgent effective
/// priority first, and within a priority band older submissions first.
/// Undated items sort after dated ones in their band. The sort is stable, so
/// items that tie on both keys keep their input order.
#[must_use]
pub fn sort_by_priority(items: &[Item], now: DateTime<Utc>) -> Vec<Item> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        let rank_a = effective_priority(a, now).rank();
        let rank_b = effective_priority(b, now).rank();
        rank_b
            .cmp(&rank_a)
            .then_with(|| submitted_key(a).cmp(&submitted_key(b)))
    });
    sorted
}

/// Tie-break key: dated items ascending, undated items last
fn submitted_key(item: &Item) -> (bool, DateTime<Utc>) {
    item.submitted_at
        .map_or((true, DateTime::<Utc>::MAX_UTC), |t| (false, t))
}
