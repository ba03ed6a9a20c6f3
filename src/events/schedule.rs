//! Next-event arithmetic for periodic schedules.
//!
//! The scheduler is stateless: both functions here are pure mappings from a
//! registry and the current time to the next fire time.

use crate::events::periodic::{PeriodicEvent, UpdateActions};
use crate::scalar::RealScalar;

/// Next sample time of a single periodic event, strictly after `time`.
///
/// Before the first occurrence the answer is the offset itself. Landing
/// exactly on a boundary advances to the following one: a query made at an
/// already-consumed sample time must not re-fire it.
pub fn next_sample_time<T: RealScalar>(event: &PeriodicEvent<T>, time: &T) -> T {
    let period = event.period.clone();
    let offset = event.offset.clone();
    debug_assert!(period > T::zero());
    debug_assert!(offset >= T::zero());

    if *time < offset {
        return offset;
    }

    // Index of the next sample in the sequence offset + k * period. When the
    // current time sits exactly on a sample, take the one after it.
    let ratio = (time.clone() - offset.clone()) / period.clone();
    let prev_k = ratio.floor();
    let next_k = ratio.ceil();
    let k = if prev_k == next_k {
        next_k + T::one()
    } else {
        next_k
    };
    offset + k * period
}

/// Minimum next sample time across `events`, with every event tied at that
/// minimum batched together. An empty registry yields positive infinity and
/// an empty batch.
pub fn next_update_time<T: RealScalar>(events: &[PeriodicEvent<T>], time: &T) -> UpdateActions<T> {
    let mut actions = UpdateActions {
        time: T::infinity(),
        events: Vec::new(),
    };

    for event in events {
        let t = next_sample_time(event, time);
        if t < actions.time {
            actions.events.clear();
            actions.events.push(event.event);
            actions.time = t;
        } else if t == actions.time {
            actions.events.push(event.event);
        }
    }

    actions
}
