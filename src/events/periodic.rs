//! Event data types for periodic discrete updates.

use serde::{Deserialize, Serialize};

use crate::scalar::Scalar;

/// What the recipient system does when a discrete event fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Rewrite the discrete state through the system's discrete-update hook.
    DiscreteUpdate,
    /// Side effect only; no state change.
    Publish,
}

/// A discrete event scheduled against its owning system.
///
/// The recipient is the system the event was declared on; the stepping loop
/// holds that system already, so no back-reference is stored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscreteEvent {
    /// Action the recipient takes when the event fires.
    pub action: ActionKind,
}

/// A recurring discrete event: first occurrence at `offset`, then every
/// `period` thereafter.
#[derive(Debug, Clone)]
pub struct PeriodicEvent<T: Scalar> {
    /// Recurrence period. Always positive.
    pub period: T,
    /// Time of the first occurrence. Never negative.
    pub offset: T,
    /// Action taken at each occurrence.
    pub event: DiscreteEvent,
}

/// Result of one scheduling query: the next fire time and every event tied
/// at that time. Constructed fresh per query and consumed immediately by the
/// stepping loop.
#[derive(Debug, Clone)]
pub struct UpdateActions<T: Scalar> {
    /// Time at which the events fire; positive infinity when nothing is
    /// scheduled.
    pub time: T,
    /// Events firing at `time`, in registration order.
    pub events: Vec<DiscreteEvent>,
}
