//! State transition history tracking.
//!
//! Records are produced by [`StateMachine::step`](crate::StateMachine::step)
//! and collected by the caller. The machine itself keeps no history.

use super::{Signal, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use dfsm::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: "off".to_string(),
///     signal: "turnOn".to_string(),
///     to: "waiting".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, "waiting");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State, G: Signal> {
    /// The state being transitioned from
    pub from: S,
    /// The signal that triggered the transition
    pub signal: G,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// History is immutable: `record` returns a new history with the
/// transition appended.
///
/// # Example
///
/// ```rust
/// use dfsm::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new().record(StateTransition {
///     from: "off".to_string(),
///     signal: "turnOn".to_string(),
///     to: "waiting".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 2); // off -> waiting
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State, G: Signal> {
    transitions: Vec<StateTransition<S, G>>,
}

impl<S: State, G: Signal> Default for StateHistory<S, G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, G: Signal> FromIterator<StateTransition<S, G>> for StateHistory<S, G> {
    fn from_iter<I: IntoIterator<Item = StateTransition<S, G>>>(iter: I) -> Self {
        Self {
            transitions: iter.into_iter().collect(),
        }
    }
}

impl<S: State, G: Signal> StateHistory<S, G> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S, G>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first transition, then the `to`
    /// state of each transition. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Signals consumed, in order.
    pub fn signals(&self) -> Vec<&G> {
        self.transitions.iter().map(|t| &t.signal).collect()
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions in order.
    pub fn transitions(&self) -> &[StateTransition<S, G>] {
        &self.transitions
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
