//! Runtime errors.

use crate::definition::DefinitionError;
use thiserror::Error;

/// Errors reported by [`StateMachine`](super::StateMachine).
///
/// None of these are transient: they are caller-logic errors and the
/// machine never retries. A failed `process` leaves the state unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    /// The definition handed to the constructor is inconsistent.
    #[error("Invalid state machine definition: {0}")]
    InvalidDefinition(#[from] DefinitionError),

    /// The current state has no outgoing transitions at all.
    #[error("No transitions are allowed from '{state}'")]
    NoTransitionsFromState { state: String },

    /// The current state has transitions, none for this signal.
    #[error("No transition is allowed from '{state}' for '{signal}'")]
    UnacceptedSignal { state: String, signal: String },
}
