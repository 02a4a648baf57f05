//! Definition validation errors.

use thiserror::Error;

/// A label used by a definition is missing from its state alphabet.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("Initial state '{state}' is not a declared state")]
    UnknownInitialState { state: String },

    #[error("Final state '{state}' is not a declared state")]
    UnknownFinalState { state: String },

    #[error("Transition source '{state}' is not a declared state")]
    UnknownSourceState { state: String },

    #[error("Transition '{from}' + '{signal}' targets undeclared state '{to}'")]
    UnknownTargetState {
        from: String,
        signal: String,
        to: String,
    },
}
