//! Build errors for the definition builder.

use crate::definition::DefinitionError;
use thiserror::Error;

/// Errors that can occur when building a definition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error(
        "Transition '{from}' + '{signal}' already targets '{existing}', cannot also target '{requested}'"
    )]
    ConflictingTransition {
        from: String,
        signal: String,
        existing: String,
        requested: String,
    },

    #[error(transparent)]
    Invalid(#[from] DefinitionError),
}
