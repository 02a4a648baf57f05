//! Builder API for ergonomic definition construction.
//!
//! This module provides a fluent builder and the `state_enum!` /
//! `signal_enum!` macros for declaring closed alphabets with minimal
//! boilerplate.

pub mod definition;
pub mod error;
pub mod macros;

pub use definition::DefinitionBuilder;
pub use error::BuildError;
