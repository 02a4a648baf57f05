//! Core label types and transition records.
//!
//! - State labels via the `State` trait
//! - Signal labels via the `Signal` trait
//! - Immutable history of transitions taken

mod history;
mod signal;
mod state;

pub use history::{StateHistory, StateTransition};
pub use signal::Signal;
pub use state::State;
