//! Dfsm: a deterministic finite-state machine engine
//!
//! A machine is described once by an immutable [`Definition`]: the state
//! alphabet, the initial state, the final states and a transition table
//! keyed by state and signal. A [`StateMachine`] validates the definition,
//! tracks the current state and advances it one signal at a time.
//!
//! # Core Concepts
//!
//! - **State** / **Signal**: closed label alphabets via the `State` and
//!   `Signal` traits, as enums (`state_enum!`, `signal_enum!`) or as
//!   runtime-defined `String` labels
//! - **Definition**: plain data, loadable from JSON
//! - **StateMachine**: the runtime; `process`, `is_in_final_state`,
//!   `current_state`
//!
//! # Example
//!
//! ```rust
//! use dfsm::{Definition, MachineError, StateMachine};
//!
//! let definition: Definition<String, String> = Definition::from_json(r#"{
//!     "states": ["off", "waiting", "sleeping"],
//!     "initial_state": "off",
//!     "final_states": ["off"],
//!     "transitions": {
//!         "off": { "turnOn": "waiting" },
//!         "waiting": { "turnOff": "off", "putToSleep": "sleeping" },
//!         "sleeping": { "awake": "waiting" }
//!     }
//! }"#).unwrap();
//!
//! let mut machine = StateMachine::new(definition).unwrap();
//! machine.process("turnOn".to_string()).unwrap();
//! assert_eq!(machine.current_state(), "waiting");
//!
//! let err = machine.process("awake".to_string()).unwrap_err();
//! assert!(matches!(err, MachineError::UnacceptedSignal { .. }));
//! ```

pub mod builder;
pub mod core;
pub mod definition;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, DefinitionBuilder};
pub use core::{Signal, State, StateHistory, StateTransition};
pub use definition::{Definition, DefinitionError, TransitionTable};
pub use machine::{MachineError, StateMachine};
