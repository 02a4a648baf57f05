//! Declarative machine definitions.
//!
//! A [`Definition`] is plain data: the state alphabet, the initial state,
//! the accepting states and the transition table. It is built once and
//! never mutated; [`StateMachine`](crate::StateMachine) validates it on
//! construction.

use crate::core::{Signal, State};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

pub mod error;

pub use error::DefinitionError;

/// Per-state map from accepted signal to target state.
pub type Targets<S, G> = HashMap<G, S>;

/// Map from source state to its accepted signals.
///
/// A missing state key means the state has no outgoing transitions.
pub type TransitionTable<S, G> = HashMap<S, Targets<S, G>>;

/// Immutable description of a deterministic finite-state machine.
///
/// The serde shape doubles as the construction input format:
///
/// ```rust
/// use dfsm::Definition;
///
/// let definition: Definition<String, String> = Definition::from_json(r#"{
///     "states": ["off", "on"],
///     "initial_state": "off",
///     "final_states": ["off"],
///     "transitions": {
///         "off": { "flip": "on" },
///         "on": { "flip": "off" }
///     }
/// }"#).unwrap();
///
/// assert!(definition.validate().is_ok());
/// assert_eq!(definition.target(&"off".into(), &"flip".into()), Some(&"on".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Definition<S: State, G: Signal> {
    /// The state alphabet
    pub states: Vec<S>,

    /// Where every runtime starts
    pub initial_state: S,

    /// Accepting states
    #[serde(default)]
    pub final_states: Vec<S>,

    #[serde(default)]
    pub transitions: TransitionTable<S, G>,
}

impl<S: State, G: Signal> Definition<S, G> {
    /// Parse a definition from its JSON form.
    ///
    /// Parsing does not validate; that happens when a machine is built.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check that every state the definition mentions is declared.
    ///
    /// Checks the initial state, then final states, then each transition's
    /// source and target. Returns the first violation found.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        let alphabet: HashSet<&S> = self.states.iter().collect();

        if !alphabet.contains(&self.initial_state) {
            return Err(DefinitionError::UnknownInitialState {
                state: self.initial_state.name().to_string(),
            });
        }

        if let Some(state) = self.final_states.iter().find(|s| !alphabet.contains(s)) {
            return Err(DefinitionError::UnknownFinalState {
                state: state.name().to_string(),
            });
        }

        for (from, targets) in &self.transitions {
            if !alphabet.contains(from) {
                return Err(DefinitionError::UnknownSourceState {
                    state: from.name().to_string(),
                });
            }
            if let Some((signal, to)) = targets.iter().find(|(_, to)| !alphabet.contains(to)) {
                return Err(DefinitionError::UnknownTargetState {
                    from: from.name().to_string(),
                    signal: signal.name().to_string(),
                    to: to.name().to_string(),
                });
            }
        }

        Ok(())
    }

    /// Whether `state` belongs to the state alphabet.
    pub fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    /// Whether `state` is an accepting state.
    pub fn is_final(&self, state: &S) -> bool {
        self.final_states.contains(state)
    }

    /// Outgoing transitions of `state`, if it has an entry in the table.
    pub fn targets_from(&self, state: &S) -> Option<&Targets<S, G>> {
        self.transitions.get(state)
    }

    /// Target of `signal` from `state`, if defined.
    pub fn target(&self, state: &S, signal: &G) -> Option<&S> {
        self.targets_from(state)?.get(signal)
    }
}
