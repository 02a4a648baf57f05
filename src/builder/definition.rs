//! Builder for constructing definitions.

use crate::builder::error::BuildError;
use crate::core::{Signal, State};
use crate::definition::{Definition, TransitionTable};
use std::collections::hash_map::Entry;

/// Builder for [`Definition`] with a fluent API.
///
/// Conflicting transitions are remembered and reported by `build`, so the
/// chain never has to be interrupted.
///
/// # Example
///
/// ```
/// use dfsm::builder::DefinitionBuilder;
/// use dfsm::{signal_enum, state_enum};
///
/// state_enum! {
///     enum Door { Open, Closed }
/// }
/// signal_enum! {
///     enum Push { Close, Open }
/// }
///
/// let definition = DefinitionBuilder::new()
///     .states(Door::VARIANTS.iter().copied())
///     .initial(Door::Closed)
///     .final_state(Door::Closed)
///     .transition(Door::Closed, Push::Open, Door::Open)
///     .transition(Door::Open, Push::Close, Door::Closed)
///     .build()
///     .unwrap();
///
/// assert_eq!(definition.target(&Door::Open, &Push::Close), Some(&Door::Closed));
/// ```
#[derive(Debug, Clone)]
pub struct DefinitionBuilder<S: State, G: Signal> {
    states: Vec<S>,
    initial: Option<S>,
    final_states: Vec<S>,
    transitions: TransitionTable<S, G>,
    conflict: Option<BuildError>,
}

impl<S: State, G: Signal> DefinitionBuilder<S, G> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            initial: None,
            final_states: Vec::new(),
            transitions: TransitionTable::new(),
            conflict: None,
        }
    }

    /// Declare one state. Repeated declarations are ignored.
    pub fn state(mut self, state: S) -> Self {
        if !self.states.contains(&state) {
            self.states.push(state);
        }
        self
    }

    /// Declare several states.
    pub fn states(self, states: impl IntoIterator<Item = S>) -> Self {
        states.into_iter().fold(self, Self::state)
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Mark a state as final.
    pub fn final_state(mut self, state: S) -> Self {
        if !self.final_states.contains(&state) {
            self.final_states.push(state);
        }
        self
    }

    /// Mark several states as final.
    pub fn final_states(self, states: impl IntoIterator<Item = S>) -> Self {
        states.into_iter().fold(self, Self::final_state)
    }

    /// Add `from --signal--> to`.
    ///
    /// Repeating an identical transition is a no-op. Giving the same
    /// `(from, signal)` a different target makes `build` fail.
    pub fn transition(mut self, from: S, signal: G, to: S) -> Self {
        let targets = self.transitions.entry(from.clone()).or_default();
        match targets.entry(signal) {
            Entry::Vacant(slot) => {
                slot.insert(to);
            }
            Entry::Occupied(slot) if slot.get() != &to => {
                if self.conflict.is_none() {
                    self.conflict = Some(BuildError::ConflictingTransition {
                        from: from.name().to_string(),
                        signal: slot.key().name().to_string(),
                        existing: slot.get().name().to_string(),
                        requested: to.name().to_string(),
                    });
                }
            }
            Entry::Occupied(_) => {}
        }
        self
    }

    /// Declare a state with no outgoing transitions.
    ///
    /// The state gets an empty table entry, which the runtime treats the
    /// same as a missing one.
    pub fn terminal(mut self, state: S) -> Self {
        self.transitions.entry(state.clone()).or_default();
        self.state(state)
    }

    /// Build and validate the definition.
    pub fn build(self) -> Result<Definition<S, G>, BuildError> {
        if let Some(conflict) = self.conflict {
            return Err(conflict);
        }

        let initial_state = self.initial.ok_or(BuildError::MissingInitialState)?;

        let definition = Definition {
            states: self.states,
            initial_state,
            final_states: self.final_states,
            transitions: self.transitions,
        };
        definition.validate()?;

        Ok(definition)
    }
}

impl<S: State, G: Signal> Default for DefinitionBuilder<S, G> {
    fn default() -> Self {
        Self::new()
    }
}
