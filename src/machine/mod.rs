//! The state machine runtime.
//!
//! A [`StateMachine`] pairs a validated, immutable [`Definition`] with the
//! current state. Advancing is a table lookup followed by at most one
//! write of the current state.
//!
//! # Concurrency
//!
//! The runtime does no internal synchronization. `process` takes
//! `&mut self`; callers sharing a machine across threads must serialize
//! access themselves, e.g. with a `Mutex`. Several machines may share one
//! definition through [`StateMachine::from_shared`].

use crate::core::{Signal, State, StateHistory, StateTransition};
use crate::definition::Definition;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, trace};

pub mod error;

pub use error::MachineError;

/// A deterministic finite-state machine runtime.
///
/// # Example
///
/// ```rust
/// use dfsm::{signal_enum, state_enum, DefinitionBuilder, MachineError, StateMachine};
///
/// state_enum! {
///     enum Device { Off, Waiting, Sleeping }
/// }
/// signal_enum! {
///     enum Command { TurnOn, TurnOff, PutToSleep, Awake }
/// }
///
/// let definition = DefinitionBuilder::new()
///     .states(Device::VARIANTS.iter().copied())
///     .initial(Device::Off)
///     .final_state(Device::Off)
///     .transition(Device::Off, Command::TurnOn, Device::Waiting)
///     .transition(Device::Waiting, Command::TurnOff, Device::Off)
///     .transition(Device::Waiting, Command::PutToSleep, Device::Sleeping)
///     .transition(Device::Sleeping, Command::Awake, Device::Waiting)
///     .build()
///     .unwrap();
///
/// let mut machine = StateMachine::new(definition).unwrap();
/// assert!(machine.is_in_final_state());
///
/// machine.process(Command::TurnOn).unwrap();
/// assert_eq!(machine.current_state(), &Device::Waiting);
///
/// let err = machine.process(Command::Awake).unwrap_err();
/// assert!(matches!(err, MachineError::UnacceptedSignal { .. }));
/// assert_eq!(machine.current_state(), &Device::Waiting);
/// ```
#[derive(Debug, Clone)]
pub struct StateMachine<S: State, G: Signal> {
    definition: Arc<Definition<S, G>>,
    current: S,
}

impl<S: State, G: Signal> StateMachine<S, G> {
    /// Validate `definition` and start a machine in its initial state.
    pub fn new(definition: Definition<S, G>) -> Result<Self, MachineError> {
        Self::from_shared(Arc::new(definition))
    }

    /// Like [`new`](Self::new), reusing a definition shared with other
    /// machines.
    pub fn from_shared(definition: Arc<Definition<S, G>>) -> Result<Self, MachineError> {
        definition.validate()?;
        log_definition(&definition);

        let current = definition.initial_state.clone();
        Ok(Self {
            definition,
            current,
        })
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Check if the current state is one of the final states (pure)
    pub fn is_in_final_state(&self) -> bool {
        self.definition.is_final(&self.current)
    }

    pub fn definition(&self) -> &Definition<S, G> {
        &self.definition
    }

    /// Shared handle to the definition, for building sibling machines.
    pub fn shared_definition(&self) -> Arc<Definition<S, G>> {
        Arc::clone(&self.definition)
    }

    /// Whether `signal` would be accepted from the current state (pure)
    pub fn can_process(&self, signal: &G) -> bool {
        self.definition.target(&self.current, signal).is_some()
    }

    /// Advance on `signal`.
    ///
    /// On error the current state is left unchanged and the machine stays
    /// usable.
    pub fn process(&mut self, signal: G) -> Result<(), MachineError> {
        self.step(signal).map(|_| ())
    }

    /// Advance on `signal` and return the transition taken.
    pub fn step(&mut self, signal: G) -> Result<StateTransition<S, G>, MachineError> {
        let to = self.resolve(&signal)?.clone();
        let from = std::mem::replace(&mut self.current, to.clone());

        trace!(
            from = from.name(),
            signal = signal.name(),
            to = to.name(),
            "transitioned"
        );

        Ok(StateTransition {
            from,
            signal,
            to,
            timestamp: Utc::now(),
        })
    }

    /// Feed a stream of signals in order, stopping at the first rejected one.
    ///
    /// Transitions taken before the failure stay applied; the returned
    /// history covers a fully consumed stream only.
    pub fn run<I>(&mut self, signals: I) -> Result<StateHistory<S, G>, MachineError>
    where
        I: IntoIterator<Item = G>,
    {
        signals
            .into_iter()
            .map(|signal| self.step(signal))
            .collect()
    }

    fn resolve(&self, signal: &G) -> Result<&S, MachineError> {
        // An empty entry is as stuck as a missing one.
        let targets = self
            .definition
            .targets_from(&self.current)
            .filter(|targets| !targets.is_empty());

        let result = match targets {
            None => Err(MachineError::NoTransitionsFromState {
                state: self.current.name().to_string(),
            }),
            Some(targets) => targets
                .get(signal)
                .ok_or_else(|| MachineError::UnacceptedSignal {
                    state: self.current.name().to_string(),
                    signal: signal.name().to_string(),
                }),
        };

        if let Err(err) = &result {
            debug!(%err, "signal rejected");
        }
        result
    }
}

fn log_definition<S: State, G: Signal>(definition: &Definition<S, G>) {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }
    match serde_json::to_string_pretty(definition) {
        Ok(json) => debug!(
            initial = definition.initial_state.name(),
            "initialized state machine\n{json}"
        ),
        Err(_) => debug!(?definition, "initialized state machine"),
    }
}
