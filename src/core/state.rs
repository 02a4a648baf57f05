//! Core State trait for state machine states.
//!
//! A state is an opaque label drawn from a closed alphabet. The engine
//! only ever compares states for equality and hashes them as table keys.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// All methods are pure. States are immutable values describing the
/// current position in a state machine.
///
/// # Required Traits
///
/// - `Clone`: the machine hands out owned copies in transition records
/// - `Eq` + `Hash`: states key the transition table
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: definitions are loadable from JSON
///
/// # Example
///
/// ```rust
/// use dfsm::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's label for display/logging.
    fn name(&self) -> &str;
}

/// Runtime-defined state alphabets use plain string labels.
impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}
