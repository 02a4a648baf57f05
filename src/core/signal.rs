//! Input signals offered to a state machine.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for input signals.
///
/// Signals share the bounds of [`State`](super::State): they key the
/// inner level of the transition table, so they must hash and compare.
///
/// # Example
///
/// ```rust
/// use dfsm::core::Signal;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Command {
///     Push,
///     Pull,
/// }
///
/// impl Signal for Command {
///     fn name(&self) -> &str {
///         match self {
///             Self::Push => "Push",
///             Self::Pull => "Pull",
///         }
///     }
/// }
/// ```
pub trait Signal:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the signal's label for display/logging.
    fn name(&self) -> &str;
}

impl Signal for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum Command {
        TurnOn,
        TurnOff,
    }

    impl Signal for Command {
        fn name(&self) -> &str {
            match self {
                Self::TurnOn => "TurnOn",
                Self::TurnOff => "TurnOff",
            }
        }
    }

    #[test]
    fn signal_name_returns_correct_value() {
        assert_eq!(Command::TurnOn.name(), "TurnOn");
        assert_eq!(Command::TurnOff.name(), "TurnOff");
    }

    #[test]
    fn string_signal_name_is_the_label() {
        assert_eq!(Signal::name(&String::from("awake")), "awake");
    }
}
