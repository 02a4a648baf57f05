//! Macros for declaring closed state and signal alphabets.

/// Generate a state enum with its [`State`](crate::core::State) impl.
///
/// The enum also gets a `VARIANTS` constant listing every variant in
/// declaration order, which is the natural state alphabet.
///
/// # Example
///
/// ```
/// use dfsm::state_enum;
/// use dfsm::core::State;
///
/// state_enum! {
///     pub enum Light {
///         Red,
///         Green,
///     }
/// }
///
/// assert_eq!(Light::Green.name(), "Green");
/// assert_eq!(Light::VARIANTS, &[Light::Red, Light::Green]);
/// ```
#[macro_export]
macro_rules! state_enum {
    ($($body:tt)*) => {
        $crate::__label_enum! { $crate::core::State; $($body)* }
    };
}

/// Generate a signal enum with its [`Signal`](crate::core::Signal) impl.
///
/// # Example
///
/// ```
/// use dfsm::signal_enum;
/// use dfsm::core::Signal;
///
/// signal_enum! {
///     pub enum Switch {
///         Flip,
///     }
/// }
///
/// assert_eq!(Switch::Flip.name(), "Flip");
/// ```
#[macro_export]
macro_rules! signal_enum {
    ($($body:tt)*) => {
        $crate::__label_enum! { $crate::core::Signal; $($body)* }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __label_enum {
    (
        $label:path;
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            pub const VARIANTS: &'static [Self] = &[$(Self::$variant),+];
        }

        impl $label for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Signal, State};

    state_enum! {
        enum TestState {
            Off,
            Waiting,
            Sleeping,
        }
    }

    signal_enum! {
        enum TestSignal {
            TurnOn,
            TurnOff,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Off.name(), "Off");
        assert_eq!(TestState::Sleeping.name(), "Sleeping");
        assert_eq!(
            TestState::VARIANTS,
            &[TestState::Off, TestState::Waiting, TestState::Sleeping]
        );
    }

    #[test]
    fn signal_enum_macro_generates_trait() {
        assert_eq!(TestSignal::TurnOn.name(), "TurnOn");
        assert_eq!(TestSignal::VARIANTS.len(), 2);
    }

    #[test]
    fn state_enum_supports_visibility_and_attributes() {
        state_enum! {
            /// A documented alphabet.
            pub enum PublicState {
                A,
                #[serde(rename = "bee")]
                B,
            }
        }

        assert_eq!(PublicState::B.name(), "B");
        assert_eq!(serde_json::to_string(&PublicState::B).unwrap(), "\"bee\"");
    }
}
