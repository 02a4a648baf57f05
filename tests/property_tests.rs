//! Property-based tests for the state machine runtime.
//!
//! These tests use proptest to check the runtime against a direct lookup
//! in the definition's table over random tables and signal streams.

use dfsm::{Definition, MachineError, StateMachine, TransitionTable};
use proptest::prelude::*;
use std::collections::HashMap;

const STATES: [&str; 4] = ["idle", "armed", "firing", "jammed"];
const SIGNALS: [&str; 3] = ["arm", "pull", "reset"];

fn label(labels: &[&str], index: u8) -> String {
    labels[index as usize % labels.len()].to_string()
}

prop_compose! {
    fn arbitrary_definition()(
        rows in prop::collection::vec((0..4u8, 0..3u8, 0..4u8), 0..12),
        initial in 0..4u8,
        finals in prop::collection::vec(0..4u8, 0..3),
    ) -> Definition<String, String> {
        let mut transitions = TransitionTable::new();
        for (from, signal, to) in rows {
            transitions
                .entry(label(&STATES, from))
                .or_insert_with(HashMap::new)
                .insert(label(&SIGNALS, signal), label(&STATES, to));
        }

        Definition {
            states: STATES.iter().map(|s| s.to_string()).collect(),
            initial_state: label(&STATES, initial),
            final_states: finals.into_iter().map(|f| label(&STATES, f)).collect(),
            transitions,
        }
    }
}

fn arbitrary_signals() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec((0..3u8).prop_map(|i| label(&SIGNALS, i)), 0..20)
}

proptest! {
    #[test]
    fn starts_in_initial_state(definition in arbitrary_definition()) {
        let initial = definition.initial_state.clone();
        let machine = StateMachine::new(definition).unwrap();

        prop_assert_eq!(machine.current_state(), &initial);
    }

    #[test]
    fn process_matches_table_lookup(
        definition in arbitrary_definition(),
        signals in arbitrary_signals(),
    ) {
        let mut machine = StateMachine::new(definition.clone()).unwrap();

        for signal in signals {
            let before = machine.current_state().clone();
            let expected = definition.target(&before, &signal).cloned();
            let has_entry = definition
                .targets_from(&before)
                .map_or(false, |targets| !targets.is_empty());

            match (machine.process(signal), expected) {
                (Ok(()), Some(to)) => prop_assert_eq!(machine.current_state(), &to),
                (Err(MachineError::NoTransitionsFromState { state }), None) => {
                    prop_assert!(!has_entry);
                    prop_assert_eq!(&state, &before);
                    prop_assert_eq!(machine.current_state(), &before);
                }
                (Err(MachineError::UnacceptedSignal { state, .. }), None) => {
                    prop_assert!(has_entry);
                    prop_assert_eq!(&state, &before);
                    prop_assert_eq!(machine.current_state(), &before);
                }
                (result, expected) => {
                    prop_assert!(false, "got {:?}, table says {:?}", result, expected);
                }
            }
        }
    }

    #[test]
    fn final_state_iff_member(
        definition in arbitrary_definition(),
        signals in arbitrary_signals(),
    ) {
        let mut machine = StateMachine::new(definition.clone()).unwrap();

        for signal in signals {
            let _ = machine.process(signal);
            prop_assert_eq!(
                machine.is_in_final_state(),
                definition.final_states.contains(machine.current_state())
            );
        }
    }

    #[test]
    fn process_is_deterministic(
        definition in arbitrary_definition(),
        signals in arbitrary_signals(),
    ) {
        let mut first = StateMachine::new(definition.clone()).unwrap();
        let mut second = StateMachine::new(definition).unwrap();

        for signal in signals {
            let a = first.process(signal.clone());
            let b = second.process(signal);
            prop_assert_eq!(a, b);
            prop_assert_eq!(first.current_state(), second.current_state());
        }
    }

    #[test]
    fn queries_do_not_change_state(
        definition in arbitrary_definition(),
        signal in (0..3u8).prop_map(|i| label(&SIGNALS, i)),
        repeats in 1..10usize,
    ) {
        let machine = StateMachine::new(definition).unwrap();
        let state = machine.current_state().clone();
        let is_final = machine.is_in_final_state();
        let accepts = machine.can_process(&signal);

        for _ in 0..repeats {
            prop_assert_eq!(machine.is_in_final_state(), is_final);
            prop_assert_eq!(machine.can_process(&signal), accepts);
            prop_assert_eq!(machine.current_state(), &state);
        }
    }

    #[test]
    fn run_path_matches_single_steps(
        definition in arbitrary_definition(),
        signals in arbitrary_signals(),
    ) {
        let mut stepped = StateMachine::new(definition.clone()).unwrap();
        let mut path = vec![stepped.current_state().clone()];
        let mut failed = false;
        for signal in signals.clone() {
            if stepped.process(signal).is_err() {
                failed = true;
                break;
            }
            path.push(stepped.current_state().clone());
        }

        let mut ran = StateMachine::new(definition).unwrap();
        let result = ran.run(signals);

        prop_assert_eq!(result.is_err(), failed);
        prop_assert_eq!(ran.current_state(), stepped.current_state());
        if let Ok(history) = result {
            if !history.is_empty() {
                let ran_path: Vec<String> = history.get_path().into_iter().cloned().collect();
                prop_assert_eq!(ran_path, path);
            }
        }
    }
}
