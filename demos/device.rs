//! Device Mode State Machine
//!
//! Builds a small device machine and feeds it a fixed stream of user
//! commands, logging every step.
//!
//! Run with: RUST_LOG=debug cargo run --example device

use dfsm::{signal_enum, state_enum, DefinitionBuilder, MachineError, State, Signal, StateMachine};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

state_enum! {
    enum DeviceState {
        Off,
        Waiting,
        Sleeping,
    }
}

signal_enum! {
    enum UserCommand {
        TurnOn,
        TurnOff,
        PutToSleep,
        Awake,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run() {
        warn!(%err, "device demo failed");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let definition = DefinitionBuilder::new()
        .states(DeviceState::VARIANTS.iter().copied())
        .initial(DeviceState::Off)
        .final_state(DeviceState::Off)
        .transition(DeviceState::Off, UserCommand::TurnOn, DeviceState::Waiting)
        .transition(DeviceState::Waiting, UserCommand::TurnOff, DeviceState::Off)
        .transition(DeviceState::Waiting, UserCommand::PutToSleep, DeviceState::Sleeping)
        .transition(DeviceState::Sleeping, UserCommand::Awake, DeviceState::Waiting)
        .build()?;

    let mut machine = StateMachine::new(definition)?;

    let signals = [
        UserCommand::TurnOn,
        UserCommand::PutToSleep,
        UserCommand::Awake,
        UserCommand::TurnOff,
    ];

    info!("original state: '{}'", machine.current_state().name());

    for signal in signals {
        let transition = machine.step(signal)?;
        info!(
            "state '{}' + signal '{}' => state '{}'",
            transition.from.name(),
            transition.signal.name(),
            transition.to.name()
        );
    }

    info!(
        final_state = machine.is_in_final_state(),
        "result state: '{}'",
        machine.current_state().name()
    );

    // A command the current state does not accept leaves it untouched.
    match machine.process(UserCommand::Awake) {
        Err(err @ MachineError::UnacceptedSignal { .. }) => {
            info!(%err, "rejected as expected, still '{}'", machine.current_state().name())
        }
        other => other?,
    }

    Ok(())
}
