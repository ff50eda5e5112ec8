//! Traffic Light State Machine
//!
//! This example demonstrates a cyclic table declared with `state_enum!`.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Enum states with a table declared alongside
//! - Skipping a phase is refused without panicking
//!
//! Run with: cargo run --example traffic_light

use stateguard::core::State;
use stateguard::guard::{attempt_transition, StateMachine};
use stateguard::state_enum;

state_enum! {
    enum TrafficLight {
        Red,
        Yellow,
        Green,
    }
    transitions: {
        Red => [Green],
        Green => [Yellow],
        Yellow => [Red],
    }
}

fn main() {
    tracing_subscriber::fmt().init();

    println!("=== Traffic Light State Machine ===\n");

    let table = TrafficLight::transition_table().expect("traffic light table is valid");
    let mut light = StateMachine::new(TrafficLight::Red, table);

    println!("Initial state: {}\n", light.current_state().name());

    println!("Trying to skip straight to Yellow:");
    let outcome = attempt_transition(&mut light, TrafficLight::Yellow);
    println!("  rejected: {}\n", outcome.is_rejected());

    println!("Cycling twice:");
    for _ in 0..2 {
        for next in [TrafficLight::Green, TrafficLight::Yellow, TrafficLight::Red] {
            let outcome = attempt_transition(&mut light, next);
            if let Some(change) = outcome.change() {
                println!("  {} -> {}", change.from.name(), change.to.name());
            }
        }
    }

    println!("\nApplied transitions: {}", light.history().len());

    println!("\n=== Example Complete ===");
}
