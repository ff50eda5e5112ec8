//! Document Review Workflow
//!
//! This example drives a review workflow through the transition guard.
//!
//! Key concepts:
//! - Table declared in JSON (draft -> submitted -> approved | rejected)
//! - Observers re-render on every applied transition
//! - Rejections are logged as `tracing` warnings
//! - Success callbacks run only after the state has changed
//!
//! Run with: cargo run --example document_workflow

use stateguard::core::{StateChange, TransitionOutcome, TransitionTable};
use stateguard::guard::{StateMachine, TransitionGuard};
use stateguard::sink::{Observers, TracingDiagnostics};

const REVIEW_TABLE: &str = r#"{
    "draft": ["submitted"],
    "submitted": ["approved", "rejected"],
    "approved": [],
    "rejected": ["draft"]
}"#;

fn describe(outcome: &TransitionOutcome<String>) -> String {
    match outcome {
        TransitionOutcome::Applied(change) => format!("applied {} -> {}", change.from, change.to),
        TransitionOutcome::Rejected(rejection) => format!("rejected: {}", rejection),
        TransitionOutcome::NoOp(state) => format!("already {}", state),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Document Review Workflow ===\n");

    let table = TransitionTable::<String>::from_json(REVIEW_TABLE).expect("review table is valid");
    let mut document = StateMachine::new("draft".to_string(), table);

    let observers = Observers::new().with(|change: &StateChange<String>| {
        println!("  [Render] document is now {}", change.to);
    });
    let guard = TransitionGuard::new(observers, TracingDiagnostics);

    println!("Step 1: Try to approve a draft");
    let outcome = guard.attempt(&mut document, "approved".to_string());
    println!("  {}\n", describe(&outcome));

    println!("Step 2: Submit for review");
    let outcome = guard.attempt_with(&mut document, "submitted".to_string(), || {
        println!("  [Callback] reviewers notified");
    });
    println!("  {}\n", describe(&outcome));

    println!("Step 3: Submit again");
    let outcome = guard.attempt(&mut document, "submitted".to_string());
    println!("  {}\n", describe(&outcome));

    println!("Step 4: Reject, rework, resubmit, approve");
    for target in ["rejected", "draft", "submitted", "approved"] {
        let outcome = guard.attempt(&mut document, target.to_string());
        println!("  {}", describe(&outcome));
    }
    println!();

    println!("Step 5: Try to reopen an approved document");
    let outcome = guard.attempt(&mut document, "draft".to_string());
    println!("  {}\n", describe(&outcome));

    let path: Vec<&str> = document
        .history()
        .get_path()
        .into_iter()
        .map(|state| state.as_str())
        .collect();
    println!("Path: {}", path.join(" -> "));
    println!("Terminal: {}", document.is_terminal());

    println!("\n=== Example Complete ===");
}
