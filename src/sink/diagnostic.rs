//! Diagnostics for rejected requests.

use super::Silent;

/// Records a human-readable message for each rejected request.
///
/// The message names the current state and the requested target. Sinks
/// return nothing; whatever they do with the message cannot affect the
/// guard's outcome.
pub trait DiagnosticSink: Send + Sync {
    fn rejected(&self, message: &str);
}

impl DiagnosticSink for Silent {
    fn rejected(&self, _message: &str) {}
}

impl<F> DiagnosticSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn rejected(&self, message: &str) {
        self(message)
    }
}

/// Emits each rejection as a `tracing` warning under the `stateguard` target.
///
/// With no subscriber installed the warning goes nowhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn rejected(&self, message: &str) {
        tracing::warn!(target: "stateguard", "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn closures_are_sinks() {
        let messages = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&messages);
        let sink = move |message: &str| log.lock().unwrap().push(message.to_string());

        sink.rejected("a => b");

        assert_eq!(*messages.lock().unwrap(), vec!["a => b".to_string()]);
    }

    #[test]
    fn tracing_sink_without_subscriber_is_harmless() {
        TracingDiagnostics.rejected("State Machine Error: a => b is not an allowed state transition.");
    }

    #[test]
    fn tracing_sink_emits_under_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::WARN)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            TracingDiagnostics.rejected("State Machine Error: a => b is not an allowed state transition.");
        });
    }

    #[test]
    fn silent_discards() {
        Silent.rejected("ignored");
    }
}
