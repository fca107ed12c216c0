use crate::domain::outcome::CallbackOutcome;
use crate::domain::params::CallbackParams;
use crate::domain::ports::{Interpreter, InterpreterBox, Navigator, Notifier};
use crate::error::{CallbackError, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Test double that records every navigation target.
#[derive(Default, Clone)]
pub struct RecordingNavigator {
    routes: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The routes navigated to so far, in order.
    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().expect("recorder lock poisoned").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, route: &str) {
        self.routes
            .lock()
            .expect("recorder lock poisoned")
            .push(route.to_owned());
    }
}

/// Test double that records every notification.
#[derive(Default, Clone)]
pub struct RecordingNotifier {
    successes: Arc<Mutex<Vec<String>>>,
    failures: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn successes(&self) -> Vec<String> {
        self.successes.lock().expect("recorder lock poisoned").clone()
    }

    pub fn failures(&self) -> Vec<String> {
        self.failures.lock().expect("recorder lock poisoned").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_success(&self, text: &str) {
        self.successes
            .lock()
            .expect("recorder lock poisoned")
            .push(text.to_owned());
    }

    fn notify_failure(&self, text: &str) {
        self.failures
            .lock()
            .expect("recorder lock poisoned")
            .push(text.to_owned());
    }
}

/// Wraps an interpreter port and counts invocations, for asserting the
/// at-most-once guarantee of the flow controller.
pub struct CountingInterpreter {
    inner: InterpreterBox,
    calls: Arc<AtomicUsize>,
}

impl CountingInterpreter {
    pub fn new(inner: InterpreterBox) -> Self {
        Self {
            inner,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared handle to the call counter, valid after the flow consumes
    /// the interpreter.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl Interpreter for CountingInterpreter {
    fn interpret(&self, params: &CallbackParams) -> Result<CallbackOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.interpret(params)
    }
}

/// Interpreter port that always faults, exercising the degraded path.
#[derive(Debug, Default, Clone, Copy)]
pub struct FaultyInterpreter;

impl Interpreter for FaultyInterpreter {
    fn interpret(&self, _params: &CallbackParams) -> Result<CallbackOutcome> {
        Err(CallbackError::Interpretation(
            "injected interpreter fault".to_owned(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_navigator_keeps_order() {
        let navigator = RecordingNavigator::new();
        navigator.go_to("/a");
        navigator.go_to("/b");

        assert_eq!(navigator.routes(), vec!["/a", "/b"]);
    }

    #[test]
    fn test_counting_interpreter_counts() {
        let counting =
            CountingInterpreter::new(Box::new(crate::domain::interpreter::GatewayInterpreter));
        let calls = counting.calls();

        counting.interpret(&CallbackParams::new()).unwrap();
        counting.interpret(&CallbackParams::new()).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
