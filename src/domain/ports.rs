use super::outcome::CallbackOutcome;
use super::params::CallbackParams;
use crate::error::Result;
use std::sync::Arc;

/// Classifies a gateway redirect into a structured outcome.
///
/// Business-level failure is a normal `Ok` outcome; `Err` is reserved for
/// faults in the interpretation step itself, which the flow controller
/// handles on a separate degraded path.
pub trait Interpreter: Send + Sync {
    fn interpret(&self, params: &CallbackParams) -> Result<CallbackOutcome>;
}

/// Fire-and-forget navigation primitive (the router/location).
pub trait Navigator: Send + Sync {
    fn go_to(&self, route: &str);
}

/// Fire-and-forget user notifications (toasts).
pub trait Notifier: Send + Sync {
    fn notify_success(&self, text: &str);
    fn notify_failure(&self, text: &str);
}

pub type InterpreterBox = Box<dyn Interpreter>;
pub type NavigatorArc = Arc<dyn Navigator>;
pub type NotifierArc = Arc<dyn Notifier>;
