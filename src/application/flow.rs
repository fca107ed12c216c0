use crate::domain::outcome::{
    CallbackOutcome, GENERIC_FAILURE_MESSAGE, PROCESSING_ERROR_MESSAGE, SUCCESS_MESSAGE,
};
use crate::domain::params::CallbackParams;
use crate::domain::ports::{InterpreterBox, NavigatorArc, NotifierArc};
use crate::domain::route;
use crate::error::CallbackError;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Visible state of the return screen for one page visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Processing,
    Success,
    Failed,
}

/// Delay before navigating off the status screen, so the shopper sees the
/// result instead of an instant redirect.
pub const RESULT_DELAY: Duration = Duration::from_secs(2);

/// Longer delay for the degraded path back home.
pub const FALLBACK_DELAY: Duration = Duration::from_secs(3);

/// Drives the payment-return screen for a single page visit.
///
/// `CallbackFlow` starts in [`FlowState::Processing`], transitions exactly
/// once to `Success` or `Failed` when [`CallbackFlow::start`] runs, emits
/// one notification, and arms one delayed navigation. Dropping the flow
/// before the delay elapses cancels the pending navigation.
pub struct CallbackFlow {
    interpreter: InterpreterBox,
    navigator: NavigatorArc,
    notifier: NotifierArc,
    state: FlowState,
    message: String,
    started: bool,
    pending_nav: Option<JoinHandle<()>>,
}

impl CallbackFlow {
    pub fn new(
        interpreter: InterpreterBox,
        navigator: NavigatorArc,
        notifier: NotifierArc,
    ) -> Self {
        Self {
            interpreter,
            navigator,
            notifier,
            state: FlowState::Processing,
            message: "Processing payment result...".to_owned(),
            started: false,
            pending_nav: None,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    /// The status text currently shown to the shopper.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Runs the callback flow for this page visit.
    ///
    /// Re-invocations are no-ops: the hosting UI may re-render any number
    /// of times, but the interpreter runs at most once and the notification
    /// and navigation timer are armed at most once.
    pub fn start(&mut self, params: &CallbackParams) {
        if self.started {
            return;
        }
        self.started = true;

        match self.interpreter.interpret(params) {
            Ok(outcome) if outcome.success => self.complete(outcome),
            Ok(outcome) => self.fail(outcome),
            Err(err) => self.degrade(err),
        }
    }

    /// Waits for the scheduled navigation to fire.
    ///
    /// Hosts that must outlive the delay (the CLI) call this; UI hosts rely
    /// on drop cancellation instead.
    pub async fn wait(&mut self) {
        if let Some(handle) = self.pending_nav.take() {
            let _ = handle.await;
        }
    }

    fn complete(&mut self, outcome: CallbackOutcome) {
        self.state = FlowState::Success;
        self.message = SUCCESS_MESSAGE.to_owned();

        // The amount is display-only; it enriches the toast but not the
        // status screen message or any route.
        let notice = match outcome.amount {
            Some(amount) => format!("{SUCCESS_MESSAGE} ({amount} VND)"),
            None => SUCCESS_MESSAGE.to_owned(),
        };
        self.notifier.notify_success(&notice);

        let target = route::payment_success(outcome.order_id.as_deref());
        tracing::debug!(route = %target, "payment confirmed, scheduling navigation");
        self.schedule_navigation(target, RESULT_DELAY);
    }

    fn fail(&mut self, outcome: CallbackOutcome) {
        self.state = FlowState::Failed;
        self.message = outcome
            .message
            .clone()
            .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_owned());
        self.notifier.notify_failure(&self.message);

        let target =
            route::payment_failed(outcome.order_id.as_deref(), outcome.response_code.as_deref());
        tracing::debug!(route = %target, "payment declined, scheduling navigation");
        self.schedule_navigation(target, RESULT_DELAY);
    }

    fn degrade(&mut self, err: CallbackError) {
        tracing::warn!(error = %err, "callback interpretation failed unexpectedly");
        self.state = FlowState::Failed;
        self.message = PROCESSING_ERROR_MESSAGE.to_owned();
        self.notifier.notify_failure(&self.message);

        // The order context cannot be trusted on this path; go home.
        self.schedule_navigation(route::HOME.to_owned(), FALLBACK_DELAY);
    }

    fn schedule_navigation(&mut self, target: String, delay: Duration) {
        let navigator = Arc::clone(&self.navigator);
        self.pending_nav = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            navigator.go_to(&target);
        }));
    }
}

impl Drop for CallbackFlow {
    fn drop(&mut self) {
        // Teardown before the delay elapses must not navigate.
        if let Some(handle) = self.pending_nav.take() {
            handle.abort();
        }
    }
}
