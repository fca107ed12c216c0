use crate::domain::ports::{Navigator, Notifier};

/// Prints the navigation target to stdout, standing in for the router when
/// the flow runs from the command line.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn go_to(&self, route: &str) {
        println!("navigate: {route}");
    }
}

/// Prints toast-style notifications to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify_success(&self, text: &str) {
        println!("notify(success): {text}");
    }

    fn notify_failure(&self, text: &str) {
        println!("notify(failure): {text}");
    }
}
