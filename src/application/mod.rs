//! Application layer orchestrating the gateway return flow.
//!
//! This module defines the `CallbackFlow` controller which owns the visible
//! state of the return screen, runs the interpreter exactly once per visit,
//! and drives the navigation and notification ports.

pub mod flow;
