//! Adapters for the navigation, notification and interpreter ports.

pub mod console;
pub mod recording;
