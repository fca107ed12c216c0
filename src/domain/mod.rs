//! Domain layer for the gateway return flow.
//!
//! This module defines the untrusted callback input, the structured outcome
//! produced from it, the route string contracts, and the ports the
//! application layer drives its collaborators through.

pub mod interpreter;
pub mod outcome;
pub mod params;
pub mod ports;
pub mod route;
