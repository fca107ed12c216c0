//! Boundary between the browser-delivered redirect and the domain types.

pub mod query;
