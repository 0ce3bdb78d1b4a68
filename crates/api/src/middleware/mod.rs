//! Middleware components.

pub mod logging;
