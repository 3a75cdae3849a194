//! Middleware for the risks API.

pub mod request_logging;

pub use request_logging::request_logging_middleware;
