//! HTTP handlers for the risks API.

pub mod risks;

pub use risks::{create_risk_handler, get_risk_handler, list_risks_handler};
