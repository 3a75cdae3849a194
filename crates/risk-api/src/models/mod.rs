//! Request and response models for the risks API.

pub mod risk;

pub use risk::{CreateRiskRequest, NewRisk, Risk, RiskState};
