//! Risk Records API.
//!
//! An HTTP+JSON service for creating and reading risk records held in an
//! in-memory store.
//!
//! ## Endpoints
//!
//! - **POST /v1/risks**: Validate a payload, assign a generated id and store it
//! - **GET /v1/risks**: List all stored risks (unordered)
//! - **GET /v1/risks/{id}**: Fetch one risk
//!
//! ## Errors
//!
//! Every failure is answered with `{"error": "<message>"}` and the matching
//! status code (400, 404 or 415).

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod router;
pub mod services;

pub use error::{ErrorResponse, RiskError};
pub use models::{CreateRiskRequest, Risk, RiskState};
pub use router::{risks_router, RiskAppState};
pub use services::RiskStore;
