//! Request and response models for the risks API.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Lifecycle state of a risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RiskState {
    Open,
    Closed,
    Accepted,
    Investigating,
}

impl RiskState {
    /// Every accepted state, in the order they are reported to clients.
    pub const ALL: [RiskState; 4] = [
        RiskState::Open,
        RiskState::Closed,
        RiskState::Accepted,
        RiskState::Investigating,
    ];

    /// Wire representation of the state.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Accepted => "accepted",
            Self::Investigating => "investigating",
        }
    }
}

impl fmt::Display for RiskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the known risk states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRiskState(pub String);

impl fmt::Display for UnknownRiskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown risk state '{}'", self.0)
    }
}

impl std::error::Error for UnknownRiskState {}

impl FromStr for RiskState {
    type Err = UnknownRiskState;

    /// Exact, case-sensitive match against the wire names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| UnknownRiskState(s.to_string()))
    }
}

/// A stored risk record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Risk {
    /// Server-assigned identifier.
    #[schema(example = "0f8fad5b-d9cb-469f-a165-70867728950e")]
    pub id: String,

    /// Current state of the risk.
    pub state: RiskState,

    /// Short human-readable title.
    pub title: String,

    /// Free-form description.
    pub description: String,
}

impl Risk {
    /// Build a stored record from validated input and a freshly assigned id.
    #[must_use]
    pub fn from_new(id: String, new_risk: NewRisk) -> Self {
        Self {
            id,
            state: new_risk.state,
            title: new_risk.title,
            description: new_risk.description,
        }
    }
}

/// Body of `POST /v1/risks` as sent by the client.
///
/// Fields are optional so that missing values reach validation instead of
/// failing to decode. Any other field, including `id`, is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateRiskRequest {
    /// One of `open`, `closed`, `accepted`, `investigating`.
    #[serde(default)]
    #[schema(example = "open")]
    pub state: Option<String>,

    #[serde(default)]
    #[schema(example = "Unpatched dependency")]
    pub title: Option<String>,

    #[serde(default)]
    #[schema(example = "libfoo 1.2 has a known CVE")]
    pub description: Option<String>,
}

/// Input that has passed validation and is ready to receive an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRisk {
    pub state: RiskState,
    pub title: String,
    pub description: String,
}
