use serde::{Deserialize, Serialize};
use super::MainTransportType;

/// Conversion settings shared by the builder and the flattener
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelSettings {
    /// Trust `role` tags on flat segments over the type heuristics
    pub honor_role_hints: bool,
    /// Type of the empty main transport created when no candidate exists
    pub default_main_type: MainTransportType,
    /// Write `role` tags when flattening a journey
    pub emit_role_tags: bool,
}

impl TravelSettings {
    /// Create new settings with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings from JSON; missing fields keep their defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a valid settings object
    pub fn from_json(json: &str) -> Result<Self, crate::TravelError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for TravelSettings {
    fn default() -> Self {
        Self {
            honor_role_hints: true,
            default_main_type: MainTransportType::Flight,
            emit_role_tags: true,
        }
    }
}
