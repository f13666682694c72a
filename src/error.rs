use thiserror::Error;

/// Errors raised at the JSON and string-parsing boundary.
///
/// Conversions themselves never fail; they degrade to empty strings and
/// default structures instead.
#[derive(Debug, Error)]
pub enum TravelError {
    #[error("invalid travel JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown {kind} type `{value}`")]
    UnknownTransportType { kind: &'static str, value: String },
}

impl TravelError {
    pub(crate) fn unknown_type(kind: &'static str, value: &str) -> Self {
        Self::UnknownTransportType {
            kind,
            value: value.to_string(),
        }
    }
}
