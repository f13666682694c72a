use serde::{Deserialize, Serialize};
use super::SegmentType;

/// Structural role recorded on a flat segment when it was written from a journey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentRole {
    Main,
    Transfer,
    Additional,
}

/// One travel hop in the flat, order-only persisted format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelSegment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<SegmentRole>,
    #[serde(rename = "type")]
    pub kind: SegmentType,
    #[serde(default)]
    pub from_location: String,
    #[serde(default)]
    pub to_location: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TravelSegment {
    /// Segment of the given type with every optional field empty
    #[must_use]
    pub fn new(kind: SegmentType, from_location: impl Into<String>, to_location: impl Into<String>) -> Self {
        Self {
            id: None,
            role: None,
            kind,
            from_location: from_location.into(),
            to_location: to_location.into(),
            date: String::new(),
            departure_time: None,
            arrival_time: None,
            flight_number: None,
            airline: None,
            company: None,
            booking_reference: None,
            confirmation_number: None,
            contact_details: None,
            price: None,
            notes: None,
        }
    }

    #[must_use]
    pub fn with_times(mut self, departure: &str, arrival: &str) -> Self {
        self.departure_time = non_empty(departure);
        self.arrival_time = non_empty(arrival);
        self
    }

    #[must_use]
    pub fn id_str(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.trim().is_empty())
    }

    /// Departure time, empty when absent
    #[must_use]
    pub fn departure_time_or_empty(&self) -> String {
        self.departure_time.clone().unwrap_or_default()
    }

    /// Arrival time, empty when absent
    #[must_use]
    pub fn arrival_time_or_empty(&self) -> String {
        self.arrival_time.clone().unwrap_or_default()
    }

    /// Parse a JSON array of segments
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a JSON array of segment objects
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, crate::TravelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize a list of segments to JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn list_to_json(segments: &[Self]) -> Result<String, crate::TravelError> {
        Ok(serde_json::to_string(segments)?)
    }
}

/// `Some` for a non-blank string, `None` otherwise
#[must_use]
pub fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Drop blank optional strings so they are omitted on the wire
#[must_use]
pub fn non_empty_opt(value: Option<&str>) -> Option<String> {
    value.and_then(non_empty)
}
