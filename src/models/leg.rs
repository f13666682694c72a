use serde::{Deserialize, Serialize};
use super::id::generate_id;

/// One directly bookable hop of a main transport
///
/// Only one endpoint pair is meaningful at a time: airports when the parent
/// transport is a flight, stations otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportLeg {
    pub id: String,
    pub leg_number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_airport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_airport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_station: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_station: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default)]
    pub departure_time: String,
    #[serde(default)]
    pub arrival_time: String,
}

impl TransportLeg {
    /// Empty leg with a fresh id
    #[must_use]
    pub fn empty(leg_number: u32) -> Self {
        Self {
            id: generate_id(),
            leg_number,
            flight_number: None,
            airline: None,
            departure_airport: None,
            arrival_airport: None,
            departure_station: None,
            arrival_station: None,
            company: None,
            departure_time: String::new(),
            arrival_time: String::new(),
        }
    }

    /// Departure point for the active endpoint pair
    #[must_use]
    pub fn departure_point(&self, is_flight: bool) -> &str {
        let point = if is_flight {
            &self.departure_airport
        } else {
            &self.departure_station
        };
        point.as_deref().unwrap_or_default()
    }

    /// Arrival point for the active endpoint pair
    #[must_use]
    pub fn arrival_point(&self, is_flight: bool) -> &str {
        let point = if is_flight {
            &self.arrival_airport
        } else {
            &self.arrival_station
        };
        point.as_deref().unwrap_or_default()
    }

    /// Write both endpoints into the pair selected by `is_flight`
    pub fn set_endpoints(&mut self, is_flight: bool, from: Option<String>, to: Option<String>) {
        if is_flight {
            self.departure_airport = from;
            self.arrival_airport = to;
        } else {
            self.departure_station = from;
            self.arrival_station = to;
        }
    }
}

/// Renumber legs 1..n from their array position
#[must_use]
pub fn renumber_legs(legs: Vec<TransportLeg>) -> Vec<TransportLeg> {
    legs.into_iter()
        .zip(1u32..)
        .map(|(leg, number)| TransportLeg {
            leg_number: number,
            ..leg
        })
        .collect()
}
