use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use super::id::generate_id;
use super::leg::{renumber_legs, TransportLeg};
use super::AdditionalTransportType;
use crate::constants::MIN_CONNECTING_LEGS;
use crate::time::calculate_layover;

/// Standalone travel during the trip, e.g. an internal flight between destinations
///
/// When `is_connecting` is set the route lives in `legs` (at least two);
/// otherwise `legs` is absent and `from_location`/`to_location` carry it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalTravelSegment {
    #[serde(default = "generate_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AdditionalTransportType,
    #[serde(default)]
    pub date: String,
    pub from_location: String,
    #[serde(default)]
    pub to_location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_connecting: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legs: Option<Vec<TransportLeg>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AdditionalTravelSegment {
    /// Empty single-hop flight with a fresh id
    #[must_use]
    pub fn empty() -> Self {
        Self {
            id: generate_id(),
            kind: AdditionalTransportType::Flight,
            date: String::new(),
            from_location: String::new(),
            to_location: String::new(),
            departure_time: None,
            arrival_time: None,
            flight_number: None,
            airline: None,
            is_connecting: None,
            legs: None,
            destination_id: None,
            company: None,
            booking_reference: None,
            contact: None,
            price: None,
            notes: None,
        }
    }

    #[must_use]
    pub fn connecting(&self) -> bool {
        self.is_connecting.unwrap_or(false)
    }

    #[must_use]
    pub fn legs(&self) -> &[TransportLeg] {
        self.legs.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn supports_connecting(&self) -> bool {
        self.kind.supports_connecting()
    }

    /// Switch type; connecting legs are dropped
    pub fn change_type(&mut self, kind: AdditionalTransportType) {
        self.kind = kind;
        self.is_connecting = Some(false);
        self.legs = None;
    }

    /// Connecting on starts with two empty legs; off drops the legs
    pub fn set_connecting(&mut self, connecting: bool) {
        if connecting {
            self.is_connecting = Some(true);
            self.legs = Some(vec![TransportLeg::empty(1), TransportLeg::empty(2)]);
        } else {
            self.is_connecting = Some(false);
            self.legs = None;
        }
    }

    /// Append an empty leg; only meaningful while connecting
    pub fn add_leg(&mut self) -> bool {
        if !self.connecting() {
            return false;
        }
        let mut legs = self.legs.take().unwrap_or_default();
        let next_number = u32::try_from(legs.len() + 1).unwrap_or(u32::MAX);
        legs.push(TransportLeg::empty(next_number));
        self.legs = Some(renumber_legs(legs));
        true
    }

    /// Remove a leg, never going below two legs
    pub fn remove_leg(&mut self, index: usize) -> bool {
        let Some(legs) = self.legs.take() else {
            return false;
        };
        if legs.len() <= MIN_CONNECTING_LEGS || index >= legs.len() {
            self.legs = Some(legs);
            return false;
        }
        let remaining = legs
            .into_iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, leg)| leg)
            .collect();
        self.legs = Some(renumber_legs(remaining));
        true
    }

    /// Origin and destination for display: the outer legs when connecting
    #[must_use]
    pub fn route_endpoints(&self) -> (&str, &str) {
        let is_flight = self.kind.is_flight();
        match (self.connecting(), self.legs().first(), self.legs().last()) {
            (true, Some(first), Some(last)) => (first.departure_point(is_flight), last.arrival_point(is_flight)),
            _ => (self.from_location.as_str(), self.to_location.as_str()),
        }
    }

    #[must_use]
    pub fn layovers(&self) -> Vec<String> {
        self.legs()
            .windows(2)
            .map(|pair| calculate_layover(&pair[0].arrival_time, &pair[1].departure_time))
            .collect()
    }
}

impl Default for AdditionalTravelSegment {
    fn default() -> Self {
        Self::empty()
    }
}

/// Replace the entry with the same id, or append a new one
#[must_use]
pub fn save_additional(list: &[AdditionalTravelSegment], segment: AdditionalTravelSegment) -> Vec<AdditionalTravelSegment> {
    let mut updated = list.to_vec();
    if let Some(existing) = updated.iter_mut().find(|s| s.id == segment.id) {
        *existing = segment;
    } else {
        updated.push(segment);
    }
    updated
}

#[must_use]
pub fn remove_additional(list: &[AdditionalTravelSegment], id: &str) -> Vec<AdditionalTravelSegment> {
    list.iter().filter(|s| s.id != id).cloned().collect()
}

/// Sort key: parsed dates first, then unparseable text, then blanks
fn date_sort_key(date: &str) -> (bool, bool, Option<NaiveDate>, String) {
    let trimmed = date.trim();
    let parsed = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok();
    (trimmed.is_empty(), parsed.is_none(), parsed, trimmed.to_string())
}

/// Entries in date order; undated entries go last, ties keep list order
#[must_use]
pub fn sorted_by_date(list: &[AdditionalTravelSegment]) -> Vec<AdditionalTravelSegment> {
    let mut sorted = list.to_vec();
    sorted.sort_by_key(|s| date_sort_key(&s.date));
    sorted
}
