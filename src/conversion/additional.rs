use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use super::legacy::{deserialize_truthy, FlightLeg};
use crate::models::id::generate_id;
use crate::models::{non_empty, non_empty_opt, AdditionalTransportType, AdditionalTravelSegment, TransportLeg};

/// Additional travel in the per-type record format
///
/// Each transport type had its own column set; only one set is normally filled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyAdditionalTravel {
    pub travel_type: Option<String>,
    pub vehicle_details: Option<String>,
    pub vehicle_registration: Option<String>,
    pub car_contact_details: Option<String>,
    pub car_booking_details: Option<String>,
    pub flight_number: Option<String>,
    pub flight_date: Option<String>,
    pub flight_departure_airport: Option<String>,
    pub flight_arrival_airport: Option<String>,
    pub flight_departure_time: Option<String>,
    pub flight_arrival_time: Option<String>,
    pub flight_passengers_seats: Option<String>,
    pub flight_things_to_remember: Option<String>,
    #[serde(deserialize_with = "deserialize_truthy")]
    pub flight_is_multi_leg: bool,
    pub flight_legs: Option<Vec<FlightLeg>>,
    pub ferry_departing_from: Option<String>,
    pub ferry_destination: Option<String>,
    pub ferry_date: Option<String>,
    pub ferry_price: Option<String>,
    pub ferry_contact_details: Option<String>,
    pub ferry_additional_notes: Option<String>,
    pub ferry_booking_reference: Option<String>,
    pub train_departing_from: Option<String>,
    pub train_destination: Option<String>,
    pub train_date: Option<String>,
    pub train_price: Option<String>,
    pub train_contact_details: Option<String>,
    pub train_additional_notes: Option<String>,
    pub train_booking_reference: Option<String>,
}

/// One stored additional-travel entry in either format
///
/// An entry with `type` and `fromLocation` is already unified; anything else
/// is read as a legacy record. A unified entry that does not parse is an
/// error rather than an empty legacy record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AdditionalTravelEntry {
    Unified(AdditionalTravelSegment),
    Legacy(LegacyAdditionalTravel),
}

impl<'de> Deserialize<'de> for AdditionalTravelEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if is_unified(&value) {
            AdditionalTravelSegment::deserialize(value)
                .map(Self::Unified)
                .map_err(|e| de::Error::custom(format!("unified additional travel entry: {e}")))
        } else {
            LegacyAdditionalTravel::deserialize(value)
                .map(Self::Legacy)
                .map_err(de::Error::custom)
        }
    }
}

fn is_unified(value: &Value) -> bool {
    value.get("type").is_some() && value.get("fromLocation").is_some()
}

impl AdditionalTravelEntry {
    #[must_use]
    pub fn to_segment(&self) -> AdditionalTravelSegment {
        match self {
            Self::Unified(segment) => segment.clone(),
            Self::Legacy(record) => normalize_legacy_additional(record),
        }
    }
}

/// First non-blank value in flight → ferry → train order, or empty
#[must_use]
pub fn select_primary_location_field(flight: Option<&str>, ferry: Option<&str>, train: Option<&str>) -> String {
    [flight, ferry, train]
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
        .unwrap_or_default()
        .to_string()
}

fn first_non_empty(values: &[Option<&str>]) -> Option<String> {
    values.iter().find_map(|value| non_empty_opt(*value))
}

fn legacy_type(travel_type: Option<&str>) -> AdditionalTransportType {
    match travel_type.map(str::trim).filter(|s| !s.is_empty()) {
        None => AdditionalTransportType::Flight,
        Some(value) => value.parse().unwrap_or(AdditionalTransportType::Other),
    }
}

fn legacy_legs(legs: &[FlightLeg]) -> Vec<TransportLeg> {
    legs.iter()
        .zip(1u32..)
        .map(|(leg, number)| TransportLeg {
            flight_number: non_empty_opt(leg.flight_number.as_deref()),
            departure_airport: non_empty_opt(leg.departure_airport.as_deref()),
            arrival_airport: non_empty_opt(leg.arrival_airport.as_deref()),
            departure_time: leg.departure_time.clone().unwrap_or_default(),
            arrival_time: leg.arrival_time.clone().unwrap_or_default(),
            ..TransportLeg::empty(number)
        })
        .collect()
}

/// Convert a per-type record into the unified shape
///
/// Never fails: an empty record gives an empty flight entry.
#[must_use]
pub fn normalize_legacy_additional(record: &LegacyAdditionalTravel) -> AdditionalTravelSegment {
    let kind = legacy_type(record.travel_type.as_deref());
    let pick = |flight: &Option<String>, ferry: &Option<String>, train: &Option<String>| {
        select_primary_location_field(flight.as_deref(), ferry.as_deref(), train.as_deref())
    };

    let mut segment = AdditionalTravelSegment {
        id: generate_id(),
        kind,
        date: pick(&record.flight_date, &record.ferry_date, &record.train_date),
        from_location: pick(
            &record.flight_departure_airport,
            &record.ferry_departing_from,
            &record.train_departing_from,
        ),
        to_location: pick(
            &record.flight_arrival_airport,
            &record.ferry_destination,
            &record.train_destination,
        ),
        departure_time: non_empty_opt(record.flight_departure_time.as_deref()),
        arrival_time: non_empty_opt(record.flight_arrival_time.as_deref()),
        flight_number: non_empty_opt(record.flight_number.as_deref()),
        booking_reference: first_non_empty(&[
            record.ferry_booking_reference.as_deref(),
            record.train_booking_reference.as_deref(),
        ]),
        contact: first_non_empty(&[
            record.ferry_contact_details.as_deref(),
            record.train_contact_details.as_deref(),
            record.car_contact_details.as_deref(),
        ]),
        price: first_non_empty(&[record.ferry_price.as_deref(), record.train_price.as_deref()]),
        notes: non_empty(&pick(
            &record.flight_things_to_remember,
            &record.ferry_additional_notes,
            &record.train_additional_notes,
        )),
        ..AdditionalTravelSegment::empty()
    };

    let legs = record.flight_legs.as_deref().unwrap_or_default();
    if kind.is_flight() && record.flight_is_multi_leg && legs.len() >= 2 {
        segment.is_connecting = Some(true);
        segment.legs = Some(legacy_legs(legs));
    }

    segment
}

/// Normalize a mixed list of stored entries, keeping list order
#[must_use]
pub fn load_additional_travel(entries: &[AdditionalTravelEntry]) -> Vec<AdditionalTravelSegment> {
    let segments: Vec<AdditionalTravelSegment> = entries.iter().map(AdditionalTravelEntry::to_segment).collect();
    debug_log!(
        "Loaded {} additional travel entries ({} legacy)",
        segments.len(),
        entries
            .iter()
            .filter(|entry| matches!(entry, AdditionalTravelEntry::Legacy(_)))
            .count()
    );
    segments
}

/// Parse and normalize a JSON array of stored entries
///
/// # Errors
///
/// Returns an error if the input is not a JSON array of objects
pub fn additional_travel_from_json(json: &str) -> Result<Vec<AdditionalTravelSegment>, crate::TravelError> {
    let entries: Vec<AdditionalTravelEntry> = serde_json::from_str(json)?;
    Ok(load_additional_travel(&entries))
}
