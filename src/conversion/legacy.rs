use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use crate::constants::{
    PLACEHOLDER_ACCOMMODATION, PLACEHOLDER_AIRPORT, PLACEHOLDER_HOME, PLACEHOLDER_HOME_OR_HOTEL, PLACEHOLDER_HOTEL,
    PLACEHOLDER_PICKUP, PLACEHOLDER_STATION,
};
use crate::models::id::generate_segment_id;
use crate::models::{non_empty, non_empty_opt, SegmentRole, SegmentType, TravelSegment};

/// Accept `true`, `1`, `"1"` and friends as a flag; anything else is false
pub(crate) fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(flag)) => flag,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|x| x != 0.0),
        Some(Value::String(s)) => !matches!(s.trim(), "" | "0" | "false"),
        Some(Value::Array(_) | Value::Object(_)) => true,
        Some(Value::Null) | None => false,
    })
}

/// Leg of a multi-leg flight in the per-field record format
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlightLeg {
    pub departure_airport: Option<String>,
    pub departure_time: Option<String>,
    pub arrival_airport: Option<String>,
    pub arrival_time: Option<String>,
    pub flight_number: Option<String>,
    pub layover_duration: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaxiTransfer {
    pub id: Option<String>,
    pub transfer_type: Option<String>,
    pub company: Option<String>,
    pub contact: Option<String>,
    pub vehicle_registration: Option<String>,
    pub collection_time: Option<String>,
    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,
    pub payment_status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrainTransfer {
    pub id: Option<String>,
    pub departing_station: Option<String>,
    pub arrival_station: Option<String>,
    pub departure_time: Option<String>,
    pub provider: Option<String>,
    pub booking_ref: Option<String>,
    pub payment_status: Option<String>,
    pub notes: Option<String>,
}

/// Flight block shared by outbound and return records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyFlight {
    pub flight_number: Option<String>,
    pub flight_date: Option<String>,
    pub departure_airport: Option<String>,
    pub arrival_airport: Option<String>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    pub airline: Option<String>,
    pub booking_reference: Option<String>,
    pub contact: Option<String>,
    pub passengers_seats: Option<String>,
    pub things_to_remember: Option<String>,
    #[serde(deserialize_with = "deserialize_truthy")]
    pub is_multi_leg: bool,
    pub legs: Option<Vec<FlightLeg>>,
}

/// Transfer-to-airport block shared by outbound and return records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyAirportTransfer {
    pub transfer_to_airport_type: Option<String>,
    #[serde(deserialize_with = "deserialize_truthy")]
    pub transfer_to_airport_taxi_booked: bool,
    pub transfer_to_airport_company: Option<String>,
    pub transfer_to_airport_contact: Option<String>,
    pub transfer_to_airport_collection_time: Option<String>,
    pub transfer_to_airport_pickup_location: Option<String>,
    pub transfer_to_airport_payment_status: Option<String>,
    pub transfer_to_airport_train_departing_station: Option<String>,
    pub transfer_to_airport_train_arrival_station: Option<String>,
    pub transfer_to_airport_train_departure_time: Option<String>,
    pub transfer_to_airport_train_provider: Option<String>,
    pub transfer_to_airport_train_booking_ref: Option<String>,
    pub transfer_to_airport_train_payment_status: Option<String>,
    pub transfer_to_airport_train_notes: Option<String>,
    pub transfer_to_airport_taxis: Option<Vec<TaxiTransfer>>,
    pub transfer_to_airport_trains: Option<Vec<TrainTransfer>>,
}

/// Outbound travel in the per-field record format
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyOutboundTravel {
    #[serde(flatten)]
    pub to_airport: LegacyAirportTransfer,
    #[serde(flatten)]
    pub flight: LegacyFlight,
    pub transfer_to_accom_type: Option<String>,
    #[serde(deserialize_with = "deserialize_truthy")]
    pub transfer_to_accom_taxi_booked: bool,
    pub transfer_to_accom_company: Option<String>,
    pub transfer_to_accom_contact: Option<String>,
    pub transfer_to_accom_collection_time: Option<String>,
    pub transfer_to_accom_payment_status: Option<String>,
    pub transfer_to_accom_taxis: Option<Vec<TaxiTransfer>>,
    pub transfer_to_accom_trains: Option<Vec<TrainTransfer>>,
    pub additional_segments: Option<Vec<TravelSegment>>,
}

/// Return travel in the per-field record format
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyReturnTravel {
    #[serde(flatten)]
    pub to_airport: LegacyAirportTransfer,
    #[serde(flatten)]
    pub flight: LegacyFlight,
    pub transfer_home_type: Option<String>,
    #[serde(deserialize_with = "deserialize_truthy")]
    pub transfer_home_taxi_booked: bool,
    pub transfer_home_company: Option<String>,
    pub transfer_home_contact: Option<String>,
    pub transfer_home_collection_time: Option<String>,
    pub transfer_home_train_departing_station: Option<String>,
    pub transfer_home_train_arrival_station: Option<String>,
    pub transfer_home_train_departure_time: Option<String>,
    pub transfer_home_train_provider: Option<String>,
    pub transfer_home_taxis: Option<Vec<TaxiTransfer>>,
    pub transfer_home_trains: Option<Vec<TrainTransfer>>,
    pub additional_segments: Option<Vec<TravelSegment>>,
}

fn text(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.trim().is_empty())
}

fn or_placeholder(values: &[Option<&String>], placeholder: &str) -> String {
    values
        .iter()
        .find_map(|v| text(*v))
        .unwrap_or(placeholder)
        .to_string()
}

fn payment_note(status: Option<&String>) -> Option<String> {
    text(status).map(|s| format!("{PAYMENT_PREFIX}{s}"))
}

/// Flights are the main transport of a legacy record; everything it stores
/// besides flights is a transfer
fn legacy_role(kind: SegmentType) -> SegmentRole {
    if kind == SegmentType::Flight {
        SegmentRole::Main
    } else {
        SegmentRole::Transfer
    }
}

fn segment(kind: SegmentType, from: String, to: String, date: &str) -> TravelSegment {
    TravelSegment {
        id: Some(generate_segment_id()),
        role: Some(legacy_role(kind)),
        date: date.to_string(),
        ..TravelSegment::new(kind, from, to)
    }
}

fn stored_id(id: Option<&String>) -> Option<String> {
    Some(text(id).map_or_else(generate_segment_id, str::to_string))
}

fn is_type(value: Option<&String>, expected: &str) -> bool {
    text(value).is_some_and(|s| s.trim() == expected)
}

fn taxi_segment(taxi: &TaxiTransfer, from: String, to: String, date: &str) -> TravelSegment {
    TravelSegment {
        departure_time: non_empty_opt(taxi.collection_time.as_deref()),
        company: non_empty_opt(taxi.company.as_deref()),
        contact_details: non_empty_opt(taxi.contact.as_deref()),
        confirmation_number: non_empty_opt(taxi.vehicle_registration.as_deref()),
        notes: payment_note(taxi.payment_status.as_ref()),
        id: stored_id(taxi.id.as_ref()),
        ..segment(SegmentType::Taxi, from, to, date)
    }
}

fn train_segment(train: &TrainTransfer, from: String, to: String, date: &str) -> TravelSegment {
    TravelSegment {
        departure_time: non_empty_opt(train.departure_time.as_deref()),
        company: non_empty_opt(train.provider.as_deref()),
        booking_reference: non_empty_opt(train.booking_ref.as_deref()),
        notes: payment_note(train.payment_status.as_ref()).or_else(|| non_empty_opt(train.notes.as_deref())),
        id: stored_id(train.id.as_ref()),
        ..segment(SegmentType::Train, from, to, date)
    }
}

fn airport_transfer_segments(transfer: &LegacyAirportTransfer, flight: &LegacyFlight, date: &str) -> Vec<TravelSegment> {
    let mut segments = Vec::new();
    let airport = flight.departure_airport.as_ref();
    let kind = transfer.transfer_to_airport_type.as_ref();

    if is_type(kind, "taxi") && transfer.transfer_to_airport_taxi_booked {
        segments.push(TravelSegment {
            departure_time: non_empty_opt(transfer.transfer_to_airport_collection_time.as_deref()),
            company: non_empty_opt(transfer.transfer_to_airport_company.as_deref()),
            contact_details: non_empty_opt(transfer.transfer_to_airport_contact.as_deref()),
            notes: payment_note(transfer.transfer_to_airport_payment_status.as_ref()),
            ..segment(
                SegmentType::Taxi,
                or_placeholder(&[transfer.transfer_to_airport_pickup_location.as_ref()], PLACEHOLDER_HOME_OR_HOTEL),
                or_placeholder(&[airport], PLACEHOLDER_AIRPORT),
                date,
            )
        });
    }

    if is_type(kind, "train") {
        segments.push(TravelSegment {
            departure_time: non_empty_opt(transfer.transfer_to_airport_train_departure_time.as_deref()),
            company: non_empty_opt(transfer.transfer_to_airport_train_provider.as_deref()),
            booking_reference: non_empty_opt(transfer.transfer_to_airport_train_booking_ref.as_deref()),
            notes: payment_note(transfer.transfer_to_airport_train_payment_status.as_ref()),
            ..segment(
                SegmentType::Train,
                or_placeholder(&[transfer.transfer_to_airport_train_departing_station.as_ref()], PLACEHOLDER_STATION),
                or_placeholder(&[transfer.transfer_to_airport_train_arrival_station.as_ref()], PLACEHOLDER_AIRPORT),
                date,
            )
        });
    }

    for taxi in transfer.transfer_to_airport_taxis.iter().flatten() {
        segments.push(taxi_segment(
            taxi,
            or_placeholder(&[taxi.pickup_location.as_ref()], PLACEHOLDER_PICKUP),
            or_placeholder(&[taxi.dropoff_location.as_ref(), airport], PLACEHOLDER_AIRPORT),
            date,
        ));
    }

    for train in transfer.transfer_to_airport_trains.iter().flatten() {
        segments.push(train_segment(
            train,
            or_placeholder(&[train.departing_station.as_ref()], PLACEHOLDER_STATION),
            or_placeholder(&[train.arrival_station.as_ref(), airport], PLACEHOLDER_AIRPORT),
            date,
        ));
    }

    segments
}

fn flight_segments(flight: &LegacyFlight, date: &str) -> Vec<TravelSegment> {
    let legs = flight.legs.as_deref().unwrap_or_default();
    let airline = text(flight.airline.as_ref())
        .or_else(|| text(flight.flight_number.as_ref()).and_then(|n| n.split(' ').next()))
        .map(str::to_string);

    let mut segments: Vec<TravelSegment> = if flight.is_multi_leg && !legs.is_empty() {
        legs.iter()
            .map(|leg| TravelSegment {
                flight_number: non_empty_opt(leg.flight_number.as_deref())
                    .or_else(|| non_empty_opt(flight.flight_number.as_deref())),
                airline: airline.clone(),
                notes: text(leg.layover_duration.as_ref()).map(|d| format!("{LAYOVER_PREFIX}{d}")),
                ..segment(
                    SegmentType::Flight,
                    leg.departure_airport.clone().unwrap_or_default(),
                    leg.arrival_airport.clone().unwrap_or_default(),
                    date,
                )
                .with_times(
                    leg.departure_time.as_deref().unwrap_or_default(),
                    leg.arrival_time.as_deref().unwrap_or_default(),
                )
            })
            .collect()
    } else if text(flight.flight_number.as_ref()).is_some() || text(flight.departure_airport.as_ref()).is_some() {
        vec![TravelSegment {
            flight_number: non_empty_opt(flight.flight_number.as_deref()),
            airline: non_empty_opt(flight.airline.as_deref()),
            notes: non_empty_opt(flight.things_to_remember.as_deref()),
            ..segment(
                SegmentType::Flight,
                flight.departure_airport.clone().unwrap_or_default(),
                flight.arrival_airport.clone().unwrap_or_default(),
                date,
            )
            .with_times(
                flight.departure_time.as_deref().unwrap_or_default(),
                flight.arrival_time.as_deref().unwrap_or_default(),
            )
        }]
    } else {
        Vec::new()
    };

    if let Some(first) = segments.first_mut() {
        first.booking_reference = non_empty_opt(flight.booking_reference.as_deref());
        first.contact_details = non_empty_opt(flight.contact.as_deref());
        first.confirmation_number = non_empty_opt(flight.passengers_seats.as_deref());
    }

    segments
}

fn pass_through(extra: Option<&Vec<TravelSegment>>) -> impl Iterator<Item = TravelSegment> + '_ {
    extra.into_iter().flatten().map(|seg| TravelSegment {
        id: Some(seg.id_str().map_or_else(generate_segment_id, str::to_string)),
        ..seg.clone()
    })
}

/// Flat segments for an outbound record, in travel order
///
/// Returns an empty list when there is no record.
#[must_use]
pub fn outbound_to_segments(outbound: Option<&LegacyOutboundTravel>) -> Vec<TravelSegment> {
    let Some(outbound) = outbound else {
        return Vec::new();
    };
    let date = outbound.flight.flight_date.as_deref().unwrap_or_default();
    let arrival = outbound.flight.arrival_airport.as_ref();

    let mut segments = airport_transfer_segments(&outbound.to_airport, &outbound.flight, date);
    segments.extend(flight_segments(&outbound.flight, date));

    if is_type(outbound.transfer_to_accom_type.as_ref(), "taxi") && outbound.transfer_to_accom_taxi_booked {
        segments.push(TravelSegment {
            departure_time: non_empty_opt(outbound.transfer_to_accom_collection_time.as_deref()),
            company: non_empty_opt(outbound.transfer_to_accom_company.as_deref()),
            contact_details: non_empty_opt(outbound.transfer_to_accom_contact.as_deref()),
            notes: payment_note(outbound.transfer_to_accom_payment_status.as_ref()),
            ..segment(
                SegmentType::Taxi,
                or_placeholder(&[arrival], PLACEHOLDER_AIRPORT),
                PLACEHOLDER_ACCOMMODATION.to_string(),
                date,
            )
        });
    }

    for taxi in outbound.transfer_to_accom_taxis.iter().flatten() {
        segments.push(taxi_segment(
            taxi,
            or_placeholder(&[taxi.pickup_location.as_ref(), arrival], PLACEHOLDER_AIRPORT),
            or_placeholder(&[taxi.dropoff_location.as_ref()], PLACEHOLDER_HOTEL),
            date,
        ));
    }

    for train in outbound.transfer_to_accom_trains.iter().flatten() {
        segments.push(train_segment(
            train,
            or_placeholder(&[train.departing_station.as_ref()], PLACEHOLDER_STATION),
            or_placeholder(&[train.arrival_station.as_ref()], PLACEHOLDER_HOTEL),
            date,
        ));
    }

    segments.extend(pass_through(outbound.additional_segments.as_ref()));

    debug_log!("Converted outbound record into {} segments", segments.len());
    segments
}

/// Flat segments for a return record, in travel order
///
/// Returns an empty list when there is no record.
#[must_use]
pub fn return_to_segments(return_travel: Option<&LegacyReturnTravel>) -> Vec<TravelSegment> {
    let Some(record) = return_travel else {
        return Vec::new();
    };
    let date = record.flight.flight_date.as_deref().unwrap_or_default();
    let arrival = record.flight.arrival_airport.as_ref();

    let mut segments = airport_transfer_segments(&record.to_airport, &record.flight, date);
    segments.extend(flight_segments(&record.flight, date));

    let kind = record.transfer_home_type.as_ref();
    if is_type(kind, "taxi") && record.transfer_home_taxi_booked {
        segments.push(TravelSegment {
            departure_time: non_empty_opt(record.transfer_home_collection_time.as_deref()),
            company: non_empty_opt(record.transfer_home_company.as_deref()),
            contact_details: non_empty_opt(record.transfer_home_contact.as_deref()),
            ..segment(
                SegmentType::Taxi,
                or_placeholder(&[arrival], PLACEHOLDER_AIRPORT),
                PLACEHOLDER_HOME.to_string(),
                date,
            )
        });
    }

    if is_type(kind, "train") {
        segments.push(TravelSegment {
            departure_time: non_empty_opt(record.transfer_home_train_departure_time.as_deref()),
            company: non_empty_opt(record.transfer_home_train_provider.as_deref()),
            ..segment(
                SegmentType::Train,
                or_placeholder(&[record.transfer_home_train_departing_station.as_ref()], PLACEHOLDER_STATION),
                or_placeholder(&[record.transfer_home_train_arrival_station.as_ref()], PLACEHOLDER_HOME),
                date,
            )
        });
    }

    for taxi in record.transfer_home_taxis.iter().flatten() {
        segments.push(taxi_segment(
            taxi,
            or_placeholder(&[taxi.pickup_location.as_ref()], PLACEHOLDER_AIRPORT),
            or_placeholder(&[taxi.dropoff_location.as_ref()], PLACEHOLDER_HOME),
            date,
        ));
    }

    for train in record.transfer_home_trains.iter().flatten() {
        segments.push(train_segment(
            train,
            or_placeholder(&[train.departing_station.as_ref()], PLACEHOLDER_AIRPORT),
            or_placeholder(&[train.arrival_station.as_ref()], PLACEHOLDER_HOME),
            date,
        ));
    }

    segments.extend(pass_through(record.additional_segments.as_ref()));

    debug_log!("Converted return record into {} segments", segments.len());
    segments
}

const NO_TRANSFER: &str = "none";
const PAYMENT_PREFIX: &str = "Payment: ";
const LAYOVER_PREFIX: &str = "Layover: ";

fn strip_note(notes: Option<&String>, prefix: &str) -> Option<String> {
    text(notes)
        .and_then(|n| n.strip_prefix(prefix))
        .and_then(|rest| non_empty_opt(Some(rest)))
}

/// Segments of one direction sorted into the buckets a legacy record stores
#[derive(Default)]
struct LegacySplit<'a> {
    flights: Vec<&'a TravelSegment>,
    before: Vec<&'a TravelSegment>,
    after: Vec<&'a TravelSegment>,
    additional: Vec<TravelSegment>,
}

impl<'a> LegacySplit<'a> {
    /// Taxis and trains split around the first flight, or the first main
    /// segment when there is no flight. Other types are kept whole.
    fn new(segments: &'a [TravelSegment]) -> Self {
        let hub = segments
            .iter()
            .position(|seg| seg.kind == SegmentType::Flight)
            .or_else(|| segments.iter().position(|seg| seg.role == Some(SegmentRole::Main)));

        let mut split = Self::default();
        for (i, seg) in segments.iter().enumerate() {
            match seg.kind {
                SegmentType::Flight => split.flights.push(seg),
                SegmentType::Taxi | SegmentType::Train => match hub {
                    Some(h) if i > h => split.after.push(seg),
                    _ => split.before.push(seg),
                },
                _ => split.additional.push(seg.clone()),
            }
        }
        split
    }

    fn flight_record(&self, segments: &[TravelSegment]) -> LegacyFlight {
        let date = self
            .flights
            .first()
            .and_then(|seg| non_empty(&seg.date))
            .or_else(|| segments.iter().find_map(|seg| non_empty(&seg.date)));
        let (Some(first), Some(last)) = (self.flights.first(), self.flights.last()) else {
            return LegacyFlight {
                flight_date: date,
                ..LegacyFlight::default()
            };
        };
        let multi_leg = self.flights.len() > 1;

        LegacyFlight {
            flight_number: non_empty_opt(first.flight_number.as_deref()),
            flight_date: date,
            departure_airport: non_empty(&first.from_location),
            arrival_airport: non_empty(&last.to_location),
            departure_time: non_empty_opt(first.departure_time.as_deref()),
            arrival_time: non_empty_opt(last.arrival_time.as_deref()),
            airline: non_empty_opt(first.airline.as_deref()),
            booking_reference: non_empty_opt(first.booking_reference.as_deref()),
            contact: non_empty_opt(first.contact_details.as_deref()),
            passengers_seats: non_empty_opt(first.confirmation_number.as_deref()),
            things_to_remember: if multi_leg {
                None
            } else {
                non_empty_opt(first.notes.as_deref())
            },
            is_multi_leg: multi_leg,
            legs: multi_leg.then(|| self.flights.iter().map(|seg| flight_leg(seg)).collect()),
        }
    }
}

fn flight_leg(seg: &TravelSegment) -> FlightLeg {
    FlightLeg {
        departure_airport: non_empty(&seg.from_location),
        departure_time: non_empty_opt(seg.departure_time.as_deref()),
        arrival_airport: non_empty(&seg.to_location),
        arrival_time: non_empty_opt(seg.arrival_time.as_deref()),
        flight_number: non_empty_opt(seg.flight_number.as_deref()),
        layover_duration: strip_note(seg.notes.as_ref(), LAYOVER_PREFIX),
    }
}

fn taxi_record(seg: &TravelSegment) -> TaxiTransfer {
    TaxiTransfer {
        id: seg.id.clone(),
        transfer_type: None,
        company: non_empty_opt(seg.company.as_deref()),
        contact: non_empty_opt(seg.contact_details.as_deref()),
        vehicle_registration: non_empty_opt(seg.confirmation_number.as_deref()),
        collection_time: non_empty_opt(seg.departure_time.as_deref()),
        pickup_location: non_empty(&seg.from_location),
        dropoff_location: non_empty(&seg.to_location),
        payment_status: strip_note(seg.notes.as_ref(), PAYMENT_PREFIX),
    }
}

fn train_record(seg: &TravelSegment) -> TrainTransfer {
    let payment_status = strip_note(seg.notes.as_ref(), PAYMENT_PREFIX);
    TrainTransfer {
        id: seg.id.clone(),
        departing_station: non_empty(&seg.from_location),
        arrival_station: non_empty(&seg.to_location),
        departure_time: non_empty_opt(seg.departure_time.as_deref()),
        provider: non_empty_opt(seg.company.as_deref()),
        booking_ref: non_empty_opt(seg.booking_reference.as_deref()),
        notes: if payment_status.is_some() {
            None
        } else {
            non_empty_opt(seg.notes.as_deref())
        },
        payment_status,
    }
}

fn transfer_records(segments: &[&TravelSegment]) -> (Vec<TaxiTransfer>, Vec<TrainTransfer>) {
    let taxis = segments
        .iter()
        .filter(|seg| seg.kind == SegmentType::Taxi)
        .map(|seg| taxi_record(seg))
        .collect();
    let trains = segments
        .iter()
        .filter(|seg| seg.kind == SegmentType::Train)
        .map(|seg| train_record(seg))
        .collect();
    (taxis, trains)
}

fn airport_transfer_record(before: &[&TravelSegment]) -> LegacyAirportTransfer {
    let (taxis, trains) = transfer_records(before);
    LegacyAirportTransfer {
        transfer_to_airport_type: Some(NO_TRANSFER.to_string()),
        transfer_to_airport_taxis: Some(taxis),
        transfer_to_airport_trains: Some(trains),
        ..LegacyAirportTransfer::default()
    }
}

/// Write an outbound segment list back into the per-field record
///
/// Taxis and trains before the first flight become transfers to the airport,
/// the rest transfers to accommodation. Types the record has no fields for
/// are kept in `additionalSegments`.
#[must_use]
pub fn segments_to_outbound(segments: &[TravelSegment]) -> LegacyOutboundTravel {
    let split = LegacySplit::new(segments);
    let flight = split.flight_record(segments);
    let (accom_taxis, accom_trains) = transfer_records(&split.after);

    debug_log!(
        "Writing outbound record: {} flights, {} additional segments",
        split.flights.len(),
        split.additional.len()
    );

    LegacyOutboundTravel {
        to_airport: airport_transfer_record(&split.before),
        flight,
        transfer_to_accom_type: Some(NO_TRANSFER.to_string()),
        transfer_to_accom_taxis: Some(accom_taxis),
        transfer_to_accom_trains: Some(accom_trains),
        additional_segments: (!split.additional.is_empty()).then_some(split.additional),
        ..LegacyOutboundTravel::default()
    }
}

/// Write a return segment list back into the per-field record
///
/// Same split as [`segments_to_outbound`], with the later transfers going home.
#[must_use]
pub fn segments_to_return(segments: &[TravelSegment]) -> LegacyReturnTravel {
    let split = LegacySplit::new(segments);
    let flight = split.flight_record(segments);
    let (home_taxis, home_trains) = transfer_records(&split.after);

    debug_log!(
        "Writing return record: {} flights, {} additional segments",
        split.flights.len(),
        split.additional.len()
    );

    LegacyReturnTravel {
        to_airport: airport_transfer_record(&split.before),
        flight,
        transfer_home_type: Some(NO_TRANSFER.to_string()),
        transfer_home_taxis: Some(home_taxis),
        transfer_home_trains: Some(home_trains),
        additional_segments: (!split.additional.is_empty()).then_some(split.additional),
        ..LegacyReturnTravel::default()
    }
}
