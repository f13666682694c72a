//! Conversion between the flat persisted segment order and structured journeys
//!
//! Loading runs `segments_to_journey` once per direction; every edit is synced
//! back through `journey_to_segments`. Older per-field travel records are
//! turned into flat segments first by the `legacy` converters, and synced
//! segments are written back into those records alongside the flat arrays.

mod additional;
mod builder;
mod classify;
mod flatten;
mod legacy;

pub use additional::{
    additional_travel_from_json, load_additional_travel, normalize_legacy_additional, select_primary_location_field,
    AdditionalTravelEntry, LegacyAdditionalTravel,
};
pub use builder::{segments_to_journey, segments_to_journey_with};
pub use classify::{classify_segments, select_dominant_main_type, Classification};
pub use flatten::{journey_to_segments, journey_to_segments_with};
pub use legacy::{
    outbound_to_segments, return_to_segments, segments_to_outbound, segments_to_return, FlightLeg, LegacyAirportTransfer, LegacyFlight, LegacyOutboundTravel,
    LegacyReturnTravel, TaxiTransfer, TrainTransfer,
};
