#![allow(clippy::implicit_hasher)]
#![allow(unknown_lints)]

#[macro_use]
pub mod logging;

pub mod constants;
pub mod conversion;
pub mod error;
pub mod models;
pub mod session;
pub mod time;

pub use conversion::{
    journey_to_segments, journey_to_segments_with, load_additional_travel, normalize_legacy_additional,
    outbound_to_segments, return_to_segments, segments_to_journey, segments_to_journey_with, segments_to_outbound,
    segments_to_return,
};
pub use error::TravelError;
pub use models::TravelSettings;
pub use session::{PersistedTravel, TravelSession, TravelSnapshot};
