/// Minutes in one day, used to wrap layovers that cross midnight
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Length of the random suffix on session ids
pub const ID_SUFFIX_LEN: usize = 7;

/// Length of the random suffix on flat segment ids
pub const SEGMENT_ID_SUFFIX_LEN: usize = 5;

/// Prefix for flat segment ids created from legacy records
pub const SEGMENT_ID_PREFIX: &str = "segment";

/// Placeholder shown between legs when no layover can be computed
pub const LAYOVER_PLACEHOLDER: &str = "Layover";

/// Minimum number of legs on a connecting additional-travel entry
pub const MIN_CONNECTING_LEGS: usize = 2;

// Location placeholders used when legacy records leave an endpoint blank
pub const PLACEHOLDER_HOME_OR_HOTEL: &str = "Home/Hotel";
pub const PLACEHOLDER_HOME: &str = "Home";
pub const PLACEHOLDER_AIRPORT: &str = "Airport";
pub const PLACEHOLDER_STATION: &str = "Station";
pub const PLACEHOLDER_PICKUP: &str = "Pickup";
pub const PLACEHOLDER_HOTEL: &str = "Hotel";
pub const PLACEHOLDER_ACCOMMODATION: &str = "Hotel/Accommodation";
