use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::error::TravelError;

/// Primary transport for one direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MainTransportType {
    #[default]
    Flight,
    Train,
    Bus,
    Ferry,
    Other,
}

/// Short connecting trip to or from a transport hub
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransferType {
    #[default]
    Taxi,
    PrivateCar,
    Shuttle,
    Bus,
    Train,
    Other,
}

/// Standalone travel during the trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AdditionalTransportType {
    #[default]
    Flight,
    Train,
    Bus,
    Ferry,
    Taxi,
    PrivateTransfer,
    Shuttle,
    CarRental,
    #[serde(other)]
    Other,
}

/// Type tag on a flat travel segment
///
/// Anything the wire carries that is not recognised decodes as `Unknown`,
/// which is neither main transport nor a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentType {
    Flight,
    Train,
    Bus,
    Ferry,
    Taxi,
    PrivateTransfer,
    PrivateCar,
    Shuttle,
    CarRental,
    Other,
    #[serde(other)]
    Unknown,
}

/// Which side of the main transport a transfer group sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferDirection {
    To,
    From,
}

impl MainTransportType {
    pub const ALL: [Self; 5] = [Self::Flight, Self::Train, Self::Bus, Self::Ferry, Self::Other];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flight => "flight",
            Self::Train => "train",
            Self::Bus => "bus",
            Self::Ferry => "ferry",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub const fn is_flight(self) -> bool {
        matches!(self, Self::Flight)
    }

    /// Name of the hub this transport departs from
    #[must_use]
    pub const fn hub_name(self) -> &'static str {
        match self {
            Self::Flight => "Airport",
            Self::Train | Self::Bus => "Station",
            Self::Ferry => "Port",
            Self::Other => "Departure Point",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Flight => "Flight",
            Self::Train => "Train",
            Self::Bus => "Bus",
            Self::Ferry => "Ferry",
            Self::Other => "Other",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Flight => "plane",
            Self::Train => "train",
            Self::Bus => "bus",
            Self::Ferry => "ship",
            Self::Other => "route",
        }
    }

    /// Heading for a transfer group, e.g. "Transfers to Airport"
    #[must_use]
    pub fn transfer_section_label(self, direction: TransferDirection) -> String {
        match direction {
            TransferDirection::To => format!("Transfers to {}", self.hub_name()),
            TransferDirection::From => format!("Transfers from {}", self.hub_name()),
        }
    }
}

impl TransferType {
    pub const ALL: [Self; 6] = [
        Self::Taxi,
        Self::PrivateCar,
        Self::Shuttle,
        Self::Bus,
        Self::Train,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Taxi => "taxi",
            Self::PrivateCar => "private_car",
            Self::Shuttle => "shuttle",
            Self::Bus => "bus",
            Self::Train => "train",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Taxi => "Taxi",
            Self::PrivateCar => "Private Car",
            Self::Shuttle => "Shuttle",
            Self::Bus => "Bus",
            Self::Train => "Train",
            Self::Other => "Other",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Taxi | Self::PrivateCar | Self::Shuttle => "car",
            Self::Bus => "bus",
            Self::Train => "train",
            Self::Other => "route",
        }
    }

    /// Type written to the flat wire format; only taxi and train survive
    #[must_use]
    pub const fn wire_type(self) -> SegmentType {
        match self {
            Self::Train => SegmentType::Train,
            Self::Taxi | Self::PrivateCar | Self::Shuttle | Self::Bus | Self::Other => SegmentType::Taxi,
        }
    }
}

impl AdditionalTransportType {
    pub const ALL: [Self; 9] = [
        Self::Flight,
        Self::Train,
        Self::Bus,
        Self::Ferry,
        Self::Taxi,
        Self::PrivateTransfer,
        Self::Shuttle,
        Self::CarRental,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flight => "flight",
            Self::Train => "train",
            Self::Bus => "bus",
            Self::Ferry => "ferry",
            Self::Taxi => "taxi",
            Self::PrivateTransfer => "private_transfer",
            Self::Shuttle => "shuttle",
            Self::CarRental => "car_rental",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub const fn is_flight(self) -> bool {
        matches!(self, Self::Flight)
    }

    /// Whether entries of this type may have several legs
    #[must_use]
    pub const fn supports_connecting(self) -> bool {
        matches!(self, Self::Flight | Self::Train | Self::Bus | Self::Ferry)
    }

    #[must_use]
    pub const fn hub_name(self) -> &'static str {
        match self {
            Self::Flight => "Airport",
            Self::Train | Self::Bus => "Station",
            Self::Ferry => "Port",
            Self::Taxi | Self::PrivateTransfer | Self::Shuttle | Self::CarRental | Self::Other => {
                "Departure Point"
            }
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Flight => "Flight",
            Self::Train => "Train",
            Self::Bus => "Bus",
            Self::Ferry => "Ferry",
            Self::Taxi => "Taxi",
            Self::PrivateTransfer => "Private Transfer",
            Self::Shuttle => "Shuttle",
            Self::CarRental => "Car Rental",
            Self::Other => "Other",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Flight => "plane",
            Self::Train => "train",
            Self::Bus => "bus",
            Self::Ferry => "ship",
            Self::Taxi | Self::PrivateTransfer | Self::Shuttle => "car",
            Self::CarRental => "key",
            Self::Other => "route",
        }
    }
}

impl SegmentType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flight => "flight",
            Self::Train => "train",
            Self::Bus => "bus",
            Self::Ferry => "ferry",
            Self::Taxi => "taxi",
            Self::PrivateTransfer => "private_transfer",
            Self::PrivateCar => "private_car",
            Self::Shuttle => "shuttle",
            Self::CarRental => "car_rental",
            Self::Other => "other",
            Self::Unknown => "unknown",
        }
    }

    /// Main transport type for segments that can be main transport
    #[must_use]
    pub const fn as_main(self) -> Option<MainTransportType> {
        match self {
            Self::Flight => Some(MainTransportType::Flight),
            Self::Train => Some(MainTransportType::Train),
            Self::Bus => Some(MainTransportType::Bus),
            Self::Ferry => Some(MainTransportType::Ferry),
            Self::Other => Some(MainTransportType::Other),
            Self::Taxi
            | Self::PrivateTransfer
            | Self::PrivateCar
            | Self::Shuttle
            | Self::CarRental
            | Self::Unknown => None,
        }
    }

    /// Transfer type for segments whose tag names one
    #[must_use]
    pub const fn as_transfer(self) -> Option<TransferType> {
        match self {
            Self::Taxi => Some(TransferType::Taxi),
            Self::PrivateCar => Some(TransferType::PrivateCar),
            Self::Shuttle => Some(TransferType::Shuttle),
            Self::Bus => Some(TransferType::Bus),
            Self::Train => Some(TransferType::Train),
            Self::Other => Some(TransferType::Other),
            Self::Flight
            | Self::Ferry
            | Self::PrivateTransfer
            | Self::CarRental
            | Self::Unknown => None,
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Flight => "plane",
            Self::Train => "train",
            Self::Bus => "bus",
            Self::Ferry => "ship",
            Self::Taxi | Self::PrivateTransfer | Self::PrivateCar | Self::Shuttle => "car",
            Self::CarRental => "key",
            Self::Other | Self::Unknown => "route",
        }
    }
}

impl From<MainTransportType> for SegmentType {
    fn from(kind: MainTransportType) -> Self {
        match kind {
            MainTransportType::Flight => Self::Flight,
            MainTransportType::Train => Self::Train,
            MainTransportType::Bus => Self::Bus,
            MainTransportType::Ferry => Self::Ferry,
            MainTransportType::Other => Self::Other,
        }
    }
}

impl From<MainTransportType> for AdditionalTransportType {
    fn from(kind: MainTransportType) -> Self {
        match kind {
            MainTransportType::Flight => Self::Flight,
            MainTransportType::Train => Self::Train,
            MainTransportType::Bus => Self::Bus,
            MainTransportType::Ferry => Self::Ferry,
            MainTransportType::Other => Self::Other,
        }
    }
}

impl FromStr for MainTransportType {
    type Err = TravelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s.trim())
            .ok_or_else(|| TravelError::unknown_type("main transport", s))
    }
}

impl FromStr for TransferType {
    type Err = TravelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s.trim())
            .ok_or_else(|| TravelError::unknown_type("transfer", s))
    }
}

impl FromStr for AdditionalTransportType {
    type Err = TravelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s.trim())
            .ok_or_else(|| TravelError::unknown_type("additional travel", s))
    }
}

impl fmt::Display for MainTransportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for TransferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for AdditionalTransportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hub_names() {
        assert_eq!(MainTransportType::Flight.hub_name(), "Airport");
        assert_eq!(MainTransportType::Train.hub_name(), "Station");
        assert_eq!(MainTransportType::Bus.hub_name(), "Station");
        assert_eq!(MainTransportType::Ferry.hub_name(), "Port");
        assert_eq!(MainTransportType::Other.hub_name(), "Departure Point");
        assert_eq!(AdditionalTransportType::CarRental.hub_name(), "Departure Point");
    }

    #[test]
    fn test_transfer_section_label() {
        assert_eq!(
            MainTransportType::Flight.transfer_section_label(TransferDirection::To),
            "Transfers to Airport"
        );
        assert_eq!(
            MainTransportType::Ferry.transfer_section_label(TransferDirection::From),
            "Transfers from Port"
        );
    }

    #[test]
    fn test_labels_and_icons() {
        assert_eq!(AdditionalTransportType::PrivateTransfer.label(), "Private Transfer");
        assert_eq!(AdditionalTransportType::CarRental.icon(), "key");
        assert_eq!(TransferType::PrivateCar.label(), "Private Car");
        assert_eq!(SegmentType::Shuttle.icon(), "car");
        assert_eq!(MainTransportType::Ferry.to_string(), "Ferry");
    }

    #[test]
    fn test_wire_type_collapses_to_taxi() {
        assert_eq!(TransferType::Taxi.wire_type(), SegmentType::Taxi);
        assert_eq!(TransferType::Train.wire_type(), SegmentType::Train);
        assert_eq!(TransferType::Shuttle.wire_type(), SegmentType::Taxi);
        assert_eq!(TransferType::Bus.wire_type(), SegmentType::Taxi);
        assert_eq!(TransferType::PrivateCar.wire_type(), SegmentType::Taxi);
    }

    #[test]
    fn test_segment_type_roles() {
        assert_eq!(SegmentType::Train.as_main(), Some(MainTransportType::Train));
        assert_eq!(SegmentType::Train.as_transfer(), Some(TransferType::Train));
        assert_eq!(SegmentType::Taxi.as_main(), None);
        assert_eq!(SegmentType::Flight.as_transfer(), None);
        assert_eq!(SegmentType::Unknown.as_main(), None);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&SegmentType::CarRental).expect("serialize");
        assert_eq!(json, "\"car_rental\"");
        let kind: SegmentType = serde_json::from_str("\"hovercraft\"").expect("deserialize");
        assert_eq!(kind, SegmentType::Unknown);
        let kind: TransferType = serde_json::from_str("\"private_car\"").expect("deserialize");
        assert_eq!(kind, TransferType::PrivateCar);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("ferry".parse::<MainTransportType>().ok(), Some(MainTransportType::Ferry));
        assert_eq!(
            "shuttle".parse::<AdditionalTransportType>().ok(),
            Some(AdditionalTransportType::Shuttle)
        );
        assert!("taxi".parse::<MainTransportType>().is_err());
    }

    #[test]
    fn test_supports_connecting() {
        assert!(AdditionalTransportType::Ferry.supports_connecting());
        assert!(!AdditionalTransportType::Taxi.supports_connecting());
        assert!(!AdditionalTransportType::Other.supports_connecting());
    }
}
