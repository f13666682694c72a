use serde::{Deserialize, Serialize};
use super::transfer::TransferSegment;
use super::{MainTransport, MainTransportType, TransferDirection};

/// Outbound or return leg of the whole trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JourneyDirection {
    Outbound,
    Return,
}

/// One direction of travel: transfers to the hub, main transport, transfers from the hub
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyTravel {
    #[serde(default)]
    pub transfers_to: Vec<TransferSegment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_transport: Option<MainTransport>,
    #[serde(default)]
    pub transfers_from: Vec<TransferSegment>,
}

impl JourneyTravel {
    /// Fresh journey with an empty single-leg flight
    #[must_use]
    pub fn empty() -> Self {
        Self {
            transfers_to: Vec::new(),
            main_transport: Some(MainTransport::empty()),
            transfers_from: Vec::new(),
        }
    }

    /// Type shown in section headings; flight when there is no main transport yet
    #[must_use]
    pub fn main_type(&self) -> MainTransportType {
        self.main_transport
            .as_ref()
            .map_or(MainTransportType::Flight, |mt| mt.kind)
    }

    #[must_use]
    pub fn transfers(&self, direction: TransferDirection) -> &[TransferSegment] {
        match direction {
            TransferDirection::To => &self.transfers_to,
            TransferDirection::From => &self.transfers_from,
        }
    }

    pub fn transfers_mut(&mut self, direction: TransferDirection) -> &mut Vec<TransferSegment> {
        match direction {
            TransferDirection::To => &mut self.transfers_to,
            TransferDirection::From => &mut self.transfers_from,
        }
    }

    /// Replace a transfer group wholesale, e.g. with the result of a group edit
    pub fn set_transfers(&mut self, direction: TransferDirection, transfers: Vec<TransferSegment>) {
        *self.transfers_mut(direction) = transfers;
    }

    /// Main transport, created on first access if missing
    pub fn main_transport_mut(&mut self) -> &mut MainTransport {
        self.main_transport.get_or_insert_with(MainTransport::empty)
    }

    #[must_use]
    pub fn transfer_section_label(&self, direction: TransferDirection) -> String {
        self.main_type().transfer_section_label(direction)
    }

    /// Date shared by every flat segment written from this journey
    #[must_use]
    pub fn date(&self) -> &str {
        self.main_transport.as_ref().map_or("", |mt| mt.date.as_str())
    }
}

impl Default for JourneyTravel {
    fn default() -> Self {
        Self::empty()
    }
}
