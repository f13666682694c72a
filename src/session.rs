use serde::{Deserialize, Serialize};
use crate::conversion::{
    journey_to_segments_with, load_additional_travel, outbound_to_segments, return_to_segments,
    segments_to_journey_with, segments_to_outbound, segments_to_return, AdditionalTravelEntry, LegacyOutboundTravel,
    LegacyReturnTravel,
};
use crate::models::{self, AdditionalTravelSegment, JourneyDirection, JourneyTravel, TravelSegment, TravelSettings};

/// Travel data as stored on an itinerary
///
/// Segment arrays are preferred; the per-field records are read only when a
/// direction has no segments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistedTravel {
    pub outbound_journey: Option<Vec<TravelSegment>>,
    pub return_journey: Option<Vec<TravelSegment>>,
    pub outbound_travel: Option<LegacyOutboundTravel>,
    pub return_travel: Option<LegacyReturnTravel>,
    pub additional_travel: Option<Vec<AdditionalTravelEntry>>,
}

impl PersistedTravel {
    /// Parse stored travel data
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the stored travel shape
    pub fn from_json(json: &str) -> Result<Self, crate::TravelError> {
        Ok(serde_json::from_str(json)?)
    }

    fn segments(&self, direction: JourneyDirection) -> Vec<TravelSegment> {
        let stored = match direction {
            JourneyDirection::Outbound => self.outbound_journey.as_deref(),
            JourneyDirection::Return => self.return_journey.as_deref(),
        };
        match stored {
            Some(segments) if !segments.is_empty() => segments.to_vec(),
            _ => match direction {
                JourneyDirection::Outbound => outbound_to_segments(self.outbound_travel.as_ref()),
                JourneyDirection::Return => return_to_segments(self.return_travel.as_ref()),
            },
        }
    }
}

/// Flat output of a session, ready to be stored
///
/// Carries both the segment arrays and the per-field records derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelSnapshot {
    pub outbound_journey: Vec<TravelSegment>,
    pub return_journey: Vec<TravelSegment>,
    pub outbound_travel: LegacyOutboundTravel,
    pub return_travel: LegacyReturnTravel,
    pub additional_travel: Vec<AdditionalTravelSegment>,
}

impl TravelSnapshot {
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String, crate::TravelError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Structured travel being edited for one itinerary
#[derive(Debug, Clone, PartialEq)]
pub struct TravelSession {
    settings: TravelSettings,
    outbound: JourneyTravel,
    return_travel: JourneyTravel,
    additional_travel: Vec<AdditionalTravelSegment>,
}

impl TravelSession {
    /// Empty session: both directions hold a single empty flight leg
    #[must_use]
    pub fn new(settings: TravelSettings) -> Self {
        Self {
            settings,
            outbound: JourneyTravel::empty(),
            return_travel: JourneyTravel::empty(),
            additional_travel: Vec::new(),
        }
    }

    /// Load stored travel; directions without data start empty
    #[must_use]
    pub fn load(persisted: &PersistedTravel, settings: TravelSettings) -> Self {
        let build = |direction: JourneyDirection| {
            let segments = persisted.segments(direction);
            if segments.is_empty() {
                JourneyTravel::empty()
            } else {
                segments_to_journey_with(&segments, &settings)
            }
        };
        let outbound = build(JourneyDirection::Outbound);
        let return_travel = build(JourneyDirection::Return);
        let additional_travel = persisted
            .additional_travel
            .as_deref()
            .map(load_additional_travel)
            .unwrap_or_default();

        debug_log!(
            "Loaded travel session: {} outbound transfers, {} return transfers, {} additional",
            outbound.transfers_to.len() + outbound.transfers_from.len(),
            return_travel.transfers_to.len() + return_travel.transfers_from.len(),
            additional_travel.len()
        );

        Self {
            settings,
            outbound,
            return_travel,
            additional_travel,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &TravelSettings {
        &self.settings
    }

    #[must_use]
    pub fn journey(&self, direction: JourneyDirection) -> &JourneyTravel {
        match direction {
            JourneyDirection::Outbound => &self.outbound,
            JourneyDirection::Return => &self.return_travel,
        }
    }

    pub fn journey_mut(&mut self, direction: JourneyDirection) -> &mut JourneyTravel {
        match direction {
            JourneyDirection::Outbound => &mut self.outbound,
            JourneyDirection::Return => &mut self.return_travel,
        }
    }

    #[must_use]
    pub fn outbound(&self) -> &JourneyTravel {
        &self.outbound
    }

    pub fn outbound_mut(&mut self) -> &mut JourneyTravel {
        &mut self.outbound
    }

    #[must_use]
    pub fn return_journey(&self) -> &JourneyTravel {
        &self.return_travel
    }

    pub fn return_mut(&mut self) -> &mut JourneyTravel {
        &mut self.return_travel
    }

    #[must_use]
    pub fn additional_travel(&self) -> &[AdditionalTravelSegment] {
        &self.additional_travel
    }

    /// Replace the entry with the same id, or append a new one
    pub fn save_additional(&mut self, segment: AdditionalTravelSegment) {
        self.additional_travel = models::save_additional(&self.additional_travel, segment);
    }

    pub fn remove_additional(&mut self, id: &str) {
        self.additional_travel = models::remove_additional(&self.additional_travel, id);
    }

    /// Additional travel in date order, undated entries last
    #[must_use]
    pub fn sorted_additional_travel(&self) -> Vec<AdditionalTravelSegment> {
        models::sorted_by_date(&self.additional_travel)
    }

    /// Flatten the current state for storage
    #[must_use]
    pub fn sync(&self) -> TravelSnapshot {
        let outbound_journey = journey_to_segments_with(&self.outbound, &self.settings);
        let return_journey = journey_to_segments_with(&self.return_travel, &self.settings);
        TravelSnapshot {
            outbound_travel: segments_to_outbound(&outbound_journey),
            return_travel: segments_to_return(&return_journey),
            outbound_journey,
            return_journey,
            additional_travel: self.additional_travel.clone(),
        }
    }
}

impl Default for TravelSession {
    fn default() -> Self {
        Self::new(TravelSettings::default())
    }
}
