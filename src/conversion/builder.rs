use super::classify::{classify_segments, Classification};
use crate::models::id::id_or_generate;
use crate::models::{
    non_empty, non_empty_opt, JourneyTravel, MainTransport, MainTransportType, TransferSegment, TransferType,
    TransportLeg, TravelSegment, TravelSettings,
};

/// Build a structured journey from one direction's flat segments
#[must_use]
pub fn segments_to_journey(segments: &[TravelSegment]) -> JourneyTravel {
    segments_to_journey_with(segments, &TravelSettings::default())
}

/// Build a structured journey using explicit conversion settings
#[must_use]
pub fn segments_to_journey_with(segments: &[TravelSegment], settings: &TravelSettings) -> JourneyTravel {
    debug_log!("Building journey from {} segments", segments.len());

    let classification = classify_segments(segments, settings);
    let main_transport = build_main_transport(&classification, settings);

    JourneyTravel {
        transfers_to: build_transfers(&classification.transfers_to),
        main_transport: Some(main_transport),
        transfers_from: build_transfers(&classification.transfers_from),
    }
}

fn build_main_transport(classification: &Classification<'_>, settings: &TravelSettings) -> MainTransport {
    let (Some(kind), Some(first)) = (classification.main_type, classification.main_legs.first()) else {
        return MainTransport::empty_of(settings.default_main_type);
    };

    let legs: Vec<TransportLeg> = classification
        .main_legs
        .iter()
        .zip(1u32..)
        .map(|(seg, number)| leg_from_segment(seg, number, kind))
        .collect();

    MainTransport {
        id: id_or_generate(first.id_str()),
        kind,
        date: first.date.clone(),
        is_connecting: legs.len() > 1,
        legs,
        passengers_and_seats: non_empty_opt(first.confirmation_number.as_deref()),
        booking_reference: non_empty_opt(first.booking_reference.as_deref()),
        contact: non_empty_opt(first.contact_details.as_deref()),
        notes: non_empty_opt(first.notes.as_deref()),
    }
}

fn leg_from_segment(seg: &TravelSegment, leg_number: u32, kind: MainTransportType) -> TransportLeg {
    let mut leg = TransportLeg {
        id: id_or_generate(seg.id_str()),
        leg_number,
        flight_number: non_empty_opt(seg.flight_number.as_deref()),
        airline: non_empty_opt(seg.airline.as_deref()),
        company: non_empty_opt(seg.company.as_deref()),
        departure_time: seg.departure_time_or_empty(),
        arrival_time: seg.arrival_time_or_empty(),
        ..TransportLeg::empty(leg_number)
    };
    leg.set_endpoints(
        kind.is_flight(),
        non_empty(&seg.from_location),
        non_empty(&seg.to_location),
    );
    leg
}

fn build_transfers(segments: &[&TravelSegment]) -> Vec<TransferSegment> {
    segments
        .iter()
        .zip(0u32..)
        .map(|(seg, order)| TransferSegment {
            id: id_or_generate(seg.id_str()),
            order,
            kind: seg.kind.as_transfer().unwrap_or(TransferType::Taxi),
            pickup_location: seg.from_location.clone(),
            pickup_time: seg.departure_time_or_empty(),
            dropoff_location: seg.to_location.clone(),
            company: non_empty_opt(seg.company.as_deref()),
            contact: non_empty_opt(seg.contact_details.as_deref()),
            vehicle_registration: non_empty_opt(seg.confirmation_number.as_deref()),
            booking_reference: non_empty_opt(seg.booking_reference.as_deref()),
            price: non_empty_opt(seg.price.as_deref()),
            notes: non_empty_opt(seg.notes.as_deref()),
        })
        .collect()
}
