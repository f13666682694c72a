use crate::models::{
    non_empty, non_empty_opt, sorted_transfers, JourneyTravel, MainTransport, SegmentRole, TransferSegment,
    TravelSegment, TravelSettings,
};

/// Flatten a structured journey into the persisted segment order
///
/// Transfers to the hub come first, then one segment per main leg, then
/// transfers from the hub.
#[must_use]
pub fn journey_to_segments(journey: &JourneyTravel) -> Vec<TravelSegment> {
    journey_to_segments_with(journey, &TravelSettings::default())
}

#[must_use]
pub fn journey_to_segments_with(journey: &JourneyTravel, settings: &TravelSettings) -> Vec<TravelSegment> {
    let date = journey.date();
    let role = |role: SegmentRole| settings.emit_role_tags.then_some(role);

    let mut segments: Vec<TravelSegment> = sorted_transfers(&journey.transfers_to)
        .iter()
        .map(|transfer| transfer_segment(transfer, date, role(SegmentRole::Transfer)))
        .collect();

    if let Some(main) = &journey.main_transport {
        segments.extend(main_segments(main, role(SegmentRole::Main)));
    }

    segments.extend(
        sorted_transfers(&journey.transfers_from)
            .iter()
            .map(|transfer| transfer_segment(transfer, date, role(SegmentRole::Transfer))),
    );

    debug_log!(
        "Flattened journey into {} segments ({} to, {} from)",
        segments.len(),
        journey.transfers_to.len(),
        journey.transfers_from.len()
    );

    segments
}

fn transfer_segment(transfer: &TransferSegment, date: &str, role: Option<SegmentRole>) -> TravelSegment {
    TravelSegment {
        id: Some(transfer.id.clone()),
        role,
        date: date.to_string(),
        departure_time: non_empty(&transfer.pickup_time),
        company: non_empty_opt(transfer.company.as_deref()),
        contact_details: non_empty_opt(transfer.contact.as_deref()),
        confirmation_number: non_empty_opt(transfer.vehicle_registration.as_deref()),
        booking_reference: non_empty_opt(transfer.booking_reference.as_deref()),
        price: non_empty_opt(transfer.price.as_deref()),
        notes: non_empty_opt(transfer.notes.as_deref()),
        ..TravelSegment::new(
            transfer.kind.wire_type(),
            transfer.pickup_location.clone(),
            transfer.dropoff_location.clone(),
        )
    }
}

fn main_segments(main: &MainTransport, role: Option<SegmentRole>) -> impl Iterator<Item = TravelSegment> + '_ {
    let is_flight = main.is_flight();
    main.legs.iter().enumerate().map(move |(i, leg)| {
        let mut segment = TravelSegment {
            id: Some(leg.id.clone()),
            role,
            date: main.date.clone(),
            flight_number: non_empty_opt(leg.flight_number.as_deref()),
            airline: non_empty_opt(leg.airline.as_deref()),
            company: non_empty_opt(leg.company.as_deref()),
            ..TravelSegment::new(
                main.kind.into(),
                leg.departure_point(is_flight),
                leg.arrival_point(is_flight),
            )
            .with_times(&leg.departure_time, &leg.arrival_time)
        };
        // Booking details go on the first leg only
        if i == 0 {
            segment.confirmation_number = non_empty_opt(main.passengers_and_seats.as_deref());
            segment.booking_reference = non_empty_opt(main.booking_reference.as_deref());
            segment.contact_details = non_empty_opt(main.contact.as_deref());
            segment.notes = non_empty_opt(main.notes.as_deref());
        }
        segment
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{add_transfer, MainTransportType, SegmentType, TransferType};

    fn sample_journey() -> JourneyTravel {
        let mut journey = JourneyTravel::empty();
        let main = journey.main_transport_mut();
        main.date = "2025-06-01".to_string();
        main.booking_reference = Some("XYZ123".to_string());
        main.notes = Some("Check in online".to_string());
        main.add_leg();
        main.legs[0].set_endpoints(true, Some("LHR".to_string()), Some("AMS".to_string()));
        main.legs[1].set_endpoints(true, Some("AMS".to_string()), Some("OSL".to_string()));

        let (mut to, _) = add_transfer(&[]);
        to[0].pickup_location = "Home".to_string();
        to[0].dropoff_location = "LHR".to_string();
        to[0].kind = TransferType::Shuttle;
        journey.transfers_to = to;
        journey
    }

    #[test]
    fn test_flatten_order_and_roles() {
        let segments = journey_to_segments(&sample_journey());
        let kinds: Vec<SegmentType> = segments.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![SegmentType::Taxi, SegmentType::Flight, SegmentType::Flight]);
        assert_eq!(segments[0].role, Some(SegmentRole::Transfer));
        assert_eq!(segments[1].role, Some(SegmentRole::Main));
        assert!(segments.iter().all(|s| s.date == "2025-06-01"));
    }

    #[test]
    fn test_booking_details_only_on_first_leg() {
        let segments = journey_to_segments(&sample_journey());
        assert_eq!(segments[1].booking_reference.as_deref(), Some("XYZ123"));
        assert_eq!(segments[1].notes.as_deref(), Some("Check in online"));
        assert!(segments[2].booking_reference.is_none());
        assert!(segments[2].notes.is_none());
        assert_eq!(segments[2].from_location, "AMS");
        assert_eq!(segments[2].to_location, "OSL");
    }

    #[test]
    fn test_transfers_are_sorted_by_order() {
        let mut journey = sample_journey();
        let (mut from, _) = add_transfer(&[]);
        let (more, _) = add_transfer(&from);
        from = more;
        from[0].pickup_location = "second".to_string();
        from[0].order = 1;
        from[1].pickup_location = "first".to_string();
        from[1].order = 0;
        journey.transfers_from = from;

        let segments = journey_to_segments(&journey);
        let tail: Vec<&str> = segments[3..].iter().map(|s| s.from_location.as_str()).collect();
        assert_eq!(tail, vec!["first", "second"]);
    }

    #[test]
    fn test_role_tags_can_be_disabled() {
        let settings = TravelSettings {
            emit_role_tags: false,
            ..TravelSettings::default()
        };
        let segments = journey_to_segments_with(&sample_journey(), &settings);
        assert!(segments.iter().all(|s| s.role.is_none()));
    }

    #[test]
    fn test_non_flight_legs_write_stations() {
        let mut journey = JourneyTravel::empty();
        let main = journey.main_transport_mut();
        main.change_type(MainTransportType::Train);
        main.legs[0].set_endpoints(false, Some("London".to_string()), Some("Paris".to_string()));
        main.legs[0].departure_airport = Some("ignored".to_string());

        let segments = journey_to_segments(&journey);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].kind, SegmentType::Train);
        assert_eq!(segments[0].from_location, "London");
        assert_eq!(segments[0].to_location, "Paris");
    }

    #[test]
    fn test_no_main_transport_emits_only_transfers() {
        let (to, _) = add_transfer(&[]);
        let journey = JourneyTravel {
            transfers_to: to,
            main_transport: None,
            transfers_from: Vec::new(),
        };
        let segments = journey_to_segments(&journey);
        assert_eq!(segments.len(), 1);
        assert!(segments[0].date.is_empty());
    }
}
