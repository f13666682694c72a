use crate::models::{MainTransportType, SegmentRole, SegmentType, TransferDirection, TravelSegment, TravelSettings};

/// Outcome of sorting a flat segment list into journey parts
///
/// Holds borrowed segments in their original array order.
#[derive(Debug, Default)]
pub struct Classification<'a> {
    pub main_type: Option<MainTransportType>,
    pub main_legs: Vec<&'a TravelSegment>,
    pub transfers_to: Vec<&'a TravelSegment>,
    pub transfers_from: Vec<&'a TravelSegment>,
}

impl<'a> Classification<'a> {
    #[must_use]
    pub fn transfers(&self, direction: TransferDirection) -> &[&'a TravelSegment] {
        match direction {
            TransferDirection::To => &self.transfers_to,
            TransferDirection::From => &self.transfers_from,
        }
    }
}

/// Pick the single main transport type for a journey: the first candidate's type
///
/// Candidates of any other type are not represented in the journey.
#[must_use]
pub fn select_dominant_main_type<'a>(candidates: impl IntoIterator<Item = &'a TravelSegment>) -> Option<MainTransportType> {
    candidates.into_iter().find_map(|seg| seg.kind.as_main())
}

fn uses_role_hints(segments: &[TravelSegment], settings: &TravelSettings) -> bool {
    settings.honor_role_hints && segments.iter().any(|seg| seg.role == Some(SegmentRole::Main))
}

fn is_main_candidate(seg: &TravelSegment, role_hints: bool, settings: &TravelSettings) -> bool {
    if seg.kind.as_main().is_none() {
        return false;
    }
    if role_hints {
        return seg.role == Some(SegmentRole::Main);
    }
    !(settings.honor_role_hints && seg.role == Some(SegmentRole::Transfer))
}

/// Transfer test for a segment that is not a chosen main leg
fn is_transfer(seg: &TravelSegment, settings: &TravelSettings) -> bool {
    if settings.honor_role_hints {
        match seg.role {
            Some(SegmentRole::Transfer) => return true,
            Some(SegmentRole::Main) => return false,
            Some(SegmentRole::Additional) | None => {}
        }
    }
    matches!(seg.kind, SegmentType::Taxi | SegmentType::Train)
}

/// Split a flat segment list into main legs and the two transfer groups
///
/// Transfers before the first chosen leg go to the hub, transfers after the
/// last chosen leg go from it. Without any main leg every transfer goes to the
/// hub. Transfers between chosen legs are dropped.
#[must_use]
pub fn classify_segments<'a>(segments: &'a [TravelSegment], settings: &TravelSettings) -> Classification<'a> {
    let role_hints = uses_role_hints(segments, settings);

    let candidates: Vec<usize> = segments
        .iter()
        .enumerate()
        .filter(|(_, seg)| is_main_candidate(seg, role_hints, settings))
        .map(|(i, _)| i)
        .collect();

    let main_type = select_dominant_main_type(candidates.iter().map(|&i| &segments[i]));
    let chosen: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&i| main_type.is_some() && segments[i].kind.as_main() == main_type)
        .collect();

    let mut result = Classification {
        main_type,
        main_legs: chosen.iter().map(|&i| &segments[i]).collect(),
        ..Classification::default()
    };

    let bounds = chosen.first().copied().zip(chosen.last().copied());

    for (i, seg) in segments.iter().enumerate() {
        if chosen.contains(&i) {
            continue;
        }
        if !is_transfer(seg, settings) {
            if candidates.contains(&i) {
                log::warn!(
                    "Dropping {} segment {}: journey main transport is {:?}",
                    seg.kind.as_str(),
                    i,
                    main_type.map(MainTransportType::as_str)
                );
            } else {
                debug_log!("Ignoring {} segment {} during classification", seg.kind.as_str(), i);
            }
            continue;
        }
        match bounds {
            None => result.transfers_to.push(seg),
            Some((first, _)) if i < first => result.transfers_to.push(seg),
            Some((_, last)) if i > last => result.transfers_from.push(seg),
            Some(_) => {
                log::warn!("Dropping {} transfer {} positioned between main legs", seg.kind.as_str(), i);
            }
        }
    }

    debug_log!(
        "Classified {} segments: {} main legs, {} transfers to, {} transfers from",
        segments.len(),
        result.main_legs.len(),
        result.transfers_to.len(),
        result.transfers_from.len()
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(kind: SegmentType, from: &str, to: &str) -> TravelSegment {
        TravelSegment::new(kind, from, to)
    }

    fn tagged(kind: SegmentType, role: SegmentRole) -> TravelSegment {
        TravelSegment {
            role: Some(role),
            ..TravelSegment::new(kind, "", "")
        }
    }

    #[test]
    fn test_dominant_type_is_first_candidate() {
        let segments = vec![
            seg(SegmentType::Taxi, "Home", "Station"),
            seg(SegmentType::Bus, "A", "B"),
            seg(SegmentType::Flight, "B", "C"),
        ];
        assert_eq!(select_dominant_main_type(&segments), Some(MainTransportType::Bus));
        assert_eq!(select_dominant_main_type(&segments[..1]), None);
    }

    #[test]
    fn test_transfers_either_side_of_flight() {
        let segments = vec![
            seg(SegmentType::Taxi, "Home", "LHR"),
            seg(SegmentType::Flight, "LHR", "CDG"),
            seg(SegmentType::Taxi, "CDG", "Hotel"),
        ];
        let result = classify_segments(&segments, &TravelSettings::default());
        assert_eq!(result.main_type, Some(MainTransportType::Flight));
        assert_eq!(result.main_legs.len(), 1);
        assert_eq!(result.transfers(TransferDirection::To).len(), 1);
        assert_eq!(result.transfers(TransferDirection::From).len(), 1);
        assert_eq!(result.transfers_from[0].to_location, "Hotel");
    }

    #[test]
    fn test_no_main_sends_all_transfers_to_hub() {
        let segments = vec![seg(SegmentType::Taxi, "A", "B"), seg(SegmentType::Taxi, "B", "C")];
        let result = classify_segments(&segments, &TravelSettings::default());
        assert_eq!(result.main_type, None);
        assert!(result.main_legs.is_empty());
        assert_eq!(result.transfers_to.len(), 2);
        assert!(result.transfers_from.is_empty());
    }

    #[test]
    fn test_train_after_flight_is_transfer() {
        let segments = vec![
            seg(SegmentType::Flight, "LHR", "CDG"),
            seg(SegmentType::Train, "CDG", "Paris Nord"),
        ];
        let result = classify_segments(&segments, &TravelSettings::default());
        assert_eq!(result.main_legs.len(), 1);
        assert_eq!(result.transfers_from.len(), 1);
        assert_eq!(result.transfers_from[0].kind, SegmentType::Train);
    }

    #[test]
    fn test_untagged_trains_all_become_legs() {
        let segments = vec![
            seg(SegmentType::Train, "Home", "London"),
            seg(SegmentType::Train, "London", "Paris"),
        ];
        let result = classify_segments(&segments, &TravelSettings::default());
        assert_eq!(result.main_type, Some(MainTransportType::Train));
        assert_eq!(result.main_legs.len(), 2);
        assert!(result.transfers_to.is_empty());
    }

    #[test]
    fn test_role_hints_separate_train_transfer_from_train_main() {
        let segments = vec![
            tagged(SegmentType::Train, SegmentRole::Transfer),
            tagged(SegmentType::Train, SegmentRole::Main),
        ];
        let result = classify_segments(&segments, &TravelSettings::default());
        assert_eq!(result.main_legs.len(), 1);
        assert_eq!(result.transfers_to.len(), 1);

        let settings = TravelSettings {
            honor_role_hints: false,
            ..TravelSettings::default()
        };
        let result = classify_segments(&segments, &settings);
        assert_eq!(result.main_legs.len(), 2);
        assert!(result.transfers_to.is_empty());
    }

    #[test]
    fn test_transfer_between_legs_is_dropped() {
        let segments = vec![
            seg(SegmentType::Flight, "LHR", "AMS"),
            seg(SegmentType::Taxi, "AMS", "AMS"),
            seg(SegmentType::Flight, "AMS", "OSL"),
        ];
        let result = classify_segments(&segments, &TravelSettings::default());
        assert_eq!(result.main_legs.len(), 2);
        assert!(result.transfers_to.is_empty());
        assert!(result.transfers_from.is_empty());
    }

    #[test]
    fn test_other_main_types_are_dropped() {
        let segments = vec![
            seg(SegmentType::Flight, "LHR", "CDG"),
            seg(SegmentType::Ferry, "Calais", "Dover"),
            seg(SegmentType::Flight, "CDG", "NCE"),
        ];
        let result = classify_segments(&segments, &TravelSettings::default());
        assert_eq!(result.main_type, Some(MainTransportType::Flight));
        assert_eq!(result.main_legs.len(), 2);
        assert!(result.main_legs.iter().all(|s| s.kind == SegmentType::Flight));
    }

    #[test]
    fn test_unknown_segments_are_ignored() {
        let segments = vec![
            seg(SegmentType::Unknown, "?", "?"),
            seg(SegmentType::CarRental, "Nice", "Nice"),
            seg(SegmentType::Taxi, "Home", "Port"),
        ];
        let result = classify_segments(&segments, &TravelSettings::default());
        assert_eq!(result.main_type, None);
        assert_eq!(result.transfers_to.len(), 1);
    }
}
