use serde::{Deserialize, Serialize};
use super::id::generate_id;
use super::leg::{renumber_legs, TransportLeg};
use super::MainTransportType;
use crate::time::calculate_layover;

/// Primary transport for one direction of travel
///
/// `is_connecting` mirrors `legs.len() > 1` and every edit below keeps the two
/// in step. There is always at least one leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainTransport {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MainTransportType,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub is_connecting: bool,
    pub legs: Vec<TransportLeg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passengers_and_seats: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl MainTransport {
    /// Empty flight with a single empty leg
    #[must_use]
    pub fn empty() -> Self {
        Self::empty_of(MainTransportType::Flight)
    }

    #[must_use]
    pub fn empty_of(kind: MainTransportType) -> Self {
        Self {
            id: generate_id(),
            kind,
            date: String::new(),
            is_connecting: false,
            legs: vec![TransportLeg::empty(1)],
            passengers_and_seats: None,
            booking_reference: None,
            contact: None,
            notes: None,
        }
    }

    #[must_use]
    pub fn is_flight(&self) -> bool {
        self.kind.is_flight()
    }

    #[must_use]
    pub fn hub_name(&self) -> &'static str {
        self.kind.hub_name()
    }

    /// Switch transport type; leg data is discarded since the field sets differ
    pub fn change_type(&mut self, kind: MainTransportType) {
        self.kind = kind;
        self.legs = vec![TransportLeg::empty(1)];
        self.is_connecting = false;
    }

    /// Turn connecting on (adds a second leg if there is only one) or off
    /// (keeps the first leg only)
    pub fn set_connecting(&mut self, connecting: bool) {
        if connecting {
            if self.legs.len() == 1 {
                let mut legs = std::mem::take(&mut self.legs);
                legs.push(TransportLeg::empty(2));
                self.replace_legs(legs);
            }
        } else {
            let legs: Vec<TransportLeg> = std::mem::take(&mut self.legs).into_iter().take(1).collect();
            if legs.is_empty() {
                self.replace_legs(vec![TransportLeg::empty(1)]);
            } else {
                self.replace_legs(legs);
            }
        }
    }

    /// Append an empty leg numbered after the existing ones
    pub fn add_leg(&mut self) {
        let mut legs = std::mem::take(&mut self.legs);
        let next_number = u32::try_from(legs.len() + 1).unwrap_or(u32::MAX);
        legs.push(TransportLeg::empty(next_number));
        self.replace_legs(legs);
    }

    /// Remove the leg at `index`; the last remaining leg is never removed
    ///
    /// Returns whether a leg was removed.
    pub fn remove_leg(&mut self, index: usize) -> bool {
        if self.legs.len() <= 1 || index >= self.legs.len() {
            return false;
        }
        let legs = std::mem::take(&mut self.legs)
            .into_iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, leg)| leg)
            .collect();
        self.replace_legs(legs);
        true
    }

    /// Edit one leg in place; numbering is restored afterwards
    pub fn update_leg(&mut self, index: usize, edit: impl FnOnce(&mut TransportLeg)) -> bool {
        let Some(leg) = self.legs.get_mut(index) else {
            return false;
        };
        edit(leg);
        let legs = std::mem::take(&mut self.legs);
        self.replace_legs(legs);
        true
    }

    /// Layover between each consecutive pair of legs
    #[must_use]
    pub fn layovers(&self) -> Vec<String> {
        self.legs
            .windows(2)
            .map(|pair| calculate_layover(&pair[0].arrival_time, &pair[1].departure_time))
            .collect()
    }

    fn replace_legs(&mut self, legs: Vec<TransportLeg>) {
        self.legs = renumber_legs(legs);
        self.is_connecting = self.legs.len() > 1;
    }
}

impl Default for MainTransport {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_leg_invariants(transport: &MainTransport) {
        assert!(!transport.legs.is_empty());
        for (i, leg) in transport.legs.iter().enumerate() {
            assert_eq!(leg.leg_number as usize, i + 1);
        }
        assert_eq!(transport.is_connecting, transport.legs.len() > 1);
    }

    #[test]
    fn test_empty_main_transport() {
        let transport = MainTransport::empty();
        assert_eq!(transport.kind, MainTransportType::Flight);
        assert_eq!(transport.legs.len(), 1);
        assert!(!transport.is_connecting);
        assert_leg_invariants(&transport);
    }

    #[test]
    fn test_change_type_resets_legs() {
        let mut transport = MainTransport::empty();
        transport.add_leg();
        transport.legs[0].flight_number = Some("BA1".to_string());

        transport.change_type(MainTransportType::Train);

        assert_eq!(transport.kind, MainTransportType::Train);
        assert_eq!(transport.legs.len(), 1);
        assert!(transport.legs[0].flight_number.is_none());
        assert!(!transport.is_connecting);
    }

    #[test]
    fn test_set_connecting_on_adds_second_leg() {
        let mut transport = MainTransport::empty();
        transport.set_connecting(true);
        assert_eq!(transport.legs.len(), 2);
        assert_leg_invariants(&transport);

        // Already connecting: no extra leg
        transport.set_connecting(true);
        assert_eq!(transport.legs.len(), 2);
    }

    #[test]
    fn test_set_connecting_off_keeps_first_leg() {
        let mut transport = MainTransport::empty();
        transport.add_leg();
        transport.add_leg();
        let first_id = transport.legs[0].id.clone();

        transport.set_connecting(false);

        assert_eq!(transport.legs.len(), 1);
        assert_eq!(transport.legs[0].id, first_id);
        assert!(!transport.is_connecting);
    }

    #[test]
    fn test_add_leg_numbers_sequentially() {
        let mut transport = MainTransport::empty();
        transport.add_leg();
        transport.add_leg();
        assert_eq!(transport.legs.len(), 3);
        assert_eq!(transport.legs[2].leg_number, 3);
        assert_leg_invariants(&transport);
    }

    #[test]
    fn test_remove_last_leg_is_rejected() {
        let mut transport = MainTransport::empty();
        assert!(!transport.remove_leg(0));
        assert_eq!(transport.legs.len(), 1);
    }

    #[test]
    fn test_remove_leg_out_of_range_is_rejected() {
        let mut transport = MainTransport::empty();
        transport.add_leg();
        assert!(!transport.remove_leg(5));
        assert_eq!(transport.legs.len(), 2);
    }

    #[test]
    fn test_remove_middle_leg_renumbers() {
        let mut transport = MainTransport::empty();
        transport.add_leg();
        transport.add_leg();
        let third_id = transport.legs[2].id.clone();

        assert!(transport.remove_leg(1));

        assert_eq!(transport.legs.len(), 2);
        assert_eq!(transport.legs[1].id, third_id);
        assert_eq!(transport.legs[1].leg_number, 2);
        assert!(transport.is_connecting);
    }

    #[test]
    fn test_leg_numbering_holds_across_edit_sequence() {
        let mut transport = MainTransport::empty();
        let ops: [(bool, usize); 8] = [
            (true, 0),
            (true, 0),
            (false, 1),
            (true, 0),
            (false, 0),
            (false, 0),
            (false, 0),
            (true, 0),
        ];

        for (add, index) in ops {
            if add {
                transport.add_leg();
            } else {
                transport.remove_leg(index);
            }
            assert_leg_invariants(&transport);
        }
    }

    #[test]
    fn test_update_leg() {
        let mut transport = MainTransport::empty();
        let updated = transport.update_leg(0, |leg| leg.departure_time = "09:15".to_string());
        assert!(updated);
        assert_eq!(transport.legs[0].departure_time, "09:15");
        assert!(!transport.update_leg(3, |_| {}));
    }

    #[test]
    fn test_layovers() {
        let mut transport = MainTransport::empty();
        transport.set_connecting(true);
        transport.add_leg();
        transport.legs[0].arrival_time = "10:00".to_string();
        transport.legs[1].departure_time = "12:30".to_string();
        transport.legs[1].arrival_time = "23:50".to_string();
        transport.legs[2].departure_time = "00:20".to_string();

        assert_eq!(transport.layovers(), vec!["2h 30min".to_string(), "30min".to_string()]);
    }
}
