use serde::{Deserialize, Serialize};
use super::id::generate_id;
use super::TransferType;

/// A short connecting trip to or from a transport hub
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferSegment {
    pub id: String,
    pub order: u32,
    #[serde(rename = "type", default)]
    pub kind: TransferType,
    #[serde(default)]
    pub pickup_location: String,
    #[serde(default)]
    pub pickup_time: String,
    #[serde(default)]
    pub dropoff_location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_registration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TransferSegment {
    /// Empty taxi transfer at the given position
    #[must_use]
    pub fn empty(order: u32) -> Self {
        Self {
            id: generate_id(),
            order,
            kind: TransferType::Taxi,
            pickup_location: String::new(),
            pickup_time: String::new(),
            dropoff_location: String::new(),
            company: None,
            contact: None,
            vehicle_registration: None,
            booking_reference: None,
            price: None,
            notes: None,
        }
    }
}

/// Direction for a single-step move within a transfer group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

fn to_order(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}

/// Re-derive every `order` from array position
#[must_use]
pub fn renumber_transfers(transfers: Vec<TransferSegment>) -> Vec<TransferSegment> {
    transfers
        .into_iter()
        .enumerate()
        .map(|(i, transfer)| TransferSegment {
            order: to_order(i),
            ..transfer
        })
        .collect()
}

/// Transfers in display order (sorted by `order`, ties keep array order)
#[must_use]
pub fn sorted_transfers(transfers: &[TransferSegment]) -> Vec<TransferSegment> {
    let mut sorted = transfers.to_vec();
    sorted.sort_by_key(|t| t.order);
    sorted
}

/// Append a new empty transfer to the end of the group
///
/// Returns the new group and the id of the added transfer.
#[must_use]
pub fn add_transfer(transfers: &[TransferSegment]) -> (Vec<TransferSegment>, String) {
    let mut group = sorted_transfers(transfers);
    let transfer = TransferSegment::empty(to_order(group.len()));
    let id = transfer.id.clone();
    group.push(transfer);
    (renumber_transfers(group), id)
}

/// Replace the transfer with the same id, or append it if it is new
#[must_use]
pub fn save_transfer(transfers: &[TransferSegment], transfer: TransferSegment) -> Vec<TransferSegment> {
    let mut group = sorted_transfers(transfers);
    if let Some(existing) = group.iter_mut().find(|t| t.id == transfer.id) {
        *existing = transfer;
    } else {
        group.push(transfer);
    }
    renumber_transfers(group)
}

/// Remove a transfer by id and close the gap it leaves
#[must_use]
pub fn remove_transfer(transfers: &[TransferSegment], id: &str) -> Vec<TransferSegment> {
    let group = sorted_transfers(transfers)
        .into_iter()
        .filter(|t| t.id != id)
        .collect();
    renumber_transfers(group)
}

/// Move the transfer at `from_index` to `to_index` (drag and drop)
///
/// Indices refer to display order. Out-of-range indices leave the group
/// unchanged apart from renumbering.
#[must_use]
pub fn reorder_transfers(transfers: &[TransferSegment], from_index: usize, to_index: usize) -> Vec<TransferSegment> {
    let mut group = sorted_transfers(transfers);
    if from_index < group.len() && to_index < group.len() {
        let moved = group.remove(from_index);
        group.insert(to_index, moved);
    }
    renumber_transfers(group)
}

/// Move a transfer one place up or down; no-op at either end
#[must_use]
pub fn move_transfer(transfers: &[TransferSegment], index: usize, direction: MoveDirection) -> Vec<TransferSegment> {
    let target = match direction {
        MoveDirection::Up => index.checked_sub(1),
        MoveDirection::Down => index.checked_add(1).filter(|&i| i < transfers.len()),
    };
    match target {
        Some(to_index) => reorder_transfers(transfers, index, to_index),
        None => renumber_transfers(sorted_transfers(transfers)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group_of(n: usize) -> Vec<TransferSegment> {
        (0..n)
            .map(|i| {
                let mut t = TransferSegment::empty(to_order(i));
                t.pickup_location = format!("P{i}");
                t
            })
            .collect()
    }

    fn assert_dense(transfers: &[TransferSegment]) {
        let mut orders: Vec<u32> = transfers.iter().map(|t| t.order).collect();
        orders.sort_unstable();
        let expected: Vec<u32> = (0..to_order(transfers.len())).collect();
        assert_eq!(orders, expected);
    }

    fn pickups(transfers: &[TransferSegment]) -> Vec<String> {
        transfers.iter().map(|t| t.pickup_location.clone()).collect()
    }

    #[test]
    fn test_empty_transfer_is_taxi() {
        let transfer = TransferSegment::empty(2);
        assert_eq!(transfer.kind, TransferType::Taxi);
        assert_eq!(transfer.order, 2);
        assert!(transfer.pickup_location.is_empty());
    }

    #[test]
    fn test_add_transfer_appends_with_next_order() {
        let group = group_of(2);
        let (group, id) = add_transfer(&group);
        assert_eq!(group.len(), 3);
        assert_eq!(group[2].id, id);
        assert_eq!(group[2].order, 2);
        assert_dense(&group);
    }

    #[test]
    fn test_add_transfer_to_empty_group() {
        let (group, _) = add_transfer(&[]);
        assert_eq!(group.len(), 1);
        assert_eq!(group[0].order, 0);
    }

    #[test]
    fn test_remove_transfer_renumbers() {
        let group = group_of(4);
        let removed_id = group[1].id.clone();
        let group = remove_transfer(&group, &removed_id);

        assert_eq!(group.len(), 3);
        assert_eq!(pickups(&group), vec!["P0", "P2", "P3"]);
        assert_dense(&group);
    }

    #[test]
    fn test_remove_unknown_id_keeps_group() {
        let group = group_of(2);
        let group = remove_transfer(&group, "missing");
        assert_eq!(group.len(), 2);
        assert_dense(&group);
    }

    #[test]
    fn test_remove_from_empty_group() {
        let group = remove_transfer(&[], "anything");
        assert!(group.is_empty());
    }

    #[test]
    fn test_sparse_orders_are_sorted_then_densified() {
        let mut group = group_of(3);
        group[0].order = 10;
        group[1].order = 4;
        group[2].order = 7;

        let group = remove_transfer(&group, "missing");

        assert_eq!(pickups(&group), vec!["P1", "P2", "P0"]);
        assert_dense(&group);
    }

    #[test]
    fn test_reorder_transfers() {
        let group = group_of(4);
        let group = reorder_transfers(&group, 0, 2);
        assert_eq!(pickups(&group), vec!["P1", "P2", "P0", "P3"]);
        assert_dense(&group);
        for (i, t) in group.iter().enumerate() {
            assert_eq!(t.order as usize, i);
        }
    }

    #[test]
    fn test_move_transfer_up_and_down() {
        let group = group_of(3);
        let group = move_transfer(&group, 2, MoveDirection::Up);
        assert_eq!(pickups(&group), vec!["P0", "P2", "P1"]);

        let group = move_transfer(&group, 0, MoveDirection::Down);
        assert_eq!(pickups(&group), vec!["P2", "P0", "P1"]);
        assert_dense(&group);
    }

    #[test]
    fn test_move_transfer_at_bounds_is_noop() {
        let group = group_of(3);
        let up = move_transfer(&group, 0, MoveDirection::Up);
        assert_eq!(pickups(&up), pickups(&group));
        let down = move_transfer(&group, 2, MoveDirection::Down);
        assert_eq!(pickups(&down), pickups(&group));
    }

    #[test]
    fn test_save_transfer_replaces_or_appends() {
        let group = group_of(2);
        let mut edited = group[0].clone();
        edited.company = Some("City Cabs".to_string());
        let group = save_transfer(&group, edited);
        assert_eq!(group.len(), 2);
        assert_eq!(group[0].company.as_deref(), Some("City Cabs"));

        let group = save_transfer(&group, TransferSegment::empty(99));
        assert_eq!(group.len(), 3);
        assert_eq!(group[2].order, 2);
        assert_dense(&group);
    }

    #[test]
    fn test_order_density_across_edit_sequence() {
        let mut group = Vec::new();
        for _ in 0..4 {
            group = add_transfer(&group).0;
            assert_dense(&group);
        }
        group = reorder_transfers(&group, 3, 0);
        assert_dense(&group);
        let id = group[1].id.clone();
        group = remove_transfer(&group, &id);
        assert_dense(&group);
        group = move_transfer(&group, 1, MoveDirection::Down);
        assert_dense(&group);
        assert_eq!(group.len(), 3);
    }
}
