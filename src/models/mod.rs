mod additional_travel;
pub mod id;
mod journey;
mod leg;
mod main_transport;
mod segment;
mod settings;
mod transfer;
mod transport_kind;

pub use additional_travel::{remove_additional, save_additional, sorted_by_date, AdditionalTravelSegment};
pub use journey::{JourneyDirection, JourneyTravel};
pub use leg::{renumber_legs, TransportLeg};
pub use main_transport::MainTransport;
pub use segment::{non_empty, non_empty_opt, SegmentRole, TravelSegment};
pub use settings::TravelSettings;
pub use transfer::{
    add_transfer, move_transfer, remove_transfer, renumber_transfers, reorder_transfers, save_transfer,
    sorted_transfers, MoveDirection, TransferSegment,
};
pub use transport_kind::{AdditionalTransportType, MainTransportType, SegmentType, TransferDirection, TransferType};
