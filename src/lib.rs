//! Facade crate for the rackmap engine.
//!
//! This crate re-exports the core domain types: the normalized parking spot
//! record, the placement vocabulary, and the filter and map view state. The
//! fetch and normalization pipeline lives in the `rackmap-data` crate.

#![forbid(unsafe_code)]

pub use rackmap_core::{
    FilterState, MapEvent, MapState, Marker, ParkingSpot, Placement, UNKNOWN_ADDRESS,
    UNKNOWN_PLACEMENT, UnknownPlacementError, icon_name,
};
