//! Core domain types for the rackmap engine.
//!
//! These models describe normalized bicycle-parking records and the
//! view-facing state derived from them. Everything here is a pure,
//! I/O-free transform; fetching and decoding live in `rackmap-data`.

#![forbid(unsafe_code)]

pub mod filter;
pub mod marker;
pub mod placement;
pub mod spot;
pub mod state;

pub use filter::FilterState;
pub use marker::Marker;
pub use placement::{Placement, UnknownPlacementError, icon_name};
pub use spot::{ParkingSpot, UNKNOWN_ADDRESS, UNKNOWN_PLACEMENT};
pub use state::{MapEvent, MapState};
