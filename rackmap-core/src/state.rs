//! View state for the map screen, driven by explicit events.
//!
//! The container replaces the original ambient observable object: callers
//! hold a [`MapState`], feed it [`MapEvent`]s, and snapshot it (it is
//! `Clone`) for whatever rendering mechanism they use.

use crate::{FilterState, ParkingSpot, Placement};

/// An event mutating the map view state.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// A reload attempt started.
    ReloadStarted,
    /// A reload attempt completed with a fresh record list.
    ReloadCompleted(Vec<ParkingSpot>),
    /// A reload attempt failed with a user-facing message.
    ReloadFailed(String),
    /// A filter chip was toggled.
    FilterToggled(Placement),
    /// All filter selections were cleared.
    FiltersCleared,
}

/// Snapshot of everything the map screen renders from.
///
/// # Examples
/// ```
/// use rackmap_core::{MapEvent, MapState};
///
/// let mut state = MapState::new();
/// state.apply(MapEvent::ReloadStarted);
/// assert!(state.loading);
/// state.apply(MapEvent::ReloadCompleted(Vec::new()));
/// assert!(!state.loading);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapState {
    /// The full record list from the most recent successful reload.
    pub spots: Vec<ParkingSpot>,
    /// Active placement selections.
    pub filters: FilterState,
    /// Whether a reload is in flight.
    pub loading: bool,
    /// User-facing message from the most recent failed reload.
    pub error: Option<String>,
}

impl MapState {
    /// Construct the initial state: no records, no filters, not loading.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event.
    ///
    /// Completions are applied in arrival order with no generation guard:
    /// when reloads overlap, the last completion to arrive wins. A
    /// successful reload replaces the record list wholesale; a failed one
    /// keeps the previous list and only records the message. Filter events
    /// never touch the record list.
    pub fn apply(&mut self, event: MapEvent) {
        match event {
            MapEvent::ReloadStarted => {
                self.loading = true;
                self.error = None;
            }
            MapEvent::ReloadCompleted(spots) => {
                self.loading = false;
                self.error = None;
                self.spots = spots;
            }
            MapEvent::ReloadFailed(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            MapEvent::FilterToggled(placement) => self.filters.toggle(placement),
            MapEvent::FiltersCleared => self.filters.clear(),
        }
    }

    /// The records the map should currently plot, in list order.
    pub fn visible_spots(&self) -> impl Iterator<Item = &ParkingSpot> + '_ {
        self.filters.visible(&self.spots)
    }
}
