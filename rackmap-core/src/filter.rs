//! Set-membership filtering over the placement vocabulary.

use std::collections::HashSet;

use crate::{ParkingSpot, Placement};

/// The set of active placement selections.
///
/// An empty set is the default state and makes every record visible. A
/// non-empty set makes a record visible only when its placement value
/// resolves (case-insensitively) to a selected category; records whose
/// placement falls outside the vocabulary are excluded whenever any
/// selection is active.
///
/// Filter state is independent of the record list: toggling selections
/// never triggers a refetch.
///
/// # Examples
/// ```
/// use rackmap_core::{FilterState, Placement};
///
/// let mut filters = FilterState::new();
/// filters.toggle(Placement::Garage);
/// assert!(filters.contains(Placement::Garage));
/// filters.toggle(Placement::Garage);
/// assert!(filters.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    active: HashSet<Placement>,
}

impl FilterState {
    /// Construct the empty (show-all) state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no selection is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Whether `placement` is currently selected.
    #[must_use]
    pub fn contains(&self, placement: Placement) -> bool {
        self.active.contains(&placement)
    }

    /// Toggle a single selection: remove it when present, add it otherwise.
    pub fn toggle(&mut self, placement: Placement) {
        if !self.active.remove(&placement) {
            self.active.insert(placement);
        }
    }

    /// Reset to the empty (show-all) state.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Whether a record passes the active selections.
    #[must_use]
    pub fn is_visible(&self, spot: &ParkingSpot) -> bool {
        if self.active.is_empty() {
            return true;
        }
        Placement::parse(&spot.placement)
            .is_some_and(|placement| self.active.contains(&placement))
    }

    /// The visible subset of `spots`, preserving input order.
    pub fn visible<'a>(
        &'a self,
        spots: &'a [ParkingSpot],
    ) -> impl Iterator<Item = &'a ParkingSpot> + 'a {
        spots.iter().filter(move |spot| self.is_visible(spot))
    }
}
