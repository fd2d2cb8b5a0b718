//! Marker descriptions for the rendering surface.
//!
//! The map toolkit itself is out of scope; this module only derives the
//! data a renderer needs for each visible record.

use geo::Coord;

use crate::{ParkingSpot, placement};

/// One map marker: position, label text, and icon asset name.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Marker {
    /// Marker position (`x = longitude`, `y = latitude`).
    pub position: Coord<f64>,
    /// Title line, taken from the spot's address.
    pub title: String,
    /// Detail lines summarising capacity and placement.
    pub snippet: String,
    /// Icon asset name for the spot's placement category.
    pub icon: &'static str,
}

impl Marker {
    /// Derive the marker for one spot.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use rackmap_core::{Marker, ParkingSpot};
    ///
    /// let spot = ParkingSpot::new(
    ///     "7",
    ///     "GARAGE",
    ///     "42 Pine St",
    ///     3,
    ///     6,
    ///     Coord { x: -122.4, y: 37.8 },
    /// );
    /// let marker = Marker::for_spot(&spot);
    /// assert_eq!(marker.title, "42 Pine St");
    /// assert_eq!(marker.icon, "icon_garage");
    /// ```
    #[must_use]
    pub fn for_spot(spot: &ParkingSpot) -> Self {
        Self {
            position: spot.location,
            title: spot.address.clone(),
            snippet: format!(
                "Racks: {} | Spaces: {}\nPlacement: {}",
                spot.racks, spot.spaces, spot.placement
            ),
            icon: placement::icon_name(&spot.placement),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_lists_capacity_then_placement() {
        let spot = ParkingSpot::new(
            "7",
            "SIDEWALK",
            "42 Pine St",
            3,
            6,
            Coord { x: -122.4, y: 37.8 },
        );
        let marker = Marker::for_spot(&spot);
        assert_eq!(marker.snippet, "Racks: 3 | Spaces: 6\nPlacement: SIDEWALK");
        assert_eq!(marker.position, spot.location);
    }

    #[test]
    fn unrecognised_placement_falls_back_to_default_icon() {
        let spot = ParkingSpot::new("8", "LOBBY", "9 Oak St", 1, 1, Coord { x: 0.0, y: 0.0 });
        assert_eq!(Marker::for_spot(&spot).icon, "icon_default");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_for_the_rendering_surface() {
        let spot = ParkingSpot::new(
            "7",
            "GARAGE",
            "42 Pine St",
            3,
            6,
            Coord { x: -122.4, y: 37.8 },
        );
        let value = serde_json::to_value(Marker::for_spot(&spot)).expect("marker should serialize");
        assert_eq!(value["icon"], "icon_garage");
        assert_eq!(value["position"]["x"], -122.4);
        assert_eq!(value["position"]["y"], 37.8);
    }
}
