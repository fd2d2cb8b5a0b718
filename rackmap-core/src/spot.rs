//! The normalized bicycle-parking record.

use geo::Coord;

/// Placement value substituted when the source record carries none.
pub const UNKNOWN_PLACEMENT: &str = "UNKNOWN";

/// Address substituted when the source record carries none.
pub const UNKNOWN_ADDRESS: &str = "Unknown address";

/// One bicycle-parking location.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. Every
/// constructed spot has both coordinates; records that cannot resolve a
/// full coordinate pair are dropped during normalization and never reach
/// this type.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use rackmap_core::ParkingSpot;
///
/// let spot = ParkingSpot::new(
///     "1001",
///     "SIDEWALK",
///     "123 Market St",
///     2,
///     4,
///     Coord { x: -122.4, y: 37.77 },
/// );
///
/// assert_eq!(spot.latitude(), 37.77);
/// assert_eq!(spot.longitude(), -122.4);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParkingSpot {
    /// Upstream object identifier, or a generated value when absent.
    ///
    /// Uniqueness across one payload is not enforced.
    pub id: String,
    /// Free-form placement category, e.g. `SIDEWALK` or `GARAGE`.
    pub placement: String,
    /// Street address of the rack.
    pub address: String,
    /// Number of racks installed at the location.
    pub racks: u32,
    /// Number of bicycle spaces the racks provide.
    pub spaces: u32,
    /// Geospatial position (`x = longitude`, `y = latitude`).
    pub location: Coord<f64>,
}

impl ParkingSpot {
    /// Construct a `ParkingSpot`.
    pub fn new(
        id: impl Into<String>,
        placement: impl Into<String>,
        address: impl Into<String>,
        racks: u32,
        spaces: u32,
        location: Coord<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            placement: placement.into(),
            address: address.into(),
            racks,
            spaces,
            location,
        }
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_follow_axis_convention() {
        let spot = ParkingSpot::new(
            "1",
            UNKNOWN_PLACEMENT,
            UNKNOWN_ADDRESS,
            0,
            0,
            Coord { x: -122.3, y: 37.5 },
        );
        assert_eq!(spot.latitude(), 37.5);
        assert_eq!(spot.longitude(), -122.3);
    }
}
