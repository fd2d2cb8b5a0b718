//! The fixed placement vocabulary and its icon mapping.
//!
//! Filter chips and marker icons both draw from this list. Source records
//! keep their free-form placement string; this enum only describes the
//! six categories the map surface knows how to present.

use std::{fmt, str::FromStr};

use thiserror::Error;

const ICON_DEFAULT: &str = "icon_default";

/// A recognised placement category.
///
/// Parsing is case-insensitive against the upstream labels, so `"Garage"`
/// and `"GARAGE"` resolve to the same variant.
///
/// # Examples
/// ```
/// use rackmap_core::Placement;
///
/// assert_eq!(Placement::parse("garage cage"), Some(Placement::GarageCage));
/// assert_eq!(Placement::GarageCage.label(), "GARAGE CAGE");
/// assert_eq!(Placement::parse("LOBBY"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    /// Racks on the public sidewalk.
    Sidewalk,
    /// Racks inside a parking garage.
    Garage,
    /// A locked cage inside a garage.
    GarageCage,
    /// Racks in the roadway itself.
    Roadway,
    /// A converted kerbside parklet.
    Parklet,
    /// Racks on a private parcel.
    Parcel,
}

impl Placement {
    /// Every category, in the order the filter chips present them.
    pub const ALL: [Self; 6] = [
        Self::Sidewalk,
        Self::Garage,
        Self::GarageCage,
        Self::Roadway,
        Self::Parklet,
        Self::Parcel,
    ];

    /// The upstream label for this category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sidewalk => "SIDEWALK",
            Self::Garage => "GARAGE",
            Self::GarageCage => "GARAGE CAGE",
            Self::Roadway => "ROADWAY",
            Self::Parklet => "PARKLET",
            Self::Parcel => "PARCEL",
        }
    }

    /// The marker icon asset name for this category.
    #[must_use]
    pub const fn icon_name(self) -> &'static str {
        match self {
            Self::Sidewalk => "icon_sidewalk",
            Self::Garage => "icon_garage",
            Self::GarageCage => "icon_cage",
            Self::Roadway => "icon_roadway",
            Self::Parklet => "icon_parklet",
            Self::Parcel => "icon_parcel",
        }
    }

    /// Resolve a free-form placement value, ignoring ASCII case.
    ///
    /// Returns `None` for values outside the vocabulary.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|placement| placement.label().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Placement {
    type Err = UnknownPlacementError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| UnknownPlacementError {
            value: value.to_owned(),
        })
    }
}

/// Error returned when a value does not name a placement category.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{value:?} is not a known placement category")]
pub struct UnknownPlacementError {
    /// The rejected value.
    pub value: String,
}

/// Marker icon asset name for a free-form placement value.
///
/// Values outside the vocabulary fall back to the generic icon.
///
/// # Examples
/// ```
/// use rackmap_core::icon_name;
///
/// assert_eq!(icon_name("sidewalk"), "icon_sidewalk");
/// assert_eq!(icon_name("UNKNOWN"), "icon_default");
/// ```
#[must_use]
pub fn icon_name(placement: &str) -> &'static str {
    Placement::parse(placement).map_or(ICON_DEFAULT, Placement::icon_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("SIDEWALK", Placement::Sidewalk)]
    #[case("Garage", Placement::Garage)]
    #[case("garage cage", Placement::GarageCage)]
    #[case("ROADWAY", Placement::Roadway)]
    #[case("Parklet", Placement::Parklet)]
    #[case("parcel", Placement::Parcel)]
    fn parses_labels_case_insensitively(#[case] value: &str, #[case] expected: Placement) {
        assert_eq!(Placement::parse(value), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("LOBBY")]
    #[case("GARAGECAGE")]
    fn rejects_values_outside_vocabulary(#[case] value: &str) {
        assert_eq!(Placement::parse(value), None);
        assert!(value.parse::<Placement>().is_err());
    }

    #[rstest]
    fn every_category_has_a_distinct_icon() {
        let mut icons: Vec<&str> = Placement::ALL.iter().map(|p| p.icon_name()).collect();
        icons.sort_unstable();
        icons.dedup();
        assert_eq!(icons.len(), Placement::ALL.len());
    }

    #[rstest]
    fn unrecognised_placement_uses_default_icon() {
        assert_eq!(icon_name("UNKNOWN"), ICON_DEFAULT);
        assert_eq!(icon_name(""), ICON_DEFAULT);
    }
}
