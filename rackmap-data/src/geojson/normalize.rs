//! Mapping raw features onto domain records.

use geo::Coord;
use log::debug;
use rackmap_core::{ParkingSpot, UNKNOWN_ADDRESS, UNKNOWN_PLACEMENT};

use super::types::{Feature, FeatureCollection};

/// Map every feature that yields a full coordinate pair onto a
/// [`ParkingSpot`], preserving input order.
///
/// Features without usable coordinates are dropped silently; incomplete
/// records are a normal occurrence in the upstream dataset, not an
/// error. Deterministic for a given input, except that records missing
/// an `objectid` receive a freshly generated identifier.
#[must_use]
pub fn normalize_features(collection: &FeatureCollection) -> Vec<ParkingSpot> {
    let total = collection.features.len();
    let spots: Vec<ParkingSpot> = collection
        .features
        .iter()
        .filter_map(spot_from_feature)
        .collect();
    let dropped = total - spots.len();
    if dropped > 0 {
        debug!("dropped {dropped} features without a usable coordinate pair");
    }
    spots
}

fn spot_from_feature(feature: &Feature) -> Option<ParkingSpot> {
    let location = resolve_location(feature)?;
    let properties = &feature.properties;
    Some(ParkingSpot {
        id: properties.objectid.clone().unwrap_or_else(generated_id),
        placement: properties
            .placement
            .clone()
            .unwrap_or_else(|| UNKNOWN_PLACEMENT.to_owned()),
        address: properties
            .address
            .clone()
            .unwrap_or_else(|| UNKNOWN_ADDRESS.to_owned()),
        racks: parse_count(properties.racks.as_deref()),
        spaces: parse_count(properties.spaces.as_deref()),
        location,
    })
}

/// Geometry coordinates win; string `lat`/`lon` properties fill in
/// whichever axis is still missing. A geometry pair is only used when it
/// has exactly two elements.
fn resolve_location(feature: &Feature) -> Option<Coord<f64>> {
    let mut lat = None;
    let mut lon = None;
    if let Some(geometry) = &feature.geometry
        && let &[x, y] = geometry.coordinates.as_slice()
    {
        lon = Some(x);
        lat = Some(y);
    }
    let properties = &feature.properties;
    if lat.is_none() {
        lat = parse_axis(properties.lat.as_deref());
    }
    if lon.is_none() {
        lon = parse_axis(properties.lon.as_deref());
    }
    Some(Coord { x: lon?, y: lat? })
}

fn parse_axis(value: Option<&str>) -> Option<f64> {
    value.and_then(|raw| raw.parse().ok())
}

fn parse_count(value: Option<&str>) -> u32 {
    value.and_then(|raw| raw.parse().ok()).unwrap_or(0)
}

fn generated_id() -> String {
    format!("generated-{:016x}", rand::random::<u64>())
}
