//! Raw deserialization targets matching the upstream GeoJSON file.
//!
//! The upstream export delivers properties as strings even for numeric
//! fields, and geometry can be null for some records. Unlisted property
//! keys are ignored.

use serde::Deserialize;

/// Top-level GeoJSON object.
#[derive(Debug, Deserialize)]
pub struct FeatureCollection {
    /// Top-level type tag, nominally `FeatureCollection`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Features in file order.
    pub features: Vec<Feature>,
}

/// A single feature: optional geometry plus a property bag.
#[derive(Debug, Deserialize)]
pub struct Feature {
    /// Feature type tag, nominally `Feature`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Point geometry when present.
    #[serde(default)]
    pub geometry: Option<Geometry>,
    /// Property bag; required, but every key inside it is optional.
    pub properties: Properties,
}

/// Feature geometry; only two-element Point coordinates are used.
#[derive(Debug, Deserialize)]
pub struct Geometry {
    /// Geometry type tag, nominally `Point`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Coordinate pair as `[longitude, latitude]`.
    pub coordinates: Vec<f64>,
}

/// The property keys the normalizer reads.
#[derive(Debug, Default, Deserialize)]
pub struct Properties {
    /// Upstream object identifier.
    #[serde(default)]
    pub objectid: Option<String>,
    /// Street address.
    #[serde(default)]
    pub address: Option<String>,
    /// Free-form location description.
    #[serde(default)]
    pub location: Option<String>,
    /// Street name.
    #[serde(default)]
    pub street: Option<String>,
    /// Placement category label.
    #[serde(default)]
    pub placement: Option<String>,
    /// Rack count as a decimal string.
    #[serde(default)]
    pub racks: Option<String>,
    /// Space count as a decimal string.
    #[serde(default)]
    pub spaces: Option<String>,
    /// Latitude as a decimal string, used when geometry is absent.
    #[serde(default)]
    pub lat: Option<String>,
    /// Longitude as a decimal string, used when geometry is absent.
    #[serde(default)]
    pub lon: Option<String>,
}
