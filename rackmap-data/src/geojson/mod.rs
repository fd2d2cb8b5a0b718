//! GeoJSON decoding and normalization for bicycle-parking payloads.

mod decode;
mod normalize;
mod types;

pub use decode::{DecodeCategory, DecodeError, decode_collection};
pub use normalize::normalize_features;
pub use types::{Feature, FeatureCollection, Geometry, Properties};
