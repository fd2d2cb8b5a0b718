//! Fetching and normalization for the rackmap engine.
//!
//! Responsibilities:
//! - Fetch the bicycle-parking GeoJSON blob from object storage.
//! - Decode it with categorised diagnostics.
//! - Normalize features into `rackmap-core` records.
//!
//! Boundaries:
//! - Domain rules live in `rackmap-core`; this crate only produces them.
//! - One fetch is one attempt: no retry, no caching, no partial results.

#![forbid(unsafe_code)]

pub mod fetch;
pub mod geojson;
pub mod load;

pub use fetch::{
    BlobPath, BlobSource, DEFAULT_MAX_LEN, DirBlobSource, HttpBlobSource, TransportError,
};
pub use geojson::{DecodeCategory, DecodeError, decode_collection, normalize_features};
pub use load::{DEFAULT_MAX_SPOTS, LoadError, LoadOptions, load_spots};
