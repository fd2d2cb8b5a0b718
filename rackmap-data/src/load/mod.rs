//! The fetch-and-normalize pipeline behind the map screen.

use log::{debug, info, warn};
use rackmap_core::ParkingSpot;
use thiserror::Error;

use crate::fetch::{BlobPath, BlobSource, DEFAULT_MAX_LEN, TransportError};
use crate::geojson::{DecodeError, decode_collection, normalize_features};

/// Default cap on the number of records returned from one load.
///
/// There is no scalable rendering strategy for the full dataset yet, so
/// the pipeline keeps the first records encountered and discards the
/// rest. An explicit truncation, not an invariant.
pub const DEFAULT_MAX_SPOTS: usize = 2000;

/// Options controlling one load attempt.
///
/// # Examples
/// ```
/// use rackmap_data::load::LoadOptions;
///
/// let options = LoadOptions::new().with_max_spots(500).with_max_len(1024);
/// assert_eq!(options.max_spots, 500);
/// assert_eq!(options.max_len, 1024);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Payload ceiling passed to the blob source.
    pub max_len: u64,
    /// Cap on the number of records returned.
    pub max_spots: usize,
}

impl LoadOptions {
    /// Construct options with the default ceiling and cap.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
            max_spots: DEFAULT_MAX_SPOTS,
        }
    }

    /// Override the payload ceiling.
    #[must_use]
    pub const fn with_max_len(mut self, max_len: u64) -> Self {
        self.max_len = max_len;
        self
    }

    /// Override the record cap.
    #[must_use]
    pub const fn with_max_spots(mut self, max_spots: usize) -> Self {
        self.max_spots = max_spots;
        self
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors terminating one load attempt.
///
/// Every variant is terminal for the attempt: no partial list is
/// produced, and any previously loaded list stays in place on the
/// caller's side.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    /// The blob fetch failed; the transport error is surfaced verbatim.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The fetch succeeded but returned zero bytes.
    #[error("storage returned an empty payload for {path}")]
    EmptyPayload {
        /// The requested blob path.
        path: BlobPath,
    },
    /// The payload was fetched but could not be decoded.
    #[error("failed to decode GeoJSON payload: {0}")]
    Decode(#[from] DecodeError),
}

/// Fetch the blob at `path` from `source` and normalize it into parking
/// spots.
///
/// # Errors
/// See [`LoadError`]; failures leave no partial result.
///
/// # Examples
/// ```no_run
/// use rackmap_data::fetch::{BlobPath, DirBlobSource};
/// use rackmap_data::load::{LoadOptions, load_spots};
///
/// # async fn example() -> Result<(), rackmap_data::load::LoadError> {
/// let source = DirBlobSource::new("snapshots");
/// let path = BlobPath::new("Bicycle_Parking_Racks_20251116.geojson");
/// let spots = load_spots(&source, &path, LoadOptions::new()).await?;
/// log::info!("loaded {} spots", spots.len());
/// # Ok(())
/// # }
/// ```
pub async fn load_spots<S: BlobSource + ?Sized>(
    source: &S,
    path: &BlobPath,
    options: LoadOptions,
) -> Result<Vec<ParkingSpot>, LoadError> {
    let payload = source.fetch(path, options.max_len).await?;
    if payload.is_empty() {
        return Err(LoadError::EmptyPayload { path: path.clone() });
    }
    debug!(
        "fetched {} bytes from {}/{}",
        payload.len(),
        source.origin(),
        path
    );
    let collection = decode_collection(&payload)
        .inspect_err(|err| warn!("decode failed: {err}; payload starts with {:?}", err.preview))?;
    info!("decoded {} features", collection.features.len());
    let mut spots = normalize_features(&collection);
    if spots.len() > options.max_spots {
        warn!(
            "keeping the first {} of {} normalized spots",
            options.max_spots,
            spots.len()
        );
        spots.truncate(options.max_spots);
    }
    info!("mapped {} parking spots", spots.len());
    Ok(spots)
}

#[cfg(test)]
mod tests;
