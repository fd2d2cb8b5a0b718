//! Blob storage access.
//!
//! [`BlobSource`] abstracts "fetch one named blob in full": the HTTP
//! implementation covers bucket-style hosting, the directory
//! implementation covers local snapshots. Either returns the raw bytes or
//! a [`TransportError`]; interpreting the bytes is the caller's concern.

mod dir;
mod error;
mod http;

#[cfg(test)]
pub(crate) mod test_support;

pub use dir::DirBlobSource;
pub use error::TransportError;
pub use http::{DEFAULT_USER_AGENT, HttpBlobSource};

use std::{fmt, ops::Deref};

use async_trait::async_trait;

/// Default payload ceiling: 10 MiB.
pub const DEFAULT_MAX_LEN: u64 = 10 * 1024 * 1024;

/// Path of a blob within its storage namespace.
///
/// # Examples
/// ```
/// # use rackmap_data::fetch::BlobPath;
/// let path = BlobPath::new("Bicycle_Parking_Racks_20251116.geojson");
/// assert!(path.as_ref().ends_with(".geojson"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobPath(String);

impl BlobPath {
    /// Construct a new [`BlobPath`] from an owned or borrowed string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Consume the wrapper and return the inner [`String`].
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for BlobPath {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for BlobPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for BlobPath {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for BlobPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read access to one blob store.
#[async_trait(?Send)]
pub trait BlobSource {
    /// Human-readable identity of the backing store, used in diagnostics.
    fn origin(&self) -> &str;

    /// Fetch the full contents of the blob at `path`.
    ///
    /// Payloads larger than `max_len` bytes fail with
    /// [`TransportError::TooLarge`]. A present-but-empty blob yields an
    /// empty buffer, not an error; the load pipeline decides what an
    /// empty payload means. Single attempt: no retry, no caching, no
    /// partial delivery.
    async fn fetch(&self, path: &BlobPath, max_len: u64) -> Result<Vec<u8>, TransportError>;
}

#[cfg(test)]
mod tests;
