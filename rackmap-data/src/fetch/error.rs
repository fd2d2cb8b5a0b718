//! Transport-level fetch errors.

use std::io;

use thiserror::Error;

/// Errors encountered while fetching a blob.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransportError {
    /// The server rejected the request with an HTTP error status.
    #[error("request to {url} failed with status {status}: {message}")]
    Http {
        /// Fully qualified request URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Short error description supplied by the server.
        message: String,
    },
    /// The fetch failed with an I/O error.
    #[error("error reading {url}: {source}")]
    Network {
        /// Location that was being read.
        url: String,
        /// I/O error reported by the transport.
        source: io::Error,
    },
    /// The blob exceeds the configured payload ceiling.
    #[error("blob at {url} exceeds the {limit}-byte ceiling")]
    TooLarge {
        /// Location that was being read.
        url: String,
        /// The ceiling in bytes.
        limit: u64,
    },
}
