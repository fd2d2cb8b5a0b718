//! Decoding of fetched payloads into raw GeoJSON structures.

use std::fmt;

use serde_json::error::Category;
use thiserror::Error;

use super::types::FeatureCollection;

/// How much of the payload to keep for diagnostics on decode failure.
const PREVIEW_LEN: usize = 400;

/// Decode a fetched payload as a GeoJSON feature collection.
///
/// # Errors
/// Fails with a categorised [`DecodeError`] when the payload is not valid
/// JSON or does not match the expected structure.
///
/// # Examples
/// ```
/// use rackmap_data::geojson::{DecodeCategory, decode_collection};
///
/// let payload = br#"{"type":"FeatureCollection","features":[]}"#;
/// let collection = decode_collection(payload).unwrap();
/// assert!(collection.features.is_empty());
///
/// let err = decode_collection(br#"{"type":"NotAFeatureCollection"}"#).unwrap_err();
/// assert_eq!(err.category, DecodeCategory::MissingKey);
/// ```
pub fn decode_collection(payload: &[u8]) -> Result<FeatureCollection, DecodeError> {
    serde_json::from_slice(payload).map_err(|source| DecodeError::new(&source, payload))
}

/// A failed decode, categorised for diagnostics.
///
/// The decoder message names the offending field and position where
/// available; `preview` keeps the start of the payload so a log line can
/// show what was actually fetched.
#[derive(Debug, Error)]
#[error("{category}: {message}")]
pub struct DecodeError {
    /// Broad classification of the failure.
    pub category: DecodeCategory,
    /// Decoder message, including the offending field and position where
    /// available.
    pub message: String,
    /// 1-based line of the failure within the payload.
    pub line: usize,
    /// 1-based column of the failure within the payload.
    pub column: usize,
    /// Lossy UTF-8 preview of the start of the payload.
    pub preview: String,
}

impl DecodeError {
    fn new(source: &serde_json::Error, payload: &[u8]) -> Self {
        Self {
            category: categorise(source),
            message: source.to_string(),
            line: source.line(),
            column: source.column(),
            preview: preview(payload),
        }
    }
}

/// Broad classification of a decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeCategory {
    /// The payload is not valid JSON at all.
    MalformedData,
    /// A required key is absent.
    MissingKey,
    /// A value has the wrong JSON type.
    TypeMismatch,
    /// A value is null where one is required.
    UnexpectedNull,
}

impl fmt::Display for DecodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MalformedData => "malformed data",
            Self::MissingKey => "missing required key",
            Self::TypeMismatch => "type mismatch",
            Self::UnexpectedNull => "unexpected null",
        })
    }
}

// serde_json does not expose which data error occurred, only the rendered
// message; classify on its stable message prefixes.
fn categorise(source: &serde_json::Error) -> DecodeCategory {
    match source.classify() {
        Category::Io | Category::Syntax | Category::Eof => DecodeCategory::MalformedData,
        Category::Data => {
            let message = source.to_string();
            if message.starts_with("missing field") {
                DecodeCategory::MissingKey
            } else if message.starts_with("invalid type: null") {
                DecodeCategory::UnexpectedNull
            } else {
                DecodeCategory::TypeMismatch
            }
        }
    }
}

fn preview(payload: &[u8]) -> String {
    let head = payload
        .get(..PREVIEW_LEN.min(payload.len()))
        .unwrap_or_default();
    String::from_utf8_lossy(head).into_owned()
}
