//! Local-directory implementation of [`BlobSource`].

use async_trait::async_trait;
use camino::Utf8PathBuf;
use cap_std::{ambient_authority, fs_utf8};

use super::{BlobPath, BlobSource, TransportError};

/// Blob source backed by a capability-scoped local directory.
///
/// Useful for offline snapshots of the storage bucket and for tests.
/// Reads cannot escape the configured root.
#[derive(Debug, Clone)]
pub struct DirBlobSource {
    root: Utf8PathBuf,
}

impl DirBlobSource {
    /// Construct a source rooted at the directory `root`.
    #[must_use]
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn describe(&self, path: &BlobPath) -> String {
        format!("{}/{}", self.root, path)
    }

    fn read_bounded(&self, path: &BlobPath, max_len: u64) -> Result<Vec<u8>, TransportError> {
        let url = self.describe(path);
        let dir = fs_utf8::Dir::open_ambient_dir(&self.root, ambient_authority()).map_err(
            |source| TransportError::Network {
                url: url.clone(),
                source,
            },
        )?;
        let metadata = dir
            .metadata(path.as_ref())
            .map_err(|source| TransportError::Network {
                url: url.clone(),
                source,
            })?;
        if metadata.len() > max_len {
            return Err(TransportError::TooLarge {
                url,
                limit: max_len,
            });
        }
        dir.read(path.as_ref())
            .map_err(|source| TransportError::Network { url, source })
    }
}

#[async_trait(?Send)]
impl BlobSource for DirBlobSource {
    fn origin(&self) -> &str {
        self.root.as_str()
    }

    async fn fetch(&self, path: &BlobPath, max_len: u64) -> Result<Vec<u8>, TransportError> {
        self.read_bounded(path, max_len)
    }
}
