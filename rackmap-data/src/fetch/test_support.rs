//! Shared fixtures for fetch and pipeline tests.

use std::future::Future;

use async_trait::async_trait;

use super::{BlobPath, BlobSource, TransportError};

/// Stub [`BlobSource`] that serves one in-memory payload for every path.
#[derive(Debug, Clone)]
pub struct StubBlobSource {
    payload: Vec<u8>,
}

impl StubBlobSource {
    /// Construct a stub serving `payload`.
    pub fn new(payload: Vec<u8>) -> Self {
        Self { payload }
    }
}

#[async_trait(?Send)]
impl BlobSource for StubBlobSource {
    fn origin(&self) -> &str {
        "stub"
    }

    async fn fetch(&self, path: &BlobPath, max_len: u64) -> Result<Vec<u8>, TransportError> {
        if self.payload.len() as u64 > max_len {
            return Err(TransportError::TooLarge {
                url: format!("stub/{path}"),
                limit: max_len,
            });
        }
        Ok(self.payload.clone())
    }
}

/// Run `future` to completion on a throwaway current-thread runtime.
pub fn block_on_for_tests<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build test runtime")
        .block_on(future)
}
