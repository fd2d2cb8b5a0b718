//! HTTP implementation of [`BlobSource`].

use std::io;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use reqwest::header::USER_AGENT;
use url::Url;

use super::{BlobPath, BlobSource, TransportError};

/// User agent sent with every storage request.
pub const DEFAULT_USER_AGENT: &str = "rackmap-fetch/0.1";

/// Blob source backed by bucket-style HTTP hosting.
///
/// Objects are addressed as `{base_url}/{path}`. The response body is
/// buffered whole, bounded by the caller's ceiling; oversized payloads
/// are rejected before the buffer grows past the limit.
#[derive(Debug)]
pub struct HttpBlobSource {
    client: Client,
    base_url: String,
    user_agent: String,
}

impl HttpBlobSource {
    /// Construct an HTTP-backed blob source rooted at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("client builder only fails with invalid configuration");
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Override the default user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    fn object_url(&self, path: &BlobPath) -> Result<Url, TransportError> {
        let absolute = format!("{}/{}", self.base_url, path.as_ref());
        Url::parse(&absolute).map_err(move |err| TransportError::Network {
            url: absolute,
            source: io::Error::new(io::ErrorKind::InvalidInput, err),
        })
    }
}

#[async_trait(?Send)]
impl BlobSource for HttpBlobSource {
    fn origin(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, path: &BlobPath, max_len: u64) -> Result<Vec<u8>, TransportError> {
        let url = self.object_url(path)?;
        let response = self
            .client
            .get(url.clone())
            .header(USER_AGENT, self.user_agent.as_str())
            .send()
            .await
            .map_err(|err| convert_reqwest_error(err, url.as_str()))?
            .error_for_status()
            .map_err(|err| convert_reqwest_error(err, url.as_str()))?;

        if let Some(length) = response.content_length()
            && length > max_len
        {
            return Err(TransportError::TooLarge {
                url: url.as_str().to_owned(),
                limit: max_len,
            });
        }

        let mut payload = Vec::new();
        let mut body = response.bytes_stream();
        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(|err| convert_reqwest_error(err, url.as_str()))?;
            if payload.len() as u64 + chunk.len() as u64 > max_len {
                return Err(TransportError::TooLarge {
                    url: url.as_str().to_owned(),
                    limit: max_len,
                });
            }
            payload.extend_from_slice(&chunk);
        }
        Ok(payload)
    }
}

fn convert_reqwest_error(error: reqwest::Error, url: &str) -> TransportError {
    if let Some(status) = error.status() {
        return TransportError::Http {
            url: url.to_owned(),
            status: status.as_u16(),
            message: error.to_string(),
        };
    }

    let kind = if error.is_timeout() {
        io::ErrorKind::TimedOut
    } else {
        io::ErrorKind::Other
    };
    TransportError::Network {
        url: url.to_owned(),
        source: io::Error::new(kind, error),
    }
}
