//! HTTP GET boundary used by the request timer.
//!
//! The timer only depends on the [`Fetcher`] trait. [`CurlFetcher`] is the
//! libcurl implementation used by the CLI; tests plug in scripted fetchers.

mod classify;
mod easy;

pub use classify::{classify, classify_curl_error, FailureKind};
pub use easy::CurlFetcher;

use thiserror::Error;

use crate::url_model::UrlError;

/// Outcome of a GET whose status was 2xx and whose body was fully read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u32,
    /// Bytes of response body consumed.
    pub body_bytes: u64,
}

/// Per-request failure. Never fatal to a run.
#[derive(Debug, Error)]
pub enum FetchError {
    /// URL was blank, unparseable, or rejected by the client before sending.
    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    /// Response arrived with a non-2xx status.
    #[error("GET {url} returned HTTP {status}")]
    Status { url: String, status: u32 },
    /// Curl reported a transport error (DNS, connect, TLS, reset, ...).
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
}

impl FetchError {
    pub fn invalid_url(url: &str, err: &UrlError) -> Self {
        FetchError::InvalidUrl {
            url: url.to_string(),
            reason: err.to_string(),
        }
    }

    /// Maps a curl error, treating malformed URL and unsupported protocol
    /// as `InvalidUrl` rather than transport failures.
    pub fn from_curl(url: &str, source: curl::Error) -> Self {
        if source.is_url_malformed() || source.is_unsupported_protocol() {
            return FetchError::InvalidUrl {
                url: url.to_string(),
                reason: source.description().to_string(),
            };
        }
        FetchError::Transport {
            url: url.to_string(),
            source,
        }
    }

    /// The URL the failed request targeted (may be empty for blank lines).
    pub fn url(&self) -> &str {
        match self {
            FetchError::InvalidUrl { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Transport { url, .. } => url,
        }
    }

    /// HTTP status, when a response was received.
    pub fn status(&self) -> Option<u32> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A GET capability: sends the request, reads the whole body, and fails on
/// any non-2xx status with [`FetchError::Status`].
pub trait Fetcher {
    fn get(&mut self, url: &str) -> Result<FetchResponse, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_exposes_code_and_url() {
        let e = FetchError::Status {
            url: "http://a.com/missing".to_string(),
            status: 404,
        };
        assert_eq!(e.status(), Some(404));
        assert_eq!(e.url(), "http://a.com/missing");
        assert_eq!(e.to_string(), "GET http://a.com/missing returned HTTP 404");
    }

    #[test]
    fn malformed_curl_error_becomes_invalid_url() {
        // CURLE_URL_MALFORMAT
        let e = FetchError::from_curl("http//x", curl::Error::new(3));
        assert!(matches!(e, FetchError::InvalidUrl { .. }));
        assert_eq!(e.status(), None);
    }

    #[test]
    fn connect_curl_error_is_transport() {
        // CURLE_COULDNT_CONNECT
        let e = FetchError::from_curl("http://127.0.0.1:1", curl::Error::new(7));
        assert!(matches!(e, FetchError::Transport { .. }));
        assert_eq!(e.url(), "http://127.0.0.1:1");
    }

    #[test]
    fn invalid_url_from_blank_line() {
        let e = FetchError::invalid_url("", &UrlError::Empty);
        assert_eq!(e.url(), "");
        assert_eq!(e.to_string(), "invalid url \"\": empty url");
    }
}
