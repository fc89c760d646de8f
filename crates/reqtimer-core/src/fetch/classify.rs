//! Classify per-request failures for logging and run summaries.

use std::fmt;

use super::FetchError;

/// Coarse failure category of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Blank, unparseable or unsupported URL; nothing was sent.
    InvalidUrl,
    /// Server answered with a non-2xx status.
    HttpStatus(u32),
    /// Operation timed out (only possible through libcurl defaults).
    Timeout,
    /// Network-level failure (DNS, refused, reset, ...).
    Connection,
    /// Anything else curl reported (TLS, protocol, ...).
    Other,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid-url"),
            FailureKind::HttpStatus(code) => write!(f, "http-{}", code),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Connection => write!(f, "connection"),
            FailureKind::Other => write!(f, "other"),
        }
    }
}

/// Classify a curl error.
pub fn classify_curl_error(e: &curl::Error) -> FailureKind {
    if e.is_url_malformed() || e.is_unsupported_protocol() {
        return FailureKind::InvalidUrl;
    }
    if e.is_operation_timedout() {
        return FailureKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return FailureKind::Connection;
    }
    FailureKind::Other
}

pub fn classify(e: &FetchError) -> FailureKind {
    match e {
        FetchError::InvalidUrl { .. } => FailureKind::InvalidUrl,
        FetchError::Status { status, .. } => FailureKind::HttpStatus(*status),
        FetchError::Transport { source, .. } => classify_curl_error(source),
    }
}
