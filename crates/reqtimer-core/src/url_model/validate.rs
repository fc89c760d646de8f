//! Validation of normalized URLs before dispatch.

use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum UrlError {
    /// The line was blank after normalization.
    #[error("empty url")]
    Empty,
    #[error("{url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("{url}: unsupported scheme {scheme:?}")]
    UnsupportedScheme { url: String, scheme: String },
}

/// Parses a normalized URL and checks it is an absolute `http`/`https` URL.
pub fn parse_request_url(normalized: &str) -> Result<Url, UrlError> {
    if normalized.is_empty() {
        return Err(UrlError::Empty);
    }
    let url = Url::parse(normalized).map_err(|source| UrlError::Parse {
        url: normalized.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(UrlError::UnsupportedScheme {
            url: normalized.to_string(),
            scheme: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_urls() {
        let u = parse_request_url("http://127.0.0.1:8080/ok").unwrap();
        assert_eq!(u.port(), Some(8080));
        assert_eq!(u.path(), "/ok");
        assert!(parse_request_url("https://example.com").is_ok());
    }

    #[test]
    fn relative_url_is_parse_error() {
        match parse_request_url("not a url") {
            Err(UrlError::Parse { url, source }) => {
                assert_eq!(url, "not a url");
                assert_eq!(source, url::ParseError::RelativeUrlWithoutBase);
            }
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn missing_host_is_parse_error() {
        assert!(matches!(
            parse_request_url("http:"),
            Err(UrlError::Parse { .. })
        ));
    }

    #[test]
    fn non_http_scheme_rejected() {
        match parse_request_url("ftp://files.example.com/a") {
            Err(UrlError::UnsupportedScheme { scheme, .. }) => assert_eq!(scheme, "ftp"),
            other => panic!("expected UnsupportedScheme, got {:?}", other),
        }
    }
}
