//! URL line handling: normalization of raw input lines and validation
//! before a request is dispatched.

mod normalize;
mod validate;

pub use normalize::normalize_url;
pub use validate::{parse_request_url, UrlError};

/// Normalizes a raw input line and validates the result.
///
/// Returns the normalized string (what is sent on the wire) on success.
pub fn prepare(line: &str) -> Result<String, UrlError> {
    let normalized = normalize_url(line);
    parse_request_url(&normalized)?;
    Ok(normalized.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_accepts_http_and_https() {
        assert_eq!(prepare("http://a.com/\n").unwrap(), "http://a.com");
        assert_eq!(
            prepare("  https://cdn.example.com/path/x.iso \r\n").unwrap(),
            "https://cdn.example.com/path/x.iso"
        );
    }

    #[test]
    fn prepare_rejects_blank_line() {
        assert!(matches!(prepare("\n"), Err(UrlError::Empty)));
        assert!(matches!(prepare("   "), Err(UrlError::Empty)));
    }

    #[test]
    fn prepare_rejects_garbage() {
        assert!(matches!(prepare("not a url"), Err(UrlError::Parse { .. })));
    }
}
