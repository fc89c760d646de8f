//! Normalize raw URL lines read from the input file.

/// Strips surrounding whitespace and the trailing `/` from a URL line.
///
/// Repeated trailing slashes (and whitespace between them) are all removed so
/// that `normalize_url(normalize_url(s)) == normalize_url(s)` for any input.
///
/// - `"http://a.com/"` → `"http://a.com"`
/// - `"  http://a.com  "` → `"http://a.com"`
/// - `""` → `""`
pub fn normalize_url(line: &str) -> &str {
    line.trim_start()
        .trim_end_matches(|c: char| c == '/' || c.is_whitespace())
}
