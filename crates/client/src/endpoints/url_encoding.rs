//! URL encoding utilities for constructing safe API paths.
//!
//! Label names are free text: `good first issue`, `area/cli`, `?` and emoji
//! all occur in practice. Each name is interpolated into a single path
//! segment, so anything that would change the path structure is encoded.
//!
//! # Example
//!
//! ```
//! use gitlabel_client::endpoints::url_encoding::encode_path_segment;
//!
//! let encoded = encode_path_segment("area/cli");
//! assert_eq!(encoded, "area%2Fcli");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments.
///
/// Based on RFC 3986 section 3.3:
/// - Space, quotes, angle brackets, backtick: problematic in URLs
/// - Percent: must be encoded to prevent double-decoding
/// - Slash: must be encoded to stay within one segment
/// - Question mark and hash: start the query and fragment
/// - Braces, brackets, pipe, backslash, caret: rejected by some proxies
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for use as a single URL path segment.
///
/// # Examples
///
/// ```
/// use gitlabel_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("bug"), "bug");
/// assert_eq!(encode_path_segment("good first issue"), "good%20first%20issue");
/// assert_eq!(encode_path_segment("100%"), "100%25");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
