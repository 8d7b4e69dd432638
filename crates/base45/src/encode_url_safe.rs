//! URL-safe base45 encoding function.

use percent_encoding::utf8_percent_encode;

use crate::alphabet::URL_SAFE_SET;
use crate::encode;

/// Encodes a byte slice to a base45 string that is safe to embed in a URL.
///
/// The base45 output is percent-encoded: every character outside the
/// unreserved set `A-Z a-z 0-9 - . _ ~` becomes a `%XX` escape. Of the base45
/// alphabet this affects space, `$`, `%`, `*`, `+`, `/` and `:`.
///
/// # Example
///
/// ```
/// use base45::encode_url_safe;
///
/// assert_eq!(encode_url_safe(b"Hello!!"), "%2569%20VD92EX0");
/// assert_eq!(encode_url_safe(b""), "");
/// ```
pub fn encode_url_safe(uint8: &[u8]) -> String {
    utf8_percent_encode(&encode(uint8), URL_SAFE_SET).to_string()
}
