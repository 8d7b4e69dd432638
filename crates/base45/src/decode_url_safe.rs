//! URL-safe base45 decoding function.

use percent_encoding::percent_decode_str;

use crate::decode_bin;
use crate::Base45Error;

/// Decodes a percent-encoded base45 string, as produced by
/// [`encode_url_safe`](crate::encode_url_safe).
///
/// Escapes are resolved first and the result is decoded as base45. A `+` is
/// taken literally (it is a base45 character), not as an encoded space.
///
/// # Errors
///
/// - [`Base45Error::EmptyInput`] if `encoded` is empty, before any unescaping.
/// - [`Base45Error::InvalidUrlSafeEscaping`] if a `%` is not followed by two hex digits.
/// - Any error of [`decode`](crate::decode) for the unescaped text.
///
/// # Example
///
/// ```
/// use base45::decode_url_safe;
///
/// assert_eq!(decode_url_safe("%2569%20VD92EX0").unwrap(), b"Hello!!");
/// ```
pub fn decode_url_safe(encoded: &str) -> Result<Vec<u8>, Base45Error> {
    if encoded.is_empty() {
        return Err(Base45Error::EmptyInput);
    }

    if !has_valid_escapes(encoded.as_bytes()) {
        return Err(Base45Error::InvalidUrlSafeEscaping);
    }

    let unescaped: Vec<u8> = percent_decode_str(encoded).collect();
    decode_bin(&unescaped, 0, unescaped.len())
}

/// `percent_decode_str` passes malformed escapes through untouched, so they
/// are rejected up front.
fn has_valid_escapes(bytes: &[u8]) -> bool {
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match bytes.get(i + 1..i + 3) {
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}
