//! Base45 string decoding.

use crate::decode_bin::decode_bin;
use crate::Base45Error;

/// Decodes a base45 string to bytes.
///
/// Unlike [`encode`](crate::encode), which accepts empty input, decoding an
/// empty string fails with [`Base45Error::EmptyInput`].
///
/// # Errors
///
/// - [`Base45Error::EmptyInput`] if `encoded` is empty.
/// - [`Base45Error::InvalidEncodingCharacters`] if any character is outside the alphabet.
/// - [`Base45Error::InvalidLength`] if the length is congruent to 1 modulo 3.
/// - [`Base45Error::InvalidEncodedDataOverflow`] if a chunk decodes past its byte group.
///
/// # Example
///
/// ```
/// use base45::{decode, Base45Error};
///
/// assert_eq!(decode("QED8WEX0").unwrap(), b"ietf!");
/// assert_eq!(decode("GGW"), Err(Base45Error::InvalidEncodedDataOverflow));
/// ```
pub fn decode(encoded: &str) -> Result<Vec<u8>, Base45Error> {
    decode_bin(encoded.as_bytes(), 0, encoded.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(decode(""), Err(Base45Error::EmptyInput));
    }

    #[test]
    fn test_max_pair() {
        assert_eq!(decode("FGW").unwrap(), [255, 255]);
    }

    #[test]
    fn test_overflow() {
        assert_eq!(decode("GGW"), Err(Base45Error::InvalidEncodedDataOverflow));
        assert_eq!(decode("::"), Err(Base45Error::InvalidEncodedDataOverflow));
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(decode("BBé"), Err(Base45Error::InvalidEncodingCharacters));
    }
}
