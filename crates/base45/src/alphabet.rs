//! The base45 alphabet and its lookup tables.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// Base45 alphabet, ordered by digit value.
pub const ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// Base45 alphabet as a byte array (used for byte-level operations and const evaluation).
pub const ALPHABET_BYTES: &[u8; 45] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// Radix of the encoding.
pub const BASE: u32 = 45;

/// Bytes escaped by the URL-safe variant: everything outside the RFC 3986
/// unreserved set.
pub const URL_SAFE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const INVALID: u8 = 0xff;

/// Reverse lookup table, indexed by byte.
static VALUES: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET_BYTES.len() {
        table[ALPHABET_BYTES[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Returns the alphabet character for a digit value, or `None` if `value >= 45`.
///
/// # Example
///
/// ```
/// use base45::char_of;
///
/// assert_eq!(char_of(0), Some('0'));
/// assert_eq!(char_of(36), Some(' '));
/// assert_eq!(char_of(45), None);
/// ```
pub fn char_of(value: u8) -> Option<char> {
    ALPHABET_BYTES.get(value as usize).map(|&c| c as char)
}

/// Returns the digit value of an alphabet character, or `None` if `byte` is
/// not part of the alphabet.
///
/// # Example
///
/// ```
/// use base45::value_of;
///
/// assert_eq!(value_of(b'Z'), Some(35));
/// assert_eq!(value_of(b'a'), None);
/// ```
pub fn value_of(byte: u8) -> Option<u8> {
    match VALUES[byte as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Character for a digit known to be below 45.
#[inline]
pub(crate) fn digit_char(value: u32) -> u8 {
    ALPHABET_BYTES[value as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_length() {
        assert_eq!(ALPHABET.len(), BASE as usize);
        assert_eq!(ALPHABET.as_bytes(), ALPHABET_BYTES);
    }

    #[test]
    fn test_no_duplicates() {
        let mut seen = [false; 256];
        for &c in ALPHABET_BYTES {
            assert!(!seen[c as usize], "duplicate character: {}", c as char);
            seen[c as usize] = true;
        }
    }

    #[test]
    fn test_lookup_both_directions() {
        for value in 0..45u8 {
            let c = char_of(value).unwrap();
            assert_eq!(value_of(c as u8), Some(value));
        }
    }

    #[test]
    fn test_non_members() {
        let members = ALPHABET_BYTES.iter().filter(|&&c| value_of(c).is_some()).count();
        let total = (0..=255u8).filter(|&c| value_of(c).is_some()).count();
        assert_eq!(members, 45);
        assert_eq!(total, 45);
        assert_eq!(value_of(b'a'), None);
        assert_eq!(value_of(b'='), None);
        assert_eq!(value_of(0xff), None);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(value_of(b' '), Some(36));
        assert_eq!(value_of(b'$'), Some(37));
        assert_eq!(value_of(b'%'), Some(38));
        assert_eq!(value_of(b'*'), Some(39));
        assert_eq!(value_of(b'+'), Some(40));
        assert_eq!(value_of(b'-'), Some(41));
        assert_eq!(value_of(b'.'), Some(42));
        assert_eq!(value_of(b'/'), Some(43));
        assert_eq!(value_of(b':'), Some(44));
    }
}
