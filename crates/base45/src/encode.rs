//! Base45 string encoding.

use crate::alphabet::{digit_char, BASE};
use crate::lengths::encoded_len;

/// Encodes a byte slice to a base45 string.
///
/// Each pair of bytes `[a, b]` is read as the big-endian number
/// `n = a * 256 + b` and written as three digits `c d e` with
/// `n = c + d * 45 + e * 45 * 45`, least significant first. A trailing odd
/// byte is written as two digits. Empty input yields an empty string.
///
/// # Example
///
/// ```
/// use base45::encode;
///
/// assert_eq!(encode(b"AB"), "BB8");
/// assert_eq!(encode(b"base-45"), "UJCLQE7W581");
/// assert_eq!(encode(b""), "");
/// ```
pub fn encode(uint8: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(uint8.len()));

    let mut pairs = uint8.chunks_exact(2);
    for pair in &mut pairs {
        let n = u16::from_be_bytes([pair[0], pair[1]]) as u32;
        out.push(digit_char(n % BASE) as char);
        out.push(digit_char(n / BASE % BASE) as char);
        out.push(digit_char(n / (BASE * BASE) % BASE) as char);
    }

    if let [a] = *pairs.remainder() {
        let n = a as u32;
        out.push(digit_char(n % BASE) as char);
        out.push(digit_char(n / BASE % BASE) as char);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(encode(b""), "");
    }

    #[test]
    fn test_single_byte() {
        assert_eq!(encode(&[0]), "00");
        assert_eq!(encode(&[255]), "U5");
    }

    #[test]
    fn test_two_bytes() {
        assert_eq!(encode(b"AB"), "BB8");
        assert_eq!(encode(&[0, 0]), "000");
        assert_eq!(encode(&[255, 255]), "FGW");
    }

    #[test]
    fn test_odd_length() {
        assert_eq!(encode(b"Hello!!"), "%69 VD92EX0");
        assert_eq!(encode(b"ietf!"), "QED8WEX0");
    }
}
