//! Binary base45 encoding function.

use crate::alphabet::{digit_char, BASE};

/// Encodes bytes to a destination byte slice as base45 ASCII.
///
/// # Arguments
///
/// * `uint8` - The source bytes to encode.
/// * `start` - The starting index in the source slice.
/// * `length` - The number of bytes to encode.
/// * `dest` - The destination byte slice.
/// * `offset` - The starting offset in the destination slice.
///
/// # Returns
///
/// The number of bytes written to the destination.
///
/// # Panics
///
/// Panics if the source range is out of bounds or `dest` has fewer than
/// [`encoded_len(length)`](crate::encoded_len) bytes after `offset`.
///
/// # Example
///
/// ```
/// use base45::encode_bin;
///
/// let data = b"Hello!!";
/// let mut dest = vec![0u8; 100];
/// let len = encode_bin(data, 0, data.len(), &mut dest, 0);
/// assert_eq!(&dest[..len], b"%69 VD92EX0");
/// ```
pub fn encode_bin(
    uint8: &[u8],
    start: usize,
    length: usize,
    dest: &mut [u8],
    offset: usize,
) -> usize {
    let src = &uint8[start..start + length];
    let mut j = offset;

    let mut pairs = src.chunks_exact(2);
    for pair in &mut pairs {
        let n = u16::from_be_bytes([pair[0], pair[1]]) as u32;
        dest[j] = digit_char(n % BASE);
        dest[j + 1] = digit_char(n / BASE % BASE);
        dest[j + 2] = digit_char(n / (BASE * BASE) % BASE);
        j += 3;
    }

    if let [a] = *pairs.remainder() {
        let n = a as u32;
        dest[j] = digit_char(n % BASE);
        dest[j + 1] = digit_char(n / BASE % BASE);
        j += 2;
    }

    j - offset
}
