//! Binary base45 decoding function.

use crate::alphabet::{value_of, BASE};
use crate::lengths::decoded_len;
use crate::Base45Error;

/// Decodes base45 bytes from a source slice.
///
/// The input is checked as a whole before any digit is decoded: it must be
/// non-empty, consist only of alphabet characters, and have a length that is
/// not congruent to 1 modulo 3. Each three-character chunk must then decode
/// to at most `0xFFFF` and a trailing two-character chunk to at most `0xFF`.
///
/// # Arguments
///
/// * `view` - The source byte slice containing base45-encoded data.
/// * `offset` - The starting offset in the source slice.
/// * `length` - The number of bytes to decode.
///
/// # Returns
///
/// The decoded bytes, or an error if the input is invalid. No partial output
/// is returned on error.
///
/// # Panics
///
/// Panics if `offset + length` exceeds `view.len()`.
///
/// # Example
///
/// ```
/// use base45::decode_bin;
///
/// let encoded = b"xxxxBB8";
/// let decoded = decode_bin(encoded, 4, 3).unwrap();
/// assert_eq!(decoded, b"AB");
/// ```
pub fn decode_bin(view: &[u8], offset: usize, length: usize) -> Result<Vec<u8>, Base45Error> {
    let encoded = &view[offset..offset + length];

    if encoded.is_empty() {
        return Err(Base45Error::EmptyInput);
    }

    let digits = encoded
        .iter()
        .map(|&c| value_of(c).map(u32::from))
        .collect::<Option<Vec<u32>>>()
        .ok_or(Base45Error::InvalidEncodingCharacters)?;

    let buffer_length = decoded_len(digits.len()).ok_or(Base45Error::InvalidLength)?;
    let mut buf = Vec::with_capacity(buffer_length);

    let mut triples = digits.chunks_exact(3);
    for triple in &mut triples {
        let n = triple[0] + triple[1] * BASE + triple[2] * BASE * BASE;
        let n = u16::try_from(n).map_err(|_| Base45Error::InvalidEncodedDataOverflow)?;
        buf.extend_from_slice(&n.to_be_bytes());
    }

    if let [c, d] = *triples.remainder() {
        let n = u8::try_from(c + d * BASE).map_err(|_| Base45Error::InvalidEncodedDataOverflow)?;
        buf.push(n);
    }

    Ok(buf)
}
