//! Length arithmetic shared by the encoder and decoder.

/// Returns the exact encoded length for `length` input bytes.
///
/// Every pair of bytes becomes three characters and a trailing odd byte
/// becomes two.
///
/// # Example
///
/// ```
/// use base45::encoded_len;
///
/// assert_eq!(encoded_len(0), 0);
/// assert_eq!(encoded_len(1), 2);
/// assert_eq!(encoded_len(7), 11);
/// ```
pub fn encoded_len(length: usize) -> usize {
    (length / 2) * 3 + (length % 2) * 2
}

/// Returns the decoded length for `length` encoded characters, or `None` if
/// no byte sequence encodes to that many characters.
///
/// # Example
///
/// ```
/// use base45::decoded_len;
///
/// assert_eq!(decoded_len(3), Some(2));
/// assert_eq!(decoded_len(11), Some(7));
/// assert_eq!(decoded_len(4), None);
/// ```
pub fn decoded_len(length: usize) -> Option<usize> {
    match length % 3 {
        0 => Some(length / 3 * 2),
        2 => Some(length / 3 * 2 + 1),
        _ => None,
    }
}
