//! Base45 encoding and decoding utilities.
//!
//! Base45 packs two bytes into three characters drawn from the 45-symbol
//! alphanumeric set of QR codes, which makes it a denser fit for QR payloads
//! than base64. This crate provides:
//! - String encoding and decoding
//! - Binary variants that read from and write to byte slices
//! - A URL-safe variant that percent-encodes the encoded text
//!
//! # Example
//!
//! ```
//! use base45::{decode, encode};
//!
//! let encoded = encode(b"Hello!!");
//! assert_eq!(encoded, "%69 VD92EX0");
//! assert_eq!(decode(&encoded).unwrap(), b"Hello!!");
//! ```

mod alphabet;
mod decode;
mod decode_bin;
mod decode_url_safe;
mod encode;
mod encode_bin;
mod encode_url_safe;
mod lengths;

pub use alphabet::{char_of, value_of, ALPHABET, ALPHABET_BYTES, BASE, URL_SAFE_SET};
pub use decode::decode;
pub use decode_bin::decode_bin;
pub use decode_url_safe::decode_url_safe;
pub use encode::encode;
pub use encode_bin::encode_bin;
pub use encode_url_safe::encode_url_safe;
pub use lengths::{decoded_len, encoded_len};

use thiserror::Error;

/// Error type for base45 decoding.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Base45Error {
    /// Decoding was asked for an empty input.
    #[error("empty input")]
    EmptyInput,
    /// The input contains characters outside the base45 alphabet.
    #[error("invalid characters in encoded string")]
    InvalidEncodingCharacters,
    /// The input length is congruent to 1 modulo 3.
    #[error("invalid input length")]
    InvalidLength,
    /// A chunk decodes to a value that does not fit its byte group.
    #[error("encoded data overflows its byte group")]
    InvalidEncodedDataOverflow,
    /// The percent-escaping of a URL-safe input is malformed.
    #[error("invalid percent-escaping in URL-safe input")]
    InvalidUrlSafeEscaping,
}
