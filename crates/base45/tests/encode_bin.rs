//! Tests for binary base45 encoding (encode_bin).

use base45::{encode, encode_bin, encoded_len};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let mut dest = vec![0u8; encoded_len(blob.len())];
        let length = encode_bin(&blob, 0, blob.len(), &mut dest, 0);
        assert_eq!(length, dest.len());
        assert_eq!(dest, encode(&blob).into_bytes());
    }
}

#[test]
fn with_offset() {
    let mut dest = vec![b'x'; 4 + encoded_len(7)];
    let length = encode_bin(b"Hello!!", 0, 7, &mut dest, 4);
    assert_eq!(length, 11);
    assert_eq!(&dest, b"xxxx%69 VD92EX0");
}

#[test]
fn sub_range() {
    let mut dest = vec![0u8; 16];
    let length = encode_bin(b"__base-45__", 2, 7, &mut dest, 0);
    assert_eq!(&dest[..length], b"UJCLQE7W581");
}

#[test]
#[should_panic]
fn destination_too_small() {
    let mut dest = vec![0u8; 2];
    encode_bin(b"AB", 0, 2, &mut dest, 0);
}
