use crate::random::{Csprng, HmacDrbg};

#[test]
fn drbg_same_key_same_stream() {
    let mut a = HmacDrbg::new(b"master-key-a");
    let mut b = HmacDrbg::new(b"master-key-a");
    let bytes_a: Vec<u8> = (0..100).map(|_| a.next_u8()).collect();
    let bytes_b: Vec<u8> = (0..100).map(|_| b.next_u8()).collect();
    assert_eq!(bytes_a, bytes_b);
}

#[test]
fn drbg_different_keys_diverge() {
    let mut a = HmacDrbg::new(b"master-key-a");
    let mut b = HmacDrbg::new(b"master-key-b");
    let bytes_a: Vec<u8> = (0..32).map(|_| a.next_u8()).collect();
    let bytes_b: Vec<u8> = (0..32).map(|_| b.next_u8()).collect();
    assert_ne!(bytes_a, bytes_b);
}

#[test]
fn drbg_refills_across_block_boundary() {
    // The internal buffer is 32 bytes; pulling 65 bytes forces two refills.
    // Re-deriving the same stream from scratch must agree with a stream
    // pulled byte-by-byte across that boundary.
    let mut a = HmacDrbg::new(b"boundary-test");
    let first_65: Vec<u8> = (0..65).map(|_| a.next_u8()).collect();

    let mut b = HmacDrbg::new(b"boundary-test");
    let mut second_65 = Vec::new();
    for _ in 0..65 {
        second_65.push(b.next_u8());
    }
    assert_eq!(first_65, second_65);
}

#[test]
fn next_float_unit_is_in_unit_range() {
    let mut rng = HmacDrbg::new(b"float-range-test");
    for _ in 0..1000 {
        let f = rng.next_float_unit();
        assert!((0.0..1.0).contains(&f));
    }
}
