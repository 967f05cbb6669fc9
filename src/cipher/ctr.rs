//! AES-256 in CTR mode, keyed and nonced entirely from the master key.
//!
//! CTR needs no padding and, because both directions of the stream cipher
//! are the same XOR operation, never calls the AES block cipher's inverse
//! direction. The nonce is derived from the key instead of being generated
//! and stored out of band, since encode and decode only ever share `K`.

use crate::{
    cipher::aes::{Aes256, BLOCK_BYTES, KEY_BYTES},
    hash::Sha256,
    mac::{Hmac, Mac},
};

/// Domain-separation label for deriving the CTR nonce from the master key.
const NONCE_CONTEXT: &[u8] = b"pointer-stego/ctr-nonce";

/// Derive the 8-byte big-endian initial counter value from `key`.
///
/// Using `HMAC_SHA256(key, NONCE_CONTEXT)` ties the nonce to the key so that
/// encode and decode (which only ever share `K`, never an out-of-band IV)
/// regenerate the identical keystream.
fn derive_nonce(key: &[u8; KEY_BYTES]) -> u64 {
    let tag = Hmac::new(Sha256::default()).mac(NONCE_CONTEXT, key);
    u64::from_be_bytes(tag[0..8].try_into().expect("8 bytes"))
}

/// Encrypt (or, symmetrically, decrypt) `data` with AES-256-CTR under `key`.
///
/// Because CTR is a stream cipher built from XOR, the same function serves
/// both directions: `decrypt(encrypt(data, key), key) == data`.
pub fn apply_keystream(mut data: Vec<u8>, key: &[u8; KEY_BYTES]) -> Vec<u8> {
    let aes = Aes256::default();
    let mut counter = derive_nonce(key);

    for chunk in data.chunks_mut(BLOCK_BYTES) {
        let mut counter_block = [0u8; BLOCK_BYTES];
        counter_block[BLOCK_BYTES - 8..].copy_from_slice(&counter.to_be_bytes());
        let keystream = aes.encrypt_block(counter_block, *key);
        chunk
            .iter_mut()
            .zip(keystream.iter())
            .for_each(|(b, k)| *b ^= k);
        counter = counter.wrapping_add(1);
    }

    data
}
