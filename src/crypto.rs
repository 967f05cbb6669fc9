pub mod pbkdf2;

use crate::{
    cipher::{aes::KEY_BYTES, ctr},
    error::{Error, Result},
    hash::Sha256,
    mac::{Hmac, Mac},
    random::{Entropy, OsEntropy},
};

/// Iteration count for master-key derivation (RFC 8018's `c`).
const KDF_ITERATIONS: u32 = 1_000_000;

/// Draw a fresh master key from the operating system's entropy source.
///
/// Generates a 32-byte password and a 32-byte salt, then stretches them
/// through [`pbkdf2::derive`] with [`KDF_ITERATIONS`] rounds. Only ever
/// called on encode; decode reconstructs `K` from a serialised key instead.
pub fn derive_master_key() -> [u8; KEY_BYTES] {
    derive_master_key_with(&mut OsEntropy)
}

fn derive_master_key_with(entropy: &mut impl Entropy) -> [u8; KEY_BYTES] {
    let mut password = [0u8; 32];
    let mut salt = [0u8; 32];
    entropy.get(&mut password);
    entropy.get(&mut salt);
    pbkdf2::derive(&password, &salt, KDF_ITERATIONS)
}

/// Encrypt `plaintext` under `key` with AES-256-CTR.
pub fn aes256_encrypt(key: &[u8; KEY_BYTES], plaintext: &[u8]) -> Vec<u8> {
    ctr::apply_keystream(plaintext.to_vec(), key)
}

/// Decrypt `ciphertext` under `key` with AES-256-CTR.
///
/// CTR is its own inverse, so this is identical to [`aes256_encrypt`]; kept
/// as a distinct function so call sites read as encrypt/decrypt rather than
/// two uses of the same keystream function.
pub fn aes256_decrypt(key: &[u8; KEY_BYTES], ciphertext: &[u8]) -> Vec<u8> {
    ctr::apply_keystream(ciphertext.to_vec(), key)
}

/// Compute `HMAC_SHA256(key, msg)`.
pub fn hmac_sha256(key: &[u8], msg: &[u8]) -> [u8; 32] {
    Hmac::new(Sha256::default()).mac(msg, key)
}

/// Encrypt `plaintext`, mapping a length mismatch into [`Error::Crypto`].
///
/// The underlying stream cipher never fails on its own; this wrapper exists
/// so the public encode path has a single place to reject the degenerate
/// empty-plaintext case, which would otherwise produce a chain of length 0.
pub fn encrypt_message(key: &[u8; KEY_BYTES], plaintext: &[u8]) -> Result<Vec<u8>> {
    if plaintext.is_empty() {
        return Err(Error::Crypto("plaintext must not be empty".into()));
    }
    Ok(aes256_encrypt(key, plaintext))
}

/// Decrypt a ciphertext recovered from a chain walk.
///
/// There is no authentication tag in the unauthenticated CTR mode this
/// engine uses (see [`ctr`] and `DESIGN.md`), so this can only fail if the
/// caller hands it a zero-length buffer; a genuinely tampered stego image
/// instead surfaces as garbage plaintext rather than a detectable error.
pub fn decrypt_message(key: &[u8; KEY_BYTES], ciphertext: &[u8]) -> Result<Vec<u8>> {
    if ciphertext.is_empty() {
        return Err(Error::Decrypt("ciphertext must not be empty".into()));
    }
    Ok(aes256_decrypt(key, ciphertext))
}

