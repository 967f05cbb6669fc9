//! A keyed pointer-chain steganographic embedding engine.
//!
//! Given a cover image (a row-major RGBA byte grid) and a short plaintext
//! message, [`encode`] derives a fresh master key, encrypts the message,
//! and embeds the ciphertext across a keyed-pseudorandom subset of pixels
//! linked into a chain by a keyed hash, choosing per-pixel modifications
//! that minimise distortion. [`decode`] reverses this given only the
//! stego image and the compact serialised key [`encode`] produced.
//!
//! The cryptographic primitives (AES-256, SHA-256, HMAC, PBKDF2) are
//! implemented from scratch rather than pulled from `RustCrypto`, in the
//! style of the literate cryptography library this crate grew out of; see
//! `DESIGN.md` for the grounding of each module.

mod chain_builder;
mod chain_walker;
mod cipher;
mod crypto;
mod error;
mod hash;
mod keyfmt;
mod mac;
mod pixel_grid;
mod pointer_set;
mod progress;
mod random;
mod stats;

#[cfg(test)]
mod test;

pub use {
    error::{Error, Result},
    keyfmt::ParsedKey,
    pixel_grid::{Pixel, PixelGrid},
    progress::{phase, CancelFlag, NoopProgress, ProgressSink},
    stats::EncodeStats,
};

/// Hide `plaintext` inside a `width * height * 4`-byte row-major RGBA
/// `image`, embedding under a freshly derived master key with alias count
/// `t` (renegotiated downward automatically if it doesn't leave room for
/// the ciphertext).
///
/// Returns the mutated stego image bytes, the serialised key needed to
/// recover the message, and statistics about what changed. `progress` is
/// reported against during the candidate-set and chain-building phases;
/// `cancel` is checked once per ciphertext byte.
#[tracing::instrument(skip(image, plaintext, progress, cancel), fields(width, height, plaintext_len = plaintext.len()))]
pub fn encode(
    image: &[u8],
    width: usize,
    height: usize,
    plaintext: &[u8],
    t: u16,
    progress: &mut dyn ProgressSink,
    cancel: &CancelFlag,
) -> Result<(Vec<u8>, String, EncodeStats)> {
    let master_key = crypto::derive_master_key();
    encode_with_key(image, width, height, plaintext, &master_key, t, progress, cancel)
}

/// Recover the plaintext embedded in a `width * height * 4`-byte row-major
/// RGBA `image` given the `serialised_key` [`encode`] produced for it.
#[tracing::instrument(skip(image, serialised_key), fields(width, height))]
pub fn decode(image: &[u8], width: usize, height: usize, serialised_key: &str) -> Result<Vec<u8>> {
    let grid = PixelGrid::new(width, height, image.to_vec());
    let parsed = keyfmt::parse(serialised_key)?;

    if parsed.l as usize > grid.len() {
        return Err(Error::Capacity { ciphertext_len: parsed.l as usize, pixels: grid.len() });
    }

    tracing::debug!(chain_length = parsed.l, "walking chain");
    let ciphertext = chain_walker::walk(&grid, &parsed.key, parsed.t, parsed.l as usize, parsed.pos0)?;
    crypto::decrypt_message(&parsed.key, &ciphertext)
}

/// Draw a fresh 256-bit master key the way [`encode`] does internally.
/// Exposed so callers (and the test suite) can pin `K` and go through
/// [`encode_with_key`] instead, since [`encode`] never reuses or returns
/// the key it derives for itself.
pub fn derive_master_key() -> [u8; cipher::aes::KEY_BYTES] {
    crypto::derive_master_key()
}

/// Like [`encode`], but embeds under a caller-supplied master key instead
/// of deriving a fresh one.
///
/// This is the entry point the deterministic test scenarios use to pin
/// `K`; callers outside tests should generally prefer [`encode`], which
/// never reuses a key across calls.
pub fn encode_with_key(
    image: &[u8],
    width: usize,
    height: usize,
    plaintext: &[u8],
    key: &[u8; cipher::aes::KEY_BYTES],
    t: u16,
    progress: &mut dyn ProgressSink,
    cancel: &CancelFlag,
) -> Result<(Vec<u8>, String, EncodeStats)> {
    let mut grid = PixelGrid::new(width, height, image.to_vec());
    let original = grid.clone();

    progress.report(0.0, phase::ENCRYPT);
    tracing::debug!(phase = phase::ENCRYPT, "encrypting message");
    let ciphertext = crypto::encrypt_message(key, plaintext)?;
    progress.report(1.0, phase::ENCRYPT);

    let chain = chain_builder::build(&mut grid, key, &ciphertext, t, progress, cancel)?;

    progress.report(1.0, phase::WRITE_PIXELS);
    tracing::debug!(phase = phase::WRITE_PIXELS);

    let serialised = keyfmt::serialise(key, chain.t, ciphertext.len() as u16, chain.pos0, grid.len());
    progress.report(1.0, phase::PACKAGE_KEY);
    tracing::debug!(phase = phase::PACKAGE_KEY);

    let stats = stats::compute(&original, &grid, ciphertext.len());

    progress.report(1.0, phase::DONE);
    tracing::debug!(phase = phase::DONE, positions_modified = stats.positions_modified);

    Ok((grid.into_bytes(), serialised, stats))
}
