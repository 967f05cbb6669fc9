use thiserror::Error;

/// Everything that can go wrong inside the engine.
///
/// Every variant here corresponds to exactly one error kind named in the
/// component design: the engine never swallows an error or retries
/// internally, it always returns one of these to the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// The ciphertext is longer than the number of pixels in the cover image.
    #[error("message too long for image: {ciphertext_len} bytes of ciphertext, {pixels} pixels available")]
    Capacity {
        /// Length of the ciphertext that didn't fit.
        ciphertext_len: usize,
        /// Total pixel count of the cover image.
        pixels: usize,
    },

    /// AES or HMAC failed, or the system entropy source could not be read.
    #[error("cryptographic operation failed: {0}")]
    Crypto(String),

    /// The serialised key is too short, non-hex, or numerically inconsistent.
    #[error("malformed key: {0}")]
    KeyFormat(String),

    /// Decryption produced something that cannot be the original plaintext.
    #[error("decryption failed: {0}")]
    Decrypt(String),

    /// Encoding hit the "no unused candidate remains" invariant violation.
    ///
    /// This can only happen if `|S| < L`, which [`Error::Capacity`] is
    /// supposed to have already ruled out; reaching this variant means a bug
    /// elsewhere let an inconsistent state through.
    #[error("ran out of chain candidates before the ciphertext was fully embedded")]
    ExhaustedCandidates,

    /// The caller's cancel flag was observed set at a yield point.
    #[error("operation cancelled")]
    Cancelled,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
