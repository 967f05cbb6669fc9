pub mod sha2;

pub use sha2::Sha256;

/// A cryptographic hash function.
///
/// Maps an arbitrary-length input to a fixed-size digest, used here as the
/// building block for [`crate::mac::Hmac`] and, transitively, for PBKDF2 and
/// the pointer-resolution function's keyed hash.
pub trait Hash {
    type Output;

    fn hash(&self, input: &[u8]) -> Self::Output;
}
