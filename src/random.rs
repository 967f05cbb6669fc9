pub mod drbg;
pub mod system;

pub use drbg::HmacDrbg;
pub use system::OsEntropy;

/// Cryptographically secure pseudorandom number generator.
///
/// The candidate-pixel-set construction only needs one primitive on top of
/// the raw byte stream: [`Csprng::next_float_unit`], a value uniform on
/// `[0, 1)` used to decide set membership and tie-breaking order.
pub trait Csprng {
    fn next_u8(&mut self) -> u8;

    /// The next 8 bytes of the stream, as a big-endian `u64`.
    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        buf.iter_mut().for_each(|b| *b = self.next_u8());
        u64::from_be_bytes(buf)
    }

    /// A value uniform on `[0, 1)`.
    fn next_float_unit(&mut self) -> f64 {
        // 2^64 as f64 is exact, so dividing keeps the result strictly < 1.0.
        (self.next_u64() as f64) / (u64::MAX as f64 + 1.0)
    }
}

/// A source of entropy.
///
/// Typically, this is a hardware or OS component which generates "true
/// randomness" based on the environment, such as environmental noise,
/// timing jitter, or other unpredictable physical sources. Used only by
/// [`crate::crypto::derive_master_key`] to draw a fresh password and salt.
/// The deterministic [`HmacDrbg`] that drives the pointer chain never
/// touches this trait, since decode has no entropy source to draw on, only
/// the master key.
pub trait Entropy {
    fn get(&mut self, buf: &mut [u8]);
}
