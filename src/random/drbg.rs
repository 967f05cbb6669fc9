use crate::{
    hash::Sha256,
    mac::{Hmac, Mac},
    random::Csprng,
};

/// Domain-separation label mixed into the first block, so this generator
/// never collides with the CTR keystream or any other HMAC-keyed use of the
/// same master key.
const CONTEXT: &[u8] = b"pointer-stego/drbg";

/// A deterministic, key-seeded pseudorandom byte stream.
///
/// Every byte the pointer chain depends on (set membership, pointer-chain
/// traversal order, tie-break draws) has to be reproducible from the master
/// key alone, with no side channel, since decode never has anything else to
/// work with. This generator produces that stream by repeatedly hashing a
/// counter under the key: block `i` is `HMAC_SHA256(key, CONTEXT || i)`,
/// consumed 32 bytes at a time and refilled on exhaustion. Two generators
/// built from the same key produce byte-for-byte identical streams.
pub struct HmacDrbg {
    key: Vec<u8>,
    counter: u64,
    buf: [u8; 32],
    pos: usize,
}

impl HmacDrbg {
    pub fn new(key: &[u8]) -> Self {
        let mut drbg = Self {
            key: key.to_vec(),
            counter: 0,
            buf: [0; 32],
            pos: 32,
        };
        drbg.refill();
        drbg
    }

    fn refill(&mut self) {
        let mut preimage = Vec::with_capacity(CONTEXT.len() + 8);
        preimage.extend_from_slice(CONTEXT);
        preimage.extend_from_slice(&self.counter.to_be_bytes());
        self.buf = Hmac::new(Sha256::default()).mac(&preimage, &self.key);
        self.counter = self.counter.wrapping_add(1);
        self.pos = 0;
    }
}

impl Csprng for HmacDrbg {
    fn next_u8(&mut self) -> u8 {
        if self.pos == self.buf.len() {
            self.refill();
        }
        let b = self.buf[self.pos];
        self.pos += 1;
        b
    }
}
