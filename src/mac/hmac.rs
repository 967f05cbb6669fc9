use {
    crate::hash::{sha2::BLOCK_BYTES, Hash},
    crate::mac::Mac,
    docext::docext,
};

const OPAD: u8 = 0x5C;
const IPAD: u8 = 0x36;

/// A hash-based message authentication code is a method for creating a
/// [MAC](crate::mac::Mac) from a [hash function](crate::hash::Hash).
///
/// It works by first padding the key with zeros if it is smaller than the
/// internal block size of the hash function. If the key is larger than the
/// internal block size, it is first hashed and then truncated to the block
/// size. The resulting value is $K'$.
///
/// The HMAC tag is computed as
///
/// $$
/// H\Big((K' \oplus opad) \parallel H\big((K' \oplus ipad) \parallel m
/// \big) \Big)
/// $$
///
/// where $m$ is the message, $H$ is the hash function, $opad$ (outer padding) is
/// a sequence of $\mathrm{5C}_{16}$ bytes equal in size to the internal block
/// of the hash function, and $ipad$ (inner padding) is a sequence of
/// $\mathrm{36}_{16}$ bytes. Essentially, first an _inner hash_ is computed by
/// hashing the message concatenated to the outer padded key. Then, an outer
/// hash is computed by hashing the inner hash concatenated to the inner padded
/// key. The outer hash is the resulting tag.
///
/// This is the generic construction; this crate only ever instantiates
/// `Hmac<Sha256>`, both as the keyed hash behind the pointer-resolution
/// function and as the building block for PBKDF2.
#[docext]
pub struct Hmac<H>(H);

impl<H> Hmac<H> {
    pub fn new(h: H) -> Self {
        Self(h)
    }
}

impl<H> Mac for Hmac<H>
where
    H: Hash<Output = [u8; 32]>,
{
    type Tag = [u8; 32];

    fn mac(&mut self, msg: &[u8], key: &[u8]) -> Self::Tag {
        // Derive K' from the key.
        let mut k = [0; BLOCK_BYTES];
        if key.len() <= BLOCK_BYTES {
            k[..key.len()].copy_from_slice(key);
        } else {
            let h = self.0.hash(key);
            k[..h.len()].copy_from_slice(&h);
        };

        // Compute the inner hash.
        let mut inner_preimage = Vec::with_capacity(BLOCK_BYTES + msg.len());
        inner_preimage.extend(k.iter().map(|n| n ^ IPAD));
        inner_preimage.extend(msg);
        let inner_hash = self.0.hash(&inner_preimage);

        // Compute the outer hash, which is the result of the MAC function.
        let mut outer_preimage = Vec::with_capacity(BLOCK_BYTES + inner_hash.len());
        outer_preimage.extend(k.iter().map(|n| n ^ OPAD));
        outer_preimage.extend(inner_hash);
        self.0.hash(&outer_preimage)
    }
}
