//! Derivation of the candidate-pixel index set `S` and the pointer-resolution
//! function that links one chain position to the next.

use crate::{
    cipher::aes::KEY_BYTES,
    crypto::hmac_sha256,
    random::{Csprng, HmacDrbg},
};

/// Size of the pointer value space, `Q = 65536` (a 16-bit value).
pub const Q: usize = 65_536;

/// The candidate-pixel set `S`: an ordered sequence of distinct pixel
/// indices into a `W x H` image, deterministic given `(K, W*H, t)`.
#[derive(Debug, Clone)]
pub struct PointerSet {
    /// `S[i]` is the image pixel index at position `i`.
    indices: Vec<usize>,
}

impl PointerSet {
    /// Build `S` by drawing `min(Q/t, pixel_count)` distinct indices from
    /// the CSPRNG seeded by `key`, in draw order.
    ///
    /// The CSPRNG is seeded from the hex-string form of `key`, not its raw
    /// bytes, so that it's keyed independently of [`next`]'s direct
    /// binary-key HMAC use.
    pub fn build(key: &[u8; KEY_BYTES], pixel_count: usize, t: u16) -> Self {
        let target = capacity(pixel_count, t);
        let hex_key = hex::encode(key);
        let mut prng = HmacDrbg::new(hex_key.as_bytes());
        let mut seen = vec![false; pixel_count];
        let mut indices = Vec::with_capacity(target);

        while indices.len() < target {
            let i = (prng.next_float_unit() * pixel_count as f64) as usize;
            let i = i.min(pixel_count - 1);
            if !seen[i] {
                seen[i] = true;
                indices.push(i);
            }
        }

        Self { indices }
    }

    /// `|S|`.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The image pixel index at position `pos` within `S`.
    pub fn image_index(&self, pos: usize) -> usize {
        self.indices[pos]
    }

    pub fn positions(&self) -> impl Iterator<Item = usize> {
        0..self.indices.len()
    }
}

/// `min(floor(Q / t), pixel_count)`, the target cardinality of `S`.
pub fn capacity(pixel_count: usize, t: u16) -> usize {
    (Q / t as usize).min(pixel_count)
}

/// `next(K, p) = (HMAC_SHA256(K, be_bytes(p))[0..2] as u16) mod |S|`.
///
/// The only permitted link from one chain node to the next.
pub fn next(key: &[u8; KEY_BYTES], p: u16, set_len: usize) -> usize {
    let tag = hmac_sha256(key, &p.to_be_bytes());
    let v = u16::from_be_bytes([tag[0], tag[1]]);
    (v as usize) % set_len
}

/// A precomputed `p -> next(K, p)` table covering the full pointer space,
/// plus the inverse bucketing `position in S -> { p : next(K, p) = position }`.
///
/// Building both once per encode turns "which pointer values are valid for
/// this target position" from an `O(Q)` scan into an `O(1)` lookup.
pub struct PointerTable {
    next_of: Vec<u16>,
    buckets: Vec<Vec<u16>>,
}

impl PointerTable {
    pub fn build(key: &[u8; KEY_BYTES], set_len: usize) -> Self {
        let mut next_of = Vec::with_capacity(Q);
        let mut buckets = vec![Vec::new(); set_len];

        for p in 0..Q {
            let target = next(key, p as u16, set_len);
            next_of.push(target as u16);
            buckets[target].push(p as u16);
        }

        Self { next_of, buckets }
    }

    /// `next(K, p)`, read from the precomputed table.
    pub fn next_of(&self, p: u16) -> usize {
        self.next_of[p as usize] as usize
    }

    /// All pointer values `p` such that `next(K, p) == position`, in
    /// ascending numeric order (the order they were enumerated while
    /// building the table).
    pub fn valid_pointers(&self, position: usize) -> &[u16] {
        &self.buckets[position]
    }
}
