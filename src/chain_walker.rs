//! `ChainWalker`: the decoder's forward traversal of the chain.

use crate::{
    cipher::aes::KEY_BYTES,
    error::Error,
    pixel_grid::PixelGrid,
    pointer_set::{self, PointerSet},
    Result,
};

/// Walk the chain described by `(t, l, pos0)` through `grid`, starting at
/// `S[pos0]`, and return the `l` recovered ciphertext bytes in order.
///
/// `S` is rebuilt from `(key, grid.len(), t)` exactly as it was on encode,
/// since encoder and decoder must agree on the candidate set byte-for-byte;
/// nothing here depends on the image having been produced by this crate's
/// encoder.
pub fn walk(grid: &PixelGrid, key: &[u8; KEY_BYTES], t: u16, l: usize, pos0: usize) -> Result<Vec<u8>> {
    let set = PointerSet::build(key, grid.len(), t);
    if pos0 >= set.len() {
        return Err(Error::KeyFormat(format!(
            "pos0 {pos0} is out of range for a candidate set of size {}",
            set.len()
        )));
    }

    let mut out = Vec::with_capacity(l);
    let mut cur = pos0;
    for _ in 0..l {
        let pixel = grid.pixel(set.image_index(cur));
        out.push(pixel.r);
        cur = pointer_set::next(key, pixel.pointer(), set.len());
    }
    Ok(out)
}
