//! `ChainBuilder`: the encoder's backward chain-construction search.

use crate::{
    cipher::aes::KEY_BYTES,
    error::Error,
    pixel_grid::{Pixel, PixelGrid},
    pointer_set::{PointerSet, PointerTable, Q},
    progress::{phase, CancelFlag, ProgressSink},
    Result,
};

/// Euclidean distance in RGBA space between `original` and the pixel that
/// would result from writing `target` into R and `pointer`'s bytes into
/// G/B, leaving A untouched.
///
/// This is the only floating-point-adjacent code in the engine: the
/// backward search in [`build`] is a plain `min`-by-distance scan over an
/// explicit iterator of candidates built on top of this function.
fn score(original: Pixel, target: u8, pointer: u16) -> f64 {
    let [g, b] = pointer.to_be_bytes();
    let modified = Pixel { r: target, g, b, a: original.a };
    original.distance(&modified)
}

/// Effective alias count `t'` and `pos0`, the two fields a decoder needs
/// besides `K` and `L` to reconstruct the whole walk.
#[derive(Debug, Clone, Copy)]
pub struct ChainResult {
    pub t: u16,
    pub pos0: usize,
}

/// Alias renegotiation: if the caller-supplied `t` would make `floor(Q/t) <
/// ciphertext_len`, lower it to the largest value that still fits.
pub fn renegotiate_alias_count(t: u16, ciphertext_len: usize) -> u16 {
    debug_assert!(ciphertext_len > 0);
    let q_over_t = Q / (t as usize);
    if q_over_t < ciphertext_len {
        (Q / ciphertext_len).max(1) as u16
    } else {
        t
    }
}

/// Build the chain embedding `ciphertext` into `grid`, mutating it in
/// place, and return the effective alias count and `pos0`.
pub fn build(
    grid: &mut PixelGrid,
    key: &[u8; KEY_BYTES],
    ciphertext: &[u8],
    t: u16,
    progress: &mut dyn ProgressSink,
    cancel: &CancelFlag,
) -> Result<ChainResult> {
    let l = ciphertext.len();
    if l == 0 || l > grid.len() {
        return Err(Error::Capacity { ciphertext_len: l, pixels: grid.len() });
    }

    let t = renegotiate_alias_count(t, l);

    progress.report(0.0, phase::SELECT_PIXELS);
    let set = PointerSet::build(key, grid.len(), t);
    if set.len() < l {
        return Err(Error::Capacity { ciphertext_len: l, pixels: grid.len() });
    }
    progress.report(1.0, phase::SELECT_PIXELS);

    progress.report(0.0, phase::PREPARE_POINTERS);
    let table = PointerTable::build(key, set.len());
    progress.report(1.0, phase::PREPARE_POINTERS);

    let mut used = vec![false; set.len()];
    let mut chain_positions = vec![0usize; l];

    // Seed the last chain node with the closest-R-value unused pixel; ties
    // go to the earliest position in S, which is exactly what
    // `Iterator::min_by_key` returns on equal keys.
    let last_byte = ciphertext[l - 1];
    let seed_pos = set
        .positions()
        .min_by_key(|&pos| (grid.pixel(set.image_index(pos)).r as i16 - last_byte as i16).abs())
        .expect("|S| >= L >= 1, so S is non-empty");
    write_pixel(grid, &set, seed_pos, last_byte, None);
    used[seed_pos] = true;
    chain_positions[l - 1] = seed_pos;

    // Walk the ciphertext backward, extending the chain one byte at a time.
    for i in (0..l - 1).rev() {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        progress.report((l - 1 - i) as f64 / l as f64, phase::ENCODE_BYTES);

        let target = ciphertext[i];
        let valid_pointers = table.valid_pointers(chain_positions[i + 1]);

        let (exact, mut fallback): (Vec<usize>, Vec<usize>) = set
            .positions()
            .filter(|&pos| !used[pos])
            .partition(|&pos| grid.pixel(set.image_index(pos)).r == target);
        fallback.sort_by_key(|&pos| {
            (grid.pixel(set.image_index(pos)).r as i16 - target as i16).abs()
        });

        let mut committed = None;
        let mut best: Option<(usize, u16, f64)> = None;

        'search: for pos in exact.into_iter().chain(fallback) {
            let pixel = grid.pixel(set.image_index(pos));
            let p_orig = pixel.pointer();

            if pixel.r == target && valid_pointers.contains(&p_orig) {
                committed = Some((pos, p_orig));
                break 'search;
            }

            for &p in valid_pointers {
                let d = score(pixel, target, p);
                if best.map_or(true, |(_, _, bd)| d < bd) {
                    best = Some((pos, p, d));
                }
            }
        }

        let (pos, pointer) = committed
            .or_else(|| best.map(|(pos, p, _)| (pos, p)))
            .ok_or(Error::ExhaustedCandidates)?;

        write_pixel(grid, &set, pos, target, Some(pointer));
        used[pos] = true;
        chain_positions[i] = pos;
    }

    progress.report(1.0, phase::ENCODE_BYTES);

    Ok(ChainResult { t, pos0: chain_positions[0] })
}

/// Overwrite R (and, if given, G/B) of the pixel at `pos` in `set`.
fn write_pixel(grid: &mut PixelGrid, set: &PointerSet, pos: usize, r: u8, pointer: Option<u16>) {
    let img_idx = set.image_index(pos);
    let mut pixel = grid.pixel(img_idx);
    pixel.r = r;
    if let Some(p) = pointer {
        let [g, b] = p.to_be_bytes();
        pixel.g = g;
        pixel.b = b;
    }
    grid.set_pixel(img_idx, pixel);
}
