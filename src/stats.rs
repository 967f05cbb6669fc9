//! Encode statistics reported back to the caller.

use crate::pixel_grid::PixelGrid;

/// Summary of what an [`crate::encode`] call actually changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodeStats {
    /// Total pixels in the cover image, `W * H`.
    pub total_pixels: usize,
    /// Number of chain positions, `L`.
    pub chain_length: usize,
    /// Number of pixels whose R, G, or B differs from the cover.
    pub positions_modified: usize,
    /// Total number of individual channel values changed across the image.
    pub channels_modified: usize,
    /// `positions_modified / total_pixels * 100`.
    pub percent_modified: f64,
}

/// Diff `original` against `modified` to produce an [`EncodeStats`].
///
/// `A` never participates: the engine never touches it, so it would only
/// ever contribute zero to every count.
pub fn compute(original: &PixelGrid, modified: &PixelGrid, chain_length: usize) -> EncodeStats {
    let total_pixels = original.len();
    let mut positions_modified = 0;
    let mut channels_modified = 0;

    for i in 0..total_pixels {
        let before = original.pixel(i);
        let after = modified.pixel(i);
        let changed = (before.r != after.r) as usize
            + (before.g != after.g) as usize
            + (before.b != after.b) as usize;
        if changed > 0 {
            positions_modified += 1;
            channels_modified += changed;
        }
    }

    let percent_modified = if total_pixels == 0 {
        0.0
    } else {
        positions_modified as f64 / total_pixels as f64 * 100.0
    };

    EncodeStats {
        total_pixels,
        chain_length,
        positions_modified,
        channels_modified,
        percent_modified,
    }
}
