//! Serialised key encode/parse: the single ASCII-hex string that carries the
//! master key, alias count, ciphertext length, and chain start position
//! between an encoder and a decoder, with no other channel.

use crate::{cipher::aes::KEY_BYTES, error::Error, Result};

const KEY_HEX_LEN: usize = KEY_BYTES * 2;
const T_HEX_LEN: usize = 4;
const L_HEX_LEN: usize = 4;
const FIXED_HEX_LEN: usize = KEY_HEX_LEN + T_HEX_LEN + L_HEX_LEN;

/// The parsed fields of a serialised key.
#[derive(Debug, Clone, Copy)]
pub struct ParsedKey {
    pub key: [u8; KEY_BYTES],
    pub t: u16,
    pub l: u16,
    pub pos0: usize,
}

/// Number of hex digits `pos0` needs so that any index into an image of
/// `pixel_count` pixels fits: `ceil(log16(pixel_count))`, minimum 1.
fn pos0_hex_width(pixel_count: usize) -> usize {
    let mut v = pixel_count.saturating_sub(1);
    let mut width = 1;
    while v >= 16 {
        v /= 16;
        width += 1;
    }
    width
}

/// Serialise `(key, t, l, pos0)` as `hex(K) || hex16(t) || hex16(l) ||
/// hex(pos0)`, lowercase, no separators, no prefix.
///
/// `pixel_count` sizes the `pos0` field widely enough that a decoder can
/// always recover a value large enough to index the image; it does not
/// itself appear in the output.
pub fn serialise(key: &[u8; KEY_BYTES], t: u16, l: u16, pos0: usize, pixel_count: usize) -> String {
    let width = pos0_hex_width(pixel_count);
    format!("{}{t:04x}{l:04x}{pos0:0width$x}", hex::encode(key))
}

/// Parse a serialised key, trimming surrounding whitespace first.
///
/// `pos0` occupies whatever remains after the three fixed-width fields, so
/// this accepts any total length greater than [`FIXED_HEX_LEN`].
pub fn parse(s: &str) -> Result<ParsedKey> {
    let s = s.trim();

    if s.len() <= FIXED_HEX_LEN {
        return Err(Error::KeyFormat(format!(
            "key too short: {} hex characters, need more than {FIXED_HEX_LEN}",
            s.len()
        )));
    }
    if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::KeyFormat("key contains non-hex characters".into()));
    }

    let key_bytes = hex::decode(&s[0..KEY_HEX_LEN])
        .map_err(|e| Error::KeyFormat(format!("invalid key field: {e}")))?;
    let key: [u8; KEY_BYTES] = key_bytes
        .try_into()
        .map_err(|_| Error::KeyFormat("key field has the wrong length".into()))?;

    let t = u16::from_str_radix(&s[KEY_HEX_LEN..KEY_HEX_LEN + T_HEX_LEN], 16)
        .map_err(|e| Error::KeyFormat(format!("invalid alias count field: {e}")))?;
    if t == 0 {
        return Err(Error::KeyFormat("alias count must be at least 1".into()));
    }

    let l = u16::from_str_radix(&s[KEY_HEX_LEN + T_HEX_LEN..FIXED_HEX_LEN], 16)
        .map_err(|e| Error::KeyFormat(format!("invalid length field: {e}")))?;

    let pos0 = usize::from_str_radix(&s[FIXED_HEX_LEN..], 16)
        .map_err(|e| Error::KeyFormat(format!("invalid position field: {e}")))?;

    Ok(ParsedKey { key, t, l, pos0 })
}
