//! PBKDF2-HMAC-SHA256 key derivation, specified by [RFC
//! 8018](https://www.rfc-editor.org/rfc/rfc8018) section 5.2.

use crate::{
    hash::{sha2::DIGEST_BYTES, Sha256},
    mac::{Hmac, Mac},
};
use docext::docext;

/// Derive a `DIGEST_BYTES`-long key from `password` and `salt` using
/// `iterations` rounds of HMAC-SHA256.
///
/// The general construction concatenates blocks $T_1 \parallel T_2 \parallel
/// \ldots$ where each $T_i = F(P, S, c, i)$ XORs $c$ iterations of
/// $\mathrm{HMAC}(P, U_j)$, starting from $U_1 = \mathrm{HMAC}(P, S \parallel
/// \mathrm{INT}(i))$. Only block $i = 1$ is computed here, since the target
/// key length (32 bytes) equals the HMAC-SHA256 output length, so a single
/// block is always enough.
#[docext]
pub fn derive(password: &[u8], salt: &[u8], iterations: u32) -> [u8; DIGEST_BYTES] {
    let mut hmac = Hmac::new(Sha256::default());

    let mut salt_and_index = Vec::with_capacity(salt.len() + 4);
    salt_and_index.extend_from_slice(salt);
    salt_and_index.extend_from_slice(&1u32.to_be_bytes());

    let mut u = hmac.mac(&salt_and_index, password);
    let mut t = u;

    for _ in 1..iterations {
        u = hmac.mac(&u, password);
        t.iter_mut().zip(u.iter()).for_each(|(t, u)| *t ^= u);
    }

    t
}
