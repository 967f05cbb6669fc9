use crate::{
    crypto::pbkdf2,
    hash::Sha256,
    mac::{Hmac, Mac},
};

/// RFC 8018 §5.2: with `c = 1`, `T_1 = F(P, S, 1, 1) = U_1 = HMAC(P, S ||
/// INT(1))`, so a single-iteration derivation must equal one raw HMAC call
/// over `salt || 0x00000001` computed independently of [`pbkdf2::derive`].
#[test]
fn pbkdf2_single_iteration_matches_raw_hmac() {
    let mut salt_and_index = b"salt".to_vec();
    salt_and_index.extend_from_slice(&1u32.to_be_bytes());
    let expected = Hmac::new(Sha256::default()).mac(&salt_and_index, b"password");
    assert_eq!(pbkdf2::derive(b"password", b"salt", 1), expected);
}

#[test]
fn pbkdf2_more_iterations_differ_from_one() {
    let one = pbkdf2::derive(b"password", b"salt", 1);
    let many = pbkdf2::derive(b"password", b"salt", 10);
    assert_ne!(one, many);
}

#[test]
fn pbkdf2_different_salt_differs() {
    let a = pbkdf2::derive(b"password", b"salt-a", 4);
    let b = pbkdf2::derive(b"password", b"salt-b", 4);
    assert_ne!(a, b);
}

#[test]
fn pbkdf2_deterministic() {
    let a = pbkdf2::derive(b"password", b"salt", 4);
    let b = pbkdf2::derive(b"password", b"salt", 4);
    assert_eq!(a, b);
}
