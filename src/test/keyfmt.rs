use crate::keyfmt;

#[test]
fn serialise_then_parse_round_trips() {
    let key = [0x42u8; 32];
    let serialised = keyfmt::serialise(&key, 13, 5000, 12345, 256 * 256);
    let parsed = keyfmt::parse(&serialised).unwrap();
    assert_eq!(parsed.key, key);
    assert_eq!(parsed.t, 13);
    assert_eq!(parsed.l, 5000);
    assert_eq!(parsed.pos0, 12345);
}

#[test]
fn serialised_key_is_lowercase_hex_with_no_separators() {
    let key = [0xabu8; 32];
    let serialised = keyfmt::serialise(&key, 1, 1, 0, 16);
    assert!(serialised.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
}

#[test]
fn pos0_field_widens_with_pixel_count() {
    let key = [0u8; 32];
    let small = keyfmt::serialise(&key, 1, 1, 0, 16);
    let large = keyfmt::serialise(&key, 1, 1, 0, 1 << 40);
    assert!(large.len() > small.len());
}

#[test]
fn parse_trims_whitespace() {
    let key = [0x11u8; 32];
    let serialised = keyfmt::serialise(&key, 1, 1, 0, 16);
    let padded = format!("  {serialised}\n");
    let parsed = keyfmt::parse(&padded).unwrap();
    assert_eq!(parsed.key, key);
}

#[test]
fn parse_rejects_non_hex_characters() {
    let key = [0x11u8; 32];
    let mut serialised = keyfmt::serialise(&key, 1, 1, 0, 16);
    serialised.replace_range(0..1, "z");
    assert!(keyfmt::parse(&serialised).is_err());
}

#[test]
fn parse_rejects_too_short_input() {
    assert!(keyfmt::parse("abcd").is_err());
}

#[test]
fn parse_rejects_zero_alias_count() {
    let key = [0x11u8; 32];
    // t = 0000 is structurally well-formed but semantically invalid (t in
    // [1, Q]).
    let serialised = format!("{}{:04x}{:04x}{:x}", hex::encode(key), 0, 1, 0);
    assert!(keyfmt::parse(&serialised).is_err());
}

#[test]
fn tampering_with_pos0_changes_the_parsed_value() {
    let key = [0x33u8; 32];
    let mut serialised = keyfmt::serialise(&key, 1, 1, 0x10, 1 << 20);
    let last = serialised.len() - 1;
    let tampered_char = if serialised.as_bytes()[last] == b'0' { '1' } else { '0' };
    serialised.replace_range(last.., &tampered_char.to_string());
    let parsed = keyfmt::parse(&serialised).unwrap();
    assert_ne!(parsed.pos0, 0x10);
}
