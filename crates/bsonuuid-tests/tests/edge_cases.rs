//! Edge case integration tests for the UUID codec.
//!
//! - **Subtype policy**: every subtype byte other than `0x03` decodes in
//!   standard order by default; the strict policy accepts only `0x03` and
//!   `0x04` and reports the raw byte otherwise.
//!
//! - **Buffer ownership**: `decode` never touches the caller's bytes, while
//!   `decode_in_place` leaves them in standard order on success and
//!   untouched on failure.
//!
//! - **Lengths**: every length other than 16 is rejected with the observed
//!   length, under both policies and both entry points.

use bsonuuid_codec::{
    DecodeConfig, SerializationError, UUID_LEGACY, UUID_STANDARD, UuidDecoder, decode,
    decode_in_place, encode, encode_into,
};
use bsonuuid_tests::{VECTORS, vector};

// ── Subtype policy ────────────────────────────────────────────────────────────

#[test]
fn permissive_every_non_legacy_byte_is_standard() {
    let v = vector("nibbles");
    let bytes = v.standard_bytes();
    for subtype in (0..=u8::MAX).filter(|&s| s != UUID_LEGACY) {
        assert_eq!(
            decode(&bytes, subtype).unwrap(),
            v.uuid(),
            "subtype {subtype:#04x}"
        );
    }
}

#[test]
fn strict_accepts_only_uuid_subtypes() {
    let decoder = UuidDecoder::new(DecodeConfig::strict());
    let bytes = vector("rfc").standard_bytes();
    for subtype in 0..=u8::MAX {
        let result = decoder.decode(&bytes, subtype);
        if subtype == UUID_LEGACY || subtype == UUID_STANDARD {
            assert!(result.is_ok(), "subtype {subtype:#04x} should decode");
        } else {
            assert_eq!(
                result,
                Err(SerializationError::UnsupportedSubtype { value: subtype })
            );
        }
    }
}

#[test]
fn default_decoder_matches_free_function() {
    let decoder = UuidDecoder::default();
    for v in VECTORS {
        let bytes = v.legacy_bytes();
        assert_eq!(
            decoder.decode(&bytes, UUID_LEGACY),
            decode(&bytes, UUID_LEGACY)
        );
    }
}

// ── Buffer ownership ──────────────────────────────────────────────────────────

#[test]
fn decode_does_not_mutate_legacy_input() {
    let v = vector("rfc");
    let bytes = v.legacy_bytes();
    let before = bytes.clone();
    decode(&bytes, UUID_LEGACY).unwrap();
    assert_eq!(bytes, before);
}

#[test]
fn decode_in_place_leaves_standard_layout() {
    for v in VECTORS {
        let mut bytes = v.legacy_bytes();
        let uuid = decode_in_place(&mut bytes, UUID_LEGACY).unwrap();
        assert_eq!(uuid, v.uuid(), "vector {}", v.name);
        assert_eq!(bytes, v.standard_bytes(), "vector {}", v.name);
    }
}

#[test]
fn decode_in_place_twice_is_not_idempotent_for_legacy() {
    // The buffer is rewritten, so a second legacy decode reads it reversed.
    let v = vector("counting");
    let mut bytes = v.legacy_bytes();
    let first = decode_in_place(&mut bytes, UUID_LEGACY).unwrap();
    let second = decode_in_place(&mut bytes, UUID_LEGACY).unwrap();
    assert_eq!(first, v.uuid());
    assert_ne!(first, second);
    assert_eq!(bytes, v.legacy_bytes());
}

#[test]
fn decode_in_place_subslice_of_larger_buffer() {
    let v = vector("nibbles");
    let mut frame = vec![0xEEu8; 4];
    frame.extend(v.legacy_bytes());
    frame.extend([0xEEu8; 4]);

    let uuid = decode_in_place(&mut frame[4..20], UUID_LEGACY).unwrap();
    assert_eq!(uuid, v.uuid());
    assert_eq!(&frame[..4], &[0xEE; 4]);
    assert_eq!(&frame[4..20], v.standard_bytes().as_slice());
    assert_eq!(&frame[20..], &[0xEE; 4]);
}

// ── Lengths ───────────────────────────────────────────────────────────────────

#[test]
fn every_wrong_length_is_reported() {
    let strict = UuidDecoder::new(DecodeConfig::strict());
    for len in (0..=64usize).filter(|&l| l != 16) {
        let mut bytes = vec![0x5Au8; len];
        let expected = Err(SerializationError::InvalidLength { actual: len });

        assert_eq!(decode(&bytes, UUID_STANDARD), expected);
        assert_eq!(decode(&bytes, UUID_LEGACY), expected);
        // Length wins over an unsupported subtype.
        assert_eq!(strict.decode(&bytes, 0x00), expected);
        assert_eq!(decode_in_place(&mut bytes, UUID_LEGACY), expected);
        assert_eq!(bytes, vec![0x5Au8; len]);
    }
}

#[test]
fn encode_into_length_check() {
    let uuid = vector("rfc").uuid();
    let mut short = [0u8; 15];
    assert_eq!(
        encode_into(&uuid, UUID_LEGACY, &mut short),
        Err(SerializationError::InvalidLength { actual: 15 })
    );

    let mut exact = [0u8; 16];
    encode_into(&uuid, UUID_LEGACY, &mut exact).unwrap();
    assert_eq!(exact, encode(&uuid, UUID_LEGACY));
}

// ── Roundtrip over arbitrary payloads ─────────────────────────────────────────

#[test]
fn encode_inverts_decode_for_pseudorandom_payloads() {
    // xorshift64 so the payloads are fixed across runs
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    for _ in 0..256 {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&next().to_le_bytes());
        bytes[8..].copy_from_slice(&next().to_le_bytes());
        for subtype in [UUID_LEGACY, UUID_STANDARD] {
            let uuid = decode(&bytes, subtype).unwrap();
            assert_eq!(encode(&uuid, subtype), bytes);
        }
    }
}
