#![no_main]

use bsonuuid_codec::{decode, decode_in_place, DecodeConfig, SerializationError, UuidDecoder};
use libfuzzer_sys::fuzz_target;

// Fuzz target: decode arbitrary payloads under every policy.
//
// First byte is the subtype, the rest is the payload. Checks that:
// - no input panics
// - a wrong length is always reported with the observed length
// - copy and in-place decoding agree
fuzz_target!(|data: &[u8]| {
    let Some((&subtype, payload)) = data.split_first() else {
        return;
    };

    let copied = decode(payload, subtype);
    let mut owned = payload.to_vec();
    let in_place = decode_in_place(&mut owned, subtype);
    assert_eq!(copied, in_place);

    if payload.len() != 16 {
        assert_eq!(
            copied,
            Err(SerializationError::InvalidLength {
                actual: payload.len()
            })
        );
    }

    let _ = UuidDecoder::new(DecodeConfig::strict()).decode(payload, subtype);
});
