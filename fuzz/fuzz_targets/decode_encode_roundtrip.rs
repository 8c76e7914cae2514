#![no_main]

use arbitrary::Arbitrary;
use bsonuuid_codec::{decode, encode, UUID_LEGACY, UUID_STANDARD};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    payload: [u8; 16],
    legacy: bool,
}

// Fuzz target: decode->encode roundtrip.
//
// Any 16-byte payload decoded under a UUID subtype must re-encode to the
// exact same bytes.
fuzz_target!(|input: Input| {
    let subtype = if input.legacy { UUID_LEGACY } else { UUID_STANDARD };
    let uuid = decode(&input.payload, subtype).unwrap();
    assert_eq!(encode(&uuid, subtype), input.payload);
});
