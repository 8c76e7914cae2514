//! Known-answer vectors shared by the integration tests and benchmarks.
//!
//! Each vector pairs a UUID with its payload in both BSON layouts:
//!
//! | Name     | Why it is here                                      |
//! |----------|-----------------------------------------------------|
//! | rfc      | Textbook example UUID                               |
//! | nil      | All zero; both layouts are identical                |
//! | counting | `00..0F`; makes the per-half reversal easy to read  |
//! | max      | All `0xFF`; both layouts are identical              |
//! | nibbles  | `0011..EEFF`; distinct high and low halves          |

#![allow(clippy::pedantic)]

use bsonuuid_codec::Uuid;

pub struct Vector {
    pub name: &'static str,
    pub uuid: &'static str,
    /// Payload for subtype 0x04.
    pub standard: &'static str,
    /// Payload for subtype 0x03.
    pub legacy: &'static str,
}

impl Vector {
    pub fn uuid(&self) -> Uuid {
        Uuid::parse_str(self.uuid)
            .unwrap_or_else(|e| panic!("bad uuid in vector {}: {e}", self.name))
    }

    pub fn standard_bytes(&self) -> Vec<u8> {
        payload(self.standard)
    }

    pub fn legacy_bytes(&self) -> Vec<u8> {
        payload(self.legacy)
    }
}

pub const VECTORS: &[Vector] = &[
    Vector {
        name: "rfc",
        uuid: "123e4567-e89b-12d3-a456-426614174000",
        standard: "123e4567e89b12d3a456426614174000",
        legacy: "d3129be867453e1200401714664256a4",
    },
    Vector {
        name: "nil",
        uuid: "00000000-0000-0000-0000-000000000000",
        standard: "00000000000000000000000000000000",
        legacy: "00000000000000000000000000000000",
    },
    Vector {
        name: "counting",
        uuid: "00010203-0405-0607-0809-0a0b0c0d0e0f",
        standard: "000102030405060708090a0b0c0d0e0f",
        legacy: "07060504030201000f0e0d0c0b0a0908",
    },
    Vector {
        name: "max",
        uuid: "ffffffff-ffff-ffff-ffff-ffffffffffff",
        standard: "ffffffffffffffffffffffffffffffff",
        legacy: "ffffffffffffffffffffffffffffffff",
    },
    Vector {
        name: "nibbles",
        uuid: "00112233-4455-6677-8899-aabbccddeeff",
        standard: "00112233445566778899aabbccddeeff",
        legacy: "7766554433221100ffeeddccbbaa9988",
    },
];

/// Look up a vector by name.
pub fn vector(name: &str) -> &'static Vector {
    VECTORS
        .iter()
        .find(|v| v.name == name)
        .unwrap_or_else(|| panic!("no vector named {name}"))
}

/// Decode a hex payload, panicking on malformed fixtures.
pub fn payload(hex: &str) -> Vec<u8> {
    hex::decode(hex).unwrap_or_else(|e| panic!("bad hex fixture {hex:?}: {e}"))
}
