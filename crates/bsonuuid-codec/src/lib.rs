#![warn(clippy::pedantic)]

//! Decoding and encoding of UUIDs stored as BSON binary values.
//!
//! A BSON binary value carries a one-byte subtype next to its payload. Two
//! subtypes hold UUIDs, and they disagree on byte order:
//!
//! ```text
//! ┌──────┬─────────────┬──────────────────────────────────────────────┐
//! │ Wire │ Subtype     │ Payload layout                               │
//! ├──────┼─────────────┼──────────────────────────────────────────────┤
//! │ 0x03 │ UUID legacy │ each 8-byte half stored byte-reversed        │
//! │ 0x04 │ UUID        │ all 16 bytes big-endian (RFC 4122 order)     │
//! └──────┴─────────────┴──────────────────────────────────────────────┘
//! ```
//!
//! [`decode`] turns a 16-byte payload plus its subtype byte into a
//! [`uuid::Uuid`]; [`encode`] is its inverse. Any subtype other than
//! `0x03` is read in standard order unless a [`UuidDecoder`] is built with
//! [`SubtypePolicy::Strict`].

pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod layout;
pub mod subtype;

pub use config::{DecodeConfig, SubtypePolicy};
pub use decode::{UuidDecoder, decode, decode_in_place};
pub use encode::{encode, encode_into};
pub use error::SerializationError;
pub use layout::{ByteOrder, UUID_LEN};
pub use subtype::{BinarySubtype, UUID_LEGACY, UUID_STANDARD};
pub use uuid::Uuid;
