/// Implementation of `bsonuuid inspect`.
///
/// Decodes one payload under both UUID byte orders, which is the quickest
/// way to tell whether a stored value was written by a legacy driver.
///
/// # Output format
///
/// ```text
/// Payload: 123e4567e89b12d3a456426614174000 (16 bytes)
/// 0x04 uuid         123e4567-e89b-12d3-a456-426614174000
/// 0x03 uuid-legacy  d3129be8-6745-3e12-0040-1714664256a4
/// ```
use std::fmt::Write as _;

use anyhow::{Context, Result};
use bsonuuid_codec::{BinarySubtype, UUID_LEGACY, UUID_STANDARD, decode};

use crate::InspectArgs;
use crate::input::read_payload;

/// Run the `bsonuuid inspect` command.
///
/// # Errors
///
/// Returns an error if the payload cannot be read or is not 16 bytes.
pub fn run(args: &InspectArgs) -> Result<()> {
    let bytes = read_payload(&args.payload)?;
    print!("{}", render(&bytes)?);
    Ok(())
}

fn render(bytes: &[u8]) -> Result<String> {
    let mut out = String::new();
    let _ = writeln!(out, "Payload: {} ({} bytes)", hex::encode(bytes), bytes.len());

    for subtype in [UUID_STANDARD, UUID_LEGACY] {
        let uuid = decode(bytes, subtype).context("cannot inspect payload")?;
        let name = BinarySubtype::from_wire_byte(subtype).name();
        let _ = writeln!(out, "{subtype:#04x} {name:<12} {uuid}");
    }
    Ok(out)
}
