/// Implementation of `bsonuuid decode`.
///
/// # Output
///
/// Plain (default):
///
/// ```text
/// 123e4567-e89b-12d3-a456-426614174000
/// ```
///
/// With `--json`:
///
/// ```text
/// {
///   "uuid": "123e4567-e89b-12d3-a456-426614174000",
///   "high": "0x123e4567e89b12d3",
///   "low": "0xa456426614174000",
///   "subtype": 4,
///   "subtype_name": "uuid",
///   "byte_order": "standard"
/// }
/// ```
use anyhow::{Context, Result};
use bsonuuid_codec::{BinarySubtype, ByteOrder, DecodeConfig, Uuid, UuidDecoder};
use serde::Serialize;
use tracing::debug;

use crate::DecodeArgs;
use crate::input::read_payload;

/// JSON shape printed by `--json`.
#[derive(Serialize)]
struct DecodeReport {
    uuid: String,
    high: String,
    low: String,
    subtype: u8,
    subtype_name: &'static str,
    byte_order: &'static str,
}

impl DecodeReport {
    fn new(uuid: &Uuid, subtype: u8) -> Self {
        let (high, low) = uuid.as_u64_pair();
        Self {
            uuid: uuid.hyphenated().to_string(),
            high: format!("{high:#018x}"),
            low: format!("{low:#018x}"),
            subtype,
            subtype_name: BinarySubtype::from_wire_byte(subtype).name(),
            byte_order: ByteOrder::for_subtype(subtype).name(),
        }
    }
}

/// Run the `bsonuuid decode` command.
///
/// # Errors
///
/// Returns an error if the payload cannot be read or parsed, is not 16
/// bytes, or (with `--strict`) carries a non-UUID subtype.
pub fn run(args: &DecodeArgs) -> Result<()> {
    let bytes = read_payload(&args.payload)?;
    let config = if args.strict {
        DecodeConfig::strict()
    } else {
        DecodeConfig::default()
    };
    debug!(len = bytes.len(), subtype = args.subtype, strict = args.strict, "decoding payload");

    let uuid = UuidDecoder::new(config)
        .decode(&bytes, args.subtype)
        .with_context(|| format!("cannot decode payload as subtype {:#04x}", args.subtype))?;

    if args.json {
        let report = DecodeReport::new(&uuid, args.subtype);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{uuid}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_fields() {
        let uuid = Uuid::from_u64_pair(0x123e_4567_e89b_12d3, 0xa456_4266_1417_4000);
        let report = DecodeReport::new(&uuid, 0x03);
        assert_eq!(report.uuid, "123e4567-e89b-12d3-a456-426614174000");
        assert_eq!(report.high, "0x123e4567e89b12d3");
        assert_eq!(report.low, "0xa456426614174000");
        assert_eq!(report.subtype_name, "uuid-legacy");
        assert_eq!(report.byte_order, "legacy");
    }

    #[test]
    fn report_pads_segments() {
        let report = DecodeReport::new(&Uuid::nil(), 0x04);
        assert_eq!(report.high, "0x0000000000000000");
        assert_eq!(report.low, "0x0000000000000000");
    }
}
