//! Parsing of command-line payloads and subtype names.

use std::fs;

use anyhow::{Context, Result, bail};
use bsonuuid_codec::{UUID_LEGACY, UUID_STANDARD};

use crate::PayloadArgs;

/// Resolve a [`PayloadArgs`] to raw bytes.
///
/// The length is not checked here; the codec reports a wrong length with
/// the observed size.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the hex is malformed.
pub fn read_payload(args: &PayloadArgs) -> Result<Vec<u8>> {
    match (&args.hex, &args.file) {
        (Some(hex), _) => parse_hex(hex),
        (None, Some(path)) => {
            fs::read(path).with_context(|| format!("cannot read {}", path.display()))
        }
        (None, None) => bail!("no payload given: pass hex or --file"),
    }
}

/// Parse hex, ignoring `-`, `:`, whitespace and an optional `0x` prefix.
///
/// # Errors
///
/// Returns an error if the remaining text is not valid hex.
pub fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let trimmed = text.trim();
    let trimmed = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let digits: String = trimmed
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != ':')
        .collect();
    hex::decode(&digits).with_context(|| format!("invalid hex payload {text:?}"))
}

/// Parse a subtype argument.
///
/// Accepts `legacy`, `standard`, a decimal byte (`3`), or a hex byte
/// (`0x03`).
///
/// # Errors
///
/// Returns a message for clap if the text is none of the above.
pub fn parse_subtype(text: &str) -> std::result::Result<u8, String> {
    match text.to_ascii_lowercase().as_str() {
        "legacy" | "uuid-legacy" => Ok(UUID_LEGACY),
        "standard" | "uuid" => Ok(UUID_STANDARD),
        other => {
            let parsed = match other.strip_prefix("0x") {
                Some(hex) => u8::from_str_radix(hex, 16),
                None => other.parse::<u8>(),
            };
            parsed.map_err(|_| {
                format!("expected `legacy`, `standard`, or a byte value (0-255 or 0x00-0xFF), got {text:?}")
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_with_separators() {
        let bytes = parse_hex("12:3e-45 67").unwrap();
        assert_eq!(bytes, vec![0x12, 0x3e, 0x45, 0x67]);
    }

    #[test]
    fn hex_with_prefix() {
        assert_eq!(parse_hex("0xFF00").unwrap(), vec![0xFF, 0x00]);
    }

    #[test]
    fn hex_rejects_garbage() {
        assert!(parse_hex("zz").is_err());
        assert!(parse_hex("abc").is_err());
    }

    #[test]
    fn subtype_names() {
        assert_eq!(parse_subtype("legacy"), Ok(0x03));
        assert_eq!(parse_subtype("Standard"), Ok(0x04));
        assert_eq!(parse_subtype("uuid-legacy"), Ok(0x03));
    }

    #[test]
    fn subtype_numbers() {
        assert_eq!(parse_subtype("4"), Ok(0x04));
        assert_eq!(parse_subtype("0x80"), Ok(0x80));
        assert_eq!(parse_subtype("0XFF"), Ok(0xFF));
        assert!(parse_subtype("256").is_err());
        assert!(parse_subtype("0x100").is_err());
        assert!(parse_subtype("md5").is_err());
    }
}
