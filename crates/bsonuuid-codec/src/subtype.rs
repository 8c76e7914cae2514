use crate::layout::ByteOrder;

/// Wire byte of the legacy UUID subtype (per-half reversed byte order).
pub const UUID_LEGACY: u8 = 0x03;

/// Wire byte of the standard UUID subtype (big-endian byte order).
pub const UUID_STANDARD: u8 = 0x04;

/// BSON binary subtypes.
///
/// ```text
/// ┌───────────┬──────────────┐
/// │ Wire      │ Subtype      │
/// ├───────────┼──────────────┤
/// │ 0x00      │ Generic      │
/// │ 0x01      │ Function     │
/// │ 0x02      │ BinaryOld    │
/// │ 0x03      │ UuidLegacy   │
/// │ 0x04      │ Uuid         │
/// │ 0x05      │ Md5          │
/// │ 0x06      │ Encrypted    │
/// │ 0x07      │ Column       │
/// │ 0x08      │ Sensitive    │
/// │ 0x80-0xFF │ UserDefined  │
/// └───────────┴──────────────┘
/// ```
///
/// Decoding a subtype byte never fails. Bytes in the user-defined range
/// become `UserDefined(b)` and anything else outside the table becomes
/// `Other(b)`, so the raw byte always survives a roundtrip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinarySubtype {
    Generic,
    Function,
    BinaryOld,
    UuidLegacy,
    Uuid,
    Md5,
    Encrypted,
    Column,
    Sensitive,
    /// Application-defined subtype in `0x80..=0xFF`.
    UserDefined(u8),
    /// Reserved subtype this version doesn't know about.
    Other(u8),
}

impl BinarySubtype {
    /// Encode this variant as a single wire byte.
    pub fn to_wire_byte(self) -> u8 {
        match self {
            Self::Generic => 0x00,
            Self::Function => 0x01,
            Self::BinaryOld => 0x02,
            Self::UuidLegacy => UUID_LEGACY,
            Self::Uuid => UUID_STANDARD,
            Self::Md5 => 0x05,
            Self::Encrypted => 0x06,
            Self::Column => 0x07,
            Self::Sensitive => 0x08,
            Self::UserDefined(b) | Self::Other(b) => b,
        }
    }

    /// Decode a wire byte into a [`BinarySubtype`].
    pub fn from_wire_byte(value: u8) -> Self {
        match value {
            0x00 => Self::Generic,
            0x01 => Self::Function,
            0x02 => Self::BinaryOld,
            UUID_LEGACY => Self::UuidLegacy,
            UUID_STANDARD => Self::Uuid,
            0x05 => Self::Md5,
            0x06 => Self::Encrypted,
            0x07 => Self::Column,
            0x08 => Self::Sensitive,
            0x80..=0xFF => Self::UserDefined(value),
            other => Self::Other(other),
        }
    }

    /// Whether payloads of this subtype are UUIDs.
    pub fn is_uuid(self) -> bool {
        matches!(self, Self::UuidLegacy | Self::Uuid)
    }

    /// Byte order of the payload, for the two UUID subtypes only.
    pub fn uuid_byte_order(self) -> Option<ByteOrder> {
        match self {
            Self::UuidLegacy => Some(ByteOrder::Legacy),
            Self::Uuid => Some(ByteOrder::Standard),
            _ => None,
        }
    }

    /// Human-readable name, as used by the CLI.
    pub fn name(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Function => "function",
            Self::BinaryOld => "binary-old",
            Self::UuidLegacy => "uuid-legacy",
            Self::Uuid => "uuid",
            Self::Md5 => "md5",
            Self::Encrypted => "encrypted",
            Self::Column => "column",
            Self::Sensitive => "sensitive",
            Self::UserDefined(_) => "user-defined",
            Self::Other(_) => "reserved",
        }
    }
}

impl From<u8> for BinarySubtype {
    fn from(value: u8) -> Self {
        Self::from_wire_byte(value)
    }
}

impl From<BinarySubtype> for u8 {
    fn from(subtype: BinarySubtype) -> Self {
        subtype.to_wire_byte()
    }
}
