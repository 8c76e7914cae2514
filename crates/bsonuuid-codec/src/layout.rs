use crate::subtype::UUID_LEGACY;

/// Size of a UUID payload in bytes.
pub const UUID_LEN: usize = 16;

/// Size of one 64-bit segment of the payload.
pub const HALF_LEN: usize = 8;

// A UUID is two u64 segments back to back:
//
//   offset  0..8   most-significant segment ("high")
//   offset  8..16  least-significant segment ("low")
//
// The legacy layout keeps that split but stores each segment little-endian,
// so converting between layouts is a reversal of each half on its own. The
// reversal is its own inverse, which is why `ByteOrder::apply` serves both
// the decode and the encode direction.

/// Byte order of a 16-byte UUID payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ByteOrder {
    /// Big-endian across all 16 bytes. Used by subtype `0x04`.
    #[default]
    Standard,
    /// Each 8-byte half byte-reversed. Used by subtype `0x03`.
    Legacy,
}

impl ByteOrder {
    /// Byte order implied by a raw subtype byte.
    ///
    /// `0x03` is legacy; every other value, recognized or not, is standard.
    pub fn for_subtype(subtype: u8) -> Self {
        if subtype == UUID_LEGACY {
            Self::Legacy
        } else {
            Self::Standard
        }
    }

    /// Convert `buf` between this order and standard order, in place.
    pub fn apply(self, buf: &mut [u8; UUID_LEN]) {
        if self == Self::Legacy {
            reverse_halves(buf);
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Legacy => "legacy",
        }
    }
}

/// Reverse bytes `[0..8)` and `[8..16)` independently.
pub fn reverse_halves(buf: &mut [u8; UUID_LEN]) {
    let (high, low) = buf.split_at_mut(HALF_LEN);
    high.reverse();
    low.reverse();
}

/// Read the (high, low) segments of a standard-order payload.
pub fn read_segments(buf: &[u8; UUID_LEN]) -> (u64, u64) {
    (read_u64_be(buf, 0), read_u64_be(buf, HALF_LEN))
}

/// Write (high, low) segments as a standard-order payload.
pub fn write_segments(high: u64, low: u64) -> [u8; UUID_LEN] {
    let mut buf = [0u8; UUID_LEN];
    buf[..HALF_LEN].copy_from_slice(&high.to_be_bytes());
    buf[HALF_LEN..].copy_from_slice(&low.to_be_bytes());
    buf
}

/// Big-endian u64 from the 8 bytes starting at `offset`.
///
/// Byte `offset` lands in the top 8 bits and byte `offset + 7` in the
/// bottom 8. `offset` is always 0 or [`HALF_LEN`].
fn read_u64_be(buf: &[u8; UUID_LEN], offset: usize) -> u64 {
    buf[offset..offset + HALF_LEN]
        .iter()
        .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte))
}
