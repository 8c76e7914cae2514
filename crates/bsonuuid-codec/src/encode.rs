use uuid::Uuid;

use crate::error::SerializationError;
use crate::layout::{ByteOrder, UUID_LEN, write_segments};

/// Encode `uuid` as a 16-byte BSON binary payload for `subtype`.
///
/// Inverse of [`decode`](crate::decode): subtype `0x03` produces the legacy
/// layout, every other subtype the standard layout.
pub fn encode(uuid: &Uuid, subtype: u8) -> [u8; UUID_LEN] {
    let (high, low) = uuid.as_u64_pair();
    let mut buf = write_segments(high, low);
    ByteOrder::for_subtype(subtype).apply(&mut buf);
    buf
}

/// Encode `uuid` into a caller-supplied buffer.
///
/// # Errors
///
/// [`SerializationError::InvalidLength`] if `out` is not exactly 16 bytes.
/// `out` is untouched in that case.
pub fn encode_into(uuid: &Uuid, subtype: u8, out: &mut [u8]) -> Result<(), SerializationError> {
    if out.len() != UUID_LEN {
        return Err(SerializationError::InvalidLength { actual: out.len() });
    }
    out.copy_from_slice(&encode(uuid, subtype));
    Ok(())
}
