use tracing::debug;
use uuid::Uuid;

use crate::config::{DecodeConfig, SubtypePolicy};
use crate::error::SerializationError;
use crate::layout::{ByteOrder, UUID_LEN, read_segments};
use crate::subtype::BinarySubtype;

/// Decode a BSON binary UUID payload with the default (permissive) policy.
///
/// The payload is copied before any reordering, so `bytes` is left as the
/// caller passed it. Use [`decode_in_place`] when the caller relies on the
/// buffer being rewritten into standard order.
///
/// # Errors
///
/// [`SerializationError::InvalidLength`] if `bytes` is not 16 bytes long.
///
/// # Example
///
/// ```
/// use bsonuuid_codec::{UUID_LEGACY, UUID_STANDARD, decode};
///
/// let standard = [
///     0x12, 0x3e, 0x45, 0x67, 0xe8, 0x9b, 0x12, 0xd3,
///     0xa4, 0x56, 0x42, 0x66, 0x14, 0x17, 0x40, 0x00,
/// ];
/// let legacy = [
///     0xd3, 0x12, 0x9b, 0xe8, 0x67, 0x45, 0x3e, 0x12,
///     0x00, 0x40, 0x17, 0x14, 0x66, 0x42, 0x56, 0xa4,
/// ];
///
/// let a = decode(&standard, UUID_STANDARD).unwrap();
/// let b = decode(&legacy, UUID_LEGACY).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "123e4567-e89b-12d3-a456-426614174000");
/// ```
pub fn decode(bytes: &[u8], subtype: u8) -> Result<Uuid, SerializationError> {
    UuidDecoder::default().decode(bytes, subtype)
}

/// Like [`decode`], but rewrites a legacy payload into standard order in
/// `bytes` itself.
///
/// After a successful call `bytes` always holds the standard-order layout
/// of the returned UUID. On error `bytes` is untouched.
///
/// # Errors
///
/// [`SerializationError::InvalidLength`] if `bytes` is not 16 bytes long.
pub fn decode_in_place(bytes: &mut [u8], subtype: u8) -> Result<Uuid, SerializationError> {
    UuidDecoder::default().decode_in_place(bytes, subtype)
}

/// A UUID decoder bound to a [`DecodeConfig`].
///
/// The decoder holds no state besides its configuration; one value can be
/// shared freely and used for any number of payloads.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidDecoder {
    config: DecodeConfig,
}

impl UuidDecoder {
    pub fn new(config: DecodeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecodeConfig {
        &self.config
    }

    /// Decode `bytes` under this decoder's subtype policy.
    ///
    /// The length is checked before the subtype.
    ///
    /// # Errors
    ///
    /// - [`SerializationError::InvalidLength`] if `bytes` is not 16 bytes.
    /// - [`SerializationError::UnsupportedSubtype`] if the policy is strict
    ///   and `subtype` is neither `0x03` nor `0x04`.
    pub fn decode(&self, bytes: &[u8], subtype: u8) -> Result<Uuid, SerializationError> {
        let mut buf: [u8; UUID_LEN] = bytes
            .try_into()
            .map_err(|_| SerializationError::InvalidLength {
                actual: bytes.len(),
            })?;
        let order = self.byte_order(subtype)?;
        order.apply(&mut buf);
        Ok(uuid_from_standard(&buf))
    }

    /// Decode `bytes` under this decoder's subtype policy, reordering the
    /// caller's buffer in place.
    ///
    /// # Errors
    ///
    /// Same as [`UuidDecoder::decode`]. The buffer is not modified when an
    /// error is returned.
    pub fn decode_in_place(&self, bytes: &mut [u8], subtype: u8) -> Result<Uuid, SerializationError> {
        let actual = bytes.len();
        let buf: &mut [u8; UUID_LEN] = bytes
            .try_into()
            .map_err(|_| SerializationError::InvalidLength { actual })?;
        let order = self.byte_order(subtype)?;
        order.apply(buf);
        Ok(uuid_from_standard(buf))
    }

    fn byte_order(&self, subtype: u8) -> Result<ByteOrder, SerializationError> {
        let kind = BinarySubtype::from_wire_byte(subtype);
        match (kind.uuid_byte_order(), self.config.subtype_policy) {
            (Some(order), _) => Ok(order),
            (None, SubtypePolicy::Permissive) => {
                debug!(
                    subtype,
                    kind = kind.name(),
                    "decoding non-UUID binary subtype in standard byte order"
                );
                Ok(ByteOrder::Standard)
            }
            (None, SubtypePolicy::Strict) => {
                debug!(
                    subtype,
                    kind = kind.name(),
                    "rejecting non-UUID binary subtype"
                );
                Err(SerializationError::UnsupportedSubtype { value: subtype })
            }
        }
    }
}

fn uuid_from_standard(buf: &[u8; UUID_LEN]) -> Uuid {
    let (high, low) = read_segments(buf);
    Uuid::from_u64_pair(high, low)
}
