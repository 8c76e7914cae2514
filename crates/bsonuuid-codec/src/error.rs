/// Errors raised while converting between BSON binary payloads and UUIDs.
///
/// ```text
///   SerializationError
///   ├── InvalidLength        ← payload is not exactly 16 bytes
///   └── UnsupportedSubtype   ← non-UUID subtype under the strict policy
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SerializationError {
    /// The payload (or output buffer) was not exactly [`UUID_LEN`](crate::UUID_LEN) bytes.
    ///
    /// Carries the observed length so a truncated or padded payload can be
    /// told apart in logs.
    #[error("expected length to be 16, not {actual}")]
    InvalidLength { actual: usize },

    /// The subtype byte is not one of the two UUID subtypes.
    ///
    /// Only returned by a decoder configured with
    /// [`SubtypePolicy::Strict`](crate::SubtypePolicy::Strict). The default
    /// policy reads such payloads in standard byte order instead.
    #[error("binary subtype {value:#04X} does not hold a UUID")]
    UnsupportedSubtype { value: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_length_message_names_actual_length() {
        let err = SerializationError::InvalidLength { actual: 15 };
        assert_eq!(err.to_string(), "expected length to be 16, not 15");
    }

    #[test]
    fn unsupported_subtype_message_is_hex() {
        let err = SerializationError::UnsupportedSubtype { value: 0x05 };
        assert_eq!(err.to_string(), "binary subtype 0x05 does not hold a UUID");
    }
}
