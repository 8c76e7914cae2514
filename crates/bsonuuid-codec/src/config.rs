/// Configuration for [`UuidDecoder`](crate::UuidDecoder).
///
/// ```text
/// ┌────────────────┬──────────────────────────────────────────────────┐
/// │ Field          │ Purpose                                          │
/// ├────────────────┼──────────────────────────────────────────────────┤
/// │ subtype_policy │ What to do with a subtype byte that isn't 3 or 4 │
/// └────────────────┴──────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Handling of subtype bytes outside the two UUID subtypes.
    pub subtype_policy: SubtypePolicy,
}

impl DecodeConfig {
    /// Configuration that rejects non-UUID subtypes.
    pub fn strict() -> Self {
        Self {
            subtype_policy: SubtypePolicy::Strict,
        }
    }
}

/// Handling of subtype bytes other than `0x03` and `0x04`.
///
/// ```text
/// ┌────────────┬──────────────────────────────────────────────────────┐
/// │ Policy     │ Behavior for e.g. subtype 0x00 or 0x80               │
/// ├────────────┼──────────────────────────────────────────────────────┤
/// │ Permissive │ Decode as standard byte order. The default.          │
/// │ Strict     │ Fail with SerializationError::UnsupportedSubtype.    │
/// └────────────┴──────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubtypePolicy {
    /// Unrecognized subtypes take the standard path.
    #[default]
    Permissive,
    /// Only the two UUID subtypes are accepted.
    Strict,
}
