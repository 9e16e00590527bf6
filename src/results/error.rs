use thiserror::Error;

/// Structurally impossible reply data. Missing optional fields are never an
/// error; they decode to `None` or are omitted.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Object id or uuid property is not a valid UUID.
    #[error("invalid uuid '{value}': {source}")]
    InvalidUuid {
        value: String,
        #[source]
        source: uuid::Error,
    },

    /// Date property is not RFC 3339.
    #[error("invalid date '{value}': {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Packed list bytes are not a whole number of elements.
    #[error("packed {kind} list has {len} bytes, not a multiple of the element size")]
    MalformedPackedValues {
        /// Element kind (`"number"` or `"int"`).
        kind: &'static str,
        /// Byte length received.
        len: usize,
    },

    /// Vector bytes do not decode to whole `f32` rows.
    #[error("vector '{name}' has malformed payload of {len} bytes")]
    MalformedVector {
        /// Vector name.
        name: String,
        /// Byte length received.
        len: usize,
    },

    /// Epoch-millisecond timestamp is out of range.
    #[error("timestamp {millis} ms is out of range")]
    InvalidTimestamp {
        /// Raw value.
        millis: i64,
    },
}
