use thiserror::Error;

/// Malformed serialized scanner state.
///
/// State produced by [`Scanner::serialize`] always decodes successfully, so
/// these can only be caused by foreign or corrupted buffers.
///
/// [`Scanner::serialize`]: crate::Scanner::serialize
#[derive(Error, Debug, Eq, PartialEq, Copy, Clone)]
pub enum StateDecodeError {
    #[error("Serialized state of {length} bytes is too short to contain the tag count header.")]
    HeaderTooShort { length: usize },

    #[error(
        "Serialized state claims {serialized} serialized tags, which exceeds \
         the total tag count of {logical}."
    )]
    CountMismatch { serialized: usize, logical: usize },

    #[error("Tag record #{index} is truncated at byte {offset}.")]
    TruncatedRecord { index: usize, offset: usize },

    #[error("Tag record #{index} has unknown tag kind `{kind_id}`.")]
    UnknownTagKind { index: usize, kind_id: u8 },
}
