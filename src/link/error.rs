//! Error types that can occur during link header parsing.

/// An error that can occur when parsing a link header.
///
/// Malformed link-values are not errors, they are dropped while the rest of the header is still
/// parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum LinkError {
    /// Header is longer than the configured maximum length.
    ///
    /// Only returned when [`Config::error_on_max_header_length`] is enabled.
    ///
    /// [`Config::error_on_max_header_length`]: crate::link::Config::error_on_max_header_length
    TooLong {
        /// Length of the header, in bytes.
        len: usize,
        /// Effective maximum length, in bytes.
        max: usize,
    },
}

impl std::error::Error for LinkError {}

impl std::fmt::Display for LinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooLong { len, max } => write!(
                f,
                "link header too long, it should be under {max} bytes (got {len})"
            ),
        }
    }
}
