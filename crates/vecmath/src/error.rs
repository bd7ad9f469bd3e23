use std::{error::Error, io};

/// Error returned when reading or parsing a [`Vector`][crate::Vector] from text fails.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ReadError {
    /// The underlying reader returned an error.
    #[error("failed to read vector input")]
    Io(#[from] io::Error),

    /// The input ended before all components could be read.
    #[error("input ended before component {index} (expected {expected} components)")]
    UnexpectedEof { index: usize, expected: usize },

    /// A token could not be parsed as the element type.
    #[error("invalid vector component {index} `{token}`: {source}")]
    InvalidComponent {
        index: usize,
        token: String,
        source: Box<dyn Error + Send + Sync>,
    },

    /// More input followed the last component.
    #[error("unexpected trailing input `{token}`")]
    TrailingInput { token: String },

    /// The type tag's parentheses are not balanced.
    #[error("unbalanced parentheses around vector components")]
    MalformedTag,
}
