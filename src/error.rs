//! Error types for building formatters and for print/parse failures.

use thiserror::Error;

use crate::field::Field;
use crate::style::TextStyle;

/// Errors raised while assembling a formatter or its text tables.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TextError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("{operation} is not implemented")]
    NotImplemented { operation: &'static str },

    #[error("text '{text}' maps to both {first} and {second} in the {style} style")]
    DuplicateText {
        style: TextStyle,
        text: String,
        first: i64,
        second: i64,
    },

    #[error("empty text for value {value} in the {style} style")]
    EmptyText { style: TextStyle, value: i64 },

    #[error("the {style} style is not supported by this text source")]
    UnsupportedStyle { style: TextStyle },
}

/// Errors that can occur when printing field values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PrintError {
    #[error("no value for {field}")]
    MissingField { field: Field },

    #[error("value {value} out of range for {field}")]
    OutOfRange { field: Field, value: i64 },

    #[error(transparent)]
    Text(#[from] TextError),
}

/// Parse failures, anchored at the byte position where matching began.
///
/// A failed parse never advances the cursor past the anchor.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("no text or number matches {field} at position {position}")]
    NoMatch { field: Field, position: usize },

    #[error("expected '{expected}' at position {position}")]
    ExpectedLiteral { expected: String, position: usize },

    #[error("unparsed input remains at position {position}")]
    TrailingInput { position: usize },
}
