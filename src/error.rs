//! Error types for phonetic vector operations.

use thiserror::Error;

/// Errors raised by the script registry, codec and property accessor.
///
/// Out-of-range offsets and invalid table rows are not errors: the codec
/// degrades to the invalid (all-zero) vector for those. The variants here
/// are configuration or programmer errors and are never retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PhoneticError {
    /// The language code is not present in the script registry.
    #[error("Language {0} not supported")]
    UnsupportedLanguage(String),

    /// The property name does not match any phonetic vector field.
    #[error("Unknown property name: {0}")]
    UnknownProperty(String),

    /// A binary vector operation received vectors of different lengths.
    #[error("Vector length mismatch: {left} != {right}")]
    LengthMismatch {
        /// Length of the left operand
        left: usize,
        /// Length of the right operand
        right: usize,
    },

    /// The offset does not map to a Unicode scalar value in the language's script.
    #[error("Offset {offset} has no character in language {lang}")]
    InvalidOffset {
        /// The structural offset
        offset: i32,
        /// The language code
        lang: String,
    },

    /// A packed vector whose word count does not fit its length, or whose
    /// padding bits above the length are set.
    #[error("Malformed vector: {words} words for {len} bits")]
    MalformedVector {
        /// Declared bit length
        len: usize,
        /// Number of storage words
        words: usize,
    },

    /// A table row whose vector length differs from the table width.
    #[error("Row {row} has {found} bits, table width is {width}")]
    RowWidthMismatch {
        /// Row index
        row: usize,
        /// Declared table width
        width: usize,
        /// Length of the row's vector
        found: usize,
    },

    /// The ARPABET symbol is not in the loaded symbol table.
    #[error("Unknown ARPABET phoneme: {0}")]
    UnknownPhoneme(String),

    /// The phoneme ID is not in the loaded symbol table.
    #[error("Unknown ARPABET phoneme id: {0}")]
    UnknownPhonemeId(usize),
}

/// A specialized `Result` type for phonetic operations.
pub type Result<T> = std::result::Result<T, PhoneticError>;
