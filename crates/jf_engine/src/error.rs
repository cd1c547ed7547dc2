//! Unified error types for jf_engine

use thiserror::Error;

/// Main error type for jf_engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Parse int error: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    // === Loading Errors ===
    #[error("font data not specified")]
    MissingData,

    #[error("Malformed font file name '{name}', expected <letter><size><b|p>.jf")]
    MalformedFileName { name: String },

    #[error("Archive entry '{name}' not found")]
    EntryNotFound { name: String },

    #[error("BDF error: {0}")]
    Bdf(#[from] bdf::Error),

    // === Saving Errors ===
    #[error("Glyph for character '{ch}' (code {code}) is missing")]
    MissingGlyph { ch: char, code: u32 },

    #[error("Glyph '{ch}': {field} {value} does not fit into the font header")]
    MetricOutOfRange { ch: char, field: &'static str, value: i32 },

    #[error("BDF {field} {value} is out of range")]
    BdfValueOutOfRange { field: &'static str, value: i64 },

    #[error("Bitmap offset {offset} exceeds the 3 byte position range")]
    HeapOverflow { offset: usize },

    #[error("{0}")]
    Generic(String),
}

/// Result type alias for jf_engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

// === Convenience constructors ===
impl EngineError {
    /// Create a generic error from any displayable type
    pub fn generic(msg: impl std::fmt::Display) -> Self {
        Self::Generic(msg.to_string())
    }
}
