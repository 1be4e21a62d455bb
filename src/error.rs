//! Error types for the techbase library.

use std::io;
use thiserror::Error;

/// Result type alias for techbase operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting technical tables.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The workbook is missing or is not a valid ZIP container.
    #[error("Archive error: {0}")]
    Archive(String),

    /// A required part is absent from the container.
    #[error("Part not found: {0}")]
    PartNotFound(String),

    /// A cell references a shared string past the end of the table.
    #[error("Shared string index {index} out of range (table has {len} entries)")]
    SharedStringIndex {
        /// Referenced index, as written in the cell
        index: i64,
        /// Number of entries in the table
        len: usize,
    },

    /// A cell that must hold a number holds something else.
    #[error("Invalid numeric value {value:?} in cell {reference}")]
    Format {
        /// Cell reference (e.g. "B17")
        reference: String,
        /// Resolved cell text
        value: String,
    },

    /// Error parsing XML content.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// Error serializing output documents.
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Archive(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlParse(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialize(err.to_string())
    }
}
