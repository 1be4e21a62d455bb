//! # techbase
//!
//! Extracts the actuarial technical bases (a monthly mortality table and an
//! age lookup factor table) from a spreadsheet workbook and writes them as
//! JSON documents for downstream consumers.
//!
//! The workbook is read as a ZIP container. Two worksheet parts are parsed,
//! shared-string references are resolved, and fixed row ranges are coerced
//! into typed rows. Blank cells become zero; anything else that is not a
//! number aborts the run.
//!
//! ## Quick Start
//!
//! ```no_run
//! use techbase::{extract_file, render::write_outputs, ExtractOptions};
//!
//! let options = ExtractOptions::default();
//! let bases = extract_file("data/source/technical-bases.xlsm", &options)?;
//! println!("{} mortality rows", bases.mortality.len());
//!
//! write_outputs(&bases, "data/technical/v2025", options.json_format)?;
//! # Ok::<(), techbase::Error>(())
//! ```

pub mod coerce;
pub mod container;
pub mod error;
pub mod extract;
pub mod model;
pub mod options;
pub mod render;
pub mod xlsx;

// Re-exports
pub use container::WorkbookContainer;
pub use error::{Error, Result};
pub use model::{LookupRow, Metadata, MortalityRow, TechnicalBases};
pub use options::{ExtractOptions, LookupLayout, MetadataOptions, MortalityLayout};
pub use render::{write_outputs, JsonFormat, OutputPaths};

use std::path::Path;

/// Extract technical bases from a workbook file.
///
/// The path is recorded in the metadata as given.
pub fn extract_file(path: impl AsRef<Path>, options: &ExtractOptions) -> Result<TechnicalBases> {
    let path = path.as_ref();
    let container = WorkbookContainer::open(path)?;
    extract::extract(&container, options, &path.to_string_lossy())
}

/// Extract technical bases from an in-memory workbook.
///
/// `source_workbook` is only used for the metadata record.
///
/// # Example
///
/// ```no_run
/// use techbase::{extract_bytes, ExtractOptions};
///
/// let data = std::fs::read("workbook.xlsm")?;
/// let bases = extract_bytes(data, "workbook.xlsm", &ExtractOptions::default())?;
/// # Ok::<(), techbase::Error>(())
/// ```
pub fn extract_bytes(
    data: Vec<u8>,
    source_workbook: &str,
    options: &ExtractOptions,
) -> Result<TechnicalBases> {
    let container = WorkbookContainer::from_bytes(data)?;
    extract::extract(&container, options, source_workbook)
}
