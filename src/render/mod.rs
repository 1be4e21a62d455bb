//! JSON rendering and output files.
//!
//! # Example
//!
//! ```no_run
//! use techbase::{extract_file, render::write_outputs, ExtractOptions};
//!
//! let options = ExtractOptions::default();
//! let bases = extract_file("workbook.xlsm", &options)?;
//! write_outputs(&bases, "data/technical/v2025", options.json_format)?;
//! # Ok::<(), techbase::Error>(())
//! ```

mod json;
mod writer;

pub use json::{to_json, JsonFormat};
pub use writer::{
    write_outputs, OutputPaths, LOOKUP_FILE_NAME, METADATA_FILE_NAME, MORTALITY_FILE_NAME,
};
