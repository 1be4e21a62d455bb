//! Spreadsheet XML parts: shared strings, worksheet cells, and cell
//! resolution.
//!
//! # Example
//!
//! ```
//! use techbase::xlsx::{resolve, ParsedSheet, SharedStrings};
//!
//! let strings = SharedStrings::parse("<sst><si><t>0.5</t></si></sst>")?;
//! let sheet = ParsedSheet::parse(r#"<worksheet><c r="B2" t="s"><v>0</v></c></worksheet>"#)?;
//! assert_eq!(resolve(&sheet, "B2", &strings)?, "0.5");
//! # Ok::<(), techbase::Error>(())
//! ```

mod resolve;
mod shared_strings;
mod sheet;

pub use resolve::{cell_ref, resolve};
pub use shared_strings::SharedStrings;
pub use sheet::{CellRecord, CellType, ParsedSheet};
