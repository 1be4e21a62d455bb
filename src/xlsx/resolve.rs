//! Resolution of cell references to their text.

use super::shared_strings::SharedStrings;
use super::sheet::{CellType, ParsedSheet};
use crate::error::{Error, Result};

/// Build an A1-style reference from a column and a 1-based row.
pub fn cell_ref(column: &str, row: u32) -> String {
    format!("{}{}", column, row)
}

/// Resolve a cell to its text.
///
/// A reference with no entry resolves to `""`. Shared-string cells with a
/// value are looked up in `strings`; everything else returns the raw value.
pub fn resolve<'a>(
    sheet: &'a ParsedSheet,
    reference: &str,
    strings: &'a SharedStrings,
) -> Result<&'a str> {
    let Some(cell) = sheet.get(reference) else {
        return Ok("");
    };

    match cell.cell_type {
        CellType::SharedString if !cell.value.is_empty() => {
            let index: i64 = cell.value.trim().parse().map_err(|_| Error::Format {
                reference: reference.to_string(),
                value: cell.value.clone(),
            })?;
            usize::try_from(index)
                .ok()
                .and_then(|i| strings.get(i))
                .ok_or_else(|| Error::SharedStringIndex {
                    index,
                    len: strings.len(),
                })
        }
        _ => Ok(cell.value.as_str()),
    }
}
