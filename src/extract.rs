//! Row extraction from the parsed worksheets.

use crate::coerce::{to_float, to_int};
use crate::container::WorkbookContainer;
use crate::error::Result;
use crate::model::{LookupRow, Metadata, MortalityRow, TechnicalBases};
use crate::options::{ExtractOptions, LookupLayout, MetadataOptions, MortalityLayout};
use crate::xlsx::{cell_ref, resolve, ParsedSheet, SharedStrings};
use tracing::{debug, warn};

/// Resolves and coerces cells of one sheet.
struct CellReader<'a> {
    part: &'a str,
    sheet: &'a ParsedSheet,
    strings: &'a SharedStrings,
}

impl<'a> CellReader<'a> {
    fn text(&self, reference: &str) -> Result<&'a str> {
        if let Some(cell) = self.sheet.get(reference) {
            if cell.has_stale_formula() {
                warn!(
                    part = self.part,
                    cell = reference,
                    formula = %cell.formula,
                    "formula has no cached value, reading as blank"
                );
            }
        }
        resolve(self.sheet, reference, self.strings)
    }

    fn float(&self, column: &str, row: u32) -> Result<f64> {
        let reference = cell_ref(column, row);
        to_float(self.text(&reference)?, &reference)
    }

    fn int(&self, column: &str, row: u32) -> Result<i64> {
        let reference = cell_ref(column, row);
        to_int(self.text(&reference)?, &reference)
    }
}

/// Load the shared string table, or an empty one if the part is absent.
pub fn load_shared_strings(container: &WorkbookContainer, part: &str) -> Result<SharedStrings> {
    if !container.exists(part) {
        debug!(part, "no shared string part, using empty table");
        return Ok(SharedStrings::default());
    }
    let strings = SharedStrings::parse(&container.read_xml(part)?)?;
    debug!(part, count = strings.len(), "loaded shared strings");
    Ok(strings)
}

/// Parse a worksheet part. Fails if the part is missing.
pub fn load_sheet(container: &WorkbookContainer, part: &str) -> Result<ParsedSheet> {
    let sheet = ParsedSheet::parse(&container.read_xml(part)?)?;
    debug!(part, cells = sheet.len(), "parsed worksheet");
    Ok(sheet)
}

/// Read one mortality row per source row, in ascending row order.
///
/// Blank rows are kept as zero-valued records.
pub fn extract_mortality(
    sheet: &ParsedSheet,
    strings: &SharedStrings,
    layout: &MortalityLayout,
) -> Result<Vec<MortalityRow>> {
    let cells = CellReader {
        part: &layout.part,
        sheet,
        strings,
    };
    let [la0, la1, li0, li1, pai0, pai1] = &layout.value_columns;

    layout
        .rows
        .clone()
        .map(|row| -> Result<MortalityRow> {
            Ok(MortalityRow {
                age_month: cells.int(&layout.age_column, row)?,
                la0: cells.float(la0, row)?,
                la1: cells.float(la1, row)?,
                li0: cells.float(li0, row)?,
                li1: cells.float(li1, row)?,
                pai0: cells.float(pai0, row)?,
                pai1: cells.float(pai1, row)?,
            })
        })
        .collect()
}

/// Read one lookup row per source row, in ascending row order.
pub fn extract_lookup(
    sheet: &ParsedSheet,
    strings: &SharedStrings,
    layout: &LookupLayout,
) -> Result<Vec<LookupRow>> {
    let cells = CellReader {
        part: &layout.part,
        sheet,
        strings,
    };

    layout
        .rows
        .clone()
        .map(|row| -> Result<LookupRow> {
            Ok(LookupRow {
                age: cells.int(&layout.age_column, row)?,
                factor: cells.float(&layout.factor_column, row)?,
            })
        })
        .collect()
}

/// Build the metadata record for a run.
pub fn build_metadata(options: &MetadataOptions, source_workbook: &str) -> Metadata {
    Metadata {
        version: options.version.clone(),
        source_workbook: source_workbook.to_string(),
        source_sheet_mortality: options.mortality_sheet_label.clone(),
        source_sheet_lookup: options.lookup_sheet_label.clone(),
        interest_rate_effective_annual: options.interest_rate,
        xmin_fixed: options.xmin_fixed,
    }
}

/// Run the whole extraction against an opened container.
///
/// `source_workbook` is recorded verbatim in the metadata.
pub fn extract(
    container: &WorkbookContainer,
    options: &ExtractOptions,
    source_workbook: &str,
) -> Result<TechnicalBases> {
    let strings = load_shared_strings(container, &options.shared_strings_part)?;
    let mortality_sheet = load_sheet(container, &options.mortality.part)?;
    let lookup_sheet = load_sheet(container, &options.lookup.part)?;

    let mortality = extract_mortality(&mortality_sheet, &strings, &options.mortality)?;
    let lookup = extract_lookup(&lookup_sheet, &strings, &options.lookup)?;
    debug!(
        mortality = mortality.len(),
        lookup = lookup.len(),
        "extracted tables"
    );

    Ok(TechnicalBases {
        mortality,
        lookup,
        metadata: build_metadata(&options.metadata, source_workbook),
    })
}
