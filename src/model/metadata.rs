//! Descriptive record written next to the tables.

use serde::{Deserialize, Serialize};

/// Static description of an extraction run.
///
/// Nothing here is read from the workbook; the values come from
/// [`MetadataOptions`](crate::options::MetadataOptions) and the source path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Version tag of the technical bases (e.g. "2025")
    pub version: String,
    /// Workbook path as given by the caller
    pub source_workbook: String,
    /// Label of the sheet holding the mortality table
    pub source_sheet_mortality: String,
    /// Label of the sheet range holding the lookup factors
    pub source_sheet_lookup: String,
    /// Effective annual interest rate
    pub interest_rate_effective_annual: f64,
    /// Fixed minimum age in months
    pub xmin_fixed: i64,
}
