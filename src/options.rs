//! Extraction options.
//!
//! The workbook layout (part names, row ranges, columns) is configuration,
//! not something discovered from the archive. Defaults describe the 2025
//! technical-bases workbook.

use crate::render::JsonFormat;
use std::ops::RangeInclusive;

/// Default shared string part.
pub const SHARED_STRINGS_PART: &str = "xl/sharedStrings.xml";

/// Where the mortality table lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MortalityLayout {
    /// Worksheet part holding the table
    pub part: String,
    /// Source rows, 1-based and inclusive
    pub rows: RangeInclusive<u32>,
    /// Column holding the age in months
    pub age_column: String,
    /// Columns for la0, la1, li0, li1, pai0, pai1 in that order
    pub value_columns: [String; 6],
}

impl Default for MortalityLayout {
    fn default() -> Self {
        Self {
            part: "xl/worksheets/sheet2.xml".to_string(),
            rows: 2..=3002,
            age_column: "A".to_string(),
            value_columns: ["B", "C", "D", "E", "F", "G"].map(String::from),
        }
    }
}

/// Where the lookup factor table lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupLayout {
    /// Worksheet part holding the table
    pub part: String,
    /// Source rows, 1-based and inclusive
    pub rows: RangeInclusive<u32>,
    /// Column holding the age
    pub age_column: String,
    /// Column holding the factor
    pub factor_column: String,
}

impl Default for LookupLayout {
    fn default() -> Self {
        Self {
            part: "xl/worksheets/sheet4.xml".to_string(),
            rows: 2..=42,
            age_column: "L".to_string(),
            factor_column: "M".to_string(),
        }
    }
}

/// Values copied into the metadata document.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataOptions {
    /// Version tag
    pub version: String,
    /// Label for the mortality sheet
    pub mortality_sheet_label: String,
    /// Label for the lookup sheet range
    pub lookup_sheet_label: String,
    /// Effective annual interest rate
    pub interest_rate: f64,
    /// Fixed minimum age in months
    pub xmin_fixed: i64,
}

impl Default for MetadataOptions {
    fn default() -> Self {
        Self {
            version: "2025".to_string(),
            mortality_sheet_label: "TABLA (sheet2)".to_string(),
            lookup_sheet_label: "Hoja3 (L2:M42)".to_string(),
            interest_rate: 0.04,
            xmin_fixed: 187,
        }
    }
}

/// Options for extracting and writing technical bases.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    /// Shared string part; a missing part means an empty table
    pub shared_strings_part: String,

    /// Mortality table layout
    pub mortality: MortalityLayout,

    /// Lookup factor table layout
    pub lookup: LookupLayout,

    /// Metadata values
    pub metadata: MetadataOptions,

    /// JSON output format
    pub json_format: JsonFormat,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            shared_strings_part: SHARED_STRINGS_PART.to_string(),
            mortality: MortalityLayout::default(),
            lookup: LookupLayout::default(),
            metadata: MetadataOptions::default(),
            json_format: JsonFormat::Pretty,
        }
    }
}

impl ExtractOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mortality worksheet part.
    pub fn with_mortality_part(mut self, part: impl Into<String>) -> Self {
        self.mortality.part = part.into();
        self
    }

    /// Set the mortality source rows.
    pub fn with_mortality_rows(mut self, rows: RangeInclusive<u32>) -> Self {
        self.mortality.rows = rows;
        self
    }

    /// Set the lookup worksheet part.
    pub fn with_lookup_part(mut self, part: impl Into<String>) -> Self {
        self.lookup.part = part.into();
        self
    }

    /// Set the lookup source rows.
    pub fn with_lookup_rows(mut self, rows: RangeInclusive<u32>) -> Self {
        self.lookup.rows = rows;
        self
    }

    /// Set the metadata values.
    pub fn with_metadata(mut self, metadata: MetadataOptions) -> Self {
        self.metadata = metadata;
        self
    }

    /// Set the JSON output format.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }
}
