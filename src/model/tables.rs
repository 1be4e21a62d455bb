//! Row types for the mortality and lookup factor tables.

use serde::{Deserialize, Serialize};

/// One row of the mortality table, keyed by age in months.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortalityRow {
    /// Age in months (column A)
    pub age_month: i64,
    /// Survivors `lx`, first sex (column B)
    pub la0: f64,
    /// Survivors `lx`, second sex (column C)
    pub la1: f64,
    /// Survivors `li`, first sex (column D)
    pub li0: f64,
    /// Survivors `li`, second sex (column E)
    pub li1: f64,
    /// `pai` rate, first sex (column F)
    pub pai0: f64,
    /// `pai` rate, second sex (column G)
    pub pai1: f64,
}

/// One row of the lookup factor table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LookupRow {
    /// Age in years
    pub age: i64,
    /// Factor applied at that age
    pub factor: f64,
}

/// Everything one extraction run produces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalBases {
    /// Mortality rows in source row order
    pub mortality: Vec<MortalityRow>,
    /// Lookup rows in source row order
    pub lookup: Vec<LookupRow>,
    /// Descriptive record for the run
    pub metadata: super::Metadata,
}
