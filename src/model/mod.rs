//! Output records for the extracted technical bases.
//!
//! Field order in each struct is the order keys appear in the serialized
//! JSON, so output stays diffable across runs.

mod metadata;
mod tables;

pub use metadata::*;
pub use tables::*;
