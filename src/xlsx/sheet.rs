//! Worksheet cell parsing.

use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use std::collections::HashMap;

/// The `t` attribute of a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellType {
    /// `t="s"`: the value is an index into the shared string table.
    SharedString,
    /// Any other marker, kept verbatim. Empty means a plain number.
    Literal(String),
}

impl CellType {
    fn from_marker(marker: &str) -> Self {
        match marker {
            "s" => CellType::SharedString,
            other => CellType::Literal(other.to_string()),
        }
    }
}

impl Default for CellType {
    fn default() -> Self {
        CellType::Literal(String::new())
    }
}

/// One `<c>` element as it appears in the worksheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellRecord {
    /// Cell type marker
    pub cell_type: CellType,
    /// Text of the `<v>` child, empty when absent
    pub value: String,
    /// Text of the `<f>` child, empty when absent. Never evaluated.
    pub formula: String,
}

impl CellRecord {
    /// A plain literal cell.
    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    /// A cell pointing into the shared string table.
    pub fn shared(index: usize) -> Self {
        Self {
            cell_type: CellType::SharedString,
            value: index.to_string(),
            formula: String::new(),
        }
    }

    /// Whether a formula is present but no cached value was stored for it.
    pub fn has_stale_formula(&self) -> bool {
        !self.formula.is_empty() && self.value.is_empty()
    }
}

/// Cells of one worksheet keyed by their reference (e.g. `"B17"`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSheet {
    cells: HashMap<String, CellRecord>,
}

/// Which child of the current cell is collecting text.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Capture {
    None,
    Value,
    Formula,
}

impl ParsedSheet {
    /// Parse worksheet XML.
    ///
    /// Cells without an `r` attribute are skipped. A later duplicate
    /// reference replaces the earlier one.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut cells = HashMap::new();
        let mut reader = quick_xml::Reader::from_str(xml);

        let mut buf = Vec::new();
        let mut in_cell = false;
        let mut capture = Capture::None;
        let mut current: Option<(String, CellRecord)> = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => match e.local_name().as_ref() {
                    b"c" => {
                        in_cell = true;
                        current = Self::start_cell(&e)?;
                    }
                    b"v" if in_cell => capture = Capture::Value,
                    b"f" if in_cell => capture = Capture::Formula,
                    _ => {}
                },
                Ok(Event::Empty(e)) if e.local_name().as_ref() == b"c" => {
                    if let Some((reference, record)) = Self::start_cell(&e)? {
                        cells.insert(reference, record);
                    }
                }
                Ok(Event::Text(e)) => {
                    if let Some((_, record)) = current.as_mut() {
                        match capture {
                            Capture::Value => record.value.push_str(&e.unescape()?),
                            Capture::Formula => record.formula.push_str(&e.unescape()?),
                            Capture::None => {}
                        }
                    }
                }
                Ok(Event::CData(e)) => {
                    if let Some((_, record)) = current.as_mut() {
                        let text = String::from_utf8_lossy(&e);
                        match capture {
                            Capture::Value => record.value.push_str(&text),
                            Capture::Formula => record.formula.push_str(&text),
                            Capture::None => {}
                        }
                    }
                }
                Ok(Event::End(e)) => match e.local_name().as_ref() {
                    b"c" => {
                        if let Some((reference, record)) = current.take() {
                            cells.insert(reference, record);
                        }
                        in_cell = false;
                        capture = Capture::None;
                    }
                    b"v" | b"f" => capture = Capture::None,
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(Error::XmlParse(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        Ok(Self { cells })
    }

    /// Read the `r` and `t` attributes of a `<c>` element.
    fn start_cell(e: &BytesStart<'_>) -> Result<Option<(String, CellRecord)>> {
        let mut reference = None;
        let mut record = CellRecord::default();

        for attr in e.attributes() {
            let attr = attr?;
            match attr.key.local_name().as_ref() {
                b"r" => reference = Some(attr.unescape_value()?.into_owned()),
                b"t" => record.cell_type = CellType::from_marker(&attr.unescape_value()?),
                _ => {}
            }
        }

        Ok(reference
            .filter(|r| !r.is_empty())
            .map(|r| (r, record)))
    }

    /// Look up a cell by reference.
    pub fn get(&self, reference: &str) -> Option<&CellRecord> {
        self.cells.get(reference)
    }

    /// Number of cells with a reference.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the sheet has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<(String, CellRecord)> for ParsedSheet {
    fn from_iter<I: IntoIterator<Item = (String, CellRecord)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
