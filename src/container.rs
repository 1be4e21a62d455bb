//! ZIP container access for spreadsheet workbooks.

use crate::error::{Error, Result};
use std::cell::RefCell;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;
use tracing::debug;

/// A workbook opened as a ZIP container.
///
/// The whole archive is buffered in memory on open, so the file handle is
/// released before any part is read. Parts are looked up by their internal
/// path, e.g. `xl/worksheets/sheet2.xml`.
pub struct WorkbookContainer {
    archive: RefCell<zip::ZipArchive<Cursor<Vec<u8>>>>,
}

/// Rewrite an `encoding="UTF-16"` declaration after the content has been
/// transcoded, so quick-xml does not try to decode it a second time.
fn fix_xml_encoding_declaration(content: String) -> String {
    if !content.starts_with("<?xml") {
        return content;
    }
    let Some(end_decl) = content.find("?>") else {
        return content;
    };

    let decl = content[..end_decl + 2]
        .replace("encoding=\"UTF-16\"", "encoding=\"UTF-8\"")
        .replace("encoding='UTF-16'", "encoding='UTF-8'")
        .replace("encoding=\"utf-16\"", "encoding=\"UTF-8\"")
        .replace("encoding='utf-16'", "encoding='UTF-8'");
    format!("{}{}", decl, &content[end_decl + 2..])
}

/// Decode XML part bytes, honouring a UTF-8 or UTF-16 byte order mark.
///
/// Workbook parts are UTF-8 in practice; UTF-16 shows up in files written by
/// some older producers.
pub fn decode_xml_bytes(bytes: &[u8]) -> Result<String> {
    match bytes {
        [0xEF, 0xBB, 0xBF, rest @ ..] => String::from_utf8(rest.to_vec())
            .map_err(|e| Error::XmlParse(format!("invalid UTF-8: {}", e))),
        [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes)
            .map(fix_xml_encoding_declaration),
        [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes)
            .map(fix_xml_encoding_declaration),
        _ => String::from_utf8(bytes.to_vec())
            .map_err(|e| Error::XmlParse(format!("invalid UTF-8: {}", e))),
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String> {
    let units = bytes.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    char::decode_utf16(units)
        .collect::<std::result::Result<String, _>>()
        .map_err(|e| Error::XmlParse(format!("invalid UTF-16: {}", e)))
}

impl WorkbookContainer {
    /// Open a workbook container from a file path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use techbase::container::WorkbookContainer;
    ///
    /// let container = WorkbookContainer::open("workbook.xlsm")?;
    /// let sheet = container.read_xml("xl/worksheets/sheet2.xml")?;
    /// # Ok::<(), techbase::Error>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::Archive(format!("{}: {}", path.display(), e)))?;
        let mut reader = BufReader::new(file);
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        debug!(path = %path.display(), bytes = data.len(), "opened workbook");
        Self::from_bytes(data)
    }

    /// Create a container from an in-memory archive.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let archive = zip::ZipArchive::new(Cursor::new(data))?;
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// Create a container from a reader.
    pub fn from_reader<R: Read + Seek>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Read the raw bytes of a part.
    pub fn read_part(&self, name: &str) -> Result<Vec<u8>> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive
            .by_name(name)
            .map_err(|_| Error::PartNotFound(name.to_string()))?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        debug!(part = name, bytes = data.len(), "read part");
        Ok(data)
    }

    /// Read a part and decode it as XML text.
    pub fn read_xml(&self, name: &str) -> Result<String> {
        decode_xml_bytes(&self.read_part(name)?)
    }

    /// Check if a part exists in the archive.
    pub fn exists(&self, name: &str) -> bool {
        let archive = self.archive.borrow();
        let found = archive.file_names().any(|n| n == name);
        found
    }

    /// List all part names in the archive.
    pub fn list_files(&self) -> Vec<String> {
        let archive = self.archive.borrow();
        archive.file_names().map(String::from).collect()
    }
}

impl std::fmt::Debug for WorkbookContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkbookContainer")
            .field("files", &self.list_files().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn archive_with(parts: &[(&str, &[u8])]) -> Vec<u8> {
        let mut buffer = Vec::new();
        {
            let mut zip = zip::ZipWriter::new(Cursor::new(&mut buffer));
            let options = SimpleFileOptions::default();
            for (name, data) in parts {
                zip.start_file(*name, options).unwrap();
                zip.write_all(data).unwrap();
            }
            zip.finish().unwrap();
        }
        buffer
    }

    #[test]
    fn test_read_part() {
        let data = archive_with(&[("xl/sharedStrings.xml", b"<sst/>")]);
        let container = WorkbookContainer::from_bytes(data).unwrap();

        assert!(container.exists("xl/sharedStrings.xml"));
        assert!(!container.exists("xl/worksheets/sheet2.xml"));
        assert_eq!(container.read_part("xl/sharedStrings.xml").unwrap(), b"<sst/>");
        assert_eq!(container.list_files(), vec!["xl/sharedStrings.xml"]);
    }

    #[test]
    fn test_from_reader() {
        let data = archive_with(&[("xl/worksheets/sheet4.xml", b"<worksheet/>")]);
        let container = WorkbookContainer::from_reader(Cursor::new(data)).unwrap();

        assert_eq!(
            container.read_xml("xl/worksheets/sheet4.xml").unwrap(),
            "<worksheet/>"
        );
    }

    #[test]
    fn test_missing_part() {
        let data = archive_with(&[("xl/workbook.xml", b"<workbook/>")]);
        let container = WorkbookContainer::from_bytes(data).unwrap();

        let err = container.read_part("xl/worksheets/sheet4.xml").unwrap_err();
        assert!(matches!(err, Error::PartNotFound(ref p) if p == "xl/worksheets/sheet4.xml"));
    }

    #[test]
    fn test_not_a_zip() {
        let err = WorkbookContainer::from_bytes(b"plain text, not an archive".to_vec()).unwrap_err();
        assert!(matches!(err, Error::Archive(_)));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = WorkbookContainer::open(dir.path().join("absent.xlsm")).unwrap_err();
        assert!(matches!(err, Error::Archive(ref msg) if msg.contains("absent.xlsm")));
    }

    #[test]
    fn test_decode_xml_bytes() {
        let utf16_le = b"\xFF\xFE<\0?\0x\0m\0l\0>\0";
        assert_eq!(decode_xml_bytes(utf16_le).unwrap(), "<?xml>");

        let utf16_be = b"\xFE\xFF\0<\0?\0x\0m\0l\0>";
        assert_eq!(decode_xml_bytes(utf16_be).unwrap(), "<?xml>");

        let utf8_bom = b"\xEF\xBB\xBF<?xml>";
        assert_eq!(decode_xml_bytes(utf8_bom).unwrap(), "<?xml>");

        assert_eq!(decode_xml_bytes(b"<?xml>").unwrap(), "<?xml>");
    }

    #[test]
    fn test_utf16_declaration_rewritten() {
        let xml = "<?xml version=\"1.0\" encoding=\"UTF-16\"?><sst/>";
        let mut bytes = vec![0xFF, 0xFE];
        for unit in xml.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }

        let decoded = decode_xml_bytes(&bytes).unwrap();
        assert_eq!(decoded, "<?xml version=\"1.0\" encoding=\"UTF-8\"?><sst/>");
    }
}
