//! Writing the three output documents.

use super::json::{to_json, JsonFormat};
use crate::error::Result;
use crate::model::TechnicalBases;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name of the mortality table document.
pub const MORTALITY_FILE_NAME: &str = "mortality-table.json";
/// File name of the lookup factor table document.
pub const LOOKUP_FILE_NAME: &str = "lookup-factor-table.json";
/// File name of the metadata document.
pub const METADATA_FILE_NAME: &str = "metadata.json";

/// Paths of the documents written by [`write_outputs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Mortality table document
    pub mortality: PathBuf,
    /// Lookup factor table document
    pub lookup: PathBuf,
    /// Metadata document
    pub metadata: PathBuf,
}

/// Write mortality rows, lookup rows and metadata into `dir`.
///
/// The directory is created if needed. Each file is written to a temporary
/// file in `dir` and renamed into place. The three writes are independent;
/// a failure part way leaves earlier files in place.
pub fn write_outputs(
    bases: &TechnicalBases,
    dir: impl AsRef<Path>,
    format: JsonFormat,
) -> Result<OutputPaths> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let paths = OutputPaths {
        mortality: dir.join(MORTALITY_FILE_NAME),
        lookup: dir.join(LOOKUP_FILE_NAME),
        metadata: dir.join(METADATA_FILE_NAME),
    };

    write_atomic(&paths.mortality, &to_json(&bases.mortality, format)?)?;
    write_atomic(&paths.lookup, &to_json(&bases.lookup, format)?)?;
    write_atomic(&paths.metadata, &to_json(&bases.metadata, format)?)?;

    Ok(paths)
}

fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    info!(path = %path.display(), bytes = content.len(), "wrote output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LookupRow, Metadata, MortalityRow};

    fn sample() -> TechnicalBases {
        TechnicalBases {
            mortality: vec![MortalityRow {
                age_month: 1,
                la0: 100000.0,
                ..Default::default()
            }],
            lookup: vec![LookupRow {
                age: 30,
                factor: 0.95,
            }],
            metadata: Metadata {
                version: "2025".to_string(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_write_creates_nested_dir() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("data/technical/v2025");

        let paths = write_outputs(&sample(), &dir, JsonFormat::Pretty).unwrap();
        assert_eq!(paths.mortality, dir.join("mortality-table.json"));

        let mortality: Vec<MortalityRow> =
            serde_json::from_str(&fs::read_to_string(&paths.mortality).unwrap()).unwrap();
        assert_eq!(mortality, sample().mortality);

        let lookup = fs::read_to_string(&paths.lookup).unwrap();
        assert!(lookup.starts_with("[\n  {\n    \"age\": 30,"));

        let metadata: Metadata =
            serde_json::from_str(&fs::read_to_string(&paths.metadata).unwrap()).unwrap();
        assert_eq!(metadata.version, "2025");
    }

    #[test]
    fn test_overwrites_and_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        write_outputs(&TechnicalBases::default(), dir.path(), JsonFormat::Compact).unwrap();
        write_outputs(&sample(), dir.path(), JsonFormat::Compact).unwrap();

        let mut names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec!["lookup-factor-table.json", "metadata.json", "mortality-table.json"]
        );

        let lookup = fs::read_to_string(dir.path().join(LOOKUP_FILE_NAME)).unwrap();
        assert_eq!(lookup, r#"[{"age":30,"factor":0.95}]"#);
    }

    #[test]
    fn test_write_failure_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "x").unwrap();

        assert!(write_outputs(&sample(), &blocker, JsonFormat::Pretty).is_err());
    }
}
