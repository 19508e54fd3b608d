//! JSON export of a molecule's display data.
//!
//! The core builds the document and hands bytes plus a suggested filename
//! to an `ExportSink`; where the bytes end up (an HTTP download, a file on
//! disk) is the sink's concern.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::molecule::MoleculeRecord;
use healio_common::Result;

/// Property subset included in the export document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportProperties {
    pub formula: String,
    pub molecular_weight: String,
    pub log_s: String,
    pub solubility: String,
}

/// The downloadable document: name, SMILES, and the property subset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    pub name: String,
    pub smiles: String,
    pub properties: ExportProperties,
}

impl ExportDocument {
    pub fn from_record(molecule: &MoleculeRecord) -> Self {
        Self {
            name: molecule.name.clone(),
            smiles: molecule.smiles.clone(),
            properties: ExportProperties {
                formula: molecule.formula.clone(),
                molecular_weight: molecule.molecular_weight.clone(),
                log_s: molecule.log_s.clone(),
                solubility: molecule.solubility.clone(),
            },
        }
    }

    /// Pretty-printed JSON bytes, the format users download.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}

/// Suggested filename for a molecule export, derived from the display name.
pub fn export_filename(name: &str) -> String {
    format!("{name}_data.json")
}

// ── Sink ────────────────────────────────────────────────────────────────────

/// Where exported bytes are delivered. The HTTP download handler plays
/// this role itself; `DirectoryExportSink` writes to local disk.
pub trait ExportSink {
    fn deliver(&mut self, filename: &str, bytes: &[u8]) -> Result<()>;
}

/// Sink writing exports into a directory.
pub struct DirectoryExportSink {
    dir: PathBuf,
}

impl DirectoryExportSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ExportSink for DirectoryExportSink {
    fn deliver(&mut self, filename: &str, bytes: &[u8]) -> Result<()> {
        let path = self.dir.join(filename);
        fs::write(&path, bytes)?;
        info!(path = %path.display(), "molecule export written");
        Ok(())
    }
}

/// Build the export document for `molecule` and hand it to `sink`.
pub fn export_molecule(molecule: &MoleculeRecord, sink: &mut dyn ExportSink) -> Result<()> {
    let document = ExportDocument::from_record(molecule);
    let bytes = document.to_bytes()?;
    sink.deliver(&export_filename(&molecule.name), &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{FixtureMoleculeSource, MoleculeSource};

    #[test]
    fn test_document_shape_matches_download_format() {
        let source = FixtureMoleculeSource::new();
        let aspirin = source.find("aspirin").unwrap();
        let document = ExportDocument::from_record(aspirin);
        let value = serde_json::to_value(&document).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Aspirin",
                "smiles": "CC(=O)OC1=CC=CC=C1C(=O)O",
                "properties": {
                    "formula": "C9H8O4",
                    "molecularWeight": "180.16 g/mol",
                    "logS": "-2.23",
                    "solubility": "3.3 g/L (water)"
                }
            })
        );
    }

    #[test]
    fn test_filename_derived_from_display_name() {
        assert_eq!(export_filename("Aspirin"), "Aspirin_data.json");
        assert_eq!(export_filename("Caffeine"), "Caffeine_data.json");
    }

    #[test]
    fn test_directory_sink_writes_parseable_json() {
        let dir = tempfile::tempdir().unwrap();
        let source = FixtureMoleculeSource::new();
        let ibuprofen = source.find("ibuprofen").unwrap();

        let mut sink = DirectoryExportSink::new(dir.path());
        export_molecule(ibuprofen, &mut sink).unwrap();

        let written = fs::read(dir.path().join("Ibuprofen_data.json")).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&written).unwrap();
        assert_eq!(value["name"], "Ibuprofen");
        assert_eq!(value["properties"]["formula"], "C13H18O2");
    }
}
