//! Record model for the molecule structure viewer.

use serde::{Deserialize, Serialize};

/// One atom placed in the viewer: element symbol, 3D position, and the
/// display color of its sphere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Atom {
    pub element: String,
    pub position: [f64; 3],
    pub color: String,
}

/// A molecule with display properties and pre-computed atom coordinates.
///
/// Property values (weight, LogS, melting point, …) are opaque display
/// strings kept exactly as the upstream characterization supplies them,
/// units included. The CID is a PubChem identifier treated as a plain key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoleculeRecord {
    pub id: String,
    pub name: String,
    pub cid: String,
    pub formula: String,
    pub smiles: String,
    pub molecular_weight: String,
    pub log_s: String,
    pub melting_point: String,
    pub boiling_point: String,
    pub solubility: String,
    pub ecfp: String,
    pub atoms: Vec<Atom>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_molecule_serializes_camel_case() {
        let molecule = MoleculeRecord {
            id: "aspirin".into(),
            name: "Aspirin".into(),
            cid: "2244".into(),
            formula: "C9H8O4".into(),
            smiles: "CC(=O)OC1=CC=CC=C1C(=O)O".into(),
            molecular_weight: "180.16 g/mol".into(),
            log_s: "-2.23".into(),
            melting_point: "135°C".into(),
            boiling_point: "140°C".into(),
            solubility: "3.3 g/L (water)".into(),
            ecfp: "Generated via CircularFingerprint".into(),
            atoms: vec![Atom {
                element: "C".into(),
                position: [0.0, 0.0, 0.0],
                color: "#404040".into(),
            }],
        };
        let value = serde_json::to_value(&molecule).unwrap();
        assert_eq!(value["molecularWeight"], "180.16 g/mol");
        assert_eq!(value["logS"], "-2.23");
        assert_eq!(value["meltingPoint"], "135°C");
        assert_eq!(value["boilingPoint"], "140°C");
        assert_eq!(value["atoms"][0]["position"][0], 0.0);
    }
}
