//! Injectable source of molecule records.

use crate::molecule::{Atom, MoleculeRecord};

/// Standard display colors by element.
const CARBON: &str = "#404040";
const OXYGEN: &str = "#ff0000";
const NITROGEN: &str = "#0000ff";

/// Trait for accessing the molecules available in the viewer.
///
/// Implementations can use:
/// - The bundled sample set (demo / tests)
/// - A real compound registry (future)
pub trait MoleculeSource: Send + Sync {
    /// All molecules, in display order.
    fn molecules(&self) -> &[MoleculeRecord];

    /// Look up one molecule by its stable id.
    fn find(&self, id: &str) -> Option<&MoleculeRecord> {
        self.molecules().iter().find(|m| m.id == id)
    }
}

// ── Fixture implementation ──────────────────────────────────────────────────

/// Hard-coded sample molecules with pre-computed coordinates, standing in
/// for a compound registry plus conformer generation.
pub struct FixtureMoleculeSource {
    molecules: Vec<MoleculeRecord>,
}

impl FixtureMoleculeSource {
    pub fn new() -> Self {
        Self {
            molecules: sample_molecules(),
        }
    }
}

impl Default for FixtureMoleculeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MoleculeSource for FixtureMoleculeSource {
    fn molecules(&self) -> &[MoleculeRecord] {
        &self.molecules
    }
}

fn atom(element: &str, position: [f64; 3], color: &str) -> Atom {
    Atom {
        element: element.to_string(),
        position,
        color: color.to_string(),
    }
}

/// The three bundled molecules: aspirin, caffeine, ibuprofen.
fn sample_molecules() -> Vec<MoleculeRecord> {
    vec![
        MoleculeRecord {
            id: "aspirin".to_string(),
            name: "Aspirin".to_string(),
            cid: "2244".to_string(),
            formula: "C9H8O4".to_string(),
            smiles: "CC(=O)OC1=CC=CC=C1C(=O)O".to_string(),
            molecular_weight: "180.16 g/mol".to_string(),
            log_s: "-2.23".to_string(),
            melting_point: "135°C".to_string(),
            boiling_point: "140°C".to_string(),
            solubility: "3.3 g/L (water)".to_string(),
            ecfp: "Generated via CircularFingerprint".to_string(),
            atoms: vec![
                atom("C", [0.0, 0.0, 0.0], CARBON),
                atom("C", [1.5, 0.0, 0.0], CARBON),
                atom("C", [2.25, 1.3, 0.0], CARBON),
                atom("C", [1.5, 2.6, 0.0], CARBON),
                atom("C", [0.0, 2.6, 0.0], CARBON),
                atom("C", [-0.75, 1.3, 0.0], CARBON),
                atom("O", [3.5, 1.3, 0.0], OXYGEN),
                atom("O", [-2.0, 1.3, 0.0], OXYGEN),
                atom("O", [-2.5, 0.0, 0.0], OXYGEN),
            ],
        },
        MoleculeRecord {
            id: "caffeine".to_string(),
            name: "Caffeine".to_string(),
            cid: "2519".to_string(),
            formula: "C8H10N4O2".to_string(),
            smiles: "CN1C=NC2=C1C(=O)N(C(=O)N2C)C".to_string(),
            molecular_weight: "194.19 g/mol".to_string(),
            log_s: "-0.55".to_string(),
            melting_point: "235°C".to_string(),
            boiling_point: "178°C".to_string(),
            solubility: "21.6 g/L (water)".to_string(),
            ecfp: "Generated via CircularFingerprint".to_string(),
            atoms: vec![
                atom("C", [0.0, 0.0, 0.0], CARBON),
                atom("N", [1.4, 0.8, 0.0], NITROGEN),
                atom("C", [2.8, 0.0, 0.0], CARBON),
                atom("N", [2.8, -1.4, 0.0], NITROGEN),
                atom("C", [1.4, -2.2, 0.0], CARBON),
                atom("C", [0.0, -1.4, 0.0], CARBON),
                atom("O", [-1.4, -2.2, 0.0], OXYGEN),
                atom("N", [1.4, -3.6, 0.0], NITROGEN),
                atom("O", [4.2, 0.8, 0.0], OXYGEN),
            ],
        },
        MoleculeRecord {
            id: "ibuprofen".to_string(),
            name: "Ibuprofen".to_string(),
            cid: "3672".to_string(),
            formula: "C13H18O2".to_string(),
            smiles: "CC(C)CC1=CC=C(C=C1)C(C)C(=O)O".to_string(),
            molecular_weight: "206.28 g/mol".to_string(),
            log_s: "-3.97".to_string(),
            melting_point: "75-78°C".to_string(),
            boiling_point: "157°C".to_string(),
            solubility: "0.021 g/L (water)".to_string(),
            ecfp: "Generated via CircularFingerprint".to_string(),
            atoms: vec![
                atom("C", [0.0, 0.0, 0.0], CARBON),
                atom("C", [1.5, 0.0, 0.0], CARBON),
                atom("C", [2.25, 1.3, 0.0], CARBON),
                atom("C", [1.5, 2.6, 0.0], CARBON),
                atom("C", [0.0, 2.6, 0.0], CARBON),
                atom("C", [-0.75, 1.3, 0.0], CARBON),
                atom("C", [3.5, 1.3, 0.0], CARBON),
                atom("C", [4.25, 0.0, 0.0], CARBON),
                atom("O", [5.5, 0.0, 0.0], OXYGEN),
                atom("O", [4.25, -1.3, 0.0], OXYGEN),
            ],
        },
    ]
}
