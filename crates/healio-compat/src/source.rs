//! Injectable source of compatibility records.
//!
//! The filter and summary logic run against whatever source is plugged in,
//! so swapping the bundled sample set for a screening database later is a
//! wiring change, not a rewrite.

use crate::records::{Compatibility, CompatibilityRecord};

/// Trait for accessing drug–excipient compatibility records.
///
/// Implementations can use:
/// - The bundled sample set (demo / tests)
/// - A real screening pipeline (future)
pub trait CompatibilitySource: Send + Sync {
    /// All records, in source order. Callers treat the slice as the
    /// canonical ordering for display.
    fn records(&self) -> &[CompatibilityRecord];
}

// ── Fixture implementation ──────────────────────────────────────────────────

/// Hard-coded sample records standing in for a real screening run.
///
/// All values are fictional demo data. The notes echo what an upstream
/// model run would report; no external systems are contacted.
pub struct FixtureCompatibilitySource {
    records: Vec<CompatibilityRecord>,
}

impl FixtureCompatibilitySource {
    pub fn new() -> Self {
        Self {
            records: sample_records(),
        }
    }
}

impl Default for FixtureCompatibilitySource {
    fn default() -> Self {
        Self::new()
    }
}

impl CompatibilitySource for FixtureCompatibilitySource {
    fn records(&self) -> &[CompatibilityRecord] {
        &self.records
    }
}

fn record(
    drug_cid: &str,
    drug_name: &str,
    excipient_cid: &str,
    excipient_name: &str,
    compatibility: Compatibility,
    score: u8,
    prediction: u8,
    confidence: f64,
    notes: &str,
) -> CompatibilityRecord {
    CompatibilityRecord {
        drug_cid: drug_cid.to_string(),
        drug_name: drug_name.to_string(),
        excipient_cid: excipient_cid.to_string(),
        excipient_name: excipient_name.to_string(),
        compatibility,
        score,
        prediction,
        confidence,
        notes: notes.to_string(),
        fingerprint: "Generated via PubChem CACTVS".to_string(),
    }
}

/// The six bundled drug–excipient combinations.
fn sample_records() -> Vec<CompatibilityRecord> {
    vec![
        record(
            "2244",
            "Aspirin",
            "104938",
            "Microcrystalline Cellulose",
            Compatibility::Compatible,
            95,
            1,
            0.95,
            "TensorFlow model prediction: Compatible",
        ),
        record(
            "2244",
            "Aspirin",
            "5460341",
            "Lactose Monohydrate",
            Compatibility::Compatible,
            88,
            1,
            0.88,
            "Neural network confidence: High",
        ),
        record(
            "2244",
            "Aspirin",
            "11177",
            "Magnesium Stearate",
            Compatibility::Caution,
            65,
            0,
            0.65,
            "Model uncertainty detected",
        ),
        record(
            "3672",
            "Ibuprofen",
            "104938",
            "Microcrystalline Cellulose",
            Compatibility::Compatible,
            92,
            1,
            0.92,
            "High confidence prediction",
        ),
        record(
            "3672",
            "Ibuprofen",
            "23665706",
            "Sodium Starch Glycolate",
            Compatibility::Incompatible,
            35,
            0,
            0.89,
            "Strong incompatibility signal",
        ),
        record(
            "2519",
            "Caffeine",
            "5460341",
            "Lactose Monohydrate",
            Compatibility::Compatible,
            90,
            1,
            0.9,
            "Stable neural network prediction",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_has_six_records() {
        let source = FixtureCompatibilitySource::new();
        assert_eq!(source.records().len(), 6);
    }

    #[test]
    fn test_fixture_order_is_stable() {
        let source = FixtureCompatibilitySource::new();
        let records = source.records();
        assert_eq!(records[0].drug_name, "Aspirin");
        assert_eq!(records[0].excipient_name, "Microcrystalline Cellulose");
        assert_eq!(records[5].drug_name, "Caffeine");
        assert_eq!(records[5].excipient_name, "Lactose Monohydrate");
    }

    #[test]
    fn test_fixture_covers_all_categories() {
        let source = FixtureCompatibilitySource::new();
        let records = source.records();
        for category in [
            Compatibility::Compatible,
            Compatibility::Caution,
            Compatibility::Incompatible,
        ] {
            assert!(records.iter().any(|r| r.compatibility == category));
        }
    }

    #[test]
    fn test_fixture_fingerprints_are_tagged() {
        let source = FixtureCompatibilitySource::new();
        for record in source.records() {
            assert_eq!(record.fingerprint, "Generated via PubChem CACTVS");
        }
    }
}
