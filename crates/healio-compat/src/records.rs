//! Record model for the drug–excipient compatibility table.

use serde::{Deserialize, Serialize};

// ── Compatibility category ──────────────────────────────────────────────────

/// Qualitative category assigned to a drug–excipient combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compatibility {
    Compatible,
    Caution,
    Incompatible,
}

impl Compatibility {
    /// Lowercase form used on the wire and in fixtures.
    pub fn as_str(&self) -> &'static str {
        match self {
            Compatibility::Compatible => "compatible",
            Compatibility::Caution => "caution",
            Compatibility::Incompatible => "incompatible",
        }
    }

    /// Capitalized badge label shown in the table.
    pub fn label(&self) -> &'static str {
        match self {
            Compatibility::Compatible => "Compatible",
            Compatibility::Caution => "Caution",
            Compatibility::Incompatible => "Incompatible",
        }
    }
}

// ── Compatibility record ────────────────────────────────────────────────────

/// One screened drug–excipient combination.
///
/// CIDs are PubChem compound identifiers treated as opaque strings, never
/// parsed as numbers. `score` is a percentage, `prediction` the binary model
/// outcome (1 = compatible) and `confidence` its probability in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityRecord {
    #[serde(rename = "drugCID")]
    pub drug_cid: String,
    pub drug_name: String,
    #[serde(rename = "excipientCID")]
    pub excipient_cid: String,
    pub excipient_name: String,
    pub compatibility: Compatibility,
    pub score: u8,
    pub prediction: u8,
    pub confidence: f64,
    pub notes: String,
    pub fingerprint: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_lowercase() {
        let json = serde_json::to_string(&Compatibility::Incompatible).unwrap();
        assert_eq!(json, "\"incompatible\"");
        let back: Compatibility = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Compatibility::Incompatible);
    }

    #[test]
    fn test_record_uses_original_field_spelling() {
        let record = CompatibilityRecord {
            drug_cid: "2244".into(),
            drug_name: "Aspirin".into(),
            excipient_cid: "104938".into(),
            excipient_name: "Microcrystalline Cellulose".into(),
            compatibility: Compatibility::Compatible,
            score: 95,
            prediction: 1,
            confidence: 0.95,
            notes: "TensorFlow model prediction: Compatible".into(),
            fingerprint: "Generated via PubChem CACTVS".into(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["drugCID"], "2244");
        assert_eq!(value["drugName"], "Aspirin");
        assert_eq!(value["excipientCID"], "104938");
        assert_eq!(value["excipientName"], "Microcrystalline Cellulose");
        assert_eq!(value["compatibility"], "compatible");
    }
}
