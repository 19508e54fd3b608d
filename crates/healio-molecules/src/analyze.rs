//! Custom SMILES analysis stand-in.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use healio_common::{HealioError, Result};

/// Default simulated analysis latency.
pub const DEFAULT_ANALYZE_LATENCY: Duration = Duration::from_millis(2000);

/// Acknowledgement returned once an analysis request completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmilesAnalysis {
    pub smiles: String,
    pub message: String,
}

/// Seam for custom-SMILES analysis. A real cheminformatics service (an
/// RDKit or DeepChem style backend) replaces the stand-in behind this
/// trait; the contract stays one SMILES string in, one acknowledgement or
/// one error out.
#[async_trait]
pub trait SmilesAnalyzer: Send + Sync {
    async fn analyze(&self, smiles: &str) -> Result<SmilesAnalysis>;
}

/// Timed stand-in that acknowledges the request without analyzing
/// anything. The SMILES string is echoed back uninterpreted.
pub struct MockSmilesAnalyzer {
    latency: Duration,
}

impl MockSmilesAnalyzer {
    pub fn new() -> Self {
        Self::with_latency(DEFAULT_ANALYZE_LATENCY)
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for MockSmilesAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SmilesAnalyzer for MockSmilesAnalyzer {
    async fn analyze(&self, smiles: &str) -> Result<SmilesAnalysis> {
        if smiles.trim().is_empty() {
            return Err(HealioError::MissingIdentifier("SMILES"));
        }

        debug!(smiles, "simulating SMILES analysis");
        tokio::time::sleep(self.latency).await;

        Ok(SmilesAnalysis {
            smiles: smiles.to_string(),
            message: format!(
                "Analysis complete for SMILES: {smiles}. Connect an RDKit or DeepChem backend to report real descriptors."
            ),
        })
    }
}
