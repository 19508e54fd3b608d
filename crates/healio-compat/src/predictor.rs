//! Compatibility prediction backends.
//!
//! The model behind the predict form. The trait is the seam where a real
//! inference service plugs in; the default backend is a clearly labeled
//! stand-in that fabricates results after a short delay.
//!
//! Backends:
//!   `MockCompatibilityModel` — timed stand-in returning random outcomes
//!   `HttpCompatibilityModel` — real inference service over HTTP

use std::time::{Duration, Instant};

use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use healio_common::{HealioError, Result};

/// Model version the stand-in reports alongside its fabricated results.
pub const MOCK_MODEL_VERSION: &str = "TensorFlow 2.x";

/// Default simulated inference latency.
pub const DEFAULT_MOCK_LATENCY: Duration = Duration::from_millis(2300);

// ── Request / result ────────────────────────────────────────────────────────

/// Wire shape of a prediction request. Shared by the JSON API and the HTTP
/// backend so a future real service sees `{"drugId": …, "excipientId": …}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictRequest {
    pub drug_id: String,
    pub excipient_id: String,
}

/// Outcome of one prediction. Ephemeral: produced per request, shown once,
/// never stored alongside the screened records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(rename = "drugCID")]
    pub drug_cid: String,
    #[serde(rename = "excipientCID")]
    pub excipient_cid: String,
    /// 1 = compatible, 0 = incompatible.
    pub prediction: u8,
    /// Confidence in [0, 1).
    pub confidence: f64,
    pub fingerprint_generated: bool,
    pub model_version: String,
    pub processing_time: String,
}

impl PredictionResult {
    /// Badge text for the binary outcome.
    pub fn outcome_label(&self) -> &'static str {
        if self.prediction == 1 {
            "Compatible"
        } else {
            "Incompatible"
        }
    }
}

// ── Validation ──────────────────────────────────────────────────────────────

/// Both identifiers must be non-blank. Checked before any asynchronous
/// work, so a rejected request incurs none of the inference latency.
pub fn validate_pair(drug_cid: &str, excipient_cid: &str) -> Result<()> {
    if drug_cid.trim().is_empty() {
        return Err(HealioError::MissingIdentifier("drug CID"));
    }
    if excipient_cid.trim().is_empty() {
        return Err(HealioError::MissingIdentifier("excipient CID"));
    }
    Ok(())
}

// ── Trait ───────────────────────────────────────────────────────────────────

/// Seam for the compatibility predictor. A real analysis service replaces
/// the stand-in by implementing this trait; the calling contract stays two
/// identifier strings in, one result or one error out.
#[async_trait]
pub trait CompatibilityModel: Send + Sync {
    async fn predict(&self, drug_cid: &str, excipient_cid: &str) -> Result<PredictionResult>;

    /// Version string reported in results and logs.
    fn model_id(&self) -> &str;
}

// ── 1. Mock (stand-in) ──────────────────────────────────────────────────────

/// Timed stand-in for the inference service. Produces a uniformly random
/// binary outcome and confidence after a fixed delay; the numbers carry no
/// analytic meaning.
pub struct MockCompatibilityModel {
    latency: Duration,
    latency_label: String,
}

impl MockCompatibilityModel {
    pub fn new() -> Self {
        Self::with_latency(DEFAULT_MOCK_LATENCY)
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            latency_label: format_latency(latency),
        }
    }
}

impl Default for MockCompatibilityModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompatibilityModel for MockCompatibilityModel {
    async fn predict(&self, drug_cid: &str, excipient_cid: &str) -> Result<PredictionResult> {
        validate_pair(drug_cid, excipient_cid)?;

        debug!(drug_cid, excipient_cid, "simulating inference");
        tokio::time::sleep(self.latency).await;

        // rng is created after the await point so the future stays Send
        let (prediction, confidence) = {
            let mut rng = rand::thread_rng();
            (u8::from(rng.gen_bool(0.5)), rng.gen::<f64>())
        };

        info!(
            drug_cid,
            excipient_cid, prediction, confidence, "stand-in prediction produced"
        );
        Ok(PredictionResult {
            drug_cid: drug_cid.to_string(),
            excipient_cid: excipient_cid.to_string(),
            prediction,
            confidence,
            fingerprint_generated: true,
            model_version: MOCK_MODEL_VERSION.to_string(),
            processing_time: self.latency_label.clone(),
        })
    }

    fn model_id(&self) -> &str {
        MOCK_MODEL_VERSION
    }
}

// ── 2. HTTP (real service) ──────────────────────────────────────────────────

/// Response shape expected from a real inference endpoint.
#[derive(Debug, Deserialize)]
struct WirePrediction {
    prediction: u8,
    confidence: f64,
}

/// Calls an inference service speaking the documented wire shape. Swapping
/// this in for the stand-in is a configuration change only.
pub struct HttpCompatibilityModel {
    endpoint: String,
    model: String,
    client: reqwest::Client,
}

impl HttpCompatibilityModel {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CompatibilityModel for HttpCompatibilityModel {
    async fn predict(&self, drug_cid: &str, excipient_cid: &str) -> Result<PredictionResult> {
        validate_pair(drug_cid, excipient_cid)?;

        let started = Instant::now();
        let body = PredictRequest {
            drug_id: drug_cid.to_string(),
            excipient_id: excipient_cid.to_string(),
        };
        debug!(endpoint = %self.endpoint, drug_cid, excipient_cid, "calling inference service");
        let response = self.client.post(&self.endpoint).json(&body).send().await?;
        let wire: WirePrediction = response.error_for_status()?.json().await?;

        Ok(PredictionResult {
            drug_cid: drug_cid.to_string(),
            excipient_cid: excipient_cid.to_string(),
            prediction: wire.prediction,
            confidence: wire.confidence,
            fingerprint_generated: true,
            model_version: self.model.clone(),
            processing_time: format_latency(started.elapsed()),
        })
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

/// Seconds with one decimal, e.g. "2.3s".
fn format_latency(latency: Duration) -> String {
    format!("{:.1}s", latency.as_secs_f64())
}
