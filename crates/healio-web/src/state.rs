//! Shared application state for the web server.

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use healio_compat::predictor::{
    CompatibilityModel, HttpCompatibilityModel, MockCompatibilityModel,
};
use healio_compat::source::{CompatibilitySource, FixtureCompatibilitySource};
use healio_molecules::analyze::{MockSmilesAnalyzer, SmilesAnalyzer};
use healio_molecules::source::{FixtureMoleculeSource, MoleculeSource};

use crate::config::Config;

/// Shared state injected into every Axum handler. Holds the data sources
/// and the two model seams behind trait objects, so swapping any of them
/// for a real service never touches the handlers.
pub struct AppState {
    pub compat: Arc<dyn CompatibilitySource>,
    pub molecules: Arc<dyn MoleculeSource>,
    pub model: Arc<dyn CompatibilityModel>,
    pub analyzer: Arc<dyn SmilesAnalyzer>,
}

impl AppState {
    /// Wire up state from configuration. Unknown predictor backends and an
    /// "http" backend without an endpoint fall back to the stand-in.
    pub fn from_config(config: &Config) -> Self {
        let predict_latency = Duration::from_millis(config.predictor.latency_ms);

        let model: Arc<dyn CompatibilityModel> = match config.predictor.backend.as_str() {
            "http" => match &config.predictor.endpoint {
                Some(endpoint) => Arc::new(HttpCompatibilityModel::new(
                    endpoint.clone(),
                    config.predictor.model_version.clone(),
                )),
                None => {
                    warn!("predictor.backend = \"http\" but no endpoint set, using the stand-in");
                    Arc::new(MockCompatibilityModel::with_latency(predict_latency))
                }
            },
            "mock" => Arc::new(MockCompatibilityModel::with_latency(predict_latency)),
            other => {
                warn!(backend = other, "unknown predictor backend, using the stand-in");
                Arc::new(MockCompatibilityModel::with_latency(predict_latency))
            }
        };

        Self {
            compat: Arc::new(FixtureCompatibilitySource::new()),
            molecules: Arc::new(FixtureMoleculeSource::new()),
            model,
            analyzer: Arc::new(MockSmilesAnalyzer::with_latency(Duration::from_millis(
                config.analyzer.latency_ms,
            ))),
        }
    }

    /// Fixture-backed state with near-instant stand-ins. Used by the HTTP
    /// tests, where the simulated inference delay would only slow the suite.
    pub fn with_fast_stand_ins() -> Self {
        Self {
            compat: Arc::new(FixtureCompatibilitySource::new()),
            molecules: Arc::new(FixtureMoleculeSource::new()),
            model: Arc::new(MockCompatibilityModel::with_latency(Duration::from_millis(
                10,
            ))),
            analyzer: Arc::new(MockSmilesAnalyzer::with_latency(Duration::from_millis(10))),
        }
    }
}

pub type SharedState = Arc<AppState>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_defaults_to_stand_in() {
        let state = AppState::from_config(&Config::default());
        assert_eq!(state.model.model_id(), "TensorFlow 2.x");
        assert_eq!(state.compat.records().len(), 6);
        assert_eq!(state.molecules.molecules().len(), 3);
    }

    #[test]
    fn test_http_backend_without_endpoint_falls_back() {
        let mut config = Config::default();
        config.predictor.backend = "http".to_string();
        config.predictor.endpoint = None;
        let state = AppState::from_config(&config);
        // the stand-in reports its own version string
        assert_eq!(state.model.model_id(), "TensorFlow 2.x");
    }

    #[test]
    fn test_http_backend_reports_configured_model() {
        let mut config = Config::default();
        config.predictor.backend = "http".to_string();
        config.predictor.endpoint = Some("http://localhost:9000/predict".to_string());
        config.predictor.model_version = "healio-compat-v2".to_string();
        let state = AppState::from_config(&config);
        assert_eq!(state.model.model_id(), "healio-compat-v2");
    }
}
