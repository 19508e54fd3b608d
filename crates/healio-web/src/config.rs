//! Configuration loading for Healio.
//! Reads healio.toml from the current directory or path in HEALIO_CONFIG env var.

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub predictor: PredictorConfig,
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host()       -> String { "127.0.0.1".to_string() }
fn default_port()       -> u16    { 3001 }
fn default_static_dir() -> String { "static".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictorConfig {
    /// "mock" or "http".
    #[serde(default = "default_backend")]
    pub backend: String,
    #[serde(default = "default_predict_latency_ms")]
    pub latency_ms: u64,
    /// Inference endpoint, required for the "http" backend.
    pub endpoint: Option<String>,
    #[serde(default = "default_model_version")]
    pub model_version: String,
}

fn default_backend()            -> String { "mock".to_string() }
fn default_predict_latency_ms() -> u64    { 2300 }
fn default_model_version()      -> String { "TensorFlow 2.x".to_string() }

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            latency_ms: default_predict_latency_ms(),
            endpoint: None,
            model_version: default_model_version(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default = "default_analyze_latency_ms")]
    pub latency_ms: u64,
}

fn default_analyze_latency_ms() -> u64 { 2000 }

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_analyze_latency_ms(),
        }
    }
}

impl Config {
    /// Load configuration from healio.toml.
    /// Checks HEALIO_CONFIG env var first, then the current directory.
    /// The file is optional: everything ships with working defaults, so a
    /// missing file just means the fixture setup.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("HEALIO_CONFIG").unwrap_or_else(|_| "healio.toml".to_string());

        let mut config = if Path::new(&path).exists() {
            let content = std::fs::read_to_string(&path)?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        if let Ok(port) = std::env::var("HEALIO_PORT") {
            config.server.port = port.parse()?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_describe_fixture_setup() {
        let config = Config::default();
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.predictor.backend, "mock");
        assert_eq!(config.predictor.latency_ms, 2300);
        assert_eq!(config.predictor.model_version, "TensorFlow 2.x");
        assert_eq!(config.analyzer.latency_ms, 2000);
        assert!(config.predictor.endpoint.is_none());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 8080

            [predictor]
            backend = "http"
            endpoint = "http://localhost:9000/predict"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.predictor.backend, "http");
        assert_eq!(
            config.predictor.endpoint.as_deref(),
            Some("http://localhost:9000/predict")
        );
        assert_eq!(config.predictor.latency_ms, 2300);
        assert_eq!(config.analyzer.latency_ms, 2000);
    }

    #[test]
    fn test_empty_file_parses_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.static_dir, "static");
        assert_eq!(config.predictor.backend, "mock");
    }
}
