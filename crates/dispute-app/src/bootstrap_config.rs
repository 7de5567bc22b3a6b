//! Intake endpoint configuration embedded at build time.

use dispute_core::util::normalize_text_option;
use dispute_core::IntakeConfig;
use serde::{Deserialize, Serialize};

/// Environment variable naming the intake endpoint.
pub const ENV_INTAKE_URL: &str = "DISPUTE_INTAKE_URL";

/// Build-provisioned client configuration embedded into the binary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppBootstrapConfig {
    #[serde(default)]
    pub intake_url: Option<String>,
}

impl AppBootstrapConfig {
    /// Resolve the intake endpoint.
    ///
    /// A runtime override wins over the embedded value; anything unset or
    /// invalid falls back to the default local endpoint.
    pub fn intake_config(&self, runtime_override: Option<String>) -> IntakeConfig {
        let endpoint_url =
            normalize_text_option(runtime_override).or_else(|| self.intake_url.clone());
        IntakeConfig::from_optional(endpoint_url)
    }
}

/// Loads the generated bootstrap JSON from `OUT_DIR`.
///
/// If parsing fails, this logs a warning and returns a default empty config so
/// the app still posts to the default endpoint.
pub fn load_bootstrap_config() -> AppBootstrapConfig {
    let raw = include_str!(concat!(env!("OUT_DIR"), "/app-bootstrap.json"));
    parse_bootstrap_config(raw)
}

fn parse_bootstrap_config(raw: &str) -> AppBootstrapConfig {
    serde_json::from_str(raw).unwrap_or_else(|error| {
        tracing::warn!("Failed to parse app bootstrap config: {}", error);
        AppBootstrapConfig::default()
    })
}

/// Runtime override for the intake endpoint, read after `.env` is loaded.
#[cfg(not(target_arch = "wasm32"))]
pub fn runtime_intake_override() -> Option<String> {
    std::env::var(ENV_INTAKE_URL).ok()
}

/// Browsers have no process environment; only the embedded value applies.
#[cfg(target_arch = "wasm32")]
pub const fn runtime_intake_override() -> Option<String> {
    None
}
