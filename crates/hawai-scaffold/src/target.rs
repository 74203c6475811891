//! Target configurations for the Hawai OS scaffolder
//!
//! The five targets are data, not code: they are embedded as a YAML
//! document and deserialized at startup.

use hawai_core::error::Result;
use serde::Deserialize;

/// The parameter set driving one scaffolded OS workspace.
#[derive(Debug, Clone, Deserialize)]
pub struct TargetConfig {
    /// Directory and crate-prefix name (e.g. `qissos`).
    pub name: String,
    /// Human-readable name (e.g. `QissOS`).
    pub display_name: String,
    /// Hardware the target runs on.
    pub hardware: String,
    /// One-line tagline (e.g. `Desktop Computing Redefined`).
    pub description: String,
    /// Markdown bullet list of distinguishing features.
    pub features: String,
}

const TARGETS_YAML: &str = include_str!("targets.yaml");

/// The fixed list of Hawai OS targets.
pub fn load_targets() -> Result<Vec<TargetConfig>> {
    Ok(serde_yaml::from_str(TARGETS_YAML)?)
}
