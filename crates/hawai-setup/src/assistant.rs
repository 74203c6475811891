//! T3SSA assistant scaffold
//!
//! Builds the tree description for the `t3ssa-assistant` project: manifest,
//! module stubs, documentation, and default configuration. Empty stubs get a
//! `// <filename>` placeholder so every generated file has content; the
//! materializer itself writes everything verbatim.

use hawai_core::{TreeBuilder, TreeDescription};

pub const DIR_NAME: &str = "t3ssa-assistant";

fn stub(name: &str) -> String {
    format!("// {name}\n")
}

/// The complete `t3ssa-assistant` layout.
pub fn description() -> TreeDescription {
    TreeBuilder::new()
        .file("Cargo.toml", CARGO_TOML)
        .file("README.md", README)
        .file("src/main.rs", MAIN_RS)
        .file("src/lib.rs", LIB_RS)
        // Core: context management and plugin system
        .file("src/core/mod.rs", stub("mod.rs"))
        .file("src/core/context.rs", "// Context management and state tracking")
        .file("src/core/plugin_system.rs", "// Plugin architecture for extensibility")
        .file("src/core/config.rs", "// Configuration management")
        // Speech: voice input/output
        .file("src/speech/mod.rs", stub("mod.rs"))
        .file("src/speech/recognition.rs", "// Speech-to-text processing")
        .file("src/speech/synthesis.rs", "// Text-to-speech generation")
        .file("src/speech/audio_processing.rs", "// Audio input/output handling")
        // Vision
        .file("src/vision/mod.rs", stub("mod.rs"))
        .file("src/vision/image_recognition.rs", "// Image classification and detection")
        .file("src/vision/scene_understanding.rs", "// Spatial and scene analysis")
        .file("src/vision/ocr.rs", "// Optical character recognition")
        // Reasoning
        .file("src/reasoning/mod.rs", stub("mod.rs"))
        .file(
            "src/reasoning/intent_classification.rs",
            "// User intent detection using Linfa",
        )
        .file("src/reasoning/knowledge_base.rs", "// Knowledge graph and retrieval")
        .file("src/reasoning/decision_engine.rs", "// Decision making logic")
        // ML
        .file("src/ml/mod.rs", stub("mod.rs"))
        .file("src/ml/models.rs", "// Linfa ML models")
        .file("src/ml/training.rs", "// Model training pipelines")
        .file("src/ml/inference.rs", "// Real-time inference")
        .file("src/ml/preprocessing.rs", "// Data preprocessing utilities")
        // Per-OS integration hooks
        .file("src/integration/mod.rs", stub("mod.rs"))
        .file("src/integration/qissos.rs", "// QissOS integration hooks")
        .file("src/integration/t3ss.rs", "// T3SS tablet integration")
        .file("src/integration/qios.rs", "// QiOS mobile integration")
        .file("src/integration/timeos.rs", "// TimeOS watch integration")
        .file("src/integration/mros.rs", "// mrOS mixed reality integration")
        // API surfaces
        .file("src/api/mod.rs", stub("mod.rs"))
        .file("src/api/rest.rs", "// REST API endpoints")
        .file("src/api/websocket.rs", "// Real-time WebSocket communication")
        .file("src/api/ipc.rs", "// Inter-process communication")
        // Utilities
        .file("src/utils/mod.rs", stub("mod.rs"))
        .file("src/utils/logging.rs", "// Logging utilities")
        .file("src/utils/metrics.rs", "// Performance metrics")
        .file("src/utils/error.rs", "// Error handling")
        // Tests, examples, docs
        .file("tests/integration_tests.rs", "// Integration tests")
        .file("tests/unit_tests.rs", "// Unit tests")
        .file("examples/basic_query.rs", "// Basic T3SSA query example")
        .file("examples/voice_command.rs", "// Voice command example")
        .file("examples/vision_analysis.rs", "// Vision analysis example")
        .file(
            "docs/ARCHITECTURE.md",
            "# T3SSA Architecture\n\nComprehensive architecture documentation.",
        )
        .file(
            "docs/API.md",
            "# T3SSA API Reference\n\nAPI documentation for developers.",
        )
        .file(
            "docs/INTEGRATION.md",
            "# OS Integration Guide\n\nHow to integrate T3SSA across Hawai OSes.",
        )
        .file("models/README.md", "# ML Models\n\nTrained models directory.")
        .file("config/default.toml", DEFAULT_CONFIG)
        .build()
}

const CARGO_TOML: &str = r##"[package]
name = "t3ssa-assistant"
version = "0.1.0"
edition = "2021"
authors = ["Hawai Team"]
description = "T3SSA - Flagship AI assistant for the Hawai ecosystem"

[dependencies]
# ML Framework
linfa = "0.7"
linfa-clustering = "0.7"
linfa-linear = "0.7"
linfa-logistic = "0.7"
linfa-trees = "0.7"
linfa-nn = "0.7"
ndarray = "0.15"

# Async runtime
tokio = { version = "1", features = ["full"] }
async-trait = "0.1"

# Serialization
serde = { version = "1.0", features = ["derive"] }
serde_json = "1.0"
toml = "0.8"

# Logging
tracing = "0.1"
tracing-subscriber = "0.3"

# Error handling
anyhow = "1.0"
thiserror = "1.0"

# HTTP/WebSocket
axum = "0.7"
tokio-tungstenite = "0.21"

# Configuration
config = "0.14"

[dev-dependencies]
criterion = "0.5"

[[bench]]
name = "inference_benchmark"
harness = false

[profile.release]
opt-level = 3
lto = true
codegen-units = 1
"##;

const README: &str = r##"# T3SSA - AI Assistant

The flagship AI assistant for the Hawai ecosystem, deeply integrated across all platforms.

## Platforms
- QissOS (Desktop)
- T3SS (Tablet)
- QiOS (Mobile)
- TimeOS (Watch)
- mrOS (Mixed Reality)

## Features
- Natural language understanding
- Voice recognition and synthesis
- Computer vision capabilities
- Context-aware responses
- Cross-platform synchronization
- Plugin architecture

## Architecture
T3SSA uses Linfa for machine learning capabilities with a modular design:
- **Core**: Context management and plugin system
- **Speech**: Voice input/output processing
- **Vision**: Image recognition and scene understanding
- **Reasoning**: Intent classification and decision making
- **ML**: Linfa-based machine learning models
- **Integration**: OS-specific hooks for all Hawai platforms
- **API**: REST, WebSocket, and IPC interfaces

## Getting Started
```bash
cargo build --release
cargo run --example basic_query
```

## Development
See `docs/ARCHITECTURE.md` for detailed architecture documentation.
"##;

const MAIN_RS: &str = r##"use t3ssa_assistant::core::config::Config;
use tracing_subscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::load("config/default.toml")?;

    tracing::info!("T3SSA Assistant starting...");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // TODO: Initialize T3SSA core systems
    // - Load ML models
    // - Start API servers
    // - Initialize OS integrations

    Ok(())
}
"##;

const LIB_RS: &str = r##"//! T3SSA - Flagship AI Assistant for Hawai Ecosystem
//!
//! T3SSA provides intelligent assistance across all Hawai platforms with
//! deep OS integration, natural language understanding, and computer vision.

pub mod core;
pub mod speech;
pub mod vision;
pub mod reasoning;
pub mod ml;
pub mod integration;
pub mod api;
pub mod utils;

pub use core::config::Config;
"##;

const DEFAULT_CONFIG: &str = "# T3SSA Default Configuration\n\n[assistant]\nname = \"T3SSA\"\nversion = \"0.1.0\"\n\n[ml]\nmodel_path = \"./models\"\n";

#[cfg(test)]
mod tests {
    use super::*;
    use hawai_core::tree::leaf_paths;

    #[test]
    fn contains_manifest_stubs_and_docs() {
        let paths = leaf_paths(&description());

        for expected in [
            "Cargo.toml",
            "README.md",
            "src/main.rs",
            "src/lib.rs",
            "src/core/context.rs",
            "src/ml/inference.rs",
            "src/integration/mros.rs",
            "docs/ARCHITECTURE.md",
            "models/README.md",
            "config/default.toml",
        ] {
            assert!(paths.contains(&expected.to_string()), "missing {expected}");
        }
    }

    #[test]
    fn empty_stubs_get_placeholder_comments() {
        let desc = description();
        let src = match desc.get("src") {
            Some(hawai_core::TreeNode::Dir(d)) => d,
            other => panic!("expected src dir, got {:?}", other),
        };
        let core = match src.get("core") {
            Some(hawai_core::TreeNode::Dir(d)) => d,
            other => panic!("expected core dir, got {:?}", other),
        };
        assert_eq!(
            core.get("mod.rs"),
            Some(&hawai_core::TreeNode::File("// mod.rs\n".to_string()))
        );
    }

    #[test]
    fn real_entry_points_are_not_stubs() {
        let desc = description();
        let src = match desc.get("src") {
            Some(hawai_core::TreeNode::Dir(d)) => d,
            other => panic!("expected src dir, got {:?}", other),
        };
        match src.get("main.rs") {
            Some(hawai_core::TreeNode::File(content)) => {
                assert!(content.contains("#[tokio::main]"));
            }
            other => panic!("expected main.rs file, got {:?}", other),
        }
    }
}
