//! Per-target workspace layout
//!
//! Builds the tree description for one OS target from static section
//! templates. Templates carry `{name}`-style tokens; substitution is plain
//! text replacement applied here, before the description is handed to the
//! materializer (which writes everything verbatim).

use crate::target::TargetConfig;
use hawai_core::{TreeBuilder, TreeDescription};

/// Second-level directories every target workspace contains.
pub const SECTIONS: &[&str] = &[
    "kernel", "init", "system", "ui", "apps", "config", "drivers", "build", "docs",
];

/// Generated scripts that need the executable bit set after materialization.
pub const EXECUTABLE_SCRIPTS: &[&str] = &["build/disk_image.sh"];

/// System services scaffolded under `system/`.
const SERVICES: &[(&str, &str)] = &[
    ("compositor", "Display composition and rendering"),
    ("audio", "Audio server and management"),
    ("network", "Network management service"),
    ("power", "Power management and battery"),
    ("input", "Input device handling"),
    ("notifications", "Notification system"),
    ("ipc", "Inter-process communication"),
];

/// UI components scaffolded under `ui/`.
const UI_COMPONENTS: &[(&str, &str)] = &[
    ("shell", "Main desktop shell / home screen"),
    ("launcher", "Application launcher"),
    ("status_bar", "Status and notification bar"),
    ("lock_screen", "Lock and login screen"),
    ("settings", "System settings application"),
];

/// Bundled applications scaffolded under `apps/`.
const APPS: &[(&str, &str)] = &[
    ("browser", "Web browser"),
    ("files", "File manager"),
    ("terminal", "Terminal emulator"),
    ("mail", "Email client"),
    ("photos", "Photo viewer and editor"),
    ("music", "Music player"),
    ("calendar", "Calendar application"),
];

/// Driver categories scaffolded under `drivers/`.
const DRIVER_TYPES: &[&str] = &["gpu", "network", "audio", "input", "sensors", "storage"];

/// The complete workspace layout for one target.
pub fn target_description(cfg: &TargetConfig) -> TreeDescription {
    let mut b = TreeBuilder::new()
        .file("README.md", fill(README, cfg))
        .file("Cargo.toml", WORKSPACE_MANIFEST);

    b = kernel(b, cfg);
    b = init(b, cfg);
    b = system_services(b, cfg);
    b = ui(b, cfg);
    b = apps(b, cfg);
    b = config_files(b, cfg);
    b = drivers(b, cfg);
    b = build_system(b, cfg);
    b = docs(b, cfg);

    b.build()
}

/// Substitute the target-config tokens into a section template.
fn fill(template: &str, cfg: &TargetConfig) -> String {
    template
        .replace("{name}", &cfg.name)
        .replace("{display_name}", &cfg.display_name)
        .replace("{hardware}", &cfg.hardware)
        .replace("{description_lower}", &cfg.description.to_lowercase())
        .replace("{description}", &cfg.description)
        .replace("{features}", &cfg.features)
}

/// First letter of each word uppercased, the rest lowercased.
fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn kernel(b: TreeBuilder, cfg: &TargetConfig) -> TreeBuilder {
    b.file("kernel/Cargo.toml", fill(KERNEL_MANIFEST, cfg))
        .file("kernel/config.toml", fill(KERNEL_CONFIG, cfg))
        .file("kernel/src/lib.rs", fill(KERNEL_LIB, cfg))
        .file("kernel/README.md", fill(KERNEL_README, cfg))
}

fn init(b: TreeBuilder, cfg: &TargetConfig) -> TreeBuilder {
    b.file("init/Cargo.toml", fill(INIT_MANIFEST, cfg))
        .file("init/src/main.rs", fill(INIT_MAIN, cfg))
        .file("init/boot_sequence.toml", fill(BOOT_SEQUENCE, cfg))
}

fn system_services(mut b: TreeBuilder, cfg: &TargetConfig) -> TreeBuilder {
    for (service, desc) in SERVICES {
        let manifest = fill(SERVICE_MANIFEST, cfg).replace("{service}", service);
        let main = fill(SERVICE_MAIN, cfg)
            .replace("{service_title}", &title_case(desc))
            .replace("{service}", service);
        b = b
            .file(&format!("system/{service}/Cargo.toml"), manifest)
            .file(&format!("system/{service}/src/main.rs"), main);
    }
    b
}

fn ui(mut b: TreeBuilder, cfg: &TargetConfig) -> TreeBuilder {
    for (component, desc) in UI_COMPONENTS {
        let manifest = fill(UI_MANIFEST, cfg).replace("{component}", component);
        let main = fill(UI_MAIN, cfg)
            .replace("{component_title}", &title_case(desc))
            .replace("{component}", component);
        b = b
            .file(&format!("ui/{component}/Cargo.toml"), manifest)
            .file(&format!("ui/{component}/src/main.rs"), main);
    }
    b.file("ui/themes/default.toml", fill(DEFAULT_THEME, cfg))
}

fn apps(mut b: TreeBuilder, cfg: &TargetConfig) -> TreeBuilder {
    for (app, desc) in APPS {
        let manifest = fill(APP_MANIFEST, cfg).replace("{app}", app);
        let main = fill(APP_MAIN, cfg)
            .replace("{app_title}", &title_case(desc))
            .replace("{app_desc}", desc)
            .replace("{app}", app);
        b = b
            .file(&format!("apps/{app}/Cargo.toml"), manifest)
            .file(&format!("apps/{app}/src/main.rs"), main);
    }
    b
}

fn config_files(b: TreeBuilder, cfg: &TargetConfig) -> TreeBuilder {
    b.file("config/default.toml", fill(DEFAULT_CONFIG, cfg))
        .file("config/ui.toml", fill(UI_CONFIG, cfg))
        .file("config/network.toml", NETWORK_CONFIG)
}

fn drivers(mut b: TreeBuilder, cfg: &TargetConfig) -> TreeBuilder {
    for driver in DRIVER_TYPES {
        let manifest = fill(DRIVER_MANIFEST, cfg).replace("{driver}", driver);
        let lib = fill(DRIVER_LIB, cfg)
            .replace("{driver_upper}", &driver.to_uppercase())
            .replace("{driver}", driver);
        b = b
            .file(&format!("drivers/{driver}/Cargo.toml"), manifest)
            .file(&format!("drivers/{driver}/src/lib.rs"), lib);
    }
    b.file("drivers/README.md", fill(DRIVERS_README, cfg))
}

fn build_system(b: TreeBuilder, cfg: &TargetConfig) -> TreeBuilder {
    b.file("build/build.rs", fill(BUILD_RS, cfg))
        .file("build/disk_image.sh", fill(DISK_IMAGE_SH, cfg))
        .file("build/packages.toml", fill(PACKAGES, cfg))
}

fn docs(b: TreeBuilder, cfg: &TargetConfig) -> TreeBuilder {
    b.file("docs/ARCHITECTURE.md", fill(ARCHITECTURE, cfg))
        .file("docs/BUILDING.md", fill(BUILDING, cfg))
        .file("docs/API.md", fill(API, cfg))
        .file("docs/CONTRIBUTING.md", fill(CONTRIBUTING, cfg))
}

const README: &str = r##"# {display_name} - {description}

{display_name} is Hawai's {description_lower}, designed for {hardware}.

## Features
{features}

## Architecture

```
{name}/
├── kernel/          OS-specific kernel config
├── init/            Boot and initialization
├── system/          Core system services
├── ui/              User interface layer
├── apps/            Bundled applications
├── config/          Default configurations
├── drivers/         Hardware drivers
├── build/           Build system
└── docs/            Documentation
```

## Building

```bash
cd {name}
cargo build --release
./build/disk_image.sh
```

## Hardware Support
{hardware}

## Development

See `docs/BUILDING.md` for detailed build instructions.
See `docs/ARCHITECTURE.md` for system architecture.

## Contributing

Contributions welcome! See `docs/CONTRIBUTING.md`.

---

*Part of the Hawai Ecosystem 🌂*
"##;

const WORKSPACE_MANIFEST: &str = r##"[workspace]
members = [
    "kernel",
    "init",
    "system/*",
    "ui/*",
    "apps/*",
    "drivers/*",
]

resolver = "2"

[workspace.package]
version = "0.1.0"
edition = "2021"
authors = ["Hawai Team"]

[workspace.dependencies]
# Hawai shared dependencies
tokio = { version = "1", features = ["full"] }
serde = { version = "1.0", features = ["derive"] }
anyhow = "1.0"
tracing = "0.1"

# UI frameworks
# junita will be in workspace root
# cirrus-engine will be in workspace root
"##;

const KERNEL_MANIFEST: &str = r##"[package]
name = "{name}-kernel"
version.workspace = true
edition.workspace = true

[dependencies]
"##;

const KERNEL_CONFIG: &str = r##"# {display_name} Kernel Configuration

[kernel]
name = "{name}"
version = "0.1.0"

[boot]
init_path = "/sbin/init"

[hardware]
# Platform-specific configurations
"##;

const KERNEL_LIB: &str = r##"//! {display_name} Kernel Configuration
//!
//! OS-specific kernel patches and configurations

pub mod config;
pub mod modules;
"##;

const KERNEL_README: &str = r##"# {display_name} Kernel

OS-specific kernel configuration and modules.
"##;

const INIT_MANIFEST: &str = r##"[package]
name = "{name}-init"
version.workspace = true
edition.workspace = true

[dependencies]
anyhow.workspace = true
tracing.workspace = true
tokio.workspace = true
"##;

const INIT_MAIN: &str = r##"//! {display_name} Init Process
//!
//! System initialization and service management

use anyhow::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    info!("{display_name} initializing...");

    // TODO: Mount filesystems
    mount_filesystems().await?;

    // TODO: Start essential services
    start_services().await?;

    // TODO: Launch display server
    launch_display_server().await?;

    // TODO: Start T3SSA assistant
    start_t3ssa().await?;

    // TODO: Launch shell/UI
    launch_shell().await?;

    info!("{display_name} initialized successfully");

    // Keep init running
    tokio::signal::ctrl_c().await?;

    Ok(())
}

async fn mount_filesystems() -> Result<()> {
    // TODO: Implement filesystem mounting
    Ok(())
}

async fn start_services() -> Result<()> {
    // TODO: Start system services
    Ok(())
}

async fn launch_display_server() -> Result<()> {
    // TODO: Launch Orbital display server
    Ok(())
}

async fn start_t3ssa() -> Result<()> {
    // TODO: Start T3SSA assistant
    Ok(())
}

async fn launch_shell() -> Result<()> {
    // TODO: Launch UI shell
    Ok(())
}
"##;

const BOOT_SEQUENCE: &str = r##"# {display_name} Boot Sequence

[[stage]]
name = "early_boot"
services = ["filesystem", "device_manager"]

[[stage]]
name = "system"
services = ["network", "audio", "input"]

[[stage]]
name = "user"
services = ["display_server", "t3ssa", "shell"]
"##;

const SERVICE_MANIFEST: &str = r##"[package]
name = "{name}-{service}"
version.workspace = true
edition.workspace = true

[dependencies]
anyhow.workspace = true
tokio.workspace = true
"##;

const SERVICE_MAIN: &str = r##"//! {display_name} {service_title}

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    println!("{service} service starting...");

    // TODO: Implement {service} service

    tokio::signal::ctrl_c().await?;
    Ok(())
}
"##;

const UI_MANIFEST: &str = r##"[package]
name = "{name}-{component}"
version.workspace = true
edition.workspace = true

[dependencies]
# junita = { path = "../../junita" }
"##;

const UI_MAIN: &str = r##"//! {display_name} {component_title}
//!
//! Built with Junita UI framework

// use junita::{Element, Application};

fn main() {
    println!("{component} launching...");

    // TODO: Implement {component} with Junita
}
"##;

const DEFAULT_THEME: &str = r##"# {display_name} Default Theme

[colors]
primary = "#007AFF"
background = "#FFFFFF"
surface = "#F2F2F7"
text = "#000000"
text_secondary = "#3C3C43"

[typography]
font_family = "San Francisco"
font_size_base = 14

[spacing]
unit = 8

[animation]
duration_fast = 150
duration_normal = 300
duration_slow = 500
"##;

const APP_MANIFEST: &str = r##"[package]
name = "{name}-{app}"
version.workspace = true
edition.workspace = true

[dependencies]
# junita = { path = "../../junita" }
# cirrus-engine = { path = "../../cirrus-engine" }  # For complex UIs
"##;

const APP_MAIN: &str = r##"//! {display_name} {app_title}

fn main() {
    println!("{app_desc} launching...");

    // TODO: Implement {app} app
}
"##;

const DEFAULT_CONFIG: &str = r##"# {display_name} Default Configuration

[system]
os_name = "{display_name}"
version = "0.1.0"
hostname = "hawai-device"

[display]
compositor = "orbital"

[t3ssa]
enabled = true
voice_activation = true
context_awareness = true
privacy_mode = "local"  # All processing on-device

[security]
encryption = true
secure_boot = true
sandbox_apps = true

[updates]
auto_check = true
auto_install = false
"##;

const UI_CONFIG: &str = r##"# {display_name} UI Configuration

[theme]
name = "default"
dark_mode = false
accent_color = "#007AFF"

[animations]
enabled = true
reduce_motion = false

[accessibility]
high_contrast = false
text_scaling = 1.0
"##;

const NETWORK_CONFIG: &str = r##"# Network Configuration

[wifi]
auto_connect = true

[bluetooth]
discoverable = false

[vpn]
enabled = false
"##;

const DRIVER_MANIFEST: &str = r##"[package]
name = "{name}-driver-{driver}"
version.workspace = true
edition.workspace = true

[dependencies]
"##;

const DRIVER_LIB: &str = r##"//! {display_name} {driver_upper} Drivers

pub mod manager;

pub fn init() -> anyhow::Result<()> {
    // TODO: Initialize {driver} drivers
    Ok(())
}
"##;

const DRIVERS_README: &str = r##"# {display_name} Hardware Drivers

Platform-specific drivers for {hardware}.

## Supported Hardware

- GPU: [List GPU support]
- Network: WiFi, Bluetooth, Ethernet
- Audio: [List audio devices]
- Input: Touch, keyboard, mouse
- Sensors: [List sensors]
- Storage: NVMe, eMMC

## Adding New Drivers

See `docs/DRIVER_DEVELOPMENT.md`
"##;

const BUILD_RS: &str = r##"//! {display_name} Build Script

use std::process::Command;

fn main() {
    println!("Building {display_name}...");

    // Build kernel
    build_kernel();

    // Build system services
    build_system();

    // Build UI components
    build_ui();

    // Build applications
    build_apps();

    println!("{display_name} build complete!");
}

fn build_kernel() {
    // TODO: Build kernel
}

fn build_system() {
    // TODO: Build system services
}

fn build_ui() {
    // TODO: Build UI components
}

fn build_apps() {
    // TODO: Build applications
}
"##;

const DISK_IMAGE_SH: &str = r##"#!/bin/bash
# {display_name} Disk Image Creator

set -e

echo "Creating {display_name} disk image..."

# TODO: Create bootable disk image
# - Partition disk
# - Install bootloader
# - Copy kernel and system files
# - Copy applications
# - Generate checksums

echo "{display_name} disk image created: {name}.img"
"##;

const PACKAGES: &str = r##"# {display_name} Package Definitions

[[package]]
name = "kernel"
version = "0.1.0"
files = ["boot/kernel"]

[[package]]
name = "system"
version = "0.1.0"
files = ["system/**"]

[[package]]
name = "apps"
version = "0.1.0"
files = ["apps/**"]
"##;

const ARCHITECTURE: &str = r##"# {display_name} Architecture

## Overview

{display_name} is built on the Redox OS microkernel with custom user-space components.

## System Layers

```
┌─────────────────────────────────┐
│        Applications             │
├─────────────────────────────────┤
│      UI Layer (Junita/Cirrus)   │
├─────────────────────────────────┤
│      System Services            │
├─────────────────────────────────┤
│      Drivers                    │
├─────────────────────────────────┤
│      Redox Microkernel          │
└─────────────────────────────────┘
```

## Key Components

### Init System
Boot sequence and service management.

### System Services
- Compositor: Display rendering
- Audio: Sound management
- Network: Connectivity
- Power: Battery and performance
- Input: Device input handling

### UI Layer
Built with Junita for declarative UIs and Cirrus for complex rendering.

### T3SSA Integration
Deep integration with the Hawai AI assistant.

## Communication

Services communicate via IPC (Inter-Process Communication).

## Security

- Sandboxed applications
- Capability-based security
- Hardware-backed encryption
"##;

const BUILDING: &str = r##"# Building {display_name}

## Prerequisites

- Rust toolchain (stable)
- QEMU (for testing)
- Build essentials

## Building

```bash
# Build everything
cd {name}
cargo build --release

# Create disk image
./build/disk_image.sh

# Run in QEMU
qemu-system-x86_64 -cdrom {name}.img
```

## Development Build

```bash
cargo build
```

## Testing

```bash
cargo test
```

## Cross-Compilation

See `docs/CROSS_COMPILE.md`
"##;

const API: &str = r##"# {display_name} API Reference

## System APIs

### Display API
Window management and rendering.

### Audio API
Audio playback and recording.

### Network API
Network connectivity and sockets.

### T3SSA API
AI assistant integration.

## UI APIs

### Junita
Declarative UI framework.

### Cirrus
ECS-based complex UI engine.

## Examples

See `/apps/*` for real-world usage examples.
"##;

const CONTRIBUTING: &str = r##"# Contributing to {display_name}

We welcome contributions!

## Getting Started

1. Fork the repository
2. Create a feature branch
3. Make your changes
4. Write tests
5. Submit a pull request

## Code Style

Follow standard Rust conventions:
- Run `cargo fmt`
- Run `cargo clippy`
- Write documentation

## Testing

All changes must include tests.

## Areas We Need Help

- Driver development
- Application development
- UI components
- Documentation
- Testing on real hardware

## Questions?

Open an issue or join our community chat.
"##;

/// The cross-cutting integration guide written once at the workspace root
/// after all targets are scaffolded.
pub const INTEGRATION_GUIDE: &str = r##"# Hawai OS Integration Guide

This guide explains how all Hawai OSes work together.

## Shared Components

All OSes share:
- **Redox kernel foundation**
- **Junita UI framework**
- **Cirrus Engine**
- **T3SSA assistant**
- **System libraries (relibc)**
- **Core services architecture**

## Platform-Specific Adaptations

Each OS adapts shared components:

### QissOS (Desktop)
- Full window management
- Desktop workspace system
- Advanced keyboard shortcuts
- Professional applications

### T3SS (Tablet)
- Touch-optimized layouts
- Stylus integration
- Convertible UI modes
- Adaptive keyboard

### QiOS (Mobile)
- One-handed operation
- Telephony integration
- Mobile sensors
- Cellular connectivity

### TimeOS (Watch)
- Ultra-compact UI
- Health sensors
- Always-on display
- Quick glances

### mrOS (Mixed Reality)
- 3D spatial UI
- Hand tracking
- Environment mapping
- Depth sensing

## Cross-Device Features

### Continuity
Start on one device, continue on another:
```
QiPhone (browsing) → QiBook (continue browsing)
QiBook (document) → Qidex (annotate with stylus)
```

### Universal Clipboard
Copy on one device, paste on another.

### T3SSA Sync
Context and conversations sync across all devices.

### File Sync
Files automatically sync via RedoxFS.

## Development

### Shared Codebase Pattern

```rust
// Common UI component (in junita/widgets/)
pub fn button(label: &str) -> Element<Message> {
    // Shared implementation
}

// Platform-specific usage
#[cfg(target_os = "qissos")]
fn create_desktop_button() {
    // Desktop-specific adaptations
}

#[cfg(target_os = "qios")]
fn create_mobile_button() {
    // Mobile-specific adaptations
}
```

### Building for Multiple Platforms

```bash
# Build all OSes
./build_all.sh

# Build specific OS
cd qissos && cargo build --release
```

## Testing

Test on real hardware and emulators:
- QEMU for desktop/laptop
- Android emulator for mobile concepts
- Hardware prototypes for watches and MR

## Architecture Philosophy

**One ecosystem, many experiences.**

Don't shrink desktop to mobile—reimagine for each platform while maintaining familiar patterns.

---

*The Hawai way: Unified foundation, distinct experiences* 🌂
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::load_targets;
    use hawai_core::tree::leaf_paths;
    use hawai_core::{materialize, TreeNode};

    fn qissos() -> TargetConfig {
        load_targets()
            .unwrap()
            .into_iter()
            .find(|t| t.name == "qissos")
            .unwrap()
    }

    #[test]
    fn every_target_has_the_fixed_sections() {
        for target in load_targets().unwrap() {
            let desc = target_description(&target);
            for section in SECTIONS {
                assert!(
                    matches!(desc.get(*section), Some(TreeNode::Dir(_))),
                    "{} missing {}",
                    target.name,
                    section
                );
            }
        }
    }

    #[test]
    fn no_unsubstituted_tokens_remain() {
        for target in load_targets().unwrap() {
            let desc = target_description(&target);
            check_no_tokens(&desc, &target.name);
        }
    }

    fn check_no_tokens(desc: &hawai_core::TreeDescription, target: &str) {
        for (name, node) in desc {
            match node {
                TreeNode::File(content) => {
                    for token in [
                        "{name}",
                        "{display_name}",
                        "{hardware}",
                        "{description}",
                        "{description_lower}",
                        "{features}",
                        "{service}",
                        "{service_title}",
                        "{component}",
                        "{component_title}",
                        "{app}",
                        "{app_desc}",
                        "{app_title}",
                        "{driver}",
                        "{driver_upper}",
                    ] {
                        assert!(
                            !content.contains(token),
                            "{target}: '{name}' still contains {token}"
                        );
                    }
                }
                TreeNode::Dir(children) => check_no_tokens(children, target),
            }
        }
    }

    #[test]
    fn substitution_reaches_the_generated_files() {
        let desc = target_description(&qissos());
        let paths = leaf_paths(&desc);
        assert!(paths.contains(&"system/compositor/src/main.rs".to_string()));
        assert!(paths.contains(&"apps/calendar/Cargo.toml".to_string()));
        assert!(paths.contains(&"drivers/storage/src/lib.rs".to_string()));

        let kernel = match desc.get("kernel") {
            Some(TreeNode::Dir(d)) => d,
            other => panic!("expected kernel dir, got {:?}", other),
        };
        match kernel.get("config.toml") {
            Some(TreeNode::File(content)) => {
                assert!(content.contains("name = \"qissos\""));
                assert!(content.contains("# QissOS Kernel Configuration"));
            }
            other => panic!("expected config.toml file, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn materialized_target_has_nine_second_level_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let base = tmp.path().join("qissos");
        materialize(&base, &target_description(&qissos()))
            .await
            .unwrap();

        for section in SECTIONS {
            assert!(base.join(section).is_dir(), "missing {section}");
        }
        assert!(base.join("README.md").is_file());
        assert!(base.join("build/disk_image.sh").is_file());
        assert!(base.join("ui/themes/default.toml").is_file());
    }

    #[test]
    fn title_case_matches_expected_headings() {
        assert_eq!(title_case("Web browser"), "Web Browser");
        assert_eq!(
            title_case("Main desktop shell / home screen"),
            "Main Desktop Shell / Home Screen"
        );
        assert_eq!(
            title_case("Display composition and rendering"),
            "Display Composition And Rendering"
        );
    }
}
