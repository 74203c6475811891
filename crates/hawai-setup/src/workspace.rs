//! Flat workspace pieces: per-OS placeholder directories and the root README

use hawai_core::{TreeBuilder, TreeDescription};

/// Directory names for the per-OS workspaces.
pub const OS_DIRS: &[&str] = &["qissos", "t3ss-os", "qios", "timeos", "mros"];

/// Placeholder directories, one per OS, each holding a single README.
pub fn os_placeholders() -> TreeDescription {
    let mut builder = TreeBuilder::new();
    for os_dir in OS_DIRS {
        builder = builder.file(
            &format!("{os_dir}/README.md"),
            format!("# {}\n\nOS implementation workspace.", os_dir.to_uppercase()),
        );
    }
    builder.build()
}

/// The workspace root README.
pub const ROOT_README: &str = r##"# Hawai Ecosystem 🌂

Welcome to Hawai - the next evolution in computing.

## Operating Systems

### QissOS (Desktop)
**Hardware**: QiBook, QiStudio
High-performance desktop OS for creative professionals and power users.

### T3SS (Tablet)
**Hardware**: Qidex
Touch-optimized tablet experience with seamless desktop capabilities.

### QiOS (Mobile)
**Hardware**: QiPhone
Mobile OS designed for speed, privacy, and elegance.

### TimeOS (Watch)
**Hardware**: Timepiece
Intelligent smartwatch OS for health and quick interactions.

### mrOS (Mixed Reality)
**Hardware**: AR/VR Headsets, Smart Glasses
Spatial computing OS for the next generation of interfaces.

## Core Technologies

### Junita UI Framework
Declarative, reactive UI framework for building beautiful interfaces across all Hawai platforms.
*Homage to beauty and friendship* ❤️

### Cirrus Engine
ECS-based engine for complex UIs and interactive experiences.

### T3SSA AI Assistant
Flagship intelligent assistant deeply integrated across all Hawai OSes.
Powered by Linfa ML framework.

## Architecture

**Shared Codebase Approach** (Apple-style):
- Common kernel and system services (Redox-based)
- Unified UI frameworks (Junita + Cirrus)
- Cross-platform T3SSA integration
- Platform-specific optimizations

## Project Structure

```
hawai/
├── redox/                 # Main Redox OS
├── kernel/                # OS kernel
├── relibc/                # C library
├── redoxfs/              # Filesystem
├── drivers/              # Hardware drivers
├── bootloader/           # Boot system
├── orbital/              # Display server
├── junita/               # UI framework (iced-rs fork)
├── cirrus-engine/        # ECS engine (Bevy fork)
├── linfa/                # ML framework
├── t3ssa-assistant/      # AI assistant
├── qissos/               # Desktop OS
├── t3ss-os/              # Tablet OS
├── qios/                 # Mobile OS
├── timeos/               # Watch OS
└── mros/                 # Mixed reality OS
```

## Getting Started

Each OS has its own workspace with build instructions.
T3SSA assistant can be built with:

```bash
cd t3ssa-assistant
cargo build --release
```

## Philosophy

Change everything. Build something beautiful. Honor the past, create the future.

---

*Hawai Ecosystem - Where innovation meets elegance* 🚀
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use hawai_core::tree::leaf_paths;

    #[test]
    fn one_readme_per_os_workspace() {
        let desc = os_placeholders();
        let paths = leaf_paths(&desc);
        assert_eq!(paths.len(), OS_DIRS.len());
        assert!(paths.contains(&"t3ss-os/README.md".to_string()));
    }

    #[test]
    fn placeholder_readme_names_the_os() {
        let desc = os_placeholders();
        let qissos = match desc.get("qissos") {
            Some(hawai_core::TreeNode::Dir(d)) => d,
            other => panic!("expected qissos dir, got {:?}", other),
        };
        match qissos.get("README.md") {
            Some(hawai_core::TreeNode::File(content)) => {
                assert!(content.starts_with("# QISSOS"));
            }
            other => panic!("expected README file, got {:?}", other),
        }
    }
}
