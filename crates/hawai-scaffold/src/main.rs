//! Hawai Scaffold - generate the per-OS target workspaces
//!
//! For each of the five Hawai OS targets this materializes a complete
//! workspace skeleton (kernel, init, services, UI, apps, drivers, build
//! system, docs) under `hawai/<target>/`, then writes the cross-cutting
//! integration guide. Behavior is entirely fixed by the embedded target
//! configurations; there are no flags to pass.

mod layout;
mod target;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use hawai_core::{materialize, TreeBuilder, WORKSPACE_DIR};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "hawai-scaffold")]
#[command(about = "Scaffolds complete workspaces for all Hawai OS targets")]
#[command(version)]
struct Args {}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C with a dedicated message and exit path
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        eprintln!("\n{}", "Scaffolding interrupted".yellow());
        std::process::exit(130);
    })
    .ok();

    let Args {} = Args::parse();

    let result = run().await;
    let _ = console::Term::stderr().show_cursor();
    result
}

async fn run() -> Result<()> {
    cliclack::intro("Hawai OS Workspace Scaffolder")?;
    cliclack::log::info("Creating complete OS directory structures")?;

    let ws = PathBuf::from(WORKSPACE_DIR);
    let targets = target::load_targets()?;

    let mut scaffolded = Vec::new();
    for cfg in &targets {
        println!();
        println!(
            "{}",
            format!("Scaffolding {}", cfg.display_name).cyan().bold()
        );

        let base = ws.join(&cfg.name);
        let report = materialize(&base, &layout::target_description(cfg)).await?;
        mark_scripts_executable(&base)?;

        println!(
            "  {} {} ({} files, {} directories)",
            "ok".green(),
            cfg.display_name,
            report.files,
            report.dirs
        );
        scaffolded.push(cfg.display_name.clone());
    }

    // Cross-cutting integration guide, written once after all targets
    let guide = TreeBuilder::new()
        .file("INTEGRATION.md", layout::INTEGRATION_GUIDE)
        .build();
    materialize(&ws, &guide).await?;
    cliclack::log::success("Integration guide created")?;

    cliclack::outro(format!(
        "All Hawai OSes scaffolded: {}",
        scaffolded.join(", ")
    ))?;
    Ok(())
}

#[cfg(unix)]
fn mark_scripts_executable(base: &Path) -> Result<()> {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    for script in layout::EXECUTABLE_SCRIPTS {
        let path = base.join(script);
        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(perms.mode() | 0o755);
        fs::set_permissions(&path, perms)?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn mark_scripts_executable(_base: &Path) -> Result<()> {
    Ok(())
}
