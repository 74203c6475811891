//! Hawai Setup - populate the Hawai umbrella workspace
//!
//! Shallow-clones the Redox OS foundation and framework repositories into
//! `hawai/`, scaffolds the T3SSA assistant, and creates the per-OS
//! placeholder directories. Behavior is entirely fixed by embedded
//! configuration; there are no flags to pass.

mod assistant;
mod repos;
mod workspace;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use hawai_core::{clone_all, materialize, Cloner, TreeBuilder, WORKSPACE_DIR};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "hawai-setup")]
#[command(about = "Sets up the complete Hawai umbrella workspace")]
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
        eprintln!("\n{}", "Setup interrupted by user".yellow());
        std::process::exit(130);
    })
    .ok();

    let Args {} = Args::parse();

    let result = run().await;
    let _ = console::Term::stderr().show_cursor();
    result
}

async fn run() -> Result<()> {
    cliclack::intro("Hawai Ecosystem Setup")?;
    cliclack::log::info("Building the future of computing")?;

    let ws = PathBuf::from(WORKSPACE_DIR);
    cliclack::log::info(format!("Workspace: {}/", ws.display()))?;

    let cloner = Cloner::default();

    // Foundation and framework repositories: per-repository failures are
    // reported and skipped, the run continues.
    println!();
    println!("{}", "Cloning Redox OS Foundation".cyan().bold());
    let mut summary = clone_all(&cloner, &repos::redox_repos(), &ws).await?;

    println!();
    println!("{}", "Cloning Junita, Cirrus Engine and Linfa".cyan().bold());
    let frameworks = clone_all(&cloner, &repos::framework_repos(), &ws).await?;
    summary.cloned.extend(frameworks.cloned);
    summary.failed.extend(frameworks.failed);

    if summary.failed.is_empty() {
        cliclack::log::success(format!("Cloned {} repositories", summary.cloned.len()))?;
    } else {
        cliclack::log::warning(format!(
            "Cloned {} repositories, skipped {}: {}",
            summary.cloned.len(),
            summary.failed.len(),
            summary
                .failed
                .iter()
                .map(|(name, _)| name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ))?;
    }

    // T3SSA assistant scaffold
    let t3ssa_dir = ws.join(assistant::DIR_NAME);
    let report = materialize(&t3ssa_dir, &assistant::description()).await?;
    cliclack::log::success(format!(
        "Scaffolded T3SSA assistant ({} files in {})",
        report.files,
        t3ssa_dir.display()
    ))?;

    // Per-OS placeholder workspaces
    materialize(&ws, &workspace::os_placeholders()).await?;
    cliclack::log::success(format!(
        "Created OS workspaces: {}",
        workspace::OS_DIRS.join(", ")
    ))?;

    // Workspace root README
    write_root_readme(&ws).await?;
    cliclack::log::success("Main README created")?;

    cliclack::outro("Hawai Ecosystem Ready!")?;
    Ok(())
}

async fn write_root_readme(ws: &Path) -> Result<()> {
    let desc = TreeBuilder::new()
        .file("README.md", workspace::ROOT_README)
        .build();
    materialize(ws, &desc).await?;
    Ok(())
}
