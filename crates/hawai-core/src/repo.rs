//! Shallow repository cloning via the system git client
//!
//! Clones are depth-limited with no submodule recursion; any nested
//! submodule metadata left behind by the remote is stripped after a
//! successful clone. A failed clone is recoverable (reported and skipped),
//! while filesystem failures during cleanup are fatal.

use crate::error::{Error, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::process::Command;

/// One remote repository to clone: its URL and the local directory name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSpec {
    pub url: String,
    pub name: String,
}

impl RepoSpec {
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
        }
    }
}

/// Outcome of a [`clone_all`] run.
#[derive(Debug, Default, Clone)]
pub struct CloneSummary {
    /// Names of repositories now present in the workspace.
    pub cloned: Vec<String>,
    /// Skipped repositories with the reason each failed.
    pub failed: Vec<(String, String)>,
}

/// Invokes the external git client for shallow clones.
///
/// The program name is configurable so tests can substitute a missing or
/// failing binary; production callers use [`Cloner::default`].
#[derive(Debug, Clone)]
pub struct Cloner {
    git: String,
}

impl Default for Cloner {
    fn default() -> Self {
        Self {
            git: "git".to_string(),
        }
    }
}

impl Cloner {
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            git: program.into(),
        }
    }

    /// Shallow-clone `repo` into `parent/<name>`, then strip submodule
    /// metadata from the result.
    ///
    /// No timeout is applied: a hanging clone blocks until the client
    /// returns. A non-zero exit or an unlaunchable client both classify as
    /// a recoverable [`Error::Clone`].
    pub async fn shallow_clone(&self, repo: &RepoSpec, parent: &Path) -> Result<PathBuf> {
        let target = parent.join(&repo.name);

        let output = Command::new(&self.git)
            .arg("clone")
            .arg("--depth")
            .arg("1")
            .arg("--no-single-branch")
            .arg(&repo.url)
            .arg(&target)
            .output()
            .await
            .map_err(|e| Error::Clone {
                repo: repo.name.clone(),
                reason: format!("could not run '{}': {}", self.git, e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = stderr
                .lines()
                .last()
                .map(str::to_string)
                .unwrap_or_else(|| format!("exit status {}", output.status));
            return Err(Error::Clone {
                repo: repo.name.clone(),
                reason,
            });
        }

        strip_submodule_metadata(&target).await?;
        Ok(target)
    }
}

/// Remove `.gitmodules` and `.git/modules` from a cloned tree, if present.
/// Returns whether anything was removed.
pub async fn strip_submodule_metadata(repo_dir: &Path) -> Result<bool> {
    let mut removed = false;

    let gitmodules = repo_dir.join(".gitmodules");
    if gitmodules.exists() {
        fs::remove_file(&gitmodules)
            .await
            .map_err(|e| Error::io(&gitmodules, e))?;
        removed = true;
    }

    let modules_dir = repo_dir.join(".git").join("modules");
    if modules_dir.exists() {
        fs::remove_dir_all(&modules_dir)
            .await
            .map_err(|e| Error::io(&modules_dir, e))?;
        removed = true;
    }

    Ok(removed)
}

/// Clone each repository in turn into `parent`, creating it if absent.
///
/// A recoverable clone failure is reported and the repository skipped;
/// anything else aborts the run. No rollback, no retry.
pub async fn clone_all(
    cloner: &Cloner,
    repos: &[RepoSpec],
    parent: &Path,
) -> Result<CloneSummary> {
    fs::create_dir_all(parent)
        .await
        .map_err(|e| Error::io(parent, e))?;

    let mut summary = CloneSummary::default();

    for repo in repos {
        println!("  {} Cloning {}...", "->".blue(), repo.name);
        match cloner.shallow_clone(repo, parent).await {
            Ok(_) => {
                println!("     {} {} ready", "ok".green(), repo.name);
                summary.cloned.push(repo.name.clone());
            }
            Err(e) if e.is_recoverable() => {
                eprintln!("     {} {}", "skipped:".yellow(), e);
                summary.failed.push((repo.name.clone(), e.to_string()));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command as StdCommand;

    fn git_available() -> bool {
        StdCommand::new("git")
            .arg("--version")
            .output()
            .is_ok_and(|o| o.status.success())
    }

    /// Create a one-commit git repository to clone from.
    fn init_source_repo(dir: &Path) {
        StdCommand::new("git")
            .args(["init", "-q"])
            .current_dir(dir)
            .status()
            .expect("git init");
        std::fs::write(dir.join("README.md"), "# source").unwrap();
        StdCommand::new("git")
            .args(["add", "."])
            .current_dir(dir)
            .status()
            .expect("git add");
        StdCommand::new("git")
            .args([
                "-c",
                "user.name=test",
                "-c",
                "user.email=test@example.com",
                "commit",
                "-q",
                "-m",
                "initial",
            ])
            .current_dir(dir)
            .status()
            .expect("git commit");
    }

    #[tokio::test]
    async fn missing_client_is_a_recoverable_clone_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let cloner = Cloner::with_program("definitely-not-a-git-binary");
        let repo = RepoSpec::new("https://example.invalid/repo.git", "repo");

        let err = cloner.shallow_clone(&repo, tmp.path()).await.unwrap_err();
        assert!(err.is_recoverable());
    }

    #[tokio::test]
    async fn clone_failure_skips_only_that_repository() {
        if !git_available() {
            eprintln!("git not available, skipping");
            return;
        }

        let tmp = tempfile::tempdir().unwrap();
        let src_a = tmp.path().join("src-a");
        let src_b = tmp.path().join("src-b");
        std::fs::create_dir_all(&src_a).unwrap();
        std::fs::create_dir_all(&src_b).unwrap();
        init_source_repo(&src_a);
        init_source_repo(&src_b);

        let repos = vec![
            RepoSpec::new(src_a.display().to_string(), "alpha"),
            RepoSpec::new(tmp.path().join("no-such-repo").display().to_string(), "broken"),
            RepoSpec::new(src_b.display().to_string(), "beta"),
        ];

        let workspace = tmp.path().join("workspace");
        let summary = clone_all(&Cloner::default(), &repos, &workspace)
            .await
            .unwrap();

        assert_eq!(summary.cloned, vec!["alpha", "beta"]);
        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.failed[0].0, "broken");
        assert!(workspace.join("alpha/README.md").is_file());
        assert!(workspace.join("beta/README.md").is_file());
        assert!(!workspace.join("broken").exists());
    }

    #[tokio::test]
    async fn strips_submodule_metadata() {
        let tmp = tempfile::tempdir().unwrap();
        let repo = tmp.path().join("cloned");
        std::fs::create_dir_all(repo.join(".git/modules/inner")).unwrap();
        std::fs::write(repo.join(".gitmodules"), "[submodule \"inner\"]").unwrap();

        let removed = strip_submodule_metadata(&repo).await.unwrap();

        assert!(removed);
        assert!(!repo.join(".gitmodules").exists());
        assert!(!repo.join(".git/modules").exists());
        assert!(repo.join(".git").exists());
    }

    #[tokio::test]
    async fn stripping_a_clean_tree_is_a_no_op() {
        let tmp = tempfile::tempdir().unwrap();
        let removed = strip_submodule_metadata(tmp.path()).await.unwrap();
        assert!(!removed);
    }
}
