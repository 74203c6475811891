//! Hawai Core - Shared library for the Hawai scaffolding CLIs
//!
//! This library provides the mechanisms shared by the `hawai-setup` and
//! `hawai-scaffold` binaries:
//!
//! - **Tree materialization** - converting an in-memory [`TreeDescription`]
//!   (a nested mapping of directory names to subtrees or file contents) into
//!   an on-disk directory/file layout.
//! - **Repository cloning** - shallow-cloning external repositories via the
//!   system `git` client, with nested-submodule metadata stripped.
//!
//! Every operation takes an explicit base path; nothing here changes the
//! process working directory, so the library is reentrant and testable in
//! isolation.
//!
//! # Error policy
//!
//! [`Error::Clone`] is the only recoverable error kind: callers are expected
//! to report it, skip the repository, and continue. All other kinds (missing
//! permissions, a file sitting where a directory is needed, malformed
//! embedded data) are fatal to the run.

pub mod error;
pub mod repo;
pub mod tree;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use repo::{clone_all, CloneSummary, Cloner, RepoSpec};
pub use tree::{materialize, MaterializeReport, TreeBuilder, TreeDescription, TreeNode};

/// Name of the workspace root directory both binaries populate.
pub const WORKSPACE_DIR: &str = "hawai";
