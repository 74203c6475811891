//! Tree descriptions and their materialization
//!
//! This module provides:
//! - [`TreeDescription`] / [`TreeNode`] - a pure, serializable data value
//!   describing a directory/file layout
//! - [`TreeBuilder`] - ergonomic in-code construction with slash-separated
//!   paths
//! - [`materialize`] - converting a description into real directories and
//!   files under an explicit base path

pub mod description;
pub mod materialize;

pub use description::{from_yaml, TreeBuilder, TreeDescription, TreeNode};
pub use materialize::{leaf_paths, materialize, MaterializeReport};
