//! Tree description types and construction

use crate::error::Result;
use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A nested mapping describing a directory subtree: each key is one path
/// segment, each value either a file's full content or a nested directory.
///
/// Insertion order is preserved so materialization and summaries are
/// deterministic.
pub type TreeDescription = IndexMap<String, TreeNode>;

/// One entry in a [`TreeDescription`].
///
/// Serializes untagged: a YAML string is a file, a YAML mapping is a
/// directory, so descriptions can be loaded from structured files as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// A file with its entire content, written verbatim. The materializer
    /// performs no templating; any interpolation happens before the
    /// description is constructed.
    File(String),
    /// A directory containing further entries.
    Dir(TreeDescription),
}

impl TreeNode {
    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir(_))
    }
}

/// Parse a tree description from a YAML document.
pub fn from_yaml(input: &str) -> Result<TreeDescription> {
    Ok(serde_yaml::from_str(input)?)
}

/// Builder for in-code tree descriptions.
///
/// Paths may contain `/` separators; intermediate directories are created
/// in the description as needed. On a key collision the later value wins,
/// consistent with mapping-key uniqueness.
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    root: TreeDescription,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file at `path` with the given content.
    pub fn file(mut self, path: &str, content: impl Into<String>) -> Self {
        insert_at(&mut self.root, path, TreeNode::File(content.into()));
        self
    }

    /// Ensure an (initially empty) directory exists at `path`.
    pub fn dir(mut self, path: &str) -> Self {
        insert_at(&mut self.root, path, TreeNode::Dir(TreeDescription::new()));
        self
    }

    /// Graft an existing description in as the directory at `path`.
    pub fn nest(mut self, path: &str, subtree: TreeDescription) -> Self {
        insert_at(&mut self.root, path, TreeNode::Dir(subtree));
        self
    }

    pub fn build(self) -> TreeDescription {
        self.root
    }
}

fn insert_at(root: &mut TreeDescription, path: &str, node: TreeNode) {
    let mut segments = path.split('/').filter(|s| !s.is_empty()).peekable();
    let mut current = root;

    while let Some(segment) = segments.next() {
        if segments.peek().is_none() {
            // Merging a directory into an existing directory keeps the
            // existing entries; everything else is later-wins.
            match current.entry(segment.to_string()) {
                Entry::Occupied(mut occupied) => match (occupied.get_mut(), node) {
                    (TreeNode::Dir(existing), TreeNode::Dir(incoming)) => {
                        existing.extend(incoming);
                    }
                    (slot, incoming) => *slot = incoming,
                },
                Entry::Vacant(vacant) => {
                    vacant.insert(node);
                }
            }
            return;
        }

        let entry = current
            .entry(segment.to_string())
            .or_insert_with(|| TreeNode::Dir(TreeDescription::new()));
        // A file blocking an intermediate segment is replaced; the later
        // value wins here as well.
        if !entry.is_dir() {
            *entry = TreeNode::Dir(TreeDescription::new());
        }
        let TreeNode::Dir(children) = entry else {
            unreachable!("just replaced with a directory")
        };
        current = children;
    }
}
