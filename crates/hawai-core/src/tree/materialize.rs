//! Converting tree descriptions into on-disk layouts

use crate::error::{Error, Result};
use crate::tree::description::{TreeDescription, TreeNode};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Counts of what a [`materialize`] call created or overwrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    /// Files written (existing files at the same path are replaced).
    pub files: usize,
    /// Directories ensured, the base path included.
    pub dirs: usize,
}

/// Materialize a tree description under `base`, creating `base` if absent.
///
/// Directories are created lazily and idempotently; files are written whole,
/// replacing any existing content. No partial-write recovery is attempted: a
/// failure partway through leaves an incomplete tree behind.
pub async fn materialize(base: &Path, desc: &TreeDescription) -> Result<MaterializeReport> {
    let mut report = MaterializeReport::default();

    ensure_dir(base).await?;
    report.dirs += 1;

    let mut pending: VecDeque<(PathBuf, &TreeDescription)> = VecDeque::new();
    pending.push_back((base.to_path_buf(), desc));

    while let Some((dir, entries)) = pending.pop_front() {
        for (name, node) in entries {
            let path = dir.join(name);
            match node {
                TreeNode::Dir(children) => {
                    ensure_dir(&path).await?;
                    report.dirs += 1;
                    pending.push_back((path, children));
                }
                TreeNode::File(content) => {
                    // The parent is always `dir`, already ensured, but the
                    // write itself can still fail on permissions.
                    fs::write(&path, content)
                        .await
                        .map_err(|e| Error::io(&path, e))?;
                    report.files += 1;
                }
            }
        }
    }

    Ok(report)
}

/// Relative paths of every file the description would produce, in
/// description order.
pub fn leaf_paths(desc: &TreeDescription) -> Vec<String> {
    let mut paths = Vec::new();
    collect_leaves(desc, "", &mut paths);
    paths
}

fn collect_leaves(desc: &TreeDescription, prefix: &str, out: &mut Vec<String>) {
    for (name, node) in desc {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}/{}", prefix, name)
        };
        match node {
            TreeNode::File(_) => out.push(path),
            TreeNode::Dir(children) => collect_leaves(children, &path, out),
        }
    }
}

async fn ensure_dir(path: &Path) -> Result<()> {
    if path.exists() && !path.is_dir() {
        return Err(Error::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    fs::create_dir_all(path)
        .await
        .map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::description::TreeBuilder;
    use std::fs as std_fs;
    use walkdir::WalkDir;

    fn all_files(base: &Path) -> Vec<PathBuf> {
        WalkDir::new(base)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().to_path_buf())
            .collect()
    }

    #[tokio::test]
    async fn writes_one_file_per_leaf() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("root");
        let desc = TreeBuilder::new().file("a/b", "hello").build();

        let report = materialize(&root, &desc).await.unwrap();

        assert_eq!(report.files, 1);
        assert_eq!(std_fs::read_to_string(root.join("a/b")).unwrap(), "hello");
        assert_eq!(all_files(&root), vec![root.join("a/b")]);
    }

    #[tokio::test]
    async fn rerun_is_idempotent_for_static_descriptions() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("root");
        let desc = TreeBuilder::new()
            .file("src/main.rs", "fn main() {}")
            .file("README.md", "# hi")
            .dir("models")
            .build();

        let first = materialize(&root, &desc).await.unwrap();
        let files_after_first = all_files(&root);
        let second = materialize(&root, &desc).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(all_files(&root), files_after_first);
        assert_eq!(
            std_fs::read_to_string(root.join("src/main.rs")).unwrap(),
            "fn main() {}"
        );
    }

    #[tokio::test]
    async fn existing_unrelated_files_survive() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("root");
        std_fs::create_dir_all(root.join("docs")).unwrap();
        std_fs::write(root.join("docs/NOTES.md"), "user notes").unwrap();
        std_fs::write(root.join("docs/API.md"), "old").unwrap();

        let desc = TreeBuilder::new().file("docs/API.md", "new").build();
        materialize(&root, &desc).await.unwrap();

        // Additive for the directory, destructive only for the exact path.
        assert_eq!(
            std_fs::read_to_string(root.join("docs/NOTES.md")).unwrap(),
            "user notes"
        );
        assert_eq!(std_fs::read_to_string(root.join("docs/API.md")).unwrap(), "new");
    }

    #[tokio::test]
    async fn fails_when_directory_path_is_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("root");
        std_fs::create_dir_all(&root).unwrap();
        std_fs::write(root.join("src"), "not a directory").unwrap();

        let desc = TreeBuilder::new().file("src/main.rs", "fn main() {}").build();
        let err = materialize(&root, &desc).await.unwrap_err();

        assert!(matches!(err, Error::NotADirectory { .. }));
        assert!(!err.is_recoverable());
    }

    #[tokio::test]
    async fn creates_missing_base_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("deeply/nested/base");
        let desc = TreeBuilder::new().file("file.txt", "x").build();

        let report = materialize(&root, &desc).await.unwrap();

        assert_eq!(report.files, 1);
        assert!(root.join("file.txt").is_file());
    }

    #[test]
    fn leaf_paths_concatenate_nesting_keys() {
        let desc = TreeBuilder::new()
            .file("a/b", "hello")
            .file("README.md", "hi")
            .dir("empty")
            .build();
        assert_eq!(leaf_paths(&desc), vec!["a/b".to_string(), "README.md".to_string()]);
    }
}
