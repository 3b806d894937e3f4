use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builds throwaway directory trees for walker tests.
pub struct TestFixtures;

impl TestFixtures {
    /// `a.txt`, `b.txt` and `sub/c.txt`
    pub fn simple_tree() -> TempDir {
        let dir = TempDir::new().expect("temp dir");
        Self::write(dir.path(), "a.txt");
        Self::write(dir.path(), "b.txt");
        Self::write(dir.path(), "sub/c.txt");
        dir
    }

    /// A single chain of `depth` nested directories with one file at the bottom.
    pub fn deep_chain(depth: usize) -> (TempDir, PathBuf) {
        let dir = TempDir::new().expect("temp dir");
        let mut path = dir.path().to_path_buf();
        for i in 0..depth {
            path.push(format!("d{}", i));
        }
        fs::create_dir_all(&path).expect("create chain");
        let leaf = path.join("leaf.txt");
        fs::write(&leaf, b"leaf").expect("write leaf");
        (dir, leaf)
    }

    /// Creates `relative` (and its parents) under `root` with a short body.
    pub fn write(root: &Path, relative: &str) -> PathBuf {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parents");
        }
        fs::write(&path, relative.as_bytes()).expect("write file");
        path
    }
}

/// Index of `target` in `paths`, panicking when absent.
pub fn position_of(paths: &[PathBuf], target: &Path) -> usize {
    paths
        .iter()
        .position(|p| p == target)
        .unwrap_or_else(|| panic!("{} not walked", target.display()))
}
