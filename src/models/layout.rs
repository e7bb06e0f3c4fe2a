use serde::Serialize;
use std::path::{Path, PathBuf};

/// Directories and files that make up a project skeleton.
///
/// Built once by the layout planner and only read afterwards. Both lists
/// keep creation order: parents come before their children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    root: PathBuf,
    directories: Vec<PathBuf>,
    files: Vec<PathBuf>,
}

impl Layout {
    pub(crate) const fn new(root: PathBuf, directories: Vec<PathBuf>, files: Vec<PathBuf>) -> Self {
        Self {
            root,
            directories,
            files,
        }
    }

    /// Project directory every path is rooted at
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Directories relative to the project root, `/`-separated
    pub fn relative_directories(&self) -> Vec<String> {
        self.relative(&self.directories)
    }

    /// Files relative to the project root, `/`-separated
    pub fn relative_files(&self) -> Vec<String> {
        self.relative(&self.files)
    }

    fn relative(&self, paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .filter_map(|path| path.strip_prefix(&self.root).ok())
            .map(|path| path.to_string_lossy().replace('\\', "/"))
            .collect()
    }
}
