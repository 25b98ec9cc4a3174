use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// A recursive walk over the files beneath a root directory.
///
/// The walk is lazy: a directory is only read once the iterator reaches it. A
/// root that does not exist, or that is not a directory, yields an empty
/// sequence rather than an error. The order files are yielded in is
/// unspecified and must not be relied upon.
#[derive(Debug, Clone)]
pub struct SourceTree {
    root: PathBuf,
    extension: Option<OsString>,
    pruned: HashSet<OsString>,
}

impl SourceTree {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            extension: None,
            pruned: HashSet::new(),
        }
    }

    /// Only yields files with the given extension (without the leading dot)
    pub fn with_extension<S: Into<OsString>>(mut self, extension: S) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Excludes every subtree rooted at a directory with this exact name
    pub fn prune<S: Into<OsString>>(mut self, dir_name: S) -> Self {
        self.pruned.insert(dir_name.into());
        self
    }
}

impl IntoIterator for SourceTree {
    type Item = PathBuf;
    type IntoIter = SourceTreeIter;

    fn into_iter(self) -> Self::IntoIter {
        SourceTreeIter {
            stack: vec![self.root],
            extension: self.extension,
            pruned: self.pruned,
        }
    }
}

/// Iterator over the files of a [`SourceTree`], created by its
/// [`IntoIterator`] impl.
#[derive(Debug)]
pub struct SourceTreeIter {
    stack: Vec<PathBuf>,
    extension: Option<OsString>,
    pruned: HashSet<OsString>,
}

impl SourceTreeIter {
    fn wanted(&self, file: &Path) -> bool {
        match &self.extension {
            Some(extension) => file.extension() == Some(extension.as_os_str()),
            None => true,
        }
    }

    fn is_pruned(&self, dir: &Path) -> bool {
        dir.file_name()
            .is_some_and(|name| self.pruned.contains(name))
    }
}

impl Iterator for SourceTreeIter {
    type Item = PathBuf;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(path) = self.stack.pop() {
            if path.is_file() {
                if self.wanted(&path) {
                    return Some(path);
                }
            } else if path.is_dir() {
                if let Ok(read_dir) = fs::read_dir(&path) {
                    for entry in read_dir.filter_map(|e| e.ok()) {
                        let child = entry.path();
                        if child.is_dir() && self.is_pruned(&child) {
                            continue;
                        }
                        self.stack.push(child);
                    }
                }
            }
        }
        None
    }
}
