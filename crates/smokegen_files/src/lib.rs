#![doc = include_str!("../README.md")]

mod source_tree;

pub use self::source_tree::{SourceTree, SourceTreeIter};
use std::path::Path;

/// Creates a source tree rooted at the given directory
pub fn source_tree<P: AsRef<Path>>(root: P) -> SourceTree {
    SourceTree::new(root)
}

/// re-exports everything
pub mod prelude {
    pub use super::*;
}
