//! Dotted package identifiers and their mapping onto the filesystem.

use itertools::Itertools;
use std::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// A dotted package identifier, like `com.example.model`.
///
/// Always has at least one segment, and no segment is empty.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PackagePath(Vec<String>);

impl PackagePath {
    /// An iterator over the segments of this package path
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.as_str())
    }

    /// Gets the number of segments
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false, a parsed package path has at least one segment
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Maps the dotted segments to a relative path, `a.b.c` to `a/b/c`
    pub fn to_rel_path(&self) -> PathBuf {
        self.0.iter().collect()
    }

    /// Fully qualifies a type name declared in this package.
    ///
    /// # Example
    /// ```
    /// # use smokegen::package::PackagePath;
    /// let package: PackagePath = "com.example.model".parse().unwrap();
    /// assert_eq!(package.qualify("Widget"), "com.example.model.Widget");
    /// ```
    pub fn qualify(&self, type_name: &str) -> String {
        format!("{self}.{type_name}")
    }
}

/// The string could not be interpreted as a dotted package identifier
#[derive(Debug, Error)]
#[error("invalid package identifier: {0:?}")]
pub struct InvalidPackagePath(String);

impl FromStr for PackagePath {
    type Err = InvalidPackagePath;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments = s.split('.').map(str::to_owned).collect::<Vec<_>>();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(InvalidPackagePath(s.to_string()));
        }
        Ok(Self(segments))
    }
}

impl Display for PackagePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join("."))
    }
}

impl Debug for PackagePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "PackagePath({:?})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_parse_and_display_round_trip() {
        let package: PackagePath = "com.example.model".parse().unwrap();
        assert_eq!(package.len(), 3);
        assert_eq!(package.to_string(), "com.example.model");
    }

    #[test]
    fn test_single_segment() {
        let package: PackagePath = "demo".parse().unwrap();
        assert_eq!(package.len(), 1);
        assert_eq!(package.to_rel_path(), Path::new("demo"));
    }

    #[test]
    fn test_rejects_empty_segments() {
        assert!("".parse::<PackagePath>().is_err());
        assert!("com..example".parse::<PackagePath>().is_err());
        assert!("com.example.".parse::<PackagePath>().is_err());
    }

    #[test]
    fn test_to_rel_path() {
        let package: PackagePath = "a.b.c".parse().unwrap();
        assert_eq!(package.to_rel_path(), Path::new("a").join("b").join("c"));
    }
}
