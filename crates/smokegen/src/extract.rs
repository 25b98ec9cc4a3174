//! Lightweight extraction of package and type declarations from raw java
//! source text.
//!
//! This is pattern matching, not parsing: only the *first* package declaration
//! and the *first* public top-level type declaration are considered. A file
//! with several public types yields one declaration, and a match sitting
//! inside a comment or string literal is taken at face value. Both are
//! accepted limitations of a smoke-test generator that must never run real
//! code to make its decisions.

use crate::package::PackagePath;
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

static PACKAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*package\s+([\w.]+)\s*;").unwrap());

static TYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"public\s+(?:class|enum|interface|record)\s+(\w+)").unwrap());

/// The facts extracted from one source file.
///
/// Either field may be absent when its pattern found no match. A declaration
/// missing either field cannot name a loadable type and causes the file to be
/// skipped; absence is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub package: Option<PackagePath>,
    pub type_name: Option<String>,
}

impl Declaration {
    /// Scans source text for the first package declaration and the first
    /// public top-level type declaration.
    pub fn scan(text: &str) -> Self {
        let package = PACKAGE_RE
            .captures(text)
            .and_then(|captures| match captures[1].parse::<PackagePath>() {
                Ok(package) => Some(package),
                Err(e) => {
                    trace!("treating malformed package declaration as absent: {e}");
                    None
                }
            });
        let type_name = TYPE_RE
            .captures(text)
            .map(|captures| captures[1].to_string());
        Self { package, type_name }
    }

    /// Upgrades this declaration to a [`ResolvedDeclaration`], if both facts
    /// are present
    pub fn resolve(self) -> Option<ResolvedDeclaration> {
        match (self.package, self.type_name) {
            (Some(package), Some(type_name)) => Some(ResolvedDeclaration { package, type_name }),
            _ => None,
        }
    }
}

/// A declaration with both the package and the type name present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDeclaration {
    pub package: PackagePath,
    pub type_name: String,
}

impl ResolvedDeclaration {
    /// The fully qualified name used as the runtime load target
    pub fn qualified_name(&self) -> String {
        self.package.qualify(&self.type_name)
    }
}
