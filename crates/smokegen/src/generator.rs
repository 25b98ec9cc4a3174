//! Responsible for driving the locate → extract → synthesize → write pipeline

use crate::extract::Declaration;
use crate::synth;
use smokegen_files::SourceTree;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

pub mod error;

use error::{GenerateError, GenerateResult};

/// Conventional source root, relative to the project root
pub const DEFAULT_SOURCE_ROOT: &str = "src/main/java";
/// Conventional test root, relative to the project root
pub const DEFAULT_TEST_ROOT: &str = "src/test/java";

/// Build-output directory name; subtrees with this name are never scanned
const BUILD_OUTPUT_DIR: &str = "target";

/// Generates smoke tests for the java sources of one project.
///
/// Must be configured using a [TestGeneratorBuilder].
#[derive(Debug)]
pub struct TestGenerator {
    source_root: PathBuf,
    test_root: PathBuf,
}

impl TestGenerator {
    /// Creates the default TestGeneratorBuilder
    #[inline]
    pub fn builder() -> TestGeneratorBuilder {
        TestGeneratorBuilder::new()
    }

    /// The root the generator scans for sources
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// The root generated tests are written under
    pub fn test_root(&self) -> &Path {
        &self.test_root
    }

    /// Runs the pipeline once over the whole source root.
    ///
    /// Each located file is processed independently: sources without a usable
    /// declaration are skipped, as are types whose generated test already
    /// exists, and neither kind of skip affects the report. An I/O failure
    /// aborts the run with the files written so far left in place.
    pub fn generate_all(&self) -> GenerateResult<GenerationReport> {
        let mut created = 0usize;
        let sources = SourceTree::new(&self.source_root)
            .with_extension(synth::JAVA_EXTENSION)
            .prune(BUILD_OUTPUT_DIR);

        for source in sources {
            let text = fs::read_to_string(&source)
                .map_err(|e| GenerateError::ReadSource(source.clone(), e))?;
            let Some(declaration) = Declaration::scan(&text).resolve() else {
                debug!("skipping {source:?}: no package or no public type found");
                continue;
            };

            let out_dir = self.test_root.join(declaration.package.to_rel_path());
            fs::create_dir_all(&out_dir)
                .map_err(|e| GenerateError::CreateOutputDir(out_dir.clone(), e))?;

            let out_file = out_dir.join(synth::test_file_name(&declaration.type_name));
            if out_file.exists() {
                trace!("skipping {source:?}: {out_file:?} already exists");
                continue;
            }

            fs::write(&out_file, synth::render(&declaration))
                .map_err(|e| GenerateError::WriteTest(out_file.clone(), e))?;
            debug!("generated {out_file:?} for {}", declaration.qualified_name());
            created += 1;
        }

        Ok(GenerationReport {
            created,
            test_root: self.test_root.clone(),
        })
    }
}

/// Summary of one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Number of test files newly written by this run
    pub created: usize,
    /// The root the tests were written under
    pub test_root: PathBuf,
}

impl Display for GenerationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Generated {} test files under {}",
            self.created,
            self.test_root.display()
        )
    }
}

/// Builder for creating a [TestGenerator] instance.
#[derive(Debug)]
pub struct TestGeneratorBuilder {
    /// Root of the project with the conventional source layout
    pub project_root: PathBuf,
    /// Overrides the scanned source root
    pub source_root: Option<PathBuf>,
    /// Overrides the root generated tests are written under
    pub test_root: Option<PathBuf>,
}

impl TestGeneratorBuilder {
    /// Creates a TestGeneratorBuilder with default settings
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the project root the conventional roots are derived from
    pub fn project_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_root = path.as_ref().to_path_buf();
        self
    }

    /// Overrides the scanned source root
    pub fn source_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Overrides the root generated tests are written under
    pub fn test_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.test_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Builds a [TestGenerator] instance from this builder.
    ///
    /// The project root must exist; a missing *source* root is tolerated and
    /// simply yields nothing to scan.
    pub fn build(self) -> Result<TestGenerator, BuildTestGeneratorError> {
        let root_meta = fs::metadata(&self.project_root).map_err(|e| {
            BuildTestGeneratorError::ProjectRootDoesNotExist(self.project_root.clone(), e)
        })?;
        if !root_meta.is_dir() {
            return Err(BuildTestGeneratorError::ProjectRootIsNotADirectory(
                self.project_root,
            ));
        }
        let source_root = self
            .source_root
            .unwrap_or_else(|| self.project_root.join(DEFAULT_SOURCE_ROOT));
        let test_root = self
            .test_root
            .unwrap_or_else(|| self.project_root.join(DEFAULT_TEST_ROOT));
        Ok(TestGenerator {
            source_root,
            test_root,
        })
    }
}

impl Default for TestGeneratorBuilder {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            source_root: None,
            test_root: None,
        }
    }
}

/// An error occurred while building a [TestGenerator] instance
#[derive(Debug, Error)]
pub enum BuildTestGeneratorError {
    #[error("{0:?} does not exist: {1}")]
    ProjectRootDoesNotExist(PathBuf, io::Error),
    #[error("{0:?} is not a directory")]
    ProjectRootIsNotADirectory(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_derives_conventional_roots() {
        let dir = tempfile::tempdir().unwrap();
        let generator = TestGenerator::builder()
            .project_root(dir.path())
            .build()
            .unwrap();
        assert_eq!(generator.source_root(), dir.path().join(DEFAULT_SOURCE_ROOT));
        assert_eq!(generator.test_root(), dir.path().join(DEFAULT_TEST_ROOT));
    }

    #[test]
    fn test_builder_honors_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let generator = TestGenerator::builder()
            .project_root(dir.path())
            .source_root(dir.path().join("sources"))
            .test_root(dir.path().join("generated"))
            .build()
            .unwrap();
        assert_eq!(generator.source_root(), dir.path().join("sources"));
        assert_eq!(generator.test_root(), dir.path().join("generated"));
    }

    #[test]
    fn test_builder_rejects_missing_project_root() {
        let dir = tempfile::tempdir().unwrap();
        let result = TestGenerator::builder()
            .project_root(dir.path().join("nope"))
            .build();
        assert!(matches!(
            result,
            Err(BuildTestGeneratorError::ProjectRootDoesNotExist(..))
        ));
    }

    #[test]
    fn test_builder_rejects_file_project_root() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("pom.xml");
        std::fs::write(&file, "<project/>").unwrap();
        let result = TestGenerator::builder().project_root(&file).build();
        assert!(matches!(
            result,
            Err(BuildTestGeneratorError::ProjectRootIsNotADirectory(..))
        ));
    }

    #[test]
    fn test_report_summary_line() {
        let report = GenerationReport {
            created: 3,
            test_root: PathBuf::from("src/test/java"),
        };
        assert_eq!(
            report.to_string(),
            "Generated 3 test files under src/test/java"
        );
    }
}
