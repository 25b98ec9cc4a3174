//! An error raised while generating smoke tests

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// An I/O failure in the generation pipeline.
///
/// Per-file logical skips (unusable declarations, already-generated outputs)
/// are normal outcomes and never surface here; anything that does aborts the
/// whole run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("could not read source file {0:?}: {1}")]
    ReadSource(PathBuf, io::Error),
    #[error("could not create output directory {0:?}: {1}")]
    CreateOutputDir(PathBuf, io::Error),
    #[error("could not write generated test {0:?}: {1}")]
    WriteTest(PathBuf, io::Error),
}

/// A type alias for general results in smokegen
pub type GenerateResult<T> = Result<T, GenerateError>;
