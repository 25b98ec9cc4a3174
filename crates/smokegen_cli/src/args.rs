//! the args for running smokegen

use clap::{value_parser, ArgAction};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

/// The args struct
#[derive(Debug, clap::Parser)]
#[clap(
    author,
    version,
    about = "Generates JUnit smoke tests for java sources"
)]
pub struct Args {
    #[clap(short = 'v', value_parser = value_parser!(u8).range(0..=2), action=ArgAction::Count, conflicts_with="quiet")]
    verbose: u8,
    #[clap(short = 'q', value_parser = value_parser!(u8).range(0..=2), action=ArgAction::Count, conflicts_with="verbose")]
    quiet: u8,

    /// The project root the conventional source layout is resolved against
    #[clap(default_value = ".", value_name="project root", value_hint=clap::ValueHint::DirPath)]
    pub project_root: PathBuf,
    /// Overrides the scanned source root (defaults to <project root>/src/main/java)
    #[clap(long = "source-root", value_hint=clap::ValueHint::DirPath)]
    pub source_root: Option<PathBuf>,
    /// Overrides where generated tests are written (defaults to <project root>/src/test/java)
    #[clap(long = "test-root", value_hint=clap::ValueHint::DirPath)]
    pub test_root: Option<PathBuf>,
}

impl Args {
    /// Gets the logging level based on whether `-v[v]` or `-q[q]` has been used,
    pub fn log_level_filter(&self) -> LevelFilter {
        let sum = self.verbose as i8 - self.quiet as i8;
        match sum {
            -2 => LevelFilter::OFF,
            -1 => LevelFilter::ERROR,
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            2 => LevelFilter::TRACE,
            _ => unreachable!(),
        }
    }
}
