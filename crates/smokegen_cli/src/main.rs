use crate::args::Args;
use clap::Parser;
use smokegen::TestGenerator;
use tracing::metadata::LevelFilter;
use tracing::{debug, trace};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::Registry;

mod args;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.log_level_filter())?;
    trace!("starting smokegen with args: {args:?}");
    debug!("smokegen version: {}", env!("CARGO_PKG_VERSION"));

    let mut builder = TestGenerator::builder().project_root(&args.project_root);
    if let Some(source_root) = &args.source_root {
        builder = builder.source_root(source_root);
    }
    if let Some(test_root) = &args.test_root {
        builder = builder.test_root(test_root);
    }
    let generator = builder.build()?;
    debug!("scanning sources under {:?}", generator.source_root());

    let report = generator.generate_all()?;
    println!("{report}");

    Ok(())
}

fn init_logging(level_filter: LevelFilter) -> eyre::Result<()> {
    let registry = Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        )
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(registry)?;

    Ok(())
}
