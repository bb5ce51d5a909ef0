use std::io::{stderr, stdout, BufWriter};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use digital_payments_dashboard::boundaries::GeoJsonBoundaries;
use digital_payments_dashboard::cli::CliArgs;
use digital_payments_dashboard::loader::CsvDatasetLoader;
use digital_payments_dashboard::projection::ProjectionSettings;
use digital_payments_dashboard::report::write_view;
use digital_payments_dashboard::storage::DatasetCache;
use digital_payments_dashboard::views::ViewRouter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    setup_logging(args.log_level);

    let mut router = ViewRouter::new(ProjectionSettings::default());

    if let Some(path) = &args.boundaries {
        let boundaries = GeoJsonBoundaries::from_path(path, &args.feature_key)?;
        router = router.with_boundaries(Arc::new(boundaries));
    }

    let cache = DatasetCache::new(CsvDatasetLoader::new());

    let timer = Instant::now();
    let dataset = cache.load(&args.input).await?;
    let duration = timer.elapsed();

    info!("Loaded dataset in: {duration:?}");

    let request = args.request();
    let output = router.render(&request, &dataset)?;

    info!("Rendering [{}]", request.view().title());

    write_view(&output, BufWriter::new(stdout().lock()))?;

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Views are written to stdout for redirection, so logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
