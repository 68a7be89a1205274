mod config;
mod engine;
mod models;
mod pipeline;
mod sink;

use std::io::stderr;
use std::process::exit;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, fmt};

use crate::config::JobConfig;
use crate::engine::BatchEngine;
use crate::sink::CsvFileSink;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 3 {
        eprintln!("Usage: transaction-transform [source].csv [log_level:optional]");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let mut config = JobConfig::from_env()?;

    if let Some(path) = args.get(1) {
        config.source_path = path.into();
    }

    let engine = BatchEngine::new(CsvFileSink::new(config.dataset_dir.clone()));

    let timer = Instant::now();
    let summary = engine.run(&config)?;
    let duration = timer.elapsed();

    info!("Processed {} rows in: {duration:?}", summary.total_rows);

    if summary.error_rows > 0 {
        println!("{} error rows routed to table [{}].", summary.error_rows, config.error_table_name);
    } else {
        println!("All rows processed successfully.");
    }

    println!("Transformation and load completed.");

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Summary lines go to stdout, so logging is kept on stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
