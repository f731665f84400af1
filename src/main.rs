mod config;
mod error;
mod export;
mod extractor;
mod extractors;
mod gps;
mod map;
mod metadata;
mod processor;

use crate::config::AppConfig;
use crate::export::ExportFormat;
use anyhow::Result;
use clap::Parser;
use log::info;
use std::path::PathBuf;

/// Extract embedded metadata from images, PDFs, and audio files.
#[derive(Parser, Debug)]
#[command(name = "metapeek", version)]
struct Cli {
    /// File to inspect
    file: PathBuf,

    /// Write the collected metadata to this path
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Export format; inferred from the export path extension when omitted
    #[arg(long, value_enum, requires = "export")]
    format: Option<ExportFormat>,

    /// Print a Google Maps URL for the extracted GPS coordinates
    #[arg(long)]
    map_url: bool,

    /// Open the extracted GPS coordinates in the default browser
    #[arg(long)]
    open_map: bool,

    /// Suppress the metadata listing on stdout
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::new()?;

    env_logger::Builder::new()
        .filter_level(config.log_level.parse().unwrap_or(log::LevelFilter::Info))
        .init();

    info!("Starting metapeek");

    let session = processor::process_file(&config, &cli.file)?;

    if !cli.quiet {
        for (key, value) in session.metadata.iter() {
            println!("{}: {}", key, value);
        }
    }

    match session.coordinates {
        Some((lat, lon)) => {
            if cli.map_url {
                println!("{}", map::maps_url(lat, lon));
            }
            if cli.open_map {
                map::open_in_browser(lat, lon)?;
            }
        }
        None => {
            if cli.map_url || cli.open_map {
                log::warn!("No GPS coordinates available for {:?}", cli.file);
            }
        }
    }

    if let Some(ref export_path) = cli.export {
        let format = cli
            .format
            .unwrap_or_else(|| ExportFormat::for_path(export_path));
        export::export(&session.metadata, export_path, format)?;
    }

    info!("metapeek finished");

    Ok(())
}
