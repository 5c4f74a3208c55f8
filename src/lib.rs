//! The main library for the `spray-charts` application.
//!
//! This crate turns a season of batted-ball events into a multi-page spray
//! chart report, one page per pitcher and batter side. The primary entry
//! point is the `run` function, which takes the parsed CLI arguments and
//! executes the whole report.
//!
//! The library is structured into several modules:
//! - `cli`: Defines the command-line interface.
//! - `config`: Resolves input, asset and output paths.
//! - `data_loader`: Reads the CSV into a DataFrame and extracts typed events.
//! - `events`: The event, outcome and date range types.
//! - `processing`: Decides which (pitcher, batter side) pages exist.
//! - `geometry`: The fixed ballpark dimensions.
//! - `layout`: Page size and unit conversions.
//! - `surface`: The vector surface charts are drawn on.
//! - `field` and `spray`: Draw the field and the ball-in-play points.
//! - `assets`: Loads and embeds the logo images.
//! - `report`: Renders pages and writes the report document.
//! - `error`: Defines the application's custom error type.

use anyhow::{Context, Result};
use std::path::PathBuf;

pub mod assets;
pub mod cli;
pub mod config;
pub mod data_loader;
pub mod error;
pub mod events;
pub mod field;
pub mod geometry;
pub mod layout;
pub mod processing;
pub mod report;
pub mod spray;
pub mod surface;

use crate::assets::Logos;
use crate::cli::Cli;
use crate::config::ReportConfig;
use crate::geometry::FieldGeometry;
use crate::report::DocumentWriter;

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub output_path: PathBuf,
    pub pages: usize,
}

/// The main entry point for the application logic.
///
/// This function orchestrates the entire process:
/// 1.  It loads the CSV and keeps the events of the configured team.
/// 2.  It loads both logos.
/// 3.  It renders one page per pitcher and batter side with data and
///     appends each page to the report document as soon as it is drawn.
///
/// # Errors
///
/// A missing input file surfaces as `AppError::MissingInputFile` (reachable
/// with `downcast_ref`) before anything is written. Any other failure aborts
/// the run.
pub fn run(cli: &Cli) -> Result<ReportSummary> {
    let config = ReportConfig::from_cli(cli);

    // 1. Load data into a DataFrame
    let df = data_loader::load_dataframe(&config.input_path)?;

    if cli.debug {
        println!("  -> Detected columns:");
        for s in df.get_columns() {
            println!("     - {}: {:?}", s.name(), s.dtype());
        }
        println!("  -> Shape: {} rows x {} cols", df.height(), df.width());
    }

    // 2. Keep the team's events
    let table = data_loader::load_events(df, &config.team)
        .with_context(|| format!("Failed to read events from {}", config.input_path.display()))?;
    println!(
        "Loaded {} events for team '{}' ({})",
        table.events.len(),
        config.team,
        table.date_range
    );

    // 3. Load the logos
    let logos = Logos::load(&config.logo_path, &config.watermark_path).with_context(|| {
        format!(
            "Failed to load logos from {} and {}",
            config.logo_path.display(),
            config.watermark_path.display()
        )
    })?;

    // 4. Render and append pages
    let geometry = FieldGeometry::default();
    let groups = processing::page_groups(&table.events);
    log::info!("rendering {} pages", groups.len());

    let mut writer = DocumentWriter::create(&config.output_path, &logos)
        .with_context(|| format!("Failed to create {}", config.output_path.display()))?;
    for group in &groups {
        let page = report::render_page(
            group.pitcher,
            group.side,
            &group.events,
            table.date_range,
            &geometry,
            &logos,
        );
        writer.append_page(&page)?;
    }
    let pages = writer.pages();
    let output_path = writer
        .finish()
        .with_context(|| format!("Failed to write output to {}", config.output_path.display()))?;

    println!("  -> {} pages saved to '{}'", pages, output_path.display());

    Ok(ReportSummary { output_path, pages })
}
