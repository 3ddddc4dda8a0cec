//! CLI tool for exporting embedded slides to a print-ready HTML file.

use anyhow::{Context, Result};
use clap::Parser;
use slides_core::config::{INPUT_PATH, OUTPUT_PATH};
use slides_core::{Error, SlideExporter};
use std::path::Path;

/// Extract the slides from an exported deck into one HTML page that
/// prints to PDF at one 1280x720 slide per page.
///
/// Reads the export from the current directory and always overwrites the
/// output file next to it.
#[derive(Parser, Debug)]
#[command(name = "slides-export")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let input_path = Path::new(INPUT_PATH);
    let output_path = Path::new(OUTPUT_PATH);

    let exporter = SlideExporter::new();

    let document = match exporter.read_input(input_path) {
        Ok(document) => document,
        Err(Error::InputNotFound(path)) => {
            anyhow::bail!("{} not found", path.display());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", input_path.display()));
        }
    };

    log::debug!("Read {} bytes from {}", document.len(), input_path.display());

    let deck = exporter.render(&document);
    println!("Found {} slides", deck.summary.slide_count);
    log::debug!(
        "Carrying {} style blocks and {} font-face rules",
        deck.summary.style_count,
        deck.summary.font_face_count
    );

    exporter
        .write_output(output_path, &deck.html)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;
    println!(
        "Created {} with {} slides",
        output_path.display(),
        deck.summary.slide_count
    );

    println!("Done!");

    Ok(())
}
