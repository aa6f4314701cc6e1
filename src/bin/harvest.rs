//! harvest - Build the Stormworks component catalog
//!
//! Reads the game's component definition files, scrapes representative
//! images from the wiki category pages, and writes the merged JSON catalog
//! to stdout. Unmatched wiki entries are reported on stderr.

use clap::Parser;
use std::path::PathBuf;
use sw_catalog::config::HarvestConfig;
use sw_catalog::harvest::{self, Harvester};
use sw_catalog::{catalog, Result};

#[derive(Parser)]
#[command(name = "harvest")]
#[command(about = "Build the Stormworks component catalog")]
#[command(version)]
struct Cli {
    /// Path to a YAML config file
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Definition directory (overrides the config)
    #[arg(long, short = 'd')]
    definitions: Option<PathBuf>,

    /// Progress output on stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => HarvestConfig::load(path)?,
        None => HarvestConfig::default(),
    };
    if let Some(dir) = &cli.definitions {
        config.definitions_dir = dir.clone();
    }

    let harvester = Harvester::new(config)?;

    if cli.verbose {
        eprintln!(
            "Loading definitions from {}",
            harvester.config().definitions_dir.display()
        );
    }
    let mut definitions = harvester.load_definitions()?;
    if cli.verbose {
        eprintln!("Loaded {} definitions", definitions.len());
        eprintln!("Fetching {} wiki pages", harvester.config().wiki_pages.len());
    }

    let images = harvester.scrape_image_index()?;
    if cli.verbose {
        eprintln!("Indexed {} images", images.len());
    }

    harvest::reconcile(&mut definitions, &images);
    harvest::apply_overrides(&mut definitions);

    println!("{}", catalog::render(&definitions)?);
    Ok(())
}
