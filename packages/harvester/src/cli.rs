//! Command-line interface for the harvester.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use luatdiff_shared::save_articles;

use crate::config::validate_version;
use crate::error::Result;
use crate::harvester::harvest_law;

/// luatdiff Harvester - Download Vietnamese Land Law texts as article trees.
#[derive(Parser)]
#[command(name = "luatdiff-harvester")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download a law version and save its article tree as JSON.
    Crawl {
        /// Law version: 2013 or 2024
        law_version: String,

        /// Output file (default: articles_<version>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Crawl {
            law_version,
            output,
        } => crawl_command(&law_version, output),
    }
}

/// Execute the crawl command.
fn crawl_command(version: &str, output: Option<PathBuf>) -> Result<()> {
    validate_version(version)?;
    let output_path = output.unwrap_or_else(|| PathBuf::from(format!("articles_{version}.json")));

    println!(
        "{} Land Law {}",
        style("Downloading").bold(),
        style(version).cyan()
    );
    println!();

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );

    pb.set_message("Downloading and parsing...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let articles = match harvest_law(version) {
        Ok(articles) => articles,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    println!("  Articles: {}", style(articles.len()).green());

    pb.set_message("Saving JSON...");
    if let Err(e) = save_articles(&output_path, &articles) {
        pb.finish_and_clear();
        return Err(e.into());
    }
    pb.finish_and_clear();

    println!();
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        output_path.display()
    );

    Ok(())
}
