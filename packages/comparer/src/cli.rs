//! Command-line interface for the comparer.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use luatdiff_shared::load_articles;

use crate::comparer::compare_documents;
use crate::config::CompareConfig;
use crate::error::Result;
use crate::glossary::{extract_glossary, save_glossary};
use crate::report::{print_summary, save_report};

/// luatdiff Comparer - Diff two versions of a structured legal text.
#[derive(Parser)]
#[command(name = "luatdiff-comparer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare two article files and write the change mapping.
    Compare {
        /// Articles JSON of the earlier version
        old: PathBuf,

        /// Articles JSON of the later version
        new: PathBuf,

        /// Output path for the mapping JSON
        #[arg(short, long, default_value = "mapping.json")]
        output: PathBuf,

        /// Minimum similarity for a one-to-one match
        #[arg(long, default_value_t = 0.60)]
        match_threshold: f64,

        /// Per-candidate similarity floor for split/merge detection
        #[arg(long, default_value_t = 0.35)]
        unit_threshold: f64,

        /// Summed similarity floor for split/merge detection
        #[arg(long, default_value_t = 0.75)]
        sum_threshold: f64,

        /// Use the greedy matcher instead of the optimal solver
        #[arg(long)]
        greedy: bool,
    },

    /// Extract a glossary of defined terms from article files.
    Glossary {
        /// One or more articles JSON files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output path for the glossary JSON
        #[arg(short, long, default_value = "glossary.json")]
        output: PathBuf,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            old,
            new,
            output,
            match_threshold,
            unit_threshold,
            sum_threshold,
            greedy,
        } => {
            let mut config = CompareConfig::default().with_match_threshold(match_threshold);
            config.split_unit_threshold = unit_threshold;
            config.merge_unit_threshold = unit_threshold;
            config.split_sum_threshold = sum_threshold;
            config.merge_sum_threshold = sum_threshold;
            if greedy {
                config = config.with_greedy_matching();
            }
            compare_command(&old, &new, &output, &config)
        }
        Commands::Glossary { inputs, output } => glossary_command(&inputs, &output),
    }
}

/// Execute the compare command.
fn compare_command(
    old: &std::path::Path,
    new: &std::path::Path,
    output: &std::path::Path,
    config: &CompareConfig,
) -> Result<()> {
    println!(
        "{} {} {} {}",
        style("Comparing").bold(),
        style(old.display()).cyan(),
        style("against").bold(),
        style(new.display()).cyan()
    );
    println!();

    let pb = spinner();
    pb.set_message("Loading articles...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let old_articles = match load_articles(old) {
        Ok(articles) => articles,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e.into());
        }
    };
    let new_articles = match load_articles(new) {
        Ok(articles) => articles,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e.into());
        }
    };

    pb.set_message("Computing change mapping...");
    let report = match compare_documents(&old_articles, &new_articles, config) {
        Ok(report) => report,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Saving mapping...");
    if let Err(e) = save_report(output, &report.entries) {
        pb.finish_and_clear();
        return Err(e);
    }
    pb.finish_and_clear();

    print_summary(&report);
    println!();
    println!("{} {}", style("Saved to:").green().bold(), output.display());

    Ok(())
}

/// Execute the glossary command.
fn glossary_command(inputs: &[PathBuf], output: &std::path::Path) -> Result<()> {
    let pb = spinner();
    pb.set_message("Loading articles...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let mut article_sets = Vec::with_capacity(inputs.len());
    for input in inputs {
        match load_articles(input) {
            Ok(articles) => article_sets.push(articles),
            Err(e) => {
                pb.finish_and_clear();
                return Err(e.into());
            }
        }
    }

    pb.set_message("Extracting terms...");
    let borrowed: Vec<&[luatdiff_shared::Article]> =
        article_sets.iter().map(Vec::as_slice).collect();
    let glossary = extract_glossary(&borrowed);

    pb.set_message("Saving glossary...");
    if let Err(e) = save_glossary(output, &glossary) {
        pb.finish_and_clear();
        return Err(e);
    }
    pb.finish_and_clear();

    println!("  Terms: {}", style(glossary.len()).green());
    println!();
    println!("{} {}", style("Saved to:").green().bold(), output.display());

    Ok(())
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_compare_defaults() {
        let cli = Cli::parse_from(["luatdiff-comparer", "compare", "old.json", "new.json"]);

        let Commands::Compare {
            old,
            new,
            output,
            match_threshold,
            greedy,
            ..
        } = cli.command
        else {
            panic!("expected compare command");
        };
        assert_eq!(old, PathBuf::from("old.json"));
        assert_eq!(new, PathBuf::from("new.json"));
        assert_eq!(output, PathBuf::from("mapping.json"));
        assert!((match_threshold - 0.60).abs() < f64::EPSILON);
        assert!(!greedy);
    }

    #[test]
    fn test_cli_parse_compare_overrides() {
        let cli = Cli::parse_from([
            "luatdiff-comparer",
            "compare",
            "old.json",
            "new.json",
            "--match-threshold",
            "0.7",
            "--greedy",
        ]);

        let Commands::Compare {
            match_threshold,
            greedy,
            ..
        } = cli.command
        else {
            panic!("expected compare command");
        };
        assert!((match_threshold - 0.7).abs() < f64::EPSILON);
        assert!(greedy);
    }

    #[test]
    fn test_cli_parse_glossary() {
        let cli = Cli::parse_from([
            "luatdiff-comparer",
            "glossary",
            "a.json",
            "b.json",
            "--output",
            "terms.json",
        ]);

        let Commands::Glossary { inputs, output } = cli.command else {
            panic!("expected glossary command");
        };
        assert_eq!(inputs.len(), 2);
        assert_eq!(output, PathBuf::from("terms.json"));
    }
}
