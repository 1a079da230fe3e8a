//! iepa-standards - IEP goal standards alignment
//!
//! Command-line driver over the standards catalog and alignment analyzer.
//! Results are printed to stdout as JSON; logs go to stderr.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use iepa_common::config::{load_config, ConfigSource};
use iepa_common::TomlConfig;
use iepa_standards::{validate_goal_text, GoalAlignmentAnalyzer, StandardsCatalog};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for iepa-standards
#[derive(Parser, Debug)]
#[command(name = "iepa-standards")]
#[command(about = "Align IEP goals with curated educational standards")]
#[command(version)]
struct Args {
    /// Path to a TOML config file
    #[arg(long, global = true, env = "IEPA_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze one goal and print the alignment report
    Analyze {
        /// Goal text to analyze
        #[arg(short, long)]
        goal: String,

        #[command(flatten)]
        filters: FilterArgs,

        /// Pretty-print the JSON report
        #[arg(long)]
        pretty: bool,
    },

    /// List recognized state names
    States,

    /// Print catalog standards matching the filters
    Standards {
        #[command(flatten)]
        filters: FilterArgs,
    },
}

/// Catalog filters; unset values fall back to configured defaults
#[derive(clap::Args, Debug)]
struct FilterArgs {
    /// "national" or a state name
    #[arg(long)]
    state: Option<String>,

    /// "all" or a subject tag (ela, math, science, social)
    #[arg(long)]
    subject: Option<String>,

    /// Grade level (K, 1, 2, ...)
    #[arg(long)]
    grade: Option<String>,
}

/// Filters with configuration defaults applied
struct Filters {
    state: String,
    subject: String,
    grade: Option<String>,
}

impl FilterArgs {
    fn resolve(self, config: &TomlConfig) -> Filters {
        let defaults = &config.analysis;
        Filters {
            state: self.state.unwrap_or_else(|| defaults.default_state.clone()),
            subject: self
                .subject
                .unwrap_or_else(|| defaults.default_subject.clone()),
            grade: self.grade.or_else(|| defaults.default_grade.clone()),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let loaded = load_config(args.config.as_deref()).context("Failed to load configuration")?;

    // RUST_LOG takes precedence over the configured level
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&loaded.config.logging.level)),
        )
        .init();

    match &loaded.source {
        ConfigSource::File(path) => info!("Config: {}", path.display()),
        ConfigSource::Defaults { reason } => warn!("Using default configuration: {}", reason),
    }

    let catalog = StandardsCatalog::builtin();
    info!(
        standards = catalog.len(),
        states = catalog.state_names().len(),
        "Standards catalog loaded"
    );

    match args.command {
        Command::Analyze {
            goal,
            filters,
            pretty,
        } => {
            validate_goal_text(&goal).context("Invalid goal")?;
            let filters = filters.resolve(&loaded.config);

            let analyzer = GoalAlignmentAnalyzer::new(&catalog);
            let result = analyzer.analyze_goal_alignment(
                &goal,
                &filters.state,
                &filters.subject,
                filters.grade.as_deref(),
            );
            info!(
                primary = result.primary_standards.len(),
                secondary = result.secondary_standards.len(),
                overall_score = result.overall_score,
                "Analysis complete"
            );

            print_json(&result, pretty)?;
        }
        Command::States => {
            for state in catalog.state_names() {
                println!("{}", state);
            }
        }
        Command::Standards { filters } => {
            let filters = filters.resolve(&loaded.config);
            let standards = catalog.get_relevant_standards(
                &filters.state,
                &filters.subject,
                filters.grade.as_deref(),
            );
            info!(count = standards.len(), "Standards selected");

            print_json(&standards, true)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize output")?;

    println!("{}", json);
    Ok(())
}
