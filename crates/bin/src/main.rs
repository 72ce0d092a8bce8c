//! Strata CLI binary.
//!
//! Extracts tables, "Item" sections and financial statements from SEC
//! filings. Results are printed as JSON on stdout; logs go to stderr.

mod pipeline;

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process;
use strata::{
    ExtractConfig, ExtractError, Extractor, SectionExtractor, StatementExtractor, TableExtractor,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "strata")]
#[command(about = "Strata: structured extraction from SEC filings", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output directory
    #[arg(long, global = true, default_value = "output")]
    out: PathBuf,

    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Minimum table width, overrides the configuration file
    #[arg(long, global = true, env = "STRATA_MIN_COLUMNS")]
    min_columns: Option<usize>,

    /// Maximum tables per document, overrides the configuration file
    #[arg(long, global = true, env = "STRATA_MAX_TABLES")]
    max_tables: Option<usize>,

    /// Log filter, e.g. `info` or `strata=debug`
    #[arg(long, global = true, env = "STRATA_LOG", default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Extract data tables from an HTML filing
    Tables {
        /// HTML filing
        source: PathBuf,
    },

    /// Split an HTML filing into its Item sections
    Sections {
        /// HTML filing
        source: PathBuf,
    },

    /// Build IS/BS/CF statements from an XBRL company-facts JSON file
    Statements {
        /// Company-facts JSON
        source: PathBuf,

        /// Do not archive the raw company facts
        #[arg(long)]
        no_raw: bool,
    },

    /// Build one statement over a custom concept list
    Custom {
        /// Company-facts JSON
        source: PathBuf,

        /// Concept name, repeatable
        #[arg(long = "concept", required = true)]
        concepts: Vec<String>,

        /// Output CSV path
        #[arg(long)]
        output: PathBuf,
    },

    /// Run every applicable extractor into <out>/tables, <out>/sections and
    /// <out>/financials
    All {
        /// HTML filing
        source: PathBuf,

        /// Company-facts JSON for the statements
        #[arg(long)]
        facts: Option<PathBuf>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.log_json);
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Tables { source } => {
            print_json(&TableExtractor::from_config(&config).extract(&source, &cli.out)?)?;
        }
        Commands::Sections { source } => {
            print_json(&SectionExtractor::new().extract(&source, &cli.out)?)?;
        }
        Commands::Statements { source, no_raw } => {
            let extractor = StatementExtractor::from_config(&config)
                .with_raw_facts(config.save_raw_facts && !no_raw);
            print_json(&extractor.extract(&source, &cli.out)?)?;
        }
        Commands::Custom {
            source,
            concepts,
            output,
        } => {
            let extractor = StatementExtractor::from_config(&config);
            print_json(&extractor.extract_custom(&source, &concepts, &output)?)?;
        }
        Commands::All { source, facts } => {
            print_json(&pipeline::run_all(&config, &source, facts.as_deref(), &cli.out))?;
        }
    }

    Ok(())
}

fn init_tracing(level: &str, json: bool) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

fn load_config(cli: &Cli) -> Result<ExtractConfig, ExtractError> {
    let mut config = match &cli.config {
        Some(path) => ExtractConfig::from_json_file(path)?,
        None => ExtractConfig::default(),
    };
    if let Some(min_columns) = cli.min_columns {
        config.min_table_columns = min_columns;
    }
    if let Some(max_tables) = cli.max_tables {
        config.max_tables_per_file = max_tables;
    }
    config.validate()?;
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
