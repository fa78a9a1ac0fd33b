//! attrgen - field definition parser
//!
//! Parses generator field definitions one at a time and prints the resulting
//! attribute descriptors.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

use attrgen::{batch, AttrgenConfig, AttributeType, OutputFormat};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_DATE"),
    ")"
);

#[derive(Parser)]
#[command(name = "attrgen")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Field definition parser for record model generators", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", env = "ATTRGEN_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse definitions and print their descriptors
    Parse {
        /// Field definitions, e.g. `age:int:hkey`
        definitions: Vec<String>,

        /// Output format (overrides the config file)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Validate definitions without printing descriptors
    Check {
        /// Field definitions, e.g. `age:int:hkey`
        definitions: Vec<String>,
    },

    /// List attribute types and their aliases
    Types,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    if cli.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let config = match &cli.config {
        Some(path) => AttrgenConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AttrgenConfig::default(),
    };

    match cli.command {
        Commands::Parse {
            definitions,
            format,
        } => {
            let format = batch::select_format(format, &config);
            let definitions = batch::select_definitions(definitions, &config)?;
            let summary = batch::parse_all(
                &definitions,
                format,
                config.output.pretty,
                &mut io::stdout().lock(),
                &mut io::stderr().lock(),
            )?;
            summary.into_result()?;
        }
        Commands::Check { definitions } => {
            let definitions = batch::select_definitions(definitions, &config)?;
            batch::check_all(&definitions, &mut io::stdout().lock())?.into_result()?;
        }
        Commands::Types => {
            list_types();
        }
    }

    Ok(())
}

fn list_types() {
    println!("{:<12} {:<18} ALIASES", "TYPE", "GENERATOR");
    for ty in AttributeType::ALL {
        println!(
            "{:<12} {:<18} {}",
            ty.as_str(),
            ty.generator_name(),
            ty.aliases().join(", ")
        );
    }
}
