use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use compliance_engine::{ComplianceEngine, FactKind, StaticFactSource};

use crate::config::Config;
use crate::reporter::{OutputFormat, Reporter};

#[derive(Parser, Debug)]
#[command(name = "store-compliance")]
#[command(
    version,
    about = "Check that a retailer site publishes the same store facts as the brand site"
)]
pub struct Cli {
    /// Log the normalized values and decision path (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check every fact of a store fixture
    Check {
        /// TOML fixture with [store], [brand] and [retailer] sections
        #[arg(short, long)]
        config: PathBuf,

        /// Overrides [output].format from the fixture
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Compare two addresses
    Address(FactArgs),
    /// Compare two phone numbers
    Phone(FactArgs),
    /// Compare two opening hours texts (use \n between days)
    Hours(FactArgs),
}

#[derive(Args, Debug)]
pub struct FactArgs {
    /// Text published on the brand site
    #[arg(long)]
    pub brand: Option<String>,

    /// Text published on the retailer site
    #[arg(long)]
    pub retailer: Option<String>,

    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// Turn literal `\n` sequences typed on a command line into line breaks
fn unescape_newlines(text: &str) -> String {
    text.replace("\\n", "\n")
}

fn single_fact_sources(kind: FactKind, args: &FactArgs) -> (StaticFactSource, StaticFactSource) {
    let brand = StaticFactSource::new("brand")
        .with_optional_fact(kind, args.brand.as_deref().map(unescape_newlines));
    let retailer = StaticFactSource::new("retailer")
        .with_optional_fact(kind, args.retailer.as_deref().map(unescape_newlines));
    (brand, retailer)
}

/// Run a parsed command line. Returns whether every checked fact is compliant.
pub fn run(cli: Cli) -> Result<bool> {
    let engine = ComplianceEngine::new();

    let (report, format) = match cli.command {
        Command::Check { config, format } => {
            let config = Config::from_file(&config)?;
            tracing::info!(store = %config.store.name, "Loaded store fixture");
            let report = engine.check_store(
                &config.store.name,
                &config.brand_source(),
                &config.retailer_source(),
            );
            (report, format.unwrap_or(config.output.format))
        }
        Command::Address(args) => single_fact(&engine, FactKind::Address, args),
        Command::Phone(args) => single_fact(&engine, FactKind::PhoneNumber, args),
        Command::Hours(args) => single_fact(&engine, FactKind::OpeningHours, args),
    };

    Reporter::new(format).report(&report)?;
    Ok(report.is_fully_compliant())
}

fn single_fact(
    engine: &ComplianceEngine,
    kind: FactKind,
    args: FactArgs,
) -> (shared_types::StoreComplianceReport, OutputFormat) {
    let (brand, retailer) = single_fact_sources(kind, &args);
    let report = engine.check_facts(kind.label(), &brand, &retailer, &[kind]);
    (report, args.format)
}
