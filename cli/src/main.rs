//! Benefit eligibility engine command-line front end.
//!
//! Evaluates subjects against benefit schemas and prints the batch result as
//! JSON on stdout.
//!
//! Usage:
//!   eligibility check --subject applicant.json --schema schemes.json
//!   eligibility check-users --subjects applicants.json --schema scholarship.json
//!   eligibility --locale hi --strict check-users --subjects a.json --schema s.json

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use eligibility_cli::{
    build_engine, collect_schemas, config::CliConfig, read_json, subject_from_value,
    subjects_from_value,
};
use eligibility_contracts::{
    error::{EligibilityError, EligibilityResult},
    options::Locale,
};

// ── CLI definition ────────────────────────────────────────────────────────────

/// Check subjects against benefit eligibility schemas.
#[derive(Parser)]
#[command(
    name = "eligibility",
    about = "Benefit eligibility engine",
    long_about = "Evaluates user profiles against benefit schema criteria and reports\n\
                  eligible, ineligible, and errored entries as JSON."
)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Language for reasons and error messages (en, hi).
    #[arg(long, global = true)]
    locale: Option<Locale>,

    /// Report fields present with a null value as missing.
    #[arg(long, global = true)]
    strict: bool,

    /// Treat null values as present, even if the config file enables strict checking.
    #[arg(long, global = true, conflicts_with = "strict")]
    no_strict: bool,

    /// Print single-line JSON instead of pretty output.
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// One subject against one or more schemas.
    Check {
        /// JSON file holding the subject object.
        #[arg(long)]
        subject: PathBuf,
        /// Schema document files; a file may hold an array of documents.
        #[arg(long = "schema", required = true)]
        schemas: Vec<PathBuf>,
    },
    /// Many subjects against one schema.
    CheckUsers {
        /// JSON file holding an array of subject objects.
        #[arg(long)]
        subjects: PathBuf,
        /// Schema document file.
        #[arg(long)]
        schema: PathBuf,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!(kind = e.kind(), "eligibility run failed");
        eprintln!("eligibility error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> EligibilityResult<()> {
    let config = match &cli.config {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    let strict = match (cli.strict, cli.no_strict) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };
    let options = config.resolve_options(cli.locale, strict);
    debug!(locale = %options.locale, strict = options.strict_checking, parallel = config.parallel, "options resolved");

    let engine = build_engine(&config)?;

    match cli.command {
        Command::Check { subject, schemas } => {
            let subject = subject_from_value(read_json(&subject)?)?;
            let documents = schemas
                .iter()
                .map(|path| read_json(path))
                .collect::<EligibilityResult<Vec<_>>>()?;
            let result = engine.check_eligibility(&subject, &collect_schemas(documents), &options);
            emit(&result, cli.compact)
        }
        Command::CheckUsers { subjects, schema } => {
            let subjects = subjects_from_value(read_json(&subjects)?)?;
            let schema = read_json(&schema)?;
            let result = engine.check_users_eligibility(&subjects, &schema, &options)?;
            emit(&result, cli.compact)
        }
    }
}

fn emit<T: Serialize>(result: &T, compact: bool) -> EligibilityResult<()> {
    let rendered = if compact {
        serde_json::to_string(result)
    } else {
        serde_json::to_string_pretty(result)
    }
    .map_err(|e| EligibilityError::InvalidInput {
        reason: format!("failed to serialize result: {e}"),
    })?;
    println!("{rendered}");
    Ok(())
}
