//! CLI tool for card validation and bank identification.
//!
//! # Usage
//!
//! ```bash
//! # Interactive session against ./banks.txt
//! cc-bankid
//!
//! # Use another table
//! cc-bankid --table /etc/cc-bankid/banks.txt
//!
//! # Check a single number
//! cc-bankid check 4111-1111-1111-1111 --output json
//! ```

use cc_bankid::bin::{RangeTable, TableLoader};
use cc_bankid::session::Session;
use cc_bankid::{check_card, CardReport, ValidationError};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "cc-bankid")]
#[command(author, version, about = "Card number validator with bank identification")]
struct Cli {
    /// Range table file (name,low,high per line)
    #[arg(short, long, env = "CC_BANKID_TABLE", default_value = "banks.txt")]
    table: PathBuf,

    /// Log filter, overrides RUST_LOG (e.g. "debug", "cc_bankid=trace")
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one card number and exit
    Check {
        /// Card number to validate (spaces and dashes allowed)
        card_number: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// How a run ended, mapped onto the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Success,
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::FAILURE,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let stdin = io::stdin();
    match run(&cli, stdin.lock(), io::stdout().lock()) {
        Ok(status) => status.into(),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Loads the table and dispatches to the interactive session or `check`.
fn run<R: BufRead, W: Write>(cli: &Cli, input: R, mut out: W) -> io::Result<Status> {
    if cli.command.is_none() {
        writeln!(out, "🚀 Welcome to the card validator!")?;
    }

    let table = match TableLoader::from_file(&cli.table) {
        Ok(table) => table,
        Err(e) => {
            tracing::error!(error = %e, "range table load failed");
            writeln!(out, "❌ Failed to load bank data: {}", e)?;
            return Ok(Status::Failure);
        }
    };

    match &cli.command {
        None => {
            writeln!(out, "✅ Banks loaded: {}", table.len())?;
            cmd_interactive(&table, input, out)
        }
        Some(Commands::Check {
            card_number,
            output,
        }) => cmd_check(card_number, &table, *output, out),
    }
}

fn cmd_interactive<R: BufRead, W: Write>(
    table: &RangeTable,
    input: R,
    output: W,
) -> io::Result<Status> {
    let summary = Session::new(table).run(input, output)?;
    tracing::info!(
        checked = summary.checked,
        valid = summary.valid,
        rejected = summary.rejected,
        "session ended"
    );
    Ok(Status::Success)
}

fn cmd_check<W: Write>(
    card_number: &str,
    table: &RangeTable,
    output: OutputFormat,
    mut out: W,
) -> io::Result<Status> {
    let result = check_card(card_number, table);

    match output {
        OutputFormat::Text => print_text(&result, &mut out)?,
        OutputFormat::Json => print_json(&result, &mut out)?,
    }

    Ok(if result.is_ok() {
        Status::Success
    } else {
        Status::Failure
    })
}

fn print_text<W: Write>(result: &Result<CardReport, ValidationError>, mut out: W) -> io::Result<()> {
    match result {
        Ok(report) => {
            writeln!(out, "Valid: yes")?;
            writeln!(out, "Masked: {}", report.masked)?;
            match &report.bank {
                Some(bank) => writeln!(out, "Bank: {}", bank),
                None => writeln!(out, "Bank: not determined"),
            }
        }
        Err(e) => {
            writeln!(out, "Valid: no")?;
            writeln!(out, "Error: {}", e)
        }
    }
}

fn print_json<W: Write>(result: &Result<CardReport, ValidationError>, mut out: W) -> io::Result<()> {
    let value = match result {
        Ok(report) => serde_json::json!({
            "valid": true,
            "report": report,
        }),
        Err(e) => {
            let kind = if e.is_checksum_error() { "checksum" } else { "format" };
            serde_json::json!({
                "valid": false,
                "error": e.to_string(),
                "kind": kind,
            })
        }
    };

    serde_json::to_writer_pretty(&mut out, &value)?;
    writeln!(out)
}
