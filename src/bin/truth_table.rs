//! Command line front-end of the truth table engine.
//!
//! Set `RUST_LOG=debug` (or `trace` for every row) to see the intermediate pipeline results.

use algoviz_lib_logic::{
    build_truth_table_with, normalize, Notation, TruthTableConfig, TruthTableError,
    DEFAULT_MAX_VARIABLES,
};
use clap::Parser;
use std::process::ExitCode;

/// Prints the truth table of a propositional formula
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The formula, e.g. "p ∧ (q ∨ ¬r)" or "p AND (q OR NOT r)"
    formula: String,

    /// Notation of the formula
    #[arg(short, long, default_value_t, value_enum)]
    notation: NotationArg,

    /// Output format of the table
    #[arg(short, long, default_value_t, value_enum)]
    format: OutputFormat,

    /// Refuse formulas with more variables than this (at most 26)
    #[arg(short, long, default_value_t = DEFAULT_MAX_VARIABLES)]
    max_variables: u16,

    /// Only print the formula converted to the given notation
    #[arg(short, long, value_enum)]
    convert_to: Option<NotationArg>,
}

#[derive(Debug, Default, Clone, Copy, clap::ValueEnum)]
enum NotationArg {
    #[default]
    Symbolic,
    Word,
}

impl std::fmt::Display for NotationArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Symbolic => write!(f, "symbolic"),
            Self::Word => write!(f, "word"),
        }
    }
}

impl From<NotationArg> for Notation {
    fn from(value: NotationArg) -> Self {
        match value {
            NotationArg::Symbolic => Notation::Symbolic,
            NotationArg::Word => Notation::Word,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Grid,
    Tsv,
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Grid => write!(f, "grid"),
            Self::Tsv => write!(f, "tsv"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    log::debug!("{:?}", args);
    match run(&args) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}", error_message(&error));
            ExitCode::FAILURE
        }
    }
}

/// Produce everything the binary prints on success.
fn run(args: &Args) -> Result<String, TruthTableError> {
    if let Some(target) = args.convert_to {
        let converted = normalize(&args.formula, args.notation.into(), target.into());
        return Ok(format!("{}\n", converted));
    }

    let config = TruthTableConfig::new().with_max_variables(args.max_variables);
    let table = build_truth_table_with(&args.formula, args.notation.into(), &config)?;
    Ok(match args.format {
        OutputFormat::Grid => table.to_string(),
        OutputFormat::Tsv => table.to_tsv_string(),
        OutputFormat::Csv => table.to_csv_string(),
    })
}

fn error_message(error: &TruthTableError) -> String {
    format!("Error: {}", error)
}
