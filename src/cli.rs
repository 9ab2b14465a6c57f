use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::models::{FieldEdit, OutputFormat, TradeInput};

#[derive(Parser)]
#[command(name = "trading-plan", about = "Fill in a trade plan and print it as an outline note")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the rendered plan
    Render(InputArgs),
    /// Print the derived metrics as JSON
    Metrics(InputArgs),
    /// Edit the plan line by line (field=value), re-printing after each edit
    Edit(InputArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// JSON file with the plan fields; missing fields keep their defaults
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Field edit applied after loading, e.g. --set entry_price=10 (repeatable)
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    pub sets: Vec<String>,
    /// Plain labels instead of [[scheme:...]] links
    #[arg(long)]
    pub plain: bool,
}

/// Assemble the starting input: file (or the blank form), then `--set` edits in order.
pub fn build_input(args: &InputArgs, cfg: &Config) -> Result<TradeInput> {
    let base = TradeInput {
        output_format: cfg.output_format,
        ..TradeInput::default()
    };
    let mut input = match &args.input {
        Some(path) => TradeInput::load_over(path, &base)?,
        None => base,
    };

    for line in &args.sets {
        input.apply(FieldEdit::parse_assignment(line)?);
    }

    if args.plain {
        input.output_format = OutputFormat::PlainText;
    }
    Ok(input)
}
