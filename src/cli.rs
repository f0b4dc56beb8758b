//! CLI argument parsing.
//!
//! Subcommands only collect inputs; the work happens in `workflow`.
use crate::usage::OutputMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "stepdoc",
    version,
    about = "Help text normalizer and random string generator",
    after_help = "Examples:\n  stepdoc help rand\n  stepdoc help rand --format markdown --parent step\n  stepdoc help --input raw-help.txt --format html --out help.html\n  stepdoc rand --format hex 16\n  stepdoc rand --dictionary words.txt",
    subcommand_required = true,
    arg_required_else_help = true,
    disable_help_subcommand = true
)]
pub struct RootArgs {
    /// Config file (defaults to the user config directory if present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    Help(HelpArgs),
    Rand(RandArgs),
}

/// Help rendering inputs.
#[derive(Parser, Debug)]
#[command(about = "Normalize command help into Markdown, HTML or terminal text")]
pub struct HelpArgs {
    /// Built-in command to document (reads raw help from --input or stdin otherwise)
    #[arg(value_name = "COMMAND", conflicts_with = "input")]
    pub command: Option<String>,

    /// File containing raw help text
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputMode::Terminal)]
    pub format: OutputMode,

    /// Page title for front matter
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Parent page for front matter; pages without one are marked private
    #[arg(long, value_name = "TEXT")]
    pub parent: Option<String>,

    /// Write output to a file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

/// Random string inputs. Values are validated by `random::RandRequest`.
#[derive(Parser, Debug)]
#[command(about = "Generate random strings")]
pub struct RandArgs {
    /// Length in characters or words (maximum roll for dice)
    #[arg(value_name = "LENGTH", allow_hyphen_values = true)]
    pub length: Option<String>,

    /// Output format: ascii, alphanumeric, alphabet, hex, dec, lower, upper, emoji, raw, dice, uuid
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Word list, one word per line
    #[arg(long, visible_alias = "dict", value_name = "FILE")]
    pub dictionary: Option<PathBuf>,
}
