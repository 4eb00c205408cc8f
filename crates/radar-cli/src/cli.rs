//! CLI argument definitions for the registry schema tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "radar-registry",
    version,
    about = "Rare-disease registry schema tool",
    long_about = "Inspect the registry's schema catalog, render it to \
                  PostgreSQL DDL, and verify that every declared table and \
                  enum type is actually emitted.\n\n\
                  Verification runs entirely offline: DDL is rendered as \
                  text, never sent to a database."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the full schema catalog to PostgreSQL DDL on stdout.
    Ddl,

    /// List the registered tables.
    Tables(TablesArgs),

    /// Verify rendered DDL against declared table names and enum types.
    Verify(VerifyArgs),
}

#[derive(Parser)]
pub struct TablesArgs {
    /// Emit machine-readable JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct VerifyArgs {
    /// Model source files to extract declared table names from. Without
    /// any, expected names come from the catalog itself.
    #[arg(value_name = "SOURCE")]
    pub sources: Vec<PathBuf>,

    /// Emit the verification report as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
