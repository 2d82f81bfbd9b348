//! Command-line interface

pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::{SqlCommands, TemplateCommands};

#[derive(Debug, Parser)]
#[command(name = "scheme-cli", version, about = "Convert funding scheme spreadsheets into SQL")]
pub struct Cli {
    /// Config file (defaults to <config dir>/scheme-cli/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate insert statements from a scheme workbook
    Sql(SqlCommands),
    /// Write a template workbook with the expected columns
    Template(TemplateCommands),
}
