mod handler;

use std::path::PathBuf;

use clap::Args;

pub use handler::handle_sql_command;

#[derive(Debug, Args)]
pub struct SqlCommands {
    /// Workbook with one scheme per row (.xlsx, .xls, .ods)
    pub input: PathBuf,

    /// Write the script to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Target table, e.g. public.schemes
    #[arg(long)]
    pub table: Option<String>,

    /// Worksheet to read (defaults to the first one)
    #[arg(long)]
    pub sheet: Option<String>,
}
