//! Spreadsheet to SQL command

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use colored::*;

use super::SqlCommands;
use crate::config::Config;
use crate::import::{NoValidRows, SkippedRow, convert_workbook, render_script};

/// Convert the workbook and print (or write) the SQL script
pub fn handle_sql_command(args: SqlCommands, mut config: Config) -> Result<()> {
    if let Some(table) = args.table {
        config.table = table;
    }
    if let Some(sheet) = args.sheet {
        config.sheet = Some(sheet);
    }
    config.validate()?;

    log::info!(
        "Converting {} into inserts for {}",
        args.input.display(),
        config.table
    );

    let report = match convert_workbook(&args.input, config.sheet.as_deref(), &config.table) {
        Ok(report) => report,
        Err(error) => {
            if let Some(no_rows) = error.downcast_ref::<NoValidRows>() {
                print_skipped(&no_rows.skipped);
            }
            return Err(error);
        }
    };
    print_skipped(&report.skipped);
    log::debug!(
        "Sheet converted: {} statements, {} skipped, {} blank rows",
        report.statements.len(),
        report.skipped.len(),
        report.blank_rows
    );

    let source_name = args
        .input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.input.display().to_string());
    let script = render_script(&report, &source_name, &config.run_hint);

    match args.output {
        Some(path) => {
            fs::write(&path, &script)
                .with_context(|| format!("Failed to write output to: {}", path.display()))?;
            eprintln!("Wrote {}", path.display().to_string().cyan());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(script.as_bytes())
                .context("Failed to write to stdout")?;
            stdout.flush().context("Failed to write to stdout")?;
        }
    }

    eprintln!(
        "{} statements, {} rows skipped",
        report.statements.len().to_string().green(),
        if report.skipped.is_empty() {
            "0".normal()
        } else {
            report.skipped.len().to_string().yellow()
        }
    );

    Ok(())
}

fn print_skipped(skipped: &[SkippedRow]) {
    for row in skipped {
        eprintln!("{}", row.to_string().yellow());
    }
}
