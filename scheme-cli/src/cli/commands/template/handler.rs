//! Template workbook command

use anyhow::{Context, Result};
use colored::*;

use super::TemplateCommands;
use crate::template::write_template;

pub fn handle_template_command(args: TemplateCommands) -> Result<()> {
    write_template(&args.output)?;

    let absolute = std::path::absolute(&args.output)
        .with_context(|| format!("Failed to resolve path: {}", args.output.display()))?;
    let file_name = args
        .output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.output.display().to_string());

    println!("Created {}", absolute.display().to_string().green());
    println!("Add more rows with your scheme data, then run:");
    println!("  scheme-cli sql {} > seed_schemes.sql", file_name);
    Ok(())
}
