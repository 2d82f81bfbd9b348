//! Funding scheme spreadsheet import: template generation and SQL output

pub mod cli;
pub mod config;
pub mod import;
pub mod template;
