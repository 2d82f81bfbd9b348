mod handler;

use std::path::PathBuf;

use clap::Args;

pub use handler::handle_template_command;

use crate::template::DEFAULT_TEMPLATE_PATH;

#[derive(Debug, Args)]
pub struct TemplateCommands {
    /// Where to write the workbook
    #[arg(default_value = DEFAULT_TEMPLATE_PATH)]
    pub output: PathBuf,
}
