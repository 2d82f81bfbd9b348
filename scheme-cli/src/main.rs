use clap::Parser;
use colored::*;

use scheme_cli::cli::commands::{sql::handle_sql_command, template::handle_template_command};
use scheme_cli::cli::{Cli, Commands};
use scheme_cli::config::Config;

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(error) = run(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), error);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Sql(args) => {
            let config = Config::load(cli.config.as_deref())?;
            handle_sql_command(args, config)
        }
        Commands::Template(args) => handle_template_command(args),
    }
}
