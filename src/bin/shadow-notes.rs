//! Shadow Notes CLI Binary

use clap::Parser;
use owo_colors::OwoColorize;
use shadow_notes::config::ConfigLoader;
use shadow_notes::logging::init_logging;
use shadow_notes::tooling::cli::{Cli, CliContext};
use std::io::IsTerminal;
use std::process;

fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} Failed to load configuration: {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    };

    let logging = config.logging.clone().with_overrides(
        cli.log_level.clone(),
        cli.log_format.clone(),
        cli.log_output.clone(),
        cli.log_file.clone(),
    );
    if let Err(e) = init_logging(&logging) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }

    let context = match CliContext::from_config(config, cli.data_dir.clone()) {
        Ok(ctx) => ctx
            .with_credentials(cli.user.clone(), cli.password.clone())
            .with_interactive(std::io::stdin().is_terminal()),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}
