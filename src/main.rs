use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{handle_build, handle_config, handle_init, handle_variants};
use package_license_report::logging::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let project_dir = cli.project_dir.as_path();
    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Commands::Variants) => handle_variants(project_dir, config_path, cli.quiet),
        Some(Commands::Config { show, validate }) => {
            handle_config(project_dir, config_path, show, validate, cli.quiet)
        }
        Some(Commands::Init { force }) => handle_init(project_dir, config_path, force, cli.quiet),
        None => {
            // clap requires the variant whenever no subcommand is given
            let variant = cli.variant.unwrap_or_default();
            handle_build(project_dir, config_path, &variant, cli.output, cli.check, cli.quiet)
        }
    }
}
