use clap::Parser;
use icaljson_app::cli::{Cli, Command};
use icaljson_app::{commands, logging};
use icaljson_core::build_info::BuildInfo;
use icaljson_core::config::load_config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = load_config()?;
    logging::init(&settings, cli.verbose);

    tracing::debug!(?settings, "Configuration loaded");

    match &cli.command {
        Command::Generate(args) => commands::generate::run(args, &settings),
        Command::Version => {
            commands::version::run(&BuildInfo::current());
            Ok(())
        }
        Command::Docs { dir } => commands::docs::run(dir),
    }
}
