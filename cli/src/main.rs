mod argparse;
mod commands;
mod utils;

use argparse::parse_args;
use mountains_cli::config::Config;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let cli = parse_args();
    utils::init_logger(cli.verbose);

    let config = Config::resolve(cli.config.as_deref().map(Path::new))?
        .with_store_override(cli.data.as_deref());

    commands::handle_command(cli.command, config)
}
