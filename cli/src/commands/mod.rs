mod fields;
mod load;
mod query;
mod shell;

use crate::argparse::Commands;
pub use fields::handle_fields_command;
pub use load::handle_load_command;
use log::debug;
use mountain_query::{JsonFileSource, QueryEngine};
use mountains_cli::config::Config;
use mountains_cli::CliError;
pub use query::handle_query_command;
pub use shell::handle_shell_command;

pub fn handle_command(command: Commands, config: Config) -> anyhow::Result<()> {
    match command {
        Commands::Load(args) => handle_load_command(args, &config.store.path),
        Commands::Fields => handle_fields_command(),
        Commands::Query(args) => handle_query_command(args, &open_store(&config)?),
        Commands::Shell => handle_shell_command(&open_store(&config)?, &config.shell.prompt),
    }
}

fn open_store(config: &Config) -> anyhow::Result<QueryEngine<JsonFileSource>> {
    let path = &config.store.path;
    if !path.exists() {
        return Err(CliError::StoreNotFound(path.clone()).into());
    }
    debug!("Using mountain store {}", path.display());
    Ok(QueryEngine::new(JsonFileSource::new(path))?)
}
