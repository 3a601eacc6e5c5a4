use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mq",
    about = "Query the mountains collection",
    version = "0.1.0",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Config file, defaults to ~/.config/mountains/config.toml when present
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Mountain store file, overrides the config file
    #[arg(long, global = true)]
    pub data: Option<String>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Pick which subcommand to use
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive query prompt
    Shell,
    /// Run a single query and print the result
    Query(QueryArgs),
    /// Recreate the mountain store from a local JSON file
    Load(LoadArgs),
    /// List the queryable fields
    Fields,
}

#[derive(Args)]
pub struct QueryArgs {
    /// Query text, e.g. "Elevation > 8000"
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,
}

#[derive(Args)]
pub struct LoadArgs {
    /// JSON file with an array of mountain records
    pub input: String,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
