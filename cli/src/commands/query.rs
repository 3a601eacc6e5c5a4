use crate::argparse::QueryArgs;
use mountain_query::{JsonFileSource, QueryEngine};
use mountains_cli::CliError;

pub fn handle_query_command(
    args: QueryArgs,
    engine: &QueryEngine<JsonFileSource>,
) -> anyhow::Result<()> {
    let query = args.query.join(" ");
    for line in engine.render(&query).map_err(CliError::SourceLost)? {
        println!("{}", line);
    }
    Ok(())
}
