use crate::utils::prompt_line;
use log::info;
use mountain_query::{help_text, JsonFileSource, QueryEngine, ShellCommand};
use mountains_cli::CliError;

pub fn handle_shell_command(
    engine: &QueryEngine<JsonFileSource>,
    prompt: &str,
) -> anyhow::Result<()> {
    info!(
        "Querying mountains from {}",
        engine.source().path().display()
    );
    println!("Type 'help' to see available commands, 'quit' to exit.");
    while let Some(line) = prompt_line(prompt) {
        match ShellCommand::parse(&line) {
            ShellCommand::Empty => continue,
            ShellCommand::Quit => break,
            ShellCommand::Help => println!("{}", help_text(engine.catalog())),
            ShellCommand::Query(query) => {
                for output in engine.render(&query).map_err(CliError::SourceLost)? {
                    println!("{}", output);
                }
            }
        }
    }
    Ok(())
}
