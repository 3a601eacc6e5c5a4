/// Reads one line from the terminal. Returns `None` when input is closed or interrupted.
pub fn prompt_line(prompt_message: &str) -> Option<String> {
    match dialoguer::Input::<String>::new()
        .with_prompt(prompt_message)
        .allow_empty(true)
        .show_default(false)
        .interact_text()
    {
        Ok(line) => Some(line),
        Err(err) => {
            log::debug!("Prompt closed: {}", err);
            None
        }
    }
}
