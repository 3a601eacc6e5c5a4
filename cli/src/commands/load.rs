use crate::argparse::LoadArgs;
use anyhow::Context;
use log::info;
use mountain_query::{load_mountains, write_store};
use std::path::Path;

pub fn handle_load_command(args: LoadArgs, store: &Path) -> anyhow::Result<()> {
    let input = Path::new(&args.input);
    let mountains = load_mountains(input)
        .with_context(|| format!("Failed to load mountains from {}", input.display()))?;
    info!("Read {} mountains from {}", mountains.len(), input.display());
    write_store(store, &mountains)
        .with_context(|| format!("Failed to write mountain store {}", store.display()))?;
    println!(
        "Loaded {} mountains into {}",
        mountains.len(),
        store.display()
    );
    Ok(())
}
