mod categorize;
mod form;
mod ledger;
mod models;
mod run;
mod store;
mod summary;
mod ui;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let data_dir = get_data_dir()?;
    let store = store::Store::open(&data_dir)
        .with_context(|| format!("Failed to open store in {}", data_dir.display()))?;
    let mut ledger = ledger::Ledger::open(store)?;

    match args.len() {
        1 => run::as_tui(&mut ledger),
        _ => run::as_cli(&args, &mut ledger),
    }
}

fn get_data_dir() -> Result<std::path::PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "kakeibo", "Kakeibo")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}
