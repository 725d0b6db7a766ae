//! Binary entry point: resolve configuration, start file logging, open the
//! SQLite store, load the sorted list, and drive the Ratatui event loop until
//! the user exits.
use anyhow::Context;
use fruit_list::logging::init_logging;
use fruit_list::{open_store, run_app, App, AppConfig, FruitList};

/// Startup failures (unwritable data directory, bad log level) bubble up to
/// the terminal as an error instead of a panic.
fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    let _logger = init_logging(&config.log_level, &config.log_dir)?;

    let conn = open_store(&config.db_path)
        .with_context(|| format!("failed to open store at {}", config.db_path.display()))?;
    let list = FruitList::open(conn).context("failed to load fruits")?;

    let mut app = App::new(list);
    run_app(&mut app)
}
