//! Terminal Game of Life runner (default binary).
//!
//! Seeds a random grid from the default config and redraws it every frame
//! until the process is interrupted. Takes no arguments.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tui_life::core::{initialize_grid, Simulation};
use tui_life::engine::{Driver, ThreadClock};
use tui_life::term::TerminalDisplay;
use tui_life::types::LifeConfig;

fn main() -> Result<()> {
    init_logging();

    let config = LifeConfig::default();
    let grid = initialize_grid(&config, &mut rand::thread_rng());
    let mut sim = Simulation::new(grid);

    let mut driver = Driver::new(config, TerminalDisplay::new(), ThreadClock);
    driver.run_forever(&mut sim)?;
    Ok(())
}

/// Log to stderr so frames on stdout stay clean. Quiet unless `RUST_LOG` says otherwise.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
