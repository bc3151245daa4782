use anyhow::{Context, Result};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use gridsnake::term::TermManager;
use gridsnake::{GameConfig, Platform, SnakeGame};

fn main() -> Result<()> {
    init_tracing();

    let config = GameConfig::default();
    config.validate().context("invalid game configuration")?;

    let mut term = TermManager::new(&config);
    term.setup().context("failed to set up the terminal")?;

    let mut game = SnakeGame::new(config, term.key_tracking(), StdRng::from_entropy(), term.now_ms())
        .context("failed to start a new game")?;
    let result = game.run(&mut term);

    // Leave raw mode before printing anything
    term.restore().context("failed to restore the terminal")?;
    let summary = result.context("game loop failed")?;

    info!(length = summary.length, ticks = summary.ticks, "exiting");
    println!("Game over!");
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
