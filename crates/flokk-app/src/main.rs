//! Headless flokk runner.
//!
//! Reads keys from stdin, one per line (`click`, `left`, `-left`, `up`,
//! `-up`, `right`, `-right`, `space`, `quit`), and logs HUD lines and game
//! events through `tracing`. Set `RUST_LOG` to adjust verbosity and the
//! `FLOKK_*` variables to tune the session.

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use flokk_app::config::AppConfig;
use flokk_app::{game_loop, input};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(tracing::Level::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        seed = config.sim.seed,
        boids = config.sim.boid_count,
        aggressive_chance = config.sim.aggressive_spawn_chance,
        lives = config.sim.starting_lives,
        tick_rate = config.tick_rate,
        max_ticks = ?config.max_ticks,
        "starting flokk, type `click` to play"
    );

    let shutdown_on_eof = config.max_ticks.is_none();
    let (cmd_tx, loop_handle) = game_loop::spawn_game_loop(config)?;

    let input_tx = cmd_tx.clone();
    std::thread::Builder::new()
        .name("flokk-input".into())
        .spawn(move || {
            let stdin = std::io::stdin().lock();
            if let Err(e) = input::pump_lines(stdin, &input_tx, shutdown_on_eof) {
                tracing::warn!("input stopped: {e:#}");
            }
        })
        .context("failed to spawn input thread")?;

    let summary = loop_handle
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;

    tracing::info!(
        summary = %serde_json::to_string(&summary)?,
        "session finished"
    );
    Ok(())
}
