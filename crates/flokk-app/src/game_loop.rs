//! Game loop thread. Runs the simulation engine at a fixed rate.
//!
//! The engine is created inside this thread so it never crosses a thread
//! boundary. Commands arrive via an `mpsc` channel; every frame is drawn
//! into a headless canvas and engine events go to the observer.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use flokk_core::render::draw_frame;
use flokk_sim::SimulationEngine;

use crate::canvas::HeadlessCanvas;
use crate::config::AppConfig;
use crate::observer::{GameObserver, LoggingObserver};
use crate::state::{GameLoopCommand, RunSummary};

/// Duration of one frame at `tick_rate` Hz.
pub fn tick_duration(tick_rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(tick_rate.max(1)))
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and a handle yielding the run summary once
/// the loop stops.
pub fn spawn_game_loop(
    config: AppConfig,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<RunSummary>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("flokk-game-loop".into())
        .spawn(move || {
            let mut engine = SimulationEngine::new(config.sim.clone());
            let mut observer = LoggingObserver::new();
            let summary = run_game_loop(&mut engine, &cmd_rx, &config, &mut observer);
            observer.totals_into(summary)
        })
        .context("failed to spawn game loop thread")?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until a Shutdown command, channel disconnect, or
/// `max_ticks` frames.
pub fn run_game_loop<O: GameObserver>(
    engine: &mut SimulationEngine,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    config: &AppConfig,
    observer: &mut O,
) -> RunSummary {
    let frame_duration = tick_duration(config.tick_rate);
    let mut canvas = HeadlessCanvas::new();
    let mut next_tick_time = Instant::now();
    let mut frames: u64 = 0;

    let snapshot = loop {
        // 1. Drain all pending commands
        let mut stop = false;
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    stop = true;
                    break;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one frame
        let snapshot = engine.tick();
        frames += 1;

        // 3. Report events and draw
        for event in &snapshot.events {
            observer.on_event(event);
        }
        canvas.begin_frame();
        draw_frame(&snapshot, &mut canvas);

        if frames % config.hud_interval == 0 {
            let stats = canvas.stats();
            tracing::info!(
                phase = ?snapshot.phase,
                score = snapshot.hud.score,
                lives = snapshot.hud.lives,
                aggressive = snapshot.hud.aggressive_count,
                casualties = snapshot.hud.casualties,
                polygons = stats.polygons,
                circles = stats.circles,
                "hud"
            );
        }

        if stop || config.max_ticks.is_some_and(|max| frames >= max) {
            break snapshot;
        }

        // 4. Sleep until the next frame
        next_tick_time += frame_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > frame_duration * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    };

    tracing::debug!(frames, drawn = canvas.frames(), "game loop stopped");

    RunSummary {
        frames,
        sim_ticks: snapshot.time.tick,
        phase: snapshot.phase,
        hud: snapshot.hud,
        boids_destroyed: 0,
        aggressive_destroyed: 0,
        ship_hits: 0,
    }
}
