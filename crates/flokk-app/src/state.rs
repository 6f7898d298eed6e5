//! Messages and results shared between the input thread, the game loop
//! thread and `main`.

use serde::Serialize;

use flokk_core::commands::PlayerCommand;
use flokk_core::enums::GamePhase;
use flokk_core::state::HudView;

/// Commands sent to the game loop thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// What the game loop reports when it stops.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Loop iterations executed, including ones spent in the menu.
    pub frames: u64,
    /// Simulation ticks of the current game.
    pub sim_ticks: u64,
    pub phase: GamePhase,
    pub hud: HudView,
    pub boids_destroyed: u32,
    pub aggressive_destroyed: u32,
    pub ship_hits: u32,
}
