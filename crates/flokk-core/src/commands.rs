//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary, in order.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start (`on = true`) or stop rotating counter-clockwise.
    TurnLeft { on: bool },
    /// Start (`on = true`) or stop rotating clockwise.
    TurnRight { on: bool },
    /// Engage or release the main engine.
    Thrust { on: bool },
    /// Launch a missile from the turret, if under the missile cap.
    Fire,
    /// Advance the menu / restart after the game has ended.
    Click,
}
