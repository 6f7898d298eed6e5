//! Event observers for the runner.

use flokk_core::enums::Behavior;
use flokk_core::events::GameEvent;

use crate::state::RunSummary;

/// Receives every event the engine reports, in order.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

/// Logs events and keeps running totals.
#[derive(Debug, Default)]
pub struct LoggingObserver {
    pub boids_destroyed: u32,
    pub aggressive_destroyed: u32,
    pub ship_hits: u32,
}

impl LoggingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the running totals into a loop summary.
    pub fn totals_into(&self, summary: RunSummary) -> RunSummary {
        RunSummary {
            boids_destroyed: self.boids_destroyed,
            aggressive_destroyed: self.aggressive_destroyed,
            ship_hits: self.ship_hits,
            ..summary
        }
    }
}

impl GameObserver for LoggingObserver {
    fn on_event(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::BoidDestroyed {
                boid,
                behavior,
                score,
                ..
            } => {
                self.boids_destroyed += 1;
                if behavior == Behavior::Aggressive {
                    self.aggressive_destroyed += 1;
                }
                tracing::info!(boid = boid.0, ?behavior, score, "boid destroyed");
            }
            GameEvent::ShipHit { boid, lives } => {
                self.ship_hits += 1;
                tracing::info!(boid = boid.0, lives, "ship hit");
            }
            GameEvent::GameWon { score, casualties } => {
                tracing::info!(score, casualties, "all aggressive boids gone, click to play again");
            }
            GameEvent::GameLost { score } => {
                tracing::info!(score, "out of lives, click to play again");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flokk_core::enums::GamePhase;
    use flokk_core::state::HudView;
    use flokk_core::types::EntityId;

    #[test]
    fn test_logging_observer_totals() {
        let mut observer = LoggingObserver::new();
        let events = [
            GameEvent::BoidDestroyed {
                boid: EntityId(1),
                missile: EntityId(9),
                behavior: Behavior::Passive,
                score: 0.0,
            },
            GameEvent::BoidDestroyed {
                boid: EntityId(2),
                missile: EntityId(10),
                behavior: Behavior::Aggressive,
                score: 1.0,
            },
            GameEvent::ShipHit {
                boid: EntityId(3),
                lives: 1,
            },
            GameEvent::GameWon {
                score: 1.5,
                casualties: 1,
            },
        ];
        for event in &events {
            observer.on_event(event);
        }

        assert_eq!(observer.boids_destroyed, 2);
        assert_eq!(observer.aggressive_destroyed, 1);
        assert_eq!(observer.ship_hits, 1);

        let summary = observer.totals_into(RunSummary {
            frames: 4,
            sim_ticks: 3,
            phase: GamePhase::Victory,
            hud: HudView::default(),
            boids_destroyed: 0,
            aggressive_destroyed: 0,
            ship_hits: 0,
        });
        assert_eq!(summary.frames, 4);
        assert_eq!(summary.boids_destroyed, 2);
        assert_eq!(summary.aggressive_destroyed, 1);
        assert_eq!(summary.ship_hits, 1);
    }
}
