//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs the Playing-phase systems, drives the Menu → Playing →
//! Victory/GameOver state machine, and produces `GameStateSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use flokk_core::commands::PlayerCommand;
use flokk_core::constants::{AGGRESSIVE_SPAWN_CHANCE, BOID_NUMBER, STARTING_LIVES};
use flokk_core::enums::GamePhase;
use flokk_core::events::GameEvent;
use flokk_core::state::{GameStateSnapshot, HudView};
use flokk_core::types::SimTime;
use flokk_steering::Neighbor;

use crate::scoreboard::ScoreState;
use crate::systems;
use crate::world_setup;

/// Configuration for a simulation session. Applies to every restart.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Boids spawned per (re)start.
    pub boid_count: usize,
    /// Probability in `[0, 1]` that a spawned boid is aggressive.
    pub aggressive_spawn_chance: f64,
    pub starting_lives: i32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            boid_count: BOID_NUMBER,
            aggressive_spawn_chance: AGGRESSIVE_SPAWN_CHANCE,
            starting_lives: STARTING_LIVES,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    config: SimConfig,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    score: ScoreState,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    neighbor_buffer: Vec<(Entity, Neighbor)>,
    steering_scratch: Vec<Neighbor>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new engine sitting at the menu with a freshly spawned world.
    pub fn new(config: SimConfig) -> Self {
        let mut engine = Self {
            world: World::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            score: ScoreState::new(config.starting_lives, 0),
            config,
            time: SimTime::default(),
            phase: GamePhase::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            neighbor_buffer: Vec::new(),
            steering_scratch: Vec::new(),
            events: Vec::new(),
        };
        engine.reset_world();
        engine
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame and return the resulting snapshot.
    ///
    /// Only the Playing phase moves entities; other phases just drain input.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Playing {
            self.run_systems();
            self.time.advance();
            self.evaluate_outcome();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, &self.score, events)
    }

    /// Rebuild the whole session (new ship, new flock, no missiles, fresh
    /// counters) and go straight to Playing.
    pub fn restart(&mut self) {
        self.reset_world();
        self.phase = GamePhase::Playing;
        tracing::info!(aggressive = self.score.aggressive_count, "game restarted");
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the HUD counters.
    pub fn hud(&self) -> HudView {
        self.score.hud()
    }

    /// Get a read-only reference to the score state.
    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Get the session configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Remove every boid (for tests that build their own flock).
    #[cfg(test)]
    pub fn clear_flock(&mut self) {
        let boids: Vec<Entity> = self
            .world
            .query::<&flokk_core::components::Boid>()
            .iter()
            .map(|(entity, _)| entity)
            .collect();
        for entity in boids {
            let _ = self.world.despawn(entity);
        }
        self.score.aggressive_count = 0;
    }

    /// Spawn a boid at an exact spot, keeping the aggressive count in step.
    #[cfg(test)]
    pub fn spawn_test_boid(
        &mut self,
        position: flokk_core::types::Vector2,
        velocity: flokk_core::types::Vector2,
        behavior: flokk_core::enums::Behavior,
    ) -> Entity {
        if behavior.is_aggressive() {
            self.score.aggressive_count += 1;
        }
        world_setup::spawn_boid(&mut self.world, position, velocity, behavior)
    }

    /// Spawn a missile at an exact spot.
    #[cfg(test)]
    pub fn spawn_test_missile(
        &mut self,
        position: flokk_core::types::Vector2,
        velocity: flokk_core::types::Vector2,
    ) -> Entity {
        world_setup::spawn_missile(&mut self.world, position, velocity)
    }

    fn reset_world(&mut self) {
        self.world.clear();
        self.despawn_buffer.clear();
        self.events.clear();
        self.time = SimTime::default();

        let aggressive = world_setup::setup_game(
            &mut self.world,
            &mut self.rng,
            self.config.boid_count,
            self.config.aggressive_spawn_chance,
        );
        self.score = ScoreState::new(self.config.starting_lives, aggressive);
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Ship input only acts while Playing.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Click => match self.phase {
                GamePhase::Menu => {
                    self.phase = GamePhase::Playing;
                    tracing::info!(aggressive = self.score.aggressive_count, "game started");
                }
                GamePhase::Victory | GamePhase::GameOver => self.restart(),
                GamePhase::Playing => {}
            },
            _ if self.phase != GamePhase::Playing => {
                tracing::trace!(?command, phase = ?self.phase, "input ignored outside play");
            }
            PlayerCommand::TurnLeft { on } => {
                systems::controls::turn(&mut self.world, if on { -1 } else { 0 });
            }
            PlayerCommand::TurnRight { on } => {
                systems::controls::turn(&mut self.world, if on { 1 } else { 0 });
            }
            PlayerCommand::Thrust { on } => systems::controls::set_thrust(&mut self.world, on),
            PlayerCommand::Fire => {
                systems::controls::fire(&mut self.world);
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Steering from a value snapshot of ship + flock
        systems::flocking::run(
            &mut self.world,
            &mut self.neighbor_buffer,
            &mut self.steering_scratch,
        );
        // 2. Integration (boids, ship, live missiles)
        systems::movement::run(&mut self.world);
        // 3. Drop missiles that left the playfield
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 4. Collisions and scoring
        systems::collision::run(
            &mut self.world,
            &mut self.score,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 5. Sweep destroyed boids and spent missiles
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    /// Victory takes precedence when the last aggressive boid dies on the
    /// same tick as the last life.
    fn evaluate_outcome(&mut self) {
        if self.score.aggressive_count == 0 {
            self.phase = GamePhase::Victory;
            self.events.push(GameEvent::GameWon {
                score: self.score.score,
                casualties: self.score.casualties,
            });
            tracing::info!(
                score = self.score.score,
                casualties = self.score.casualties,
                "victory"
            );
        } else if self.score.lives <= 0 {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameLost {
                score: self.score.score,
            });
            tracing::info!(score = self.score.score, "game over");
        }
    }
}
