//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! Read-only: it never modifies the world.

use hecs::World;

use flokk_core::components::*;
use flokk_core::enums::GamePhase;
use flokk_core::events::GameEvent;
use flokk_core::state::*;
use flokk_core::types::SimTime;

use crate::entity_id;
use crate::scoreboard::ScoreState;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    score: &ScoreState,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        hud: score.hud(),
        ship: build_ship(world),
        boids: build_boids(world),
        missiles: build_missiles(world),
        events,
    }
}

fn build_ship(world: &World) -> ShipView {
    world
        .query::<(&Position, &Velocity, &Ship)>()
        .iter()
        .next()
        .map(|(_, (pos, vel, ship))| ShipView {
            position: pos.0,
            velocity: vel.0,
            angle: ship.angle,
            thrusting: ship.thrusting,
        })
        .unwrap_or_default()
}

fn build_boids(world: &World) -> Vec<BoidView> {
    let mut boids: Vec<BoidView> = world
        .query::<(&Position, &Velocity, &Boid)>()
        .iter()
        .map(|(entity, (pos, vel, boid))| BoidView {
            id: entity_id(entity),
            position: pos.0,
            velocity: vel.0,
            behavior: boid.behavior,
        })
        .collect();
    boids.sort_by_key(|b| b.id);
    boids
}

fn build_missiles(world: &World) -> Vec<MissileView> {
    let mut missiles: Vec<MissileView> = world
        .query::<(&Position, &Missile)>()
        .iter()
        .filter(|(_, (_, missile))| missile.alive)
        .map(|(entity, (pos, _))| MissileView {
            id: entity_id(entity),
            position: pos.0,
        })
        .collect();
    missiles.sort_by_key(|m| m.id);
    missiles
}
