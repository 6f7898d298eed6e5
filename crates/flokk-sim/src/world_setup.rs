//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the ship, the flock, and missiles with the appropriate
//! component bundles.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use flokk_core::components::*;
use flokk_core::constants::*;
use flokk_core::enums::Behavior;
use flokk_core::types::Vector2;

/// Populate an empty world with a ship and a freshly rolled flock.
/// Returns the number of aggressive boids spawned.
pub fn setup_game(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    boid_count: usize,
    aggressive_chance: f64,
) -> u32 {
    spawn_ship(world);

    let aggressive_chance = spawn_chance(aggressive_chance);
    let mut aggressive = 0;
    for _ in 0..boid_count {
        let (_, behavior) = spawn_random_boid(world, rng, aggressive_chance);
        if behavior.is_aggressive() {
            aggressive += 1;
        }
    }
    aggressive
}

/// Spawn the player's ship at rest in the middle of the playfield,
/// pointing up.
pub fn spawn_ship(world: &mut World) -> Entity {
    world.spawn((
        Ship {
            angle: SHIP_START_ANGLE,
            angular_velocity: 0.0,
            thrusting: false,
        },
        Position(Vector2::new(WIDTH / 2.0, HEIGHT / 2.0)),
        Velocity::default(),
        Radius(SHIP_RADIUS),
    ))
}

/// Spawn a boid anywhere on the playfield with a random velocity.
/// Each boid is independently aggressive with probability `aggressive_chance`.
pub fn spawn_random_boid(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    aggressive_chance: f64,
) -> (Entity, Behavior) {
    let position = Vector2::new(rng.gen_range(0.0..=WIDTH), rng.gen_range(0.0..=HEIGHT));
    let velocity = Vector2::random_in_2d(rng, -BOID_SPAWN_SPEED, BOID_SPAWN_SPEED);
    let behavior = if rng.gen_bool(spawn_chance(aggressive_chance)) {
        Behavior::Aggressive
    } else {
        Behavior::Passive
    };

    (spawn_boid(world, position, velocity, behavior), behavior)
}

/// A usable probability: clamped to `[0, 1]`, with non-finite values
/// replaced by `AGGRESSIVE_SPAWN_CHANCE`.
pub fn spawn_chance(raw: f64) -> f64 {
    if raw.is_finite() {
        raw.clamp(0.0, 1.0)
    } else {
        tracing::warn!(
            chance = raw,
            fallback = AGGRESSIVE_SPAWN_CHANCE,
            "non-finite aggressive spawn chance"
        );
        AGGRESSIVE_SPAWN_CHANCE
    }
}

/// Spawn a boid with explicit kinematics.
pub fn spawn_boid(
    world: &mut World,
    position: Vector2,
    velocity: Vector2,
    behavior: Behavior,
) -> Entity {
    world.spawn((
        Boid { behavior },
        Position(position),
        Velocity(velocity),
        Acceleration::default(),
        Radius(BOID_RADIUS),
    ))
}

/// Spawn a live missile.
pub fn spawn_missile(world: &mut World, position: Vector2, velocity: Vector2) -> Entity {
    world.spawn((
        Missile { alive: true },
        Position(position),
        Velocity(velocity),
        Radius(MISSILE_RADIUS),
    ))
}
