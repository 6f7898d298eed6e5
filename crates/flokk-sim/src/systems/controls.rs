//! Ship controls: helm input and the missile launcher.

use hecs::{Entity, World};

use flokk_core::components::{Missile, Position, Ship, Velocity};
use flokk_core::constants::*;
use flokk_core::types::Vector2;

use crate::world_setup;

/// Set the ship's rotation: -1 counter-clockwise, 0 stop, 1 clockwise.
pub fn turn(world: &mut World, direction: i8) {
    for (_entity, ship) in world.query_mut::<&mut Ship>() {
        ship.angular_velocity = ROTATION_RATE * f64::from(direction.signum());
    }
}

pub fn set_thrust(world: &mut World, on: bool) {
    for (_entity, ship) in world.query_mut::<&mut Ship>() {
        ship.thrusting = on;
    }
}

/// Turret tip: `TURRET_OFFSET` units ahead of the ship along its heading.
pub fn firing_position(position: Vector2, ship: &Ship) -> Vector2 {
    position + Vector2::from_angle(ship.angle) * TURRET_OFFSET
}

/// Muzzle velocity: the ship's own velocity plus `MISSILE_SPEED` along
/// its heading.
pub fn firing_velocity(velocity: Vector2, ship: &Ship) -> Vector2 {
    velocity + Vector2::from_angle(ship.angle) * MISSILE_SPEED
}

/// Number of missiles still in flight.
pub fn live_missiles(world: &World) -> usize {
    world
        .query::<&Missile>()
        .iter()
        .filter(|(_, missile)| missile.alive)
        .count()
}

/// Launch a missile from the turret. Returns `None` without touching the
/// world when `MAX_MISSILES` are already in flight.
pub fn fire(world: &mut World) -> Option<Entity> {
    if live_missiles(world) >= MAX_MISSILES {
        tracing::trace!("missile cap reached, fire ignored");
        return None;
    }

    let (position, velocity) = world
        .query::<(&Position, &Velocity, &Ship)>()
        .iter()
        .next()
        .map(|(_, (pos, vel, ship))| (firing_position(pos.0, ship), firing_velocity(vel.0, ship)))?;

    Some(world_setup::spawn_missile(world, position, velocity))
}
