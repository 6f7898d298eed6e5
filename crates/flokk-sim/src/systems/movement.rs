//! Kinematic integration system.
//!
//! Boids and the ship wrap around the playfield edges; missiles do not,
//! and are marked dead as soon as they leave it.

use hecs::World;

use flokk_core::components::*;
use flokk_core::constants::*;
use flokk_core::types::Vector2;

/// Run one integration step for every boid, the ship, and live missiles.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel, accel, _boid)) in
        world.query_mut::<(&mut Position, &mut Velocity, &mut Acceleration, &Boid)>()
    {
        step_boid(pos, vel, accel);
    }

    for (_entity, (pos, vel, ship)) in world.query_mut::<(&mut Position, &mut Velocity, &mut Ship)>()
    {
        step_ship(pos, vel, ship);
    }

    for (_entity, (pos, vel, missile)) in
        world.query_mut::<(&mut Position, &Velocity, &mut Missile)>()
    {
        if missile.alive {
            step_missile(pos, vel, missile);
        }
    }
}

/// Apply the tick's steering, cap speed, move, wrap, and clear the
/// acceleration for the next tick.
pub fn step_boid(pos: &mut Position, vel: &mut Velocity, accel: &mut Acceleration) {
    vel.0 = (vel.0 + accel.0).limited(BOID_MAX_SPEED);
    pos.0 = wrap_position(pos.0 + vel.0);
    accel.0 = Vector2::ZERO;
}

/// Drift, friction, thrust, rotation, wrap.
pub fn step_ship(pos: &mut Position, vel: &mut Velocity, ship: &mut Ship) {
    pos.0 = pos.0 + vel.0;
    vel.0 = vel.0 * (1.0 - FRICTION);
    if ship.thrusting && vel.0.norm() < MAX_SHIP_SPEED {
        vel.0 += Vector2::from_angle(ship.angle);
    }
    ship.angle += ship.angular_velocity;
    pos.0 = wrap_position(pos.0);
}

/// Straight-line flight; leaving the playfield kills the missile.
pub fn step_missile(pos: &mut Position, vel: &Velocity, missile: &mut Missile) {
    pos.0 = pos.0 + vel.0;
    if !in_bounds(pos.0) {
        missile.alive = false;
    }
}

/// Re-enter at the opposite edge on any axis that left `[0, WIDTH] x [0, HEIGHT]`.
pub fn wrap_position(p: Vector2) -> Vector2 {
    let x = if p.x() > WIDTH {
        0.0
    } else if p.x() < 0.0 {
        WIDTH
    } else {
        p.x()
    };
    let y = if p.y() > HEIGHT {
        0.0
    } else if p.y() < 0.0 {
        HEIGHT
    } else {
        p.y()
    };
    Vector2::new(x, y)
}

pub fn in_bounds(p: Vector2) -> bool {
    (0.0..=WIDTH).contains(&p.x()) && (0.0..=HEIGHT).contains(&p.y())
}
