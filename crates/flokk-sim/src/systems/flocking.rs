//! Flocking system: computes every boid's steering force for this tick.
//!
//! The neighbour set (ship plus all boids) is captured as values before
//! any boid's acceleration is written, so the order in which boids are
//! visited cannot affect the result.

use hecs::{Entity, World};

use flokk_core::components::{Acceleration, Boid, Position, Ship, Velocity};
use flokk_steering::{compute_steering, Agent, Neighbor, NeighborKind};

/// Write `Acceleration` for every boid from its behaviour and neighbours.
///
/// `neighbors` and `scratch` are reusable buffers to avoid per-tick
/// allocation; their contents on entry are ignored.
pub fn run(
    world: &mut World,
    neighbors: &mut Vec<(Entity, Neighbor)>,
    scratch: &mut Vec<Neighbor>,
) {
    neighbors.clear();

    for (entity, (pos, vel, _ship)) in world.query_mut::<(&Position, &Velocity, &Ship)>() {
        neighbors.push((
            entity,
            Neighbor {
                kind: NeighborKind::Ship,
                position: pos.0,
                velocity: vel.0,
            },
        ));
    }

    for (entity, (pos, vel, _boid)) in world.query_mut::<(&Position, &Velocity, &Boid)>() {
        neighbors.push((
            entity,
            Neighbor {
                kind: NeighborKind::Boid,
                position: pos.0,
                velocity: vel.0,
            },
        ));
    }

    for (entity, (pos, vel, boid, accel)) in
        world.query_mut::<(&Position, &Velocity, &Boid, &mut Acceleration)>()
    {
        scratch.clear();
        scratch.extend(
            neighbors
                .iter()
                .filter(|(other, _)| *other != entity)
                .map(|(_, neighbor)| *neighbor),
        );

        let agent = Agent {
            position: pos.0,
            velocity: vel.0,
        };
        accel.0 = compute_steering(boid.behavior, &agent, scratch.as_slice());
    }
}
