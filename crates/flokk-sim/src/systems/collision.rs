//! Collision and scoring system.
//!
//! Detects ship-boid and missile-boid overlaps, updates the scoreboard,
//! emits events, and queues destroyed boids for despawn. Nothing is
//! removed from the world here; the cleanup sweep does that afterwards.

use hecs::{Entity, World};

use flokk_core::components::{Boid, Missile, Position, Radius, Ship};
use flokk_core::enums::Behavior;
use flokk_core::events::GameEvent;
use flokk_core::types::Vector2;

use crate::entity_id;
use crate::scoreboard::ScoreState;

/// Circles overlap strictly; tangent circles do not collide.
pub fn collides(a: Vector2, a_radius: f64, b: Vector2, b_radius: f64) -> bool {
    a.distance_to(&b) < a_radius + b_radius
}

struct BoidBody {
    entity: Entity,
    position: Vector2,
    radius: f64,
    behavior: Behavior,
}

/// Run both collision passes.
///
/// Passive boids are unaffected by the ship. Each missile destroys at most
/// one boid per tick, and a boid already rammed into the ship cannot also
/// be shot.
pub fn run(
    world: &mut World,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let ship = world
        .query::<(&Position, &Radius, &Ship)>()
        .iter()
        .next()
        .map(|(_, (pos, radius, _))| (pos.0, radius.0));

    let mut boids: Vec<BoidBody> = world
        .query::<(&Position, &Radius, &Boid)>()
        .iter()
        .map(|(entity, (pos, radius, boid))| BoidBody {
            entity,
            position: pos.0,
            radius: radius.0,
            behavior: boid.behavior,
        })
        .collect();

    // Ship vs aggressive boids
    if let Some((ship_pos, ship_radius)) = ship {
        boids.retain(|boid| {
            let rammed = boid.behavior.is_aggressive()
                && collides(boid.position, boid.radius, ship_pos, ship_radius);
            if rammed {
                score.record_ship_hit();
                despawn_buffer.push(boid.entity);
                events.push(GameEvent::ShipHit {
                    boid: entity_id(boid.entity),
                    lives: score.lives,
                });
                tracing::debug!(lives = score.lives, "ship hit by aggressive boid");
            }
            !rammed
        });
    }

    // Missiles vs boids
    for (missile_entity, (pos, radius, missile)) in
        world.query_mut::<(&Position, &Radius, &mut Missile)>()
    {
        if !missile.alive {
            continue;
        }
        let Some(index) = boids
            .iter()
            .position(|boid| collides(pos.0, radius.0, boid.position, boid.radius))
        else {
            continue;
        };

        let boid = boids.remove(index);
        missile.alive = false;
        score.record_kill(boid.behavior);
        despawn_buffer.push(boid.entity);
        events.push(GameEvent::BoidDestroyed {
            boid: entity_id(boid.entity),
            missile: entity_id(missile_entity),
            behavior: boid.behavior,
            score: score.score,
        });
        tracing::debug!(behavior = ?boid.behavior, score = score.score, "boid destroyed");
    }
}
