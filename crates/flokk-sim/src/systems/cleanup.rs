//! Cleanup system: the sweep phase that actually removes entities.

use hecs::{Entity, World};

use flokk_core::components::Missile;

/// Despawn everything queued in `despawn_buffer` plus every missile that
/// is no longer alive. Leaves the buffer empty.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for (entity, missile) in world.query_mut::<&Missile>() {
        if !missile.alive {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
