//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components or is passed in.

pub mod cleanup;
pub mod collision;
pub mod controls;
pub mod flocking;
pub mod movement;
pub mod snapshot;
