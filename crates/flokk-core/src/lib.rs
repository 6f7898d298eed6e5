//! Core types and definitions for the flokk simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! vector math, components, commands, state snapshots, events, constants
//! and the render-sink contract. It has no dependency on the ECS or on
//! any windowing framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod render;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
