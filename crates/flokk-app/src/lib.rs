//! Headless flokk runner.
//!
//! Wires the simulation engine to a fixed-rate game loop thread, a
//! line-based keyboard controller, an event observer, and a primitive
//! counting canvas standing in for a real renderer.

pub mod canvas;
pub mod config;
pub mod game_loop;
pub mod input;
pub mod observer;
pub mod state;

pub use flokk_core as core;
