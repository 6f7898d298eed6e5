//! Runner configuration read from the environment.
use std::env;

use flokk_core::constants::TICK_RATE;
use flokk_sim::SimConfig;

const MAX_BOIDS: usize = 500;
const MAX_TICK_RATE: u32 = 1000;

/// Runner configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Session knobs handed to the engine on every (re)start.
    pub sim: SimConfig,
    /// Loop frequency in Hz.
    pub tick_rate: u32,
    /// Stop after this many loop iterations. `None` runs until `quit`.
    pub max_ticks: Option<u64>,
    /// Log the HUD every this many loop iterations.
    pub hud_interval: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            tick_rate: TICK_RATE,
            max_ticks: None,
            hud_interval: u64::from(TICK_RATE),
        }
    }
}

impl AppConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `FLOKK_SEED` - RNG seed (default: 42)
    /// - `FLOKK_BOIDS` - flock size, at most 500 (default: 25)
    /// - `FLOKK_AGGRESSIVE_CHANCE` - aggressive spawn probability in `[0, 1]` (default: 0.1)
    /// - `FLOKK_LIVES` - starting lives, at least 1 (default: 2)
    /// - `FLOKK_TICK_RATE` - loop frequency in Hz, 1 to 1000 (default: 60)
    /// - `FLOKK_MAX_TICKS` - stop after this many frames, 0 for no limit (default: 0)
    /// - `FLOKK_HUD_INTERVAL` - frames between HUD log lines (default: 60)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(seed) = parse::<u64>(&lookup, "FLOKK_SEED") {
            config.sim.seed = seed;
        }
        if let Some(boids) = parse::<usize>(&lookup, "FLOKK_BOIDS") {
            config.sim.boid_count = boids.min(MAX_BOIDS);
        }
        if let Some(chance) = parse::<f64>(&lookup, "FLOKK_AGGRESSIVE_CHANCE") {
            if chance.is_finite() {
                config.sim.aggressive_spawn_chance = chance.clamp(0.0, 1.0);
            }
        }
        if let Some(lives) = parse::<i32>(&lookup, "FLOKK_LIVES") {
            config.sim.starting_lives = lives.max(1);
        }
        if let Some(rate) = parse::<u32>(&lookup, "FLOKK_TICK_RATE") {
            config.tick_rate = rate.clamp(1, MAX_TICK_RATE);
        }
        if let Some(max) = parse::<u64>(&lookup, "FLOKK_MAX_TICKS") {
            config.max_ticks = (max > 0).then_some(max);
        }
        if let Some(interval) = parse::<u64>(&lookup, "FLOKK_HUD_INTERVAL") {
            config.hud_interval = interval.max(1);
        }

        config
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparsable setting");
            None
        }
    }
}
