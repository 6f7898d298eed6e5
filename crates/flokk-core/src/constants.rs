//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz). One tick is one rendered frame.
pub const TICK_RATE: u32 = 60;

// --- Playfield ---

/// Playfield width in logical units.
pub const WIDTH: f64 = 840.0;

/// Playfield height in logical units.
pub const HEIGHT: f64 = 460.0;

// --- Collision radii ---

pub const BOID_RADIUS: f64 = 5.0;

pub const SHIP_RADIUS: f64 = 10.0;

pub const MISSILE_RADIUS: f64 = 3.0;

// --- Flocking ---

/// Alignment perception radius.
pub const BOID_PERCEPTION: f64 = 65.0;

/// Cohesion perception radius.
pub const BOID_COHESION_PERCEPTION: f64 = 10.0;

/// Separation perception radius. Aggressive boids use half of it.
pub const BOID_SEPARATION_PERCEPTION: f64 = 40.0;

/// Maximum magnitude of a single steering contribution.
pub const BOID_MAX_FORCE: f64 = 0.8;

/// Boid speed cap (units per tick).
pub const BOID_MAX_SPEED: f64 = 1.0;

/// Multiplier on the extra repulsion passive boids feel from the ship.
pub const SHIP_PRESENCE_FACTOR: f64 = 5.0;

/// Aggressive boids chase the ship at this multiple of `BOID_MAX_SPEED`.
pub const AGGRESSIVE_SPEED_FACTOR: f64 = 2.0;

/// Aggressive attack force is clamped to this multiple of `BOID_MAX_FORCE`.
pub const AGGRESSIVE_FORCE_FACTOR: f64 = 1.5;

// --- Spawning ---

/// Boids spawned per (re)start.
pub const BOID_NUMBER: usize = 25;

/// Probability that a freshly spawned boid is aggressive.
pub const AGGRESSIVE_SPAWN_CHANCE: f64 = 0.1;

/// Spawn velocity is uniform in `[-BOID_SPAWN_SPEED, BOID_SPAWN_SPEED]` per axis.
pub const BOID_SPAWN_SPEED: f64 = 4.0;

// --- Ship ---

/// Fraction of ship velocity lost every tick.
pub const FRICTION: f64 = 0.04;

/// Angular velocity (radians per tick) while a turn key is held.
pub const ROTATION_RATE: f64 = 0.1;

/// Thrust is only applied while the ship is slower than this.
pub const MAX_SHIP_SPEED: f64 = 6.0;

/// Initial ship heading: straight up the screen.
pub const SHIP_START_ANGLE: f64 = -std::f64::consts::FRAC_PI_2;

/// Distance from the ship centre to the turret tip.
pub const TURRET_OFFSET: f64 = 15.0;

// --- Missiles ---

/// Missile speed relative to the ship (units per tick).
pub const MISSILE_SPEED: f64 = 5.0;

/// Maximum simultaneously live missiles.
pub const MAX_MISSILES: usize = 3;

// --- Scoring ---

pub const STARTING_LIVES: i32 = 2;

/// Score for an aggressive boid that rams the ship.
pub const SHIP_HIT_SCORE: f64 = 0.5;

/// Score for shooting down an aggressive boid.
pub const AGGRESSIVE_KILL_SCORE: f64 = 1.0;

// --- Display ---

/// Distance of a boid's heading dot from its centre.
pub const BOID_HEADING_OFFSET: f64 = 8.0;
