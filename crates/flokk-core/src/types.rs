//! Fundamental geometric and simulation types.

use std::ops::{Add, AddAssign, Mul, Sub};

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::VectorError;

/// Immutable 2D vector in playfield space (x = right, y = down).
///
/// Every operation returns a new value. Normalising the zero vector yields
/// the zero vector, so magnitude helpers are total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector2(DVec2);

impl Vector2 {
    pub const ZERO: Self = Self(DVec2::ZERO);

    pub const fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    /// Unit vector pointing along `theta` radians: `(cos θ, sin θ)`.
    pub fn from_angle(theta: f64) -> Self {
        Self::new(theta.cos(), theta.sin())
    }

    /// Uniform random vector with each component drawn from `[lo, hi]`.
    /// Reversed bounds are swapped.
    pub fn random_in_2d<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> Self {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        Self::new(rng.gen_range(lo..=hi), rng.gen_range(lo..=hi))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Scale by a scalar.
    pub fn scale(self, scalar: f64) -> Self {
        Self(self.0 * scalar)
    }

    /// Divide by a scalar, rejecting a zero divisor instead of producing
    /// infinities.
    pub fn divide(self, scalar: f64) -> Result<Self, VectorError> {
        if scalar == 0.0 {
            return Err(VectorError::DivisionByZero);
        }
        Ok(Self(self.0 / scalar))
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        self.0.length()
    }

    pub fn distance_to(&self, other: &Vector2) -> f64 {
        self.0.distance(other.0)
    }

    /// Unit vector in the same direction, or zero for the zero vector.
    pub fn normalized(self) -> Self {
        Self(self.0.normalize_or_zero())
    }

    /// Same direction, given length. The zero vector stays zero.
    pub fn with_magnitude(self, magnitude: f64) -> Self {
        self.normalized().scale(magnitude)
    }

    /// Returns `self` when its length is within `max_magnitude`, otherwise
    /// the same direction rescaled to `max_magnitude`.
    pub fn limited(self, max_magnitude: f64) -> Self {
        if self.norm() <= max_magnitude {
            self
        } else {
            self.with_magnitude(max_magnitude)
        }
    }

    /// Heading angle in radians, measured like [`Vector2::from_angle`].
    pub fn angle(&self) -> f64 {
        self.0.y.atan2(self.0.x)
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        self.scale(scalar)
    }
}

/// Stable identifier for a simulated entity, derived from its ECS handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u64);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of Playing ticks since the last (re)start.
    pub tick: u64,
}

impl SimTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
    }
}
