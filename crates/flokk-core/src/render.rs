//! Render-sink contract.
//!
//! The core never touches a canvas. It describes each frame as filled
//! polygons and circles and hands them to whatever [`RenderSink`] the host
//! provides. Only the Playing phase draws entities; menu and end screens
//! are text-only and belong to the host.

use serde::{Deserialize, Serialize};

use crate::constants::{BOID_HEADING_OFFSET, TURRET_OFFSET};
use crate::enums::{Behavior, GamePhase};
use crate::state::{BoidView, GameStateSnapshot, MissileView, ShipView};
use crate::types::Vector2;

/// Boid triangle, relative to its position.
pub const BOID_SHAPE: [Vector2; 3] = [
    Vector2::new(0.0, -5.0),
    Vector2::new(-5.0, 0.0),
    Vector2::new(5.0, 0.0),
];

/// Ship diamond, relative to its position.
pub const SHIP_SHAPE: [Vector2; 4] = [
    Vector2::new(0.0, -10.0),
    Vector2::new(-10.0, 0.0),
    Vector2::new(0.0, 10.0),
    Vector2::new(10.0, 0.0),
];

const LINE_WIDTH: f64 = 1.0;
const HEADING_DOT_RADIUS: f64 = 1.0;
const TURRET_DOT_RADIUS: f64 = 2.0;
const MISSILE_DOT_RADIUS: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Red,
    Purple,
}

impl From<Behavior> for Color {
    fn from(behavior: Behavior) -> Self {
        match behavior {
            Behavior::Passive => Color::White,
            Behavior::Aggressive => Color::Red,
        }
    }
}

/// Drawing primitives supplied by the host.
pub trait RenderSink {
    /// Filled polygon through `points` in order.
    fn draw_polygon(&mut self, points: &[Vector2], line_width: f64, color: Color);

    /// Filled circle.
    fn draw_circle(&mut self, center: Vector2, radius: f64, line_width: f64, color: Color);
}

/// Draw every entity in `snapshot` into `sink`.
pub fn draw_frame<S: RenderSink + ?Sized>(snapshot: &GameStateSnapshot, sink: &mut S) {
    if snapshot.phase != GamePhase::Playing {
        return;
    }

    for boid in &snapshot.boids {
        draw_boid(boid, sink);
    }
    draw_ship(&snapshot.ship, sink);
    for missile in &snapshot.missiles {
        draw_missile(missile, sink);
    }
}

fn draw_boid<S: RenderSink + ?Sized>(boid: &BoidView, sink: &mut S) {
    let color = Color::from(boid.behavior);
    let points = BOID_SHAPE.map(|offset| boid.position + offset);
    sink.draw_polygon(&points, LINE_WIDTH, color);

    let heading = Vector2::from_angle(boid.velocity.angle());
    let dot = boid.position + heading * BOID_HEADING_OFFSET;
    sink.draw_circle(dot, HEADING_DOT_RADIUS, LINE_WIDTH, color);
}

fn draw_ship<S: RenderSink + ?Sized>(ship: &ShipView, sink: &mut S) {
    let points = SHIP_SHAPE.map(|offset| ship.position + offset);
    sink.draw_polygon(&points, LINE_WIDTH, Color::Purple);

    let turret = ship.position + Vector2::from_angle(ship.angle) * TURRET_OFFSET;
    sink.draw_circle(turret, TURRET_DOT_RADIUS, LINE_WIDTH, Color::Purple);
}

fn draw_missile<S: RenderSink + ?Sized>(missile: &MissileView, sink: &mut S) {
    sink.draw_circle(missile.position, MISSILE_DOT_RADIUS, LINE_WIDTH, Color::Purple);
}
