//! Headless canvas: a [`RenderSink`] that records what a frame would draw.

use flokk_core::render::{Color, RenderSink};
use flokk_core::types::Vector2;

/// Primitive counts for one frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    pub polygons: u32,
    pub circles: u32,
    pub red: u32,
    pub white: u32,
    pub purple: u32,
}

impl FrameStats {
    fn count_color(&mut self, color: Color) {
        match color {
            Color::White => self.white += 1,
            Color::Red => self.red += 1,
            Color::Purple => self.purple += 1,
        }
    }
}

#[derive(Debug, Default)]
pub struct HeadlessCanvas {
    current: FrameStats,
    frames: u64,
}

impl HeadlessCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the counters before drawing a new frame.
    pub fn begin_frame(&mut self) {
        self.current = FrameStats::default();
        self.frames += 1;
    }

    pub fn stats(&self) -> FrameStats {
        self.current
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderSink for HeadlessCanvas {
    fn draw_polygon(&mut self, _points: &[Vector2], _line_width: f64, color: Color) {
        self.current.polygons += 1;
        self.current.count_color(color);
    }

    fn draw_circle(&mut self, _center: Vector2, _radius: f64, _line_width: f64, color: Color) {
        self.current.circles += 1;
        self.current.count_color(color);
    }
}
