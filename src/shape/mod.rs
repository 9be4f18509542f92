pub mod dashbar;

pub use dashbar::{Dash, DashBar};

use crate::color::Color;
use crate::signal::Signal;

/// Point in layout units, origin at the view center, y down
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Line cap style for stroked segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    Butt,
    #[default]
    Round,
}

/// Ellipse shape; width and height are the diameters
#[derive(Clone)]
pub struct Circle {
    pub x: Signal<f32>,
    pub y: Signal<f32>,
    pub width: Signal<f32>,
    pub height: Signal<f32>,
    pub fill: Signal<Color>,
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            x: Signal::value(0.0),
            y: Signal::value(0.0),
            width: Signal::value(0.0),
            height: Signal::value(0.0),
            fill: Signal::value(Color::WHITE),
        }
    }
}

/// Rectangle with optional rounded corners
#[derive(Clone)]
pub struct Rect {
    pub x: Signal<f32>,
    pub y: Signal<f32>,
    pub width: Signal<f32>,
    pub height: Signal<f32>,
    pub radius: Signal<f32>,
    pub fill: Signal<Color>,
}

impl Default for Rect {
    fn default() -> Self {
        Self {
            x: Signal::value(0.0),
            y: Signal::value(0.0),
            width: Signal::value(0.0),
            height: Signal::value(0.0),
            radius: Signal::value(0.0),
            fill: Signal::value(Color::WHITE),
        }
    }
}

/// Stroked line segment
#[derive(Debug, Clone, Copy)]
pub struct Line {
    pub from: Point,
    pub to: Point,
    pub stroke: Color,
    pub line_width: f32,
    pub cap: LineCap,
}

/// A node in the visual tree
#[derive(Clone)]
pub enum Shape {
    Circle(Circle),
    Rect(Rect),
    Line(Line),
    DashBar(DashBar),
}

/// Root of a scene's visual tree
#[derive(Default)]
pub struct View {
    shapes: Vec<Shape>,
}

impl View {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a shape to the scene graph
    pub fn add(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}
