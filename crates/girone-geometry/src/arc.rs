use std::f64::consts::PI;

use girone_core::Polar;
use serde::{Deserialize, Serialize};

/// Traversal direction of an arc path, in screen coordinates. Angles grow
/// clockwise from 12 o'clock, so a path drawn from a smaller to a larger
/// angle sweeps clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sweep {
    Clockwise,
    CounterClockwise,
}

impl Sweep {
    pub fn flag(self) -> u8 {
        match self {
            Sweep::Clockwise => 1,
            Sweep::CounterClockwise => 0,
        }
    }

    fn inverted(self) -> Self {
        match self {
            Sweep::Clockwise => Sweep::CounterClockwise,
            Sweep::CounterClockwise => Sweep::Clockwise,
        }
    }
}

/// A single circular arc, kept structured until serialization: two polar
/// endpoints on the same radius plus the direction the curve is traced in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcPath {
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub sweep: Sweep,
}

impl ArcPath {
    /// Arc from `start_angle` to `end_angle` traced in angle order.
    pub fn new(radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            radius,
            start_angle,
            end_angle,
            sweep: Sweep::Clockwise,
        }
    }

    pub fn start_point(&self) -> Polar {
        Polar::new(self.start_angle, self.radius)
    }

    pub fn end_point(&self) -> Polar {
        Polar::new(self.end_angle, self.radius)
    }

    pub fn angular_span(&self) -> f64 {
        (self.end_angle - self.start_angle).abs()
    }

    /// The same curve traced in the opposite direction: endpoints swapped,
    /// sweep inverted.
    pub fn reversed(&self) -> Self {
        Self {
            radius: self.radius,
            start_angle: self.end_angle,
            end_angle: self.start_angle,
            sweep: self.sweep.inverted(),
        }
    }
}

/// Reverse a label arc whose text would otherwise render upside down. Arcs
/// starting in the lower hemisphere (start angle within [PI/2, 3PI/2]) are
/// traced backwards so text follows them left to right. Returns the path
/// and whether it was flipped.
pub fn flip_for_readability(arc: ArcPath) -> (ArcPath, bool) {
    if arc.start_angle >= PI / 2.0 && arc.start_angle <= PI * 1.5 {
        (arc.reversed(), true)
    } else {
        (arc, false)
    }
}

/// Ring segment between two concentric radii.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Annulus {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Annulus with decorative padding and rounded corners, used for the
/// staffing-shortage glyph arcs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnularSector {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub pad_angle: f64,
    pub corner_radius: f64,
}

/// Zero-span radial marker crossing a thin ring, used for region boundary
/// ticks and the scale-start tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialTick {
    pub angle: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

impl RadialTick {
    pub fn new(angle: f64, centre_radius: f64, half_width: f64) -> Self {
        Self {
            angle,
            inner_radius: centre_radius - half_width,
            outer_radius: centre_radius + half_width,
        }
    }
}
