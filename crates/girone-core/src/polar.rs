use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Polar coordinate in the chart's angle convention: radians measured
/// clockwise from 12 o'clock, so angle 0 points straight up and PI/2 points
/// right. Matches the arc generators the chart geometry is defined against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Polar {
    pub angle: f64,
    pub radius: f64,
}

impl Polar {
    pub fn new(angle: f64, radius: f64) -> Self {
        Self { angle, radius }
    }

    /// Cartesian position with y growing downward (screen coordinates).
    pub fn to_cartesian(self) -> (f64, f64) {
        let (s, c) = self.angle.sin_cos();
        (self.radius * s, -self.radius * c)
    }

    pub fn angle_degrees(self) -> f64 {
        self.angle * 180.0 / PI
    }
}

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}
