use serde::{Deserialize, Serialize};

use crate::model::Half;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// Canvas layout for one chart pass. Every derived radius comes off these
/// numbers; nothing downstream hardcodes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    pub height: f64,
    /// width = height / aspect.
    pub aspect: f64,
    /// circle_radius = radius_ratio * width.
    pub radius_ratio: f64,
    pub arc_width: f64,
    pub margins: Margins,
    /// Angular boundary of the top half, degrees clockwise from 12 o'clock.
    pub top_degrees: (f64, f64),
    /// Bottom half boundary; the end wraps past a full turn.
    pub bottom_degrees: (f64, f64),
    /// Hand-tuned correction that lines the two percentage scales up at the
    /// seam. Subtracted from the scale span.
    pub alignment_trim: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            height: 1000.0,
            aspect: 1.4,
            radius_ratio: 0.378,
            arc_width: 10.0,
            margins: Margins {
                left: 10.0,
                right: 10.0,
                top: 15.0,
                bottom: 20.0,
            },
            top_degrees: (7.0, 200.0),
            bottom_degrees: (194.0, 380.0),
            alignment_trim: 7.2,
        }
    }
}

impl ChartConfig {
    pub fn width(&self) -> f64 {
        self.height / self.aspect
    }

    pub fn circle_radius(&self) -> f64 {
        self.radius_ratio * self.width()
    }

    /// Radial extent of the shared percentage scale. Both circles must meet
    /// at the canvas centre, so the span is whatever is left between them.
    pub fn scale_span(&self) -> f64 {
        let d = self.circle_radius() * 2.0;
        let top_edge = self.margins.top + d - self.arc_width;
        let bottom_edge = self.height - self.margins.bottom - d + self.arc_width;
        top_edge - bottom_edge - self.arc_width * 2.0 - self.alignment_trim
    }

    /// Outermost radius of the percentage scale (just inside the region arcs).
    pub fn scale_outer(&self) -> f64 {
        self.circle_radius() - self.arc_width
    }

    /// Innermost radius of the percentage scale.
    pub fn scale_inner(&self) -> f64 {
        self.scale_outer() - self.scale_span()
    }

    pub fn half_degrees(&self, half: Half) -> (f64, f64) {
        match half {
            Half::Top => self.top_degrees,
            Half::Bottom => self.bottom_degrees,
        }
    }

    /// Canvas translation of a half-circle's centre.
    pub fn translate(&self, half: Half) -> (f64, f64) {
        let r = self.circle_radius();
        match half {
            Half::Top => (self.width() - self.margins.right - r, self.margins.top + r),
            Half::Bottom => (self.margins.left + r, self.height - self.margins.bottom - r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn derived_radii_match_reference_layout() {
        let cfg = ChartConfig::default();
        assert_relative_eq!(cfg.width(), 1000.0 / 1.4, epsilon = 1e-9);
        assert_relative_eq!(cfg.circle_radius(), 270.0, epsilon = 1e-9);
        assert_relative_eq!(cfg.scale_span(), 67.8, epsilon = 1e-9);
        assert_relative_eq!(cfg.scale_outer(), 260.0, epsilon = 1e-9);
        assert_relative_eq!(cfg.scale_inner(), 192.2, epsilon = 1e-9);
    }

    #[test]
    fn halves_translate_to_opposite_corners() {
        let cfg = ChartConfig::default();
        let (tx, ty) = cfg.translate(Half::Top);
        let (bx, by) = cfg.translate(Half::Bottom);
        assert!(tx > bx);
        assert!(ty < by);
    }
}
