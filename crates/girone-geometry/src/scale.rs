use girone_core::Half;

/// Linear map from a normalized value to a radius. The range direction is
/// parameterized by half: outward-increasing on top, outward-decreasing on
/// the bottom, so both halves' 0% origin meets at the same edge.
#[derive(Debug, Clone, Copy)]
pub struct RadialScale {
    range: (f64, f64),
}

impl RadialScale {
    pub fn new(half: Half, inner: f64, outer: f64) -> Self {
        let range = match half {
            Half::Top => (inner, outer),
            Half::Bottom => (outer, inner),
        };
        Self { range }
    }

    /// Map a value in [0, 1] to a radius. Out-of-domain input is clamped.
    pub fn radius(&self, value: f64) -> f64 {
        let t = value.clamp(0.0, 1.0);
        self.range.0 + (self.range.1 - self.range.0) * t
    }

    /// Radius of the scale's 0 end; radial lines are pinned here.
    pub fn origin(&self) -> f64 {
        self.range.0
    }
}

/// Square-root size scale for the per-region count circles. Clamped at both
/// ends of the domain.
#[derive(Debug, Clone, Copy)]
pub struct SizeScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl SizeScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn radius(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 <= d0 {
            return r0;
        }
        let t = ((value.sqrt() - d0.sqrt()) / (d1.sqrt() - d0.sqrt())).clamp(0.0, 1.0);
        r0 + (r1 - r0) * t
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }
}

/// Step function: `index(v)` counts how many thresholds `v` has reached.
#[derive(Debug, Clone)]
pub struct ThresholdScale {
    thresholds: Vec<f64>,
}

impl ThresholdScale {
    pub fn new(thresholds: Vec<f64>) -> Self {
        Self { thresholds }
    }

    pub fn index(&self, value: f64) -> usize {
        self.thresholds.iter().filter(|&&t| value >= t).count()
    }
}
