use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::arc::AnnularSector;
use crate::scale::ThresholdScale;

/// Half-extent of the anchor square; the full square is 4x4 centred on the
/// line's far endpoint so rotation needs no pivot bookkeeping.
pub const SQUARE_HALF_EXTENT: f64 = 2.0;

/// Fraction of a full turn the three staffing arcs cover together.
const STAFFING_SPAN: f64 = 0.7;
const STAFFING_ARCS: usize = 3;

/// Small rotated square marking a record's anchor line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorSquare {
    pub half_extent: f64,
}

impl AnchorSquare {
    pub fn new() -> Self {
        Self {
            half_extent: SQUARE_HALF_EXTENT,
        }
    }

    /// Corner coordinates relative to the anchor point, in drawing order.
    pub fn corners(&self) -> [(f64, f64); 4] {
        let r = self.half_extent;
        [(-r, -r), (r, -r), (r, r), (-r, r)]
    }
}

impl Default for AnchorSquare {
    fn default() -> Self {
        Self::new()
    }
}

/// The three decorative staffing-shortage arcs: roughly semicircular padded
/// annulus segments arranged symmetrically around 12 o'clock, just outside
/// the anchor square.
pub fn staffing_arcs() -> Vec<AnnularSector> {
    let slice = PI * (STAFFING_SPAN * 2.0) / STAFFING_ARCS as f64;
    let start = -PI * STAFFING_SPAN;
    (0..STAFFING_ARCS)
        .map(|i| {
            let offset = i as f64 * slice;
            AnnularSector {
                inner_radius: SQUARE_HALF_EXTENT * 2.0,
                outer_radius: SQUARE_HALF_EXTENT * 2.0 + 1.0,
                start_angle: start + offset,
                end_angle: start + offset + slice,
                pad_angle: 0.2,
                corner_radius: 0.5,
            }
        })
        .collect()
}

/// How many staffing arcs a staffing deficit earns: none below 1, one up to
/// 15, two up to 30, all three from 31.
pub fn staffing_arc_count(deficit: i32) -> usize {
    ThresholdScale::new(vec![1.0, 16.0, 31.0]).index(deficit as f64)
}
