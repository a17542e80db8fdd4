use girone_core::{polar::deg_to_rad, ChartConfig, Half, Polar, RingTone, SectorTone};
use girone_geometry::{
    flip_for_readability, Annulus, ArcPath, RadialScale, RadialTick, SizeScale,
};

use crate::aggregate::RegionSlice;
use crate::lines::{self, RecordMarks};

/// Half-width of the thin ring the boundary and scale-start ticks cross.
const TICK_HALF_WIDTH: f64 = 2.5;
/// Radial inset of the count circles, measured inward from the tick ring.
const COUNT_CIRCLE_INSET: f64 = 25.0;
/// Text-path start offsets: flipped labels start at the path's midpoint,
/// unflipped ones a quarter in.
const LABEL_OFFSET_FLIPPED: f64 = 0.5;
const LABEL_OFFSET_UPRIGHT: f64 = 0.25;
/// Number of percentage-scale reference rings (0.0, 0.1, ..., 1.0).
const SCALE_RING_COUNT: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn for_half(half: Half) -> Self {
        match half {
            Half::Top => SortDirection::Ascending,
            Half::Bottom => SortDirection::Descending,
        }
    }
}

/// One region's angular slice of a half-circle, weighted by record count.
#[derive(Debug, Clone)]
pub struct PieSector {
    pub start_angle: f64,
    pub end_angle: f64,
    pub slice: RegionSlice,
}

impl PieSector {
    pub fn angular_span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.angular_span() / 2.0
    }
}

/// Partition a half's angular boundary into record-count-weighted sectors.
/// Slices are ordered by `order_key` in the given direction; empty slices
/// carry no weight and are dropped rather than dividing by zero.
pub fn weighted_pie(
    mut slices: Vec<RegionSlice>,
    boundary_degrees: (f64, f64),
    direction: SortDirection,
) -> Vec<PieSector> {
    match direction {
        SortDirection::Ascending => slices.sort_by_key(|s| s.order_key),
        SortDirection::Descending => slices.sort_by_key(|s| std::cmp::Reverse(s.order_key)),
    }
    slices.retain(|s| s.record_count() > 0);

    let total: usize = slices.iter().map(|s| s.record_count()).sum();
    if total == 0 {
        return Vec::new();
    }

    let start = deg_to_rad(boundary_degrees.0);
    let end = deg_to_rad(boundary_degrees.1);
    let span = end - start;

    let mut cursor = start;
    slices
        .into_iter()
        .map(|slice| {
            let width = span * slice.record_count() as f64 / total as f64;
            let sector = PieSector {
                start_angle: cursor,
                end_angle: cursor + width,
                slice,
            };
            cursor = sector.end_angle;
            sector
        })
        .collect()
}

/// Label arc: a thin text-following path, already flip-corrected.
#[derive(Debug, Clone)]
pub struct LabelArc {
    pub path: ArcPath,
    pub flipped: bool,
    pub text: String,
    /// Fractional start offset for text placed along the path.
    pub start_offset: f64,
}

/// Per-region summary circle, placed inside the scale at the sector's
/// mid-angle.
#[derive(Debug, Clone)]
pub struct CountCircle {
    pub center: Polar,
    pub radius: f64,
    /// Sum of the slice's suicides; absent when zero so nothing renders.
    pub label: Option<u32>,
    pub fill: SectorTone,
}

/// One percentage-scale reference ring.
#[derive(Debug, Clone)]
pub struct ScaleRing {
    /// Fractional scale value, 0.0..=1.0 in steps of 0.1.
    pub value: f64,
    pub arc: ArcPath,
    pub tone: RingTone,
}

/// Complete drawable geometry for one sector.
#[derive(Debug, Clone)]
pub struct SectorGeometry {
    pub start_angle: f64,
    pub end_angle: f64,
    pub tone: SectorTone,
    pub label_tone: SectorTone,
    pub background: Annulus,
    pub label: LabelArc,
    pub boundary_tick: RadialTick,
    pub count_circle: CountCircle,
    pub records: Vec<RecordMarks>,
}

/// Everything needed to draw one half-circle.
#[derive(Debug, Clone)]
pub struct HalfChart {
    pub half: Half,
    pub translate: (f64, f64),
    pub sectors: Vec<SectorGeometry>,
    pub rings: Vec<ScaleRing>,
    pub start_tick: RadialTick,
}

/// Build the full geometry of one half from its ordered slices.
pub fn build_half(
    half: Half,
    slices: Vec<RegionSlice>,
    cfg: &ChartConfig,
    size_scale: &SizeScale,
) -> HalfChart {
    let boundary = cfg.half_degrees(half);
    let sectors = weighted_pie(slices, boundary, SortDirection::for_half(half));

    let radius = cfg.circle_radius();
    let arc_width = cfg.arc_width;
    let scale = RadialScale::new(half, cfg.scale_inner(), cfg.scale_outer());
    let tick_radius = cfg.scale_inner();
    let count_radius = tick_radius - COUNT_CIRCLE_INSET;

    let (min_start, max_end) = match (sectors.first(), sectors.last()) {
        (Some(first), Some(last)) => (first.start_angle, last.end_angle),
        _ => (deg_to_rad(boundary.0), deg_to_rad(boundary.1)),
    };

    let geometry = sectors
        .into_iter()
        .map(|sector| {
            let tone = SectorTone::from_order(sector.slice.order_key);
            let (label_path, flipped) = flip_for_readability(ArcPath::new(
                radius - arc_width / 2.0,
                sector.start_angle,
                sector.end_angle,
            ));
            let records = lines::project_sector(
                half,
                sector.start_angle,
                sector.end_angle,
                &sector.slice.members,
                &scale,
            );
            let suicide_total = sector.slice.suicide_total();
            SectorGeometry {
                start_angle: sector.start_angle,
                end_angle: sector.end_angle,
                tone,
                label_tone: tone.inverted(),
                background: Annulus {
                    inner_radius: radius - arc_width,
                    outer_radius: radius,
                    start_angle: sector.start_angle,
                    end_angle: sector.end_angle,
                },
                label: LabelArc {
                    path: label_path,
                    flipped,
                    text: sector.slice.label.to_uppercase(),
                    start_offset: if flipped {
                        LABEL_OFFSET_FLIPPED
                    } else {
                        LABEL_OFFSET_UPRIGHT
                    },
                },
                boundary_tick: RadialTick::new(sector.start_angle, tick_radius, TICK_HALF_WIDTH),
                count_circle: CountCircle {
                    center: Polar::new(sector.mid_angle(), count_radius),
                    radius: size_scale.radius(sector.slice.record_count() as f64),
                    label: (suicide_total > 0).then_some(suicide_total),
                    fill: tone,
                },
                records,
            }
        })
        .collect();

    HalfChart {
        half,
        translate: cfg.translate(half),
        sectors: geometry,
        rings: scale_rings(half, &scale, min_start, max_end),
        start_tick: RadialTick::new(min_start, tick_radius, TICK_HALF_WIDTH),
    }
}

/// The 11 concentric reference rings spanning the half's angular extent.
fn scale_rings(half: Half, scale: &RadialScale, start_angle: f64, end_angle: f64) -> Vec<ScaleRing> {
    (0..SCALE_RING_COUNT)
        .map(|i| {
            let value = i as f64 / 10.0;
            ScaleRing {
                value,
                arc: ArcPath::new(scale.radius(value), start_angle, end_angle),
                tone: ring_tone(half, i),
            }
        })
        .collect()
}

/// Endpoints and the midpoint get distinguished colors; which end goes
/// transparent depends on the half, so the two scales visually join.
fn ring_tone(half: Half, step: usize) -> RingTone {
    let far_end = match half {
        Half::Top => 10,
        Half::Bottom => 0,
    };
    if step == far_end {
        RingTone::Transparent
    } else if step == 5 || step == 10 - far_end {
        RingTone::Highlight
    } else {
        RingTone::Default
    }
}
