use girone_core::{DashPattern, FacilityRecord, Half, Polar, StrokeTone};
use girone_geometry::{
    staffing_arc_count, staffing_arcs, AnchorSquare, AnnularSector, RadialScale,
};

/// Divisor of the per-record angular slot used for the side offsets of the
/// top-30 indicator lines.
const OFFSET_DIVISOR: f64 = 3.5;

/// One radial indicator line. The near end sits on the scale's 0 origin,
/// the far end at the record's overcrowding value; the far end is always at
/// the record's exact angle, so offset lines converge on the same tip.
#[derive(Debug, Clone)]
pub struct RadialLine {
    pub near: Polar,
    pub far: Polar,
    pub tone: StrokeTone,
    pub dash: DashPattern,
    pub carries_anchor: bool,
}

/// The marker icon set carried by a record's anchor line: a rotated square
/// at the line's far endpoint plus 0-3 staffing-shortage arcs.
#[derive(Debug, Clone)]
pub struct AnchorGlyph {
    pub position: Polar,
    pub square: AnchorSquare,
    /// Rotation of the square, the anchor line's angle in degrees.
    pub rotation_degrees: f64,
    /// Rotation of the staffing arcs; the bottom half turns them around so
    /// they open toward the centre.
    pub arc_rotation_degrees: f64,
    pub staffing_arcs: Vec<AnnularSector>,
}

/// All drawable marks derived from one record.
#[derive(Debug, Clone)]
pub struct RecordMarks {
    pub record_id: String,
    pub lines: Vec<RadialLine>,
    pub glyph: AnchorGlyph,
}

/// Subdivide a sector's span into equal slots, one per record plus one of
/// leading spacing, and derive each record's lines and glyphs.
pub fn project_sector(
    half: Half,
    start_angle: f64,
    end_angle: f64,
    members: &[FacilityRecord],
    scale: &RadialScale,
) -> Vec<RecordMarks> {
    if members.is_empty() {
        return Vec::new();
    }
    let slot = (end_angle - start_angle) / (members.len() + 1) as f64;
    members
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let angle = start_angle + (i + 1) as f64 * slot;
            project_record(half, record, angle, slot, scale)
        })
        .collect()
}

/// Derive the 1-4 conditional lines for one record, in the fixed condition
/// order, then reverse them (a rendering/z-order contract: the last
/// condition draws first). The first line after reversal carries the glyph.
pub fn project_record(
    half: Half,
    record: &FacilityRecord,
    angle: f64,
    slot: f64,
    scale: &RadialScale,
) -> RecordMarks {
    let far = Polar::new(angle, scale.radius(record.overcrowding_percent / 100.0));
    let line = |near_angle: f64, tone: StrokeTone, dash: DashPattern| RadialLine {
        near: Polar::new(near_angle, scale.origin()),
        far,
        tone,
        dash,
        carries_anchor: false,
    };

    let mut lines = Vec::new();
    if record.suicides > 0 {
        lines.push(line(angle, StrokeTone::Alert, DashPattern::Long));
    }
    if record.top30_attempted_suicide {
        lines.push(line(
            angle - slot / OFFSET_DIVISOR,
            StrokeTone::Neutral,
            DashPattern::Long,
        ));
    }
    if record.top30_self_harm {
        lines.push(line(
            angle + slot / OFFSET_DIVISOR,
            StrokeTone::Neutral,
            DashPattern::Short,
        ));
    }
    if lines.is_empty() {
        lines.push(line(angle, StrokeTone::Neutral, DashPattern::None));
    }

    lines.reverse();
    lines[0].carries_anchor = true;

    let rotation = lines[0].near.angle_degrees();
    let arc_rotation = match half {
        Half::Top => rotation,
        Half::Bottom => rotation - 180.0,
    };

    RecordMarks {
        record_id: record.id.clone(),
        lines,
        glyph: AnchorGlyph {
            position: far,
            square: AnchorSquare::new(),
            rotation_degrees: rotation,
            arc_rotation_degrees: arc_rotation,
            staffing_arcs: staffing_arcs()
                .into_iter()
                .take(staffing_arc_count(record.police_staff_deficit))
                .collect(),
        },
    }
}
