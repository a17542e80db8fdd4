use girone_core::{DashPattern, StrokeTone};
use girone_geometry::{staffing_arcs, AnchorSquare, AnnularSector, SizeScale};

use crate::wrap::{wrap_text, TextMeasure, WrappedText};

/// Reference circle of the size scale, stacked on a shared baseline.
#[derive(Debug, Clone)]
pub struct LegendCircle {
    pub value: f64,
    pub radius: f64,
    /// Vertical centre; circles share a bottom tangent.
    pub cy: f64,
    pub label_y: f64,
    pub label: String,
}

/// Wrapped annotation next to the reference circles, optionally with a
/// leader line.
#[derive(Debug, Clone)]
pub struct LegendAnnotation {
    /// Leader line endpoints (x0, x1) when present.
    pub leader: Option<(f64, f64)>,
    /// Vertical offset from the circle origin; rows hang below the largest
    /// circle's top so they sit beside the stack, not on it.
    pub y: f64,
    pub text_x: f64,
    pub dy: f64,
    pub font_size: f64,
    pub text: WrappedText,
}

/// Sample indicator line with its wrapped caption.
#[derive(Debug, Clone)]
pub struct LegendLine {
    pub tone: StrokeTone,
    pub dash: DashPattern,
    pub x: f64,
    pub length: f64,
    pub caption: WrappedText,
}

/// Bracket + labels explaining one staffing-shortage step.
#[derive(Debug, Clone)]
pub struct StaffingBracket {
    pub points: Vec<(f64, f64)>,
    pub x: f64,
    pub title: String,
    pub label: String,
}

/// Schematic of the anchor square with its three staffing arcs.
#[derive(Debug, Clone)]
pub struct StaffingKey {
    pub origin: (f64, f64),
    pub title: WrappedText,
    pub title_offset: (f64, f64),
    pub square: AnchorSquare,
    pub arcs: Vec<AnnularSector>,
    pub brackets: Vec<StaffingBracket>,
}

/// The full static legend. Pure schematic reuse of the size scale and glyph
/// generators; no new geometry.
#[derive(Debug, Clone)]
pub struct Legend {
    pub title: String,
    pub circles: Vec<LegendCircle>,
    pub circle_origin: (f64, f64),
    pub annotations: Vec<LegendAnnotation>,
    pub sample_lines: Vec<LegendLine>,
    pub staffing: StaffingKey,
}

const STAFFING_ORIGIN: (f64, f64) = (210.0, 65.0);

pub fn build(size_scale: &SizeScale, measure: &dyn TextMeasure) -> Legend {
    let (min_value, max_value) = size_scale.domain();
    let max_radius = size_scale.radius(max_value);
    let min_radius = size_scale.radius(min_value);

    let circles = [1.0, 5.0, max_value]
        .into_iter()
        .map(|value| {
            let radius = size_scale.radius(value);
            LegendCircle {
                value,
                radius,
                cy: max_radius * 2.0 - radius,
                label_y: -1.0 + max_radius * 2.0 - radius * 2.0,
                label: format!("{value:.0}"),
            }
        })
        .collect();

    let annotations = vec![
        LegendAnnotation {
            leader: Some((max_radius / 2.0, max_radius * 6.0 - 3.0)),
            y: max_radius - max_radius / 2.0,
            text_x: max_radius * 6.0,
            dy: -7.0,
            font_size: 6.0,
            text: wrap_text(
                "Circle dimensions: total number of prisons in the region",
                65.0,
                measure,
            ),
        },
        LegendAnnotation {
            leader: Some((0.0, max_radius * 2.0 - 3.0)),
            y: max_radius + max_radius - min_radius,
            text_x: max_radius * 2.0,
            dy: -7.0,
            font_size: 6.0,
            text: wrap_text(
                "Total number of suicides in the region's prisons",
                60.0,
                measure,
            ),
        },
        LegendAnnotation {
            leader: None,
            y: max_radius + max_radius - min_radius,
            text_x: 0.0,
            dy: 0.0,
            font_size: 6.0,
            text: WrappedText {
                lines: vec!["X".to_string()],
                line_height_em: crate::wrap::LINE_HEIGHT_EM,
            },
        },
    ];

    let samples = [
        (
            StrokeTone::Alert,
            DashPattern::Long,
            "Prisons with one or more suicides",
            40.0,
            125.0,
        ),
        (
            StrokeTone::Neutral,
            DashPattern::Long,
            "Top 30 prisons with attempted suicides",
            55.0,
            80.0,
        ),
        (
            StrokeTone::Neutral,
            DashPattern::Short,
            "Top 30 prisons with self-harm cases",
            45.0,
            55.0,
        ),
        (
            StrokeTone::Neutral,
            DashPattern::None,
            "No special cases to mention",
            25.0,
            45.0,
        ),
    ];
    let sample_lines = samples
        .into_iter()
        .map(|(tone, dash, caption, x, length)| LegendLine {
            tone,
            dash,
            x,
            length,
            caption: wrap_text(caption, 53.0, measure),
        })
        .collect();

    let brackets = vec![
        StaffingBracket {
            points: vec![(-7.0, 0.0), (-15.0, 0.0), (-15.0, -15.0)],
            x: -15.0,
            title: "Low".to_string(),
            label: "<15 ppl".to_string(),
        },
        StaffingBracket {
            points: vec![(0.0, -6.0), (0.0, -35.0)],
            x: 0.0,
            title: "Medium".to_string(),
            label: "16-30ppl".to_string(),
        },
        StaffingBracket {
            points: vec![(7.0, 0.0), (15.0, 0.0), (15.0, -15.0)],
            x: 15.0,
            title: "High".to_string(),
            label: "31> ppl".to_string(),
        },
    ];

    Legend {
        title: "How to read".to_string(),
        circles,
        circle_origin: (1.0 + max_radius, 15.0),
        annotations,
        sample_lines,
        staffing: StaffingKey {
            origin: STAFFING_ORIGIN,
            title: wrap_text("Shortage of police staff", 40.0, measure),
            title_offset: (0.0, 10.0),
            square: AnchorSquare::new(),
            arcs: staffing_arcs(),
            brackets,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wrap::CharAdvanceMeasure;
    use approx::assert_relative_eq;

    fn legend() -> Legend {
        let scale = SizeScale::new((1.0, 9.0), (5.0, 15.0));
        build(&scale, &CharAdvanceMeasure { advance: 3.0 })
    }

    #[test]
    fn reference_circles_cover_min_mid_and_max() {
        let legend = legend();
        assert_eq!(legend.circles.len(), 3);
        assert_relative_eq!(legend.circles[0].value, 1.0);
        assert_relative_eq!(legend.circles[1].value, 5.0);
        assert_relative_eq!(legend.circles[2].value, 9.0);
        // circles share a bottom tangent: cy + r is constant
        let tangents: Vec<f64> = legend.circles.iter().map(|c| c.cy + c.radius).collect();
        assert_relative_eq!(tangents[0], tangents[1]);
        assert_relative_eq!(tangents[1], tangents[2]);
    }

    #[test]
    fn max_circle_uses_the_scale_range_end() {
        let legend = legend();
        assert_relative_eq!(legend.circles[2].radius, 15.0);
        assert_relative_eq!(legend.circle_origin.0, 16.0);
    }

    #[test]
    fn sample_lines_mirror_the_projector_styles() {
        let legend = legend();
        assert_eq!(legend.sample_lines.len(), 4);
        assert_eq!(legend.sample_lines[0].tone, StrokeTone::Alert);
        assert_eq!(legend.sample_lines[0].dash, DashPattern::Long);
        assert_eq!(legend.sample_lines[2].dash, DashPattern::Short);
        assert_eq!(legend.sample_lines[3].dash, DashPattern::None);
        for line in &legend.sample_lines {
            assert!(!line.caption.lines.is_empty());
        }
    }

    #[test]
    fn staffing_key_reuses_the_glyph_generators() {
        let legend = legend();
        assert_eq!(legend.staffing.arcs.len(), 3);
        assert_eq!(legend.staffing.brackets.len(), 3);
        assert_relative_eq!(legend.staffing.square.half_extent, 2.0);
        assert_eq!(legend.staffing.brackets[1].title, "Medium");
    }

    #[test]
    fn annotations_clear_the_reference_circles() {
        let legend = legend();
        // largest circle radius 15: rows start below its top edge
        assert_relative_eq!(legend.annotations[0].y, 7.5);
        assert_relative_eq!(legend.annotations[1].y, 25.0);
        assert_relative_eq!(legend.annotations[2].y, 25.0);
    }

    #[test]
    fn long_captions_are_wrapped() {
        let legend = legend();
        // 3 px per char against a 53 px budget forces multiple lines
        assert!(legend.sample_lines[1].caption.lines.len() > 1);
    }
}
