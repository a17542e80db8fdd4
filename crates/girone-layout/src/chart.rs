use girone_core::{ChartConfig, FacilityRecord, Half, Region};
use girone_geometry::SizeScale;
use tracing::debug;

use crate::aggregate::aggregate;
use crate::legend::{self, Legend};
use crate::pie::{build_half, HalfChart};
use crate::wrap::{wrap_text, TextMeasure, WrappedText};

/// Radius range of the count circles.
const SIZE_RANGE: (f64, f64) = (5.0, 15.0);

/// Font size the text measure is calibrated against. Heading budgets are
/// canvas px at the heading's own size, so they scale by the ratio.
const LABEL_FONT_SIZE: f64 = 6.0;

const TITLE: &str = "The dramatic conditions of Italian prisons, focus 2024";
const INTRO_1: &str = "In 2024, the Italian prison system faced a severe crisis due to overcrowding. Out of 188 penitentiary institutions, 138 exceeded their official capacity, highlighting increasing pressure on both facilities and staff. The analysis focuses on 100 of these 138 overcrowded prisons in the twenty regions of Italy, starting from the North, providing a representative overview of the most critical issues: suicides, attempted suicides and self-harm cases are not uncommon and are often strictly connected to overcrowding. The severe shortage of prison staff is another crucial problem: the disparity between the planned number of correctional officers and the actual workforce is often striking, leading to increased stress, safety concerns, and management difficulties within the facilities.";
const INTRO_2: &str = "The project Liberiamoli tutti! for the campaign #DatiBeneComune has provided valuable data for this analysis, revealing the significant gap between the official capacity and the actual number of inmates in many facilities. Can we change the narrative when we are aware of the issues?";

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("no facility record matched any region definition")]
    NoUsableRecords,
}

/// Wrapped heading block above the chart: the title or one of the two
/// intro paragraphs.
#[derive(Debug, Clone)]
pub struct Heading {
    pub text: WrappedText,
    pub font_size: f64,
    /// CSS font-weight; `None` renders at the default weight.
    pub weight: Option<u32>,
    pub translate: (f64, f64),
}

/// The title and intro paragraphs, wrapped against the canvas width.
fn headings(cfg: &ChartConfig, measure: &dyn TextMeasure) -> Vec<Heading> {
    let width = cfg.width();
    let heading = |text: &str, font_size: f64, budget: f64, translate, weight| Heading {
        text: wrap_text(text, budget * LABEL_FONT_SIZE / font_size, measure),
        font_size,
        weight,
        translate,
    };
    vec![
        heading(TITLE, 30.0, width * 0.55, (0.0, 45.0), Some(500)),
        heading(INTRO_1, 10.0, width * 0.6, (0.0, 110.0), None),
        heading(INTRO_2, 10.0, width * 0.6, (0.0, 220.0), None),
    ]
}

/// The complete derived result of one computation pass. Replaced wholesale
/// on every input change; nothing in here is ever mutated.
#[derive(Debug, Clone)]
pub struct Chart {
    pub top: HalfChart,
    pub bottom: HalfChart,
    pub headings: Vec<Heading>,
    pub legend: Legend,
    pub size_scale: SizeScale,
    /// Region names dropped because no definition matched.
    pub excluded: Vec<String>,
}

/// Compute the full chart geometry from immutable inputs. Pure: same
/// records, regions and config always yield the same primitives.
pub fn render(
    records: &[FacilityRecord],
    regions: &[Region],
    cfg: &ChartConfig,
    measure: &dyn TextMeasure,
) -> Result<Chart, ChartError> {
    let agg = aggregate(records, regions);
    if agg.top.is_empty() && agg.bottom.is_empty() {
        return Err(ChartError::NoUsableRecords);
    }

    let size_scale = SizeScale::new((1.0, agg.max_record_count as f64), SIZE_RANGE);
    debug!(
        top_regions = agg.top.len(),
        bottom_regions = agg.bottom.len(),
        max_record_count = agg.max_record_count,
        "aggregated chart inputs"
    );

    Ok(Chart {
        top: build_half(Half::Top, agg.top, cfg, &size_scale),
        bottom: build_half(Half::Bottom, agg.bottom, cfg, &size_scale),
        headings: headings(cfg, measure),
        legend: legend::build(&size_scale, measure),
        size_scale,
        excluded: agg.excluded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wrap::CharAdvanceMeasure;

    #[test]
    fn no_matching_records_is_an_error() {
        let records = vec![FacilityRecord::zeroed("Atlantide")];
        let regions = vec![];
        let err = render(
            &records,
            &regions,
            &ChartConfig::default(),
            &CharAdvanceMeasure { advance: 3.0 },
        )
        .unwrap_err();
        assert!(matches!(err, ChartError::NoUsableRecords));
    }
}
