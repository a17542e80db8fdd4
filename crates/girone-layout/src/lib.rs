//! Layout computation for the dual mirrored annular chart: aggregation,
//! weighted pie partitioning, per-record line projection, legend and text
//! wrapping. The whole crate is a pure function of its inputs; see
//! [`chart::render`].

pub mod aggregate;
pub mod chart;
pub mod legend;
pub mod lines;
pub mod pie;
pub mod wrap;

pub use aggregate::{aggregate, Aggregation, RegionSlice};
pub use chart::{render, Chart, ChartError, Heading};
pub use legend::{Legend, LegendAnnotation, LegendCircle, LegendLine, StaffingBracket, StaffingKey};
pub use lines::{AnchorGlyph, RadialLine, RecordMarks};
pub use pie::{
    build_half, weighted_pie, CountCircle, HalfChart, LabelArc, PieSector, ScaleRing,
    SectorGeometry, SortDirection,
};
pub use wrap::{wrap_text, CharAdvanceMeasure, TextMeasure, WrappedText};
