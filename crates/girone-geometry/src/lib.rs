//! Scales, structured arc primitives and glyph generators.

pub mod arc;
pub mod glyph;
pub mod scale;

pub use arc::{flip_for_readability, AnnularSector, Annulus, ArcPath, RadialTick, Sweep};
pub use glyph::{staffing_arc_count, staffing_arcs, AnchorSquare};
pub use scale::{RadialScale, SizeScale, ThresholdScale};
