//! SVG adapter: serializes the structured chart primitives into
//! path-command strings and a complete document. The layout engine never
//! sees markup; everything here is presentation.

pub mod paths;
pub mod svg;

pub use paths::{annulus_path, arc_path, line_path, sector_path, square_path, tick_path};
pub use svg::{svg_document, SvgError};
