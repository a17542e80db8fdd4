//! Data model, polar points and configuration for the girone chart engine.

pub mod config;
pub mod model;
pub mod polar;
pub mod theme;

pub use config::ChartConfig;
pub use model::{FacilityRecord, Half, Region};
pub use polar::Polar;
pub use theme::{DashPattern, RingTone, SectorTone, StrokeTone, Theme};
