use serde::{Deserialize, Serialize};

/// Stroke role of a radial indicator line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrokeTone {
    /// Facilities with one or more suicides.
    Alert,
    Neutral,
}

/// Dash pattern of a radial indicator line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DashPattern {
    None,
    /// 4,4 — suicides and top-30 attempted suicides.
    Long,
    /// 2,2 — top-30 self-harm.
    Short,
}

impl DashPattern {
    pub fn as_svg(self) -> &'static str {
        match self {
            DashPattern::None => "",
            DashPattern::Long => "4,4",
            DashPattern::Short => "2,2",
        }
    }
}

/// Color role of one percentage-scale reference ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RingTone {
    Default,
    /// The endpoints that anchor the reading direction, and the midpoint.
    Highlight,
    /// The far endpoint of each half is drawn invisibly so the two scales
    /// read as one.
    Transparent,
}

/// Alternating fill of region arcs, labels and count circles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectorTone {
    Light,
    Dark,
}

impl SectorTone {
    pub fn from_order(order: i32) -> Self {
        if order % 2 == 0 {
            SectorTone::Light
        } else {
            SectorTone::Dark
        }
    }

    /// Label/count text contrasts with the sector fill.
    pub fn inverted(self) -> Self {
        match self {
            SectorTone::Light => SectorTone::Dark,
            SectorTone::Dark => SectorTone::Light,
        }
    }
}

/// Injected styling values; the engine only ever hands out tones, the
/// adapter resolves them to colors through this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub background: String,
    pub dark_grey: String,
    pub light_grey: String,
    pub alert: String,
    pub foreground: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "#24242e".to_string(),
            dark_grey: "#484751".to_string(),
            light_grey: "#ababba".to_string(),
            alert: "#cc0e0e".to_string(),
            foreground: "white".to_string(),
        }
    }
}

impl Theme {
    pub fn stroke(&self, tone: StrokeTone) -> &str {
        match tone {
            StrokeTone::Alert => &self.alert,
            StrokeTone::Neutral => &self.foreground,
        }
    }

    pub fn ring(&self, tone: RingTone) -> &str {
        match tone {
            RingTone::Default => &self.dark_grey,
            RingTone::Highlight => &self.foreground,
            RingTone::Transparent => "transparent",
        }
    }

    pub fn sector(&self, tone: SectorTone) -> &str {
        match tone {
            SectorTone::Light => &self.light_grey,
            SectorTone::Dark => &self.dark_grey,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_tone_alternates_by_order() {
        assert_eq!(SectorTone::from_order(0), SectorTone::Light);
        assert_eq!(SectorTone::from_order(1), SectorTone::Dark);
        assert_eq!(SectorTone::from_order(2), SectorTone::Light);
        assert_eq!(SectorTone::from_order(1).inverted(), SectorTone::Light);
    }

    #[test]
    fn dash_patterns_serialize_for_svg() {
        assert_eq!(DashPattern::Long.as_svg(), "4,4");
        assert_eq!(DashPattern::Short.as_svg(), "2,2");
        assert_eq!(DashPattern::None.as_svg(), "");
    }
}
