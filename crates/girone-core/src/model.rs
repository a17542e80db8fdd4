use serde::{Deserialize, Serialize};

/// Which half-circle a region is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Half {
    Top,
    Bottom,
}

/// A geographic region definition. Identity is `name`; `short_label` is the
/// text drawn along the region's label arc.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub name: String,
    pub short_label: String,
    pub north_to_south_order: i32,
    pub half: Half,
    /// Prepend one synthetic zero-valued record to this region's slice to
    /// compensate for the rounding discontinuity at the seam between the
    /// two half boundaries.
    #[serde(default)]
    pub pad_start: bool,
}

/// One facility's yearly figures. Immutable input; `overcrowding_percent`
/// is a raw percentage (0..~300), not pre-normalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityRecord {
    pub id: String,
    pub region: String,
    pub suicides: u32,
    pub attempted_suicides: u32,
    pub self_harm: u32,
    pub regulatory_rooms: u32,
    pub non_regulatory_rooms: u32,
    pub total_prisoners: u32,
    pub overcrowding_absolute: i32,
    pub overcrowding_percent: f64,
    pub expected_police_staff: u32,
    pub actual_police_staff: u32,
    /// Signed staffing gap: expected minus actual.
    pub police_staff_deficit: i32,
    pub top30_self_harm: bool,
    pub top30_attempted_suicide: bool,
}

impl FacilityRecord {
    /// The structural padding record: all-zero values, no flags. Carries no
    /// data, only angular weight.
    pub fn zeroed(region: &str) -> Self {
        Self {
            id: String::new(),
            region: region.to_string(),
            suicides: 0,
            attempted_suicides: 0,
            self_harm: 0,
            regulatory_rooms: 0,
            non_regulatory_rooms: 0,
            total_prisoners: 0,
            overcrowding_absolute: 0,
            overcrowding_percent: 0.0,
            expected_police_staff: 0,
            actual_police_staff: 0,
            police_staff_deficit: 0,
            top30_self_harm: false,
            top30_attempted_suicide: false,
        }
    }
}
