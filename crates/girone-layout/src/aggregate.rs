use girone_core::{FacilityRecord, Half, Region};
use indexmap::IndexMap;
use tracing::warn;

/// One region's ordered share of a half-circle, before angles are assigned.
#[derive(Debug, Clone)]
pub struct RegionSlice {
    /// Short display label, drawn along the sector's label arc.
    pub label: String,
    /// North-to-south ordering key; the pie consumer sorts by this.
    pub order_key: i32,
    pub members: Vec<FacilityRecord>,
}

impl RegionSlice {
    pub fn record_count(&self) -> usize {
        self.members.len()
    }

    pub fn suicide_total(&self) -> u32 {
        self.members.iter().map(|m| m.suicides).sum()
    }
}

/// Result of one aggregation pass.
#[derive(Debug, Clone)]
pub struct Aggregation {
    pub top: Vec<RegionSlice>,
    pub bottom: Vec<RegionSlice>,
    /// Largest member count across all groups, matched or not; calibrates
    /// the count-circle size scale.
    pub max_record_count: usize,
    /// Region names that appeared in the records but had no definition.
    pub excluded: Vec<String>,
}

/// Group records by region, order each group by overcrowding, and partition
/// the slices into halves. Groups without a matching [`Region`] definition
/// are dropped, counted and logged rather than treated as an error.
pub fn aggregate(records: &[FacilityRecord], regions: &[Region]) -> Aggregation {
    let mut groups: IndexMap<&str, Vec<FacilityRecord>> = IndexMap::new();
    for record in records {
        groups
            .entry(record.region.as_str())
            .or_default()
            .push(record.clone());
    }

    let mut top = Vec::new();
    let mut bottom = Vec::new();
    let mut excluded = Vec::new();
    let mut max_record_count = 0usize;

    for (name, mut members) in groups {
        let Some(region) = regions.iter().find(|r| r.name == name) else {
            warn!(region = name, records = members.len(), "dropping records with no region definition");
            max_record_count = max_record_count.max(members.len());
            excluded.push(name.to_string());
            continue;
        };

        // Most-overcrowded facilities cluster toward the reading-start edge
        // of each half, so the sort direction follows the half.
        match region.half {
            Half::Top => members
                .sort_by(|a, b| b.overcrowding_percent.total_cmp(&a.overcrowding_percent)),
            Half::Bottom => members
                .sort_by(|a, b| a.overcrowding_percent.total_cmp(&b.overcrowding_percent)),
        }

        if region.pad_start {
            // Synthetic zero record absorbing the rounding discontinuity at
            // the seam between the two half boundaries.
            members.insert(0, FacilityRecord::zeroed(name));
        }

        max_record_count = max_record_count.max(members.len());

        let slice = RegionSlice {
            label: region.short_label.clone(),
            order_key: region.north_to_south_order,
            members,
        };
        match region.half {
            Half::Top => top.push(slice),
            Half::Bottom => bottom.push(slice),
        }
    }

    Aggregation {
        top,
        bottom,
        max_record_count,
        excluded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(region: &str, overcrowding: f64) -> FacilityRecord {
        FacilityRecord {
            overcrowding_percent: overcrowding,
            ..FacilityRecord::zeroed(region)
        }
    }

    fn region(name: &str, order: i32, half: Half) -> Region {
        Region {
            name: name.to_string(),
            short_label: name[..3.min(name.len())].to_string(),
            north_to_south_order: order,
            half,
            pad_start: false,
        }
    }

    #[test]
    fn groups_partition_into_halves() {
        let records = vec![
            record("Nord", 120.0),
            record("Sud", 90.0),
            record("Nord", 150.0),
        ];
        let regions = vec![region("Nord", 1, Half::Top), region("Sud", 2, Half::Bottom)];
        let agg = aggregate(&records, &regions);
        assert_eq!(agg.top.len(), 1);
        assert_eq!(agg.bottom.len(), 1);
        assert_eq!(agg.top[0].record_count(), 2);
        assert_eq!(agg.max_record_count, 2);
        assert!(agg.excluded.is_empty());
    }

    #[test]
    fn top_half_sorts_overcrowding_descending() {
        let records = vec![
            record("Nord", 90.0),
            record("Nord", 150.0),
            record("Nord", 120.0),
        ];
        let regions = vec![region("Nord", 1, Half::Top)];
        let agg = aggregate(&records, &regions);
        let values: Vec<f64> = agg.top[0]
            .members
            .iter()
            .map(|m| m.overcrowding_percent)
            .collect();
        assert_eq!(values, vec![150.0, 120.0, 90.0]);
    }

    #[test]
    fn bottom_half_sorts_overcrowding_ascending() {
        let records = vec![
            record("Sud", 90.0),
            record("Sud", 150.0),
            record("Sud", 120.0),
        ];
        let regions = vec![region("Sud", 1, Half::Bottom)];
        let agg = aggregate(&records, &regions);
        let values: Vec<f64> = agg.bottom[0]
            .members
            .iter()
            .map(|m| m.overcrowding_percent)
            .collect();
        assert_eq!(values, vec![90.0, 120.0, 150.0]);
    }

    #[test]
    fn unmatched_regions_are_counted_not_fatal() {
        let records = vec![record("Nord", 100.0), record("Atlantide", 100.0)];
        let regions = vec![region("Nord", 1, Half::Top)];
        let agg = aggregate(&records, &regions);
        assert_eq!(agg.excluded, vec!["Atlantide".to_string()]);
        assert_eq!(agg.top.len(), 1);
        assert_eq!(agg.bottom.len(), 0);
    }

    #[test]
    fn unmatched_groups_still_calibrate_the_size_scale() {
        let records = vec![
            record("Nord", 100.0),
            record("Atlantide", 100.0),
            record("Atlantide", 110.0),
            record("Atlantide", 120.0),
        ];
        let regions = vec![region("Nord", 1, Half::Top)];
        let agg = aggregate(&records, &regions);
        assert_eq!(agg.max_record_count, 3);
    }

    #[test]
    fn padding_region_gets_a_zero_record_prepended() {
        let records = vec![record("Friuli", 130.0), record("Friuli", 110.0)];
        let mut friuli = region("Friuli", 4, Half::Top);
        friuli.pad_start = true;
        let agg = aggregate(&records, &[friuli]);
        let slice = &agg.top[0];
        assert_eq!(slice.record_count(), 3);
        assert_eq!(slice.members[0].overcrowding_percent, 0.0);
        assert_eq!(slice.members[0].id, "");
        // the real records keep their sorted order behind the pad
        assert_eq!(slice.members[1].overcrowding_percent, 130.0);
        assert_eq!(agg.max_record_count, 3);
    }

    #[test]
    fn suicide_total_sums_members() {
        let mut a = record("Nord", 100.0);
        a.suicides = 2;
        let mut b = record("Nord", 110.0);
        b.suicides = 3;
        let regions = vec![region("Nord", 1, Half::Top)];
        let agg = aggregate(&[a, b], &regions);
        assert_eq!(agg.top[0].suicide_total(), 5);
    }
}
