//! Chart series for the conclusion donut and the parameter frequency bars.

use std::collections::HashMap;

use crate::data::LabRecord;

/// Slice palette, cycled when there are more slices than colours.
pub const PALETTE: [&str; 10] = [
    "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692", "#b6e880",
    "#ff97ff", "#fecb52",
];

/// Radius of the donut ring in SVG user units (viewBox is 120×120).
pub const DONUT_RADIUS: f64 = 42.0;
/// Stroke width giving a hole of 40% of the outer diameter.
pub const DONUT_STROKE: f64 = 36.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub label: String,
    pub count: usize,
}

/// Counts each distinct value, largest first. Equal counts keep first-seen order.
pub fn value_counts<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<ChartSlice> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut slices: Vec<ChartSlice> = Vec::new();

    for value in values {
        match index.get(value) {
            Some(&at) => slices[at].count += 1,
            None => {
                index.insert(value, slices.len());
                slices.push(ChartSlice {
                    label: value.to_string(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps first-seen order among ties.
    slices.sort_by(|a, b| b.count.cmp(&a.count));
    slices
}

pub fn conclusion_breakdown(records: &[&LabRecord]) -> Vec<ChartSlice> {
    value_counts(records.iter().map(|record| record.conclusion.as_str()))
}

pub fn top_parameters(records: &[&LabRecord], limit: usize) -> Vec<ChartSlice> {
    let mut counts = value_counts(records.iter().map(|record| record.parameter.as_str()));
    counts.truncate(limit);
    counts
}

/// One arc of the donut, expressed as an SVG stroke dash pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutSegment {
    pub label: String,
    pub count: usize,
    pub fraction: f64,
    /// Arc length along the ring.
    pub length: f64,
    /// Arc length preceding this segment (used as a negative dash offset).
    pub start: f64,
    pub color: &'static str,
}

pub fn donut_segments(slices: &[ChartSlice]) -> Vec<DonutSegment> {
    let total: usize = slices.iter().map(|slice| slice.count).sum();
    if total == 0 {
        return Vec::new();
    }

    let circumference = 2.0 * std::f64::consts::PI * DONUT_RADIUS;
    let mut start = 0.0;

    slices
        .iter()
        .enumerate()
        .map(|(idx, slice)| {
            let fraction = slice.count as f64 / total as f64;
            let length = fraction * circumference;
            let segment = DonutSegment {
                label: slice.label.clone(),
                count: slice.count,
                fraction,
                length,
                start,
                color: PALETTE[idx % PALETTE.len()],
            };
            start += length;
            segment
        })
        .collect()
}

/// Bar width as a percentage of the largest count in `slices`.
pub fn bar_percent(slice: &ChartSlice, slices: &[ChartSlice]) -> f64 {
    let max = slices.iter().map(|s| s.count).max().unwrap_or(0);
    if max == 0 {
        0.0
    } else {
        slice.count as f64 / max as f64 * 100.0
    }
}
