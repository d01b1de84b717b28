//! One render pass: raw table + selections in, everything the page shows out.

use std::sync::Arc;

use crate::core::config::DashboardConfig;
use crate::data::Dataset;

use super::charts::{conclusion_breakdown, top_parameters, ChartSlice};
use super::filter::{apply_filters, FilterOptions, FilterSelection};
use super::metrics::PassFailMetrics;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub selection: FilterSelection,
    pub options: FilterOptions,
    pub metrics: PassFailMetrics,
    pub conclusions: Vec<ChartSlice>,
    pub parameters: Vec<ChartSlice>,
    /// The filtered rows, copied once per pass and shared by every consumer.
    pub table: Arc<Dataset>,
}

impl DashboardView {
    pub fn has_rows(&self) -> bool {
        !self.table.is_empty()
    }
}

pub fn build_view(
    raw: &Dataset,
    selection: &FilterSelection,
    config: &DashboardConfig,
) -> DashboardView {
    let (filtered, options) = apply_filters(raw, selection);
    let metrics = PassFailMetrics::from_records(&filtered.records, &config.pass_label);
    let conclusions = conclusion_breakdown(&filtered.records);
    let parameters = top_parameters(&filtered.records, config.top_parameters);

    DashboardView {
        selection: selection.clone(),
        options,
        metrics,
        conclusions,
        parameters,
        table: Arc::new(filtered.to_dataset()),
    }
}
