//! Page sections of the dashboard. Each takes already-computed data from
//! [`crate::report::DashboardView`] and only renders it.

mod filters;
pub use filters::FilterSidebar;

mod metrics;
pub use metrics::MetricsPanel;

mod charts;
pub use charts::{ConclusionChart, ParameterChart};

mod table;
pub use table::DetailTable;

mod export;
pub use export::ExportPanel;
