//! Pure report logic: filtering, aggregation, chart series and CSV export.

pub mod charts;
pub mod export;
pub mod filter;
pub mod metrics;
pub mod view;

pub use charts::{ChartSlice, DonutSegment};
pub use export::{build_csv, ExportError, EXPORT_FILENAME};
pub use filter::{apply_filters, FilterOptions, FilterSelection, FilteredTable, Selection, WILDCARD};
pub use metrics::{PassFailMetrics, PASS_LABEL};
pub use view::{build_view, DashboardView};
