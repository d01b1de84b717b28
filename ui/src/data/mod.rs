//! Workbook loading and the in-memory raw table.

pub mod cache;
pub mod error;
pub mod loader;
pub mod table;

pub use cache::{DatasetCache, DatasetState};
pub use error::LoadError;
pub use loader::load_dataset;
pub use table::{CellValue, Dataset, LabRecord};
