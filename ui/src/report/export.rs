//! CSV serialisation of the filtered table.

use thiserror::Error;

use crate::data::{CellValue, LabRecord};

pub const EXPORT_FILENAME: &str = "Filtered_Report.csv";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unable to determine export directory")]
    NoExportDir,
}

/// Header row followed by every record, cells printed as displayed in the table.
///
/// A table without columns (nothing was loaded) produces an empty file.
pub fn build_csv(columns: &[String], records: &[&LabRecord]) -> Result<Vec<u8>, ExportError> {
    if columns.is_empty() {
        return Ok(Vec::new());
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(columns)?;
    for record in records {
        writer.write_record(row_fields(record, columns.len()))?;
    }

    writer.into_inner().map_err(|err| err.into_error().into())
}

fn row_fields(record: &LabRecord, width: usize) -> Vec<String> {
    (0..width)
        .map(|idx| {
            record
                .cells
                .get(idx)
                .unwrap_or(&CellValue::Empty)
                .to_string()
        })
        .collect()
}
