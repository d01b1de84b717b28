//! Workbook reader. Only the first sheet is read and its first row is the header.

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use tracing::{debug, info};

use super::error::LoadError;
use super::table::{
    CellValue, Dataset, LabRecord, CATEGORY_COLUMN, CLIENT_COLUMN, CONCLUSION_COLUMN,
    PARAMETER_COLUMN,
};

pub fn load_dataset(path: &Path) -> Result<Dataset, LoadError> {
    info!(path = %path.display(), "loading lab results workbook");

    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(LoadError::NoSheets)?;

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|source| LoadError::Sheet {
            sheet: sheet.clone(),
            source,
        })?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| LoadError::MissingHeader(sheet.clone()))?;

    let columns: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(idx, cell)| match cell {
            Data::Empty => format!("Unnamed: {idx}"),
            other => other.to_string(),
        })
        .collect();

    let schema = Schema::resolve(&columns)?;

    let mut records = Vec::new();
    for (offset, row) in rows.enumerate() {
        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }

        let cells: Vec<CellValue> = row.iter().map(convert_cell).collect();
        // Header occupies sheet row 1.
        let sheet_row = offset + 2;
        records.push(schema.record(cells, sheet_row)?);
    }

    info!(
        rows = records.len(),
        columns = columns.len(),
        sheet = %sheet,
        "workbook loaded"
    );

    Ok(Dataset { columns, records })
}

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Int(*i),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Error(e) => CellValue::Error(e.to_string()),
        Data::DateTime(dt) => CellValue::DateTime(dt.as_f64()),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}

/// Positions of the required columns within the header.
struct Schema {
    client: usize,
    category: usize,
    conclusion: usize,
    parameter: usize,
}

impl Schema {
    fn resolve(columns: &[String]) -> Result<Self, LoadError> {
        let find = |column: &'static str| {
            columns
                .iter()
                .position(|name| name == column)
                .ok_or(LoadError::MissingColumn { column })
        };

        let schema = Self {
            client: find(CLIENT_COLUMN)?,
            category: find(CATEGORY_COLUMN)?,
            conclusion: find(CONCLUSION_COLUMN)?,
            parameter: find(PARAMETER_COLUMN)?,
        };
        debug!(
            client = schema.client,
            category = schema.category,
            conclusion = schema.conclusion,
            parameter = schema.parameter,
            "resolved required columns"
        );
        Ok(schema)
    }

    fn record(&self, cells: Vec<CellValue>, sheet_row: usize) -> Result<LabRecord, LoadError> {
        let text = |idx: usize, column: &'static str| -> Result<String, LoadError> {
            let cell = cells.get(idx).unwrap_or(&CellValue::Empty);
            cell.as_text()
                .map(str::to_string)
                .ok_or(LoadError::ColumnType {
                    column,
                    row: sheet_row,
                    found: cell.kind(),
                })
        };

        let client = text(self.client, CLIENT_COLUMN)?;
        let sample_category = text(self.category, CATEGORY_COLUMN)?;
        let conclusion = text(self.conclusion, CONCLUSION_COLUMN)?;
        let parameter = text(self.parameter, PARAMETER_COLUMN)?;

        Ok(LabRecord {
            client,
            sample_category,
            conclusion,
            parameter,
            cells,
        })
    }
}
