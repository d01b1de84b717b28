//! In-memory representation of the lab results workbook.
//!
//! A [`Dataset`] keeps every column of the first sheet verbatim (for the detail
//! table and the CSV export) while each [`LabRecord`] also carries the four
//! typed fields the filters, metrics and charts read.

use std::fmt;

use time::{macros::format_description, Duration, PrimitiveDateTime};

pub const CLIENT_COLUMN: &str = "Client";
pub const CATEGORY_COLUMN: &str = "Sample Category";
pub const CONCLUSION_COLUMN: &str = "Conclusion";
pub const PARAMETER_COLUMN: &str = "Parameter";

/// A single spreadsheet cell as inferred by the workbook reader.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Int(i64),
    Bool(bool),
    /// Excel serial date (days since 1899-12-30).
    DateTime(f64),
    Error(String),
}

impl CellValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s.as_str()),
            CellValue::Empty => Some(""),
            _ => None,
        }
    }

    /// Short type label used in load error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            CellValue::Empty => "empty",
            CellValue::Text(_) => "text",
            CellValue::Number(_) | CellValue::Int(_) => "number",
            CellValue::Bool(_) => "boolean",
            CellValue::DateTime(_) => "date",
            CellValue::Error(_) => "error",
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Bool(true) => f.write_str("True"),
            CellValue::Bool(false) => f.write_str("False"),
            CellValue::DateTime(serial) => f.write_str(&format_excel_serial(*serial)),
            CellValue::Error(e) => f.write_str(e),
        }
    }
}

fn format_excel_serial(serial: f64) -> String {
    let epoch = time::macros::datetime!(1899-12-30 0:00);
    let seconds = (serial * 86_400.0).round();
    if !seconds.is_finite() {
        return serial.to_string();
    }

    let stamp: Option<PrimitiveDateTime> = epoch.checked_add(Duration::seconds(seconds as i64));
    stamp
        .and_then(|dt| {
            dt.format(&format_description!(
                "[year]-[month]-[day] [hour]:[minute]:[second]"
            ))
            .ok()
        })
        .unwrap_or_else(|| serial.to_string())
}

/// One row of the workbook.
#[derive(Debug, Clone, PartialEq)]
pub struct LabRecord {
    pub client: String,
    pub sample_category: String,
    pub conclusion: String,
    pub parameter: String,
    /// Every cell of the row, aligned with [`Dataset::columns`].
    pub cells: Vec<CellValue>,
}

/// The raw table: header plus rows in sheet order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub records: Vec<LabRecord>,
}

impl Dataset {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Builds a dataset from text cells. Convenient for fixtures; the four
    /// required columns must be among `columns`.
    pub fn from_text_rows<C, R>(columns: &[C], rows: &[R]) -> Option<Self>
    where
        C: AsRef<str>,
        R: AsRef<[&'static str]>,
    {
        let columns: Vec<String> = columns.iter().map(|c| c.as_ref().to_string()).collect();
        let find = |name: &str| columns.iter().position(|c| c == name);
        let client = find(CLIENT_COLUMN)?;
        let category = find(CATEGORY_COLUMN)?;
        let conclusion = find(CONCLUSION_COLUMN)?;
        let parameter = find(PARAMETER_COLUMN)?;

        let records = rows
            .iter()
            .map(|row| {
                let row = row.as_ref();
                let text = |idx: usize| row.get(idx).copied().unwrap_or_default().to_string();
                LabRecord {
                    client: text(client),
                    sample_category: text(category),
                    conclusion: text(conclusion),
                    parameter: text(parameter),
                    cells: (0..columns.len())
                        .map(|idx| CellValue::Text(text(idx)))
                        .collect(),
                }
            })
            .collect();

        Some(Self { columns, records })
    }
}
