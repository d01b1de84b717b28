use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("unable to open workbook: {0}")]
    Open(#[from] calamine::XlsxError),

    #[error("workbook contains no sheets")]
    NoSheets,

    #[error("unable to read sheet '{sheet}': {source}")]
    Sheet {
        sheet: String,
        #[source]
        source: calamine::XlsxError,
    },

    #[error("sheet '{0}' has no header row")]
    MissingHeader(String),

    #[error("required column '{column}' is missing")]
    MissingColumn { column: &'static str },

    #[error("column '{column}' row {row}: expected text, found {found}")]
    ColumnType {
        column: &'static str,
        row: usize,
        found: &'static str,
    },
}
