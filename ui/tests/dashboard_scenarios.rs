//! End-to-end checks over the public API: workbook on disk, cache, view model
//! and CSV export.

use std::path::PathBuf;

use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

use ui::core::config::DashboardConfig;
use ui::data::DatasetCache;
use ui::report::{build_csv, build_view, FilterOptions, FilterSelection, Selection};

fn write_workbook(dir: &TempDir, rows: &[&[&str]]) -> PathBuf {
    let path = dir.path().join("Smart_Lab_System_Full_Data.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            sheet.write_string(r as u32, c as u16, *value).unwrap();
        }
    }
    workbook.save(&path).unwrap();
    path
}

fn three_row_lab(dir: &TempDir) -> PathBuf {
    write_workbook(
        dir,
        &[
            &["Client", "Sample Category", "Conclusion", "Parameter"],
            &["A", "Water", "Pass", "pH"],
            &["A", "Water", "Fail", "Lead"],
            &["B", "Soil", "Pass", "pH"],
        ],
    )
}

fn parse_csv(bytes: &[u8]) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_reader(bytes);
    let headers = reader.headers().unwrap().iter().map(str::to_string).collect();
    let rows = reader
        .records()
        .map(|row| row.unwrap().iter().map(str::to_string).collect())
        .collect();
    (headers, rows)
}

#[test]
fn selecting_a_client_narrows_metrics_and_categories() {
    let dir = TempDir::new().unwrap();
    let cache = DatasetCache::new(three_row_lab(&dir));
    let state = cache.get_or_load();
    assert!(state.error.is_none());

    let selection = FilterSelection {
        client: Selection::value("A"),
        ..FilterSelection::all()
    };
    let view = build_view(&state.dataset, &selection, &DashboardConfig::default());

    assert_eq!(view.table.len(), 2);
    assert_eq!(view.metrics.total, 2);
    assert_eq!(view.metrics.passed, 1);
    assert_eq!(view.metrics.failed, 1);
    assert_eq!(FilterOptions::choices(&view.options.categories), vec!["All", "Water"]);
}

#[test]
fn missing_workbook_degrades_to_empty_dashboard() {
    let dir = TempDir::new().unwrap();
    let cache = DatasetCache::new(dir.path().join("Smart_Lab_System_Full_Data.xlsx"));
    let state = cache.get_or_load();

    let message = state.error.as_deref().unwrap();
    assert!(message.starts_with("Error loading data: "), "{message}");
    assert!(state.dataset.is_empty());

    let view = build_view(&state.dataset, &FilterSelection::all(), &DashboardConfig::default());
    assert_eq!(view.metrics.total, 0);
    assert!(view.conclusions.is_empty());
    assert!(view.parameters.is_empty());
    assert!(!view.has_rows());

    let records: Vec<_> = view.table.records.iter().collect();
    assert!(build_csv(&view.table.columns, &records).unwrap().is_empty());
}

#[test]
fn contradictory_selection_renders_zero_rows_and_header_only_export() {
    let dir = TempDir::new().unwrap();
    let cache = DatasetCache::new(three_row_lab(&dir));
    let state = cache.get_or_load();

    // Category picked while client was "All", then client switched to "B".
    let selection = FilterSelection {
        client: Selection::value("B"),
        category: Selection::value("Water"),
        conclusion: Selection::All,
    };
    let view = build_view(&state.dataset, &selection, &DashboardConfig::default());

    assert!(!view.has_rows());
    assert_eq!(view.metrics.total, 0);
    assert_eq!(view.metrics.passed, 0);
    assert_eq!(view.metrics.failed, 0);
    assert!(view.conclusions.is_empty());
    assert!(view.parameters.is_empty());

    let records: Vec<_> = view.table.records.iter().collect();
    let bytes = build_csv(&view.table.columns, &records).unwrap();
    let (headers, rows) = parse_csv(&bytes);
    assert_eq!(headers, vec!["Client", "Sample Category", "Conclusion", "Parameter"]);
    assert!(rows.is_empty());
}

#[test]
fn pass_and_fail_always_sum_to_total() {
    let dir = TempDir::new().unwrap();
    let path = write_workbook(
        &dir,
        &[
            &["Client", "Sample Category", "Conclusion", "Parameter"],
            &["A", "Water", "Pass", "pH"],
            &["A", "Water", "Marginal", "Lead"],
            &["A", "Food", "pass", "Salmonella"],
            &["B", "Soil", "Fail", "pH"],
            &["B", "Soil", "", "Zinc"],
        ],
    );
    let cache = DatasetCache::new(path);
    let state = cache.get_or_load();
    let config = DashboardConfig::default();

    let clients = ["All", "A", "B", "Z"];
    let conclusions = ["All", "Pass", "Fail", "Marginal", ""];
    for client in clients {
        for conclusion in conclusions {
            let selection = FilterSelection {
                client: Selection::from_choice(client),
                category: Selection::All,
                conclusion: Selection::from_choice(conclusion),
            };
            let metrics = build_view(&state.dataset, &selection, &config).metrics;
            assert_eq!(metrics.passed + metrics.failed, metrics.total, "{selection:?}");
        }
    }
}

#[test]
fn wildcards_reproduce_the_loaded_table() {
    let dir = TempDir::new().unwrap();
    let cache = DatasetCache::new(three_row_lab(&dir));
    let state = cache.get_or_load();

    let view = build_view(&state.dataset, &FilterSelection::all(), &DashboardConfig::default());
    assert_eq!(*view.table, state.dataset);
}

#[test]
fn exported_csv_matches_filtered_table() {
    let dir = TempDir::new().unwrap();
    let path = write_workbook(
        &dir,
        &[
            &["Client", "Sample Category", "Conclusion", "Parameter", "Notes"],
            &["Acme, Inc.", "Water", "Pass", "pH", "said \"ok\""],
            &["Acme, Inc.", "Water", "Fail", "Lead", "line\nbreak"],
            &["Other", "Soil", "Pass", "pH", ""],
        ],
    );
    let cache = DatasetCache::new(path);
    let state = cache.get_or_load();

    let selection = FilterSelection {
        client: Selection::value("Acme, Inc."),
        ..FilterSelection::all()
    };
    let view = build_view(&state.dataset, &selection, &DashboardConfig::default());
    let records: Vec<_> = view.table.records.iter().collect();
    let bytes = build_csv(&view.table.columns, &records).unwrap();

    let (headers, rows) = parse_csv(&bytes);
    assert_eq!(headers, view.table.columns);
    let expected: Vec<Vec<String>> = view
        .table
        .records
        .iter()
        .map(|record| record.cells.iter().map(ToString::to_string).collect())
        .collect();
    assert_eq!(rows, expected);
    assert_eq!(rows[1][4], "line\nbreak");
}
