use std::sync::Arc;

use dioxus::prelude::*;

use crate::core::format::format_count;
use crate::data::Dataset;
use crate::t;

/// Every column of the filtered table, in sheet order.
#[component]
pub fn DetailTable(table: Arc<Dataset>) -> Element {
    let count = format_count(table.len());

    rsx! {
        section { class: "dashboard-card dashboard-table",
            div { class: "dashboard-card__header",
                h2 { {t!("table-header")} }
                span { class: "dashboard-card__meta", {t!("table-rows", count = count.clone())} }
            }

            div { class: "dashboard-table__scroll",
                table {
                    thead {
                        tr {
                            for (idx, column) in table.columns.iter().enumerate() {
                                th { key: "{idx}", scope: "col", "{column}" }
                            }
                        }
                    }
                    tbody {
                        for (row, record) in table.records.iter().enumerate() {
                            tr { key: "{row}",
                                for (idx, cell) in record.cells.iter().enumerate() {
                                    td { key: "{idx}", "{cell}" }
                                }
                            }
                        }
                    }
                }
            }

            if table.is_empty() {
                p { class: "dashboard-card__placeholder", {t!("table-empty")} }
            }
        }
    }
}
