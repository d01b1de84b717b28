use std::sync::Arc;

use dioxus::prelude::*;
use tracing::{error, info};

use crate::core::platform;
use crate::data::Dataset;
use crate::report::build_csv;
use crate::t;

#[derive(Debug, Clone, PartialEq)]
enum ExportStatus {
    Idle,
    Working,
    Done(String),
    Error(String),
}

/// Writes the filtered table as CSV and reports where it landed.
#[component]
pub fn ExportPanel(table: Arc<Dataset>, filename: String) -> Element {
    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match status() {
        ExportStatus::Idle => None,
        ExportStatus::Working => Some(("dashboard-card__meta".to_string(), t!("export-working"))),
        ExportStatus::Done(path) => Some((
            "dashboard-card__meta dashboard-card__meta--success".to_string(),
            format!("✅ {}", t!("export-saved", path = path)),
        )),
        ExportStatus::Error(err) => Some((
            "dashboard-card__meta dashboard-card__meta--error".to_string(),
            format!("⚠️ {}", t!("export-failed", error = err)),
        )),
    };

    let csv_handler = {
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(ExportStatus::Working);

            let records: Vec<_> = table.records.iter().collect();
            let bytes = match build_csv(&table.columns, &records) {
                Ok(bytes) => bytes,
                Err(err) => {
                    error!(error = %err, "failed to encode csv export");
                    status_signal.set(ExportStatus::Error(err.to_string()));
                    busy_signal.set(false);
                    return;
                }
            };

            let filename = filename.clone();
            spawn(async move {
                match platform::save_export(&filename, bytes).await {
                    Ok(path) => {
                        info!(path = %path.display(), "csv export saved");
                        status_signal.set(ExportStatus::Done(path.display().to_string()));
                    }
                    Err(err) => {
                        error!(error = %err, "csv export failed");
                        status_signal.set(ExportStatus::Error(err.to_string()));
                    }
                }
                busy_signal.set(false);
            });
        }
    };

    rsx! {
        section { class: "dashboard-card dashboard-export",
            div { class: "dashboard-export__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: busy(),
                    onclick: csv_handler,
                    {t!("export-button")}
                }
            }

            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}
