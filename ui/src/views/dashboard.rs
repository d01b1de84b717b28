use std::sync::Arc;

use dioxus::prelude::*;

use crate::core::config::DashboardConfig;
use crate::dashboard::{
    ConclusionChart, DetailTable, ExportPanel, FilterSidebar, MetricsPanel, ParameterChart,
};
use crate::data::DatasetCache;
use crate::report::{build_view, FilterSelection};
use crate::t;

/// The whole page. Expects a [`DatasetCache`] (behind an `Arc`) and a
/// [`DashboardConfig`] in context; `selection` is owned by the caller so it
/// survives a language switch.
#[component]
pub fn Dashboard(selection: Signal<FilterSelection>) -> Element {
    // Subscribe to the language code so labels refresh on change.
    let _lang = try_use_context::<Signal<String>>().map(|code| code());

    let cache = use_context::<Arc<DatasetCache>>();
    let config = use_context::<DashboardConfig>();
    let state = use_hook(move || cache.get_or_load());

    let view = {
        let state = state.clone();
        let config = config.clone();
        use_memo(move || build_view(&state.dataset, &selection(), &config))
    };
    let view = view();

    let client = view.selection.client.label().to_string();
    let loaded = !state.dataset.is_empty();

    rsx! {
        section { class: "page page-dashboard",
            div { class: "page-dashboard__layout",
                FilterSidebar { options: view.options.clone(), selection }

                div { class: "page-dashboard__main",
                    h1 { {t!("dashboard-title")} }

                    if let Some(message) = state.error.clone() {
                        p { class: "dashboard-alert dashboard-alert--error", "{message}" }
                    }

                    if loaded {
                        p { class: "page-dashboard__caption", {t!("dashboard-showing", client = client.clone())} }

                        MetricsPanel { metrics: view.metrics }

                        div { class: "dashboard-charts",
                            ConclusionChart { slices: view.conclusions.clone() }
                            ParameterChart { slices: view.parameters.clone() }
                        }

                        DetailTable { table: view.table.clone() }

                        ExportPanel {
                            table: view.table.clone(),
                            filename: config.export_filename.clone(),
                        }
                    } else {
                        p { class: "dashboard-alert dashboard-alert--warning", {t!("no-data-warning")} }
                    }
                }
            }
        }
    }
}
