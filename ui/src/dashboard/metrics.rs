use dioxus::prelude::*;

use crate::core::format::format_count;
use crate::report::PassFailMetrics;
use crate::t;

#[component]
pub fn MetricsPanel(metrics: PassFailMetrics) -> Element {
    rsx! {
        section { class: "dashboard-card dashboard-metrics",
            div { class: "dashboard-highlights",
                div { class: "dashboard-highlight",
                    span { class: "dashboard-highlight__label", {t!("metric-total")} }
                    strong { class: "dashboard-highlight__value", "{format_count(metrics.total)}" }
                }
                div { class: "dashboard-highlight dashboard-highlight--pass",
                    span { class: "dashboard-highlight__label", {t!("metric-passed")} }
                    strong { class: "dashboard-highlight__value", "{format_count(metrics.passed)}" }
                }
                div { class: "dashboard-highlight dashboard-highlight--fail",
                    span { class: "dashboard-highlight__label", {t!("metric-failed")} }
                    strong { class: "dashboard-highlight__value", "{format_count(metrics.failed)}" }
                }
            }
        }
    }
}
