use dioxus::prelude::*;

use crate::core::format::{format_count, format_percent};
use crate::report::charts::{bar_percent, donut_segments, DONUT_RADIUS, DONUT_STROKE, PALETTE};
use crate::report::ChartSlice;
use crate::t;

#[component]
pub fn ConclusionChart(slices: Vec<ChartSlice>) -> Element {
    let segments = donut_segments(&slices);
    let circumference = 2.0 * std::f64::consts::PI * DONUT_RADIUS;
    let arcs: Vec<(String, String)> = segments
        .iter()
        .map(|segment| {
            (
                format!("{:.3} {:.3}", segment.length, circumference),
                format!("{:.3}", -segment.start),
            )
        })
        .collect();

    rsx! {
        section { class: "dashboard-card dashboard-chart dashboard-chart--donut",
            div { class: "dashboard-card__header",
                h2 { {t!("chart-conclusions-header")} }
            }

            if !segments.is_empty() {
                h3 { class: "dashboard-chart__title", {t!("chart-conclusions-title")} }
                div { class: "dashboard-donut",
                    svg {
                        class: "dashboard-donut__svg",
                        view_box: "0 0 120 120",
                        for (segment, (dasharray, dashoffset)) in segments.iter().zip(arcs.iter()) {
                            circle {
                                key: "{segment.label}",
                                cx: "60",
                                cy: "60",
                                r: "{DONUT_RADIUS}",
                                fill: "none",
                                stroke: "{segment.color}",
                                stroke_width: "{DONUT_STROKE}",
                                stroke_dasharray: "{dasharray}",
                                stroke_dashoffset: "{dashoffset}",
                                transform: "rotate(-90 60 60)",
                                title { "{segment.label}: {segment.count}" }
                            }
                        }
                    }

                    ul { class: "dashboard-legend",
                        for segment in segments.iter() {
                            li { key: "{segment.label}", class: "dashboard-legend__item",
                                span {
                                    class: "dashboard-legend__swatch",
                                    style: "background: {segment.color}",
                                }
                                span { class: "dashboard-legend__label", "{segment.label}" }
                                span { class: "dashboard-legend__value",
                                    "{format_count(segment.count)} · {format_percent(segment.fraction)}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ParameterChart(slices: Vec<ChartSlice>) -> Element {
    let bars: Vec<(String, &'static str)> = slices
        .iter()
        .enumerate()
        .map(|(idx, slice)| {
            (
                format!("{:.1}", bar_percent(slice, &slices)),
                PALETTE[idx % PALETTE.len()],
            )
        })
        .collect();

    rsx! {
        section { class: "dashboard-card dashboard-chart dashboard-chart--bars",
            div { class: "dashboard-card__header",
                h2 { {t!("chart-parameters-header")} }
            }

            if !slices.is_empty() {
                h3 { class: "dashboard-chart__title", {t!("chart-parameters-title")} }
                ul { class: "dashboard-bars", aria_label: t!("chart-count"),
                    for (slice, (width, color)) in slices.iter().zip(bars.iter()) {
                        li { key: "{slice.label}", class: "dashboard-bar",
                            span { class: "dashboard-bar__label", "{slice.label}" }
                            div { class: "dashboard-bar__track",
                                div {
                                    class: "dashboard-bar__fill",
                                    style: "width: {width}%; background: {color}",
                                }
                            }
                            span { class: "dashboard-bar__value", "{format_count(slice.count)}" }
                        }
                    }
                }
            }
        }
    }
}
