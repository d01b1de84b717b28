use dioxus::prelude::*;

use crate::report::{FilterOptions, FilterSelection, Selection};
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Client,
    Category,
    Conclusion,
}

impl FilterField {
    fn dom_id(self) -> &'static str {
        match self {
            FilterField::Client => "filter-client",
            FilterField::Category => "filter-category",
            FilterField::Conclusion => "filter-conclusion",
        }
    }

    fn current(self, selection: &FilterSelection) -> &Selection {
        match self {
            FilterField::Client => &selection.client,
            FilterField::Category => &selection.category,
            FilterField::Conclusion => &selection.conclusion,
        }
    }

    fn assign(self, selection: &mut FilterSelection, value: Selection) {
        match self {
            FilterField::Client => selection.client = value,
            FilterField::Category => selection.category = value,
            FilterField::Conclusion => selection.conclusion = value,
        }
    }
}

#[component]
pub fn FilterSidebar(options: FilterOptions, selection: Signal<FilterSelection>) -> Element {
    rsx! {
        aside { class: "dashboard-filters",
            h2 { class: "dashboard-filters__header", {t!("filters-header")} }

            FilterSelect {
                field: FilterField::Client,
                label: t!("filter-client"),
                values: options.clients.clone(),
                selection,
            }
            FilterSelect {
                field: FilterField::Category,
                label: t!("filter-category"),
                values: options.categories.clone(),
                selection,
            }
            FilterSelect {
                field: FilterField::Conclusion,
                label: t!("filter-conclusion"),
                values: options.conclusions.clone(),
                selection,
            }
        }
    }
}

#[component]
fn FilterSelect(
    field: FilterField,
    label: String,
    values: Vec<String>,
    selection: Signal<FilterSelection>,
) -> Element {
    let current = field.current(&selection()).clone();
    let current_label = current.label().to_string();
    let choices = FilterOptions::choices(&values);
    // A value picked before an upstream filter changed stays applied; keep it visible.
    let stale = !current.is_all() && !values.contains(&current_label);

    let mut selection = selection;
    let on_change = move |evt: FormEvent| {
        let picked = Selection::from_choice(&evt.value());
        selection.with_mut(|sel| field.assign(sel, picked));
    };

    rsx! {
        div { class: "dashboard-filter",
            label { class: "dashboard-filter__label", r#for: field.dom_id(), "{label}" }
            select {
                id: field.dom_id(),
                class: "dashboard-filter__select",
                value: "{current_label}",
                onchange: on_change,
                for choice in choices.into_iter() {
                    option {
                        key: "{choice}",
                        value: "{choice}",
                        selected: choice == current_label,
                        "{choice}"
                    }
                }
                if stale {
                    option {
                        key: "stale-{current_label}",
                        class: "dashboard-filter__option--stale",
                        value: "{current_label}",
                        selected: true,
                        "{current_label}"
                    }
                }
            }
        }
    }
}
