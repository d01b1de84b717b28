//! Cascading equality filters: client, then sample category, then conclusion.
//!
//! Each stage offers the distinct values of the rows that survived the stages
//! before it, in order of first appearance. A selection that is no longer on
//! offer (because an upstream filter changed) still applies and simply matches
//! nothing.

use std::collections::HashSet;

use crate::data::{Dataset, LabRecord};

/// Label of the catch-all entry at the top of every dropdown.
pub const WILDCARD: &str = "All";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Selection {
    #[default]
    All,
    Value(String),
}

impl Selection {
    /// Maps a dropdown choice back to a selection; the wildcard label means "no filter".
    pub fn from_choice(choice: &str) -> Self {
        if choice == WILDCARD {
            Selection::All
        } else {
            Selection::Value(choice.to_string())
        }
    }

    pub fn value(value: impl Into<String>) -> Self {
        Selection::Value(value.into())
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Value(value) => value == candidate,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Selection::All => WILDCARD,
            Selection::Value(value) => value.as_str(),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub client: Selection,
    pub category: Selection,
    pub conclusion: Selection,
}

impl FilterSelection {
    pub fn all() -> Self {
        Self::default()
    }
}

/// Distinct values offered by each dropdown, wildcard excluded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub clients: Vec<String>,
    pub categories: Vec<String>,
    pub conclusions: Vec<String>,
}

impl FilterOptions {
    /// Dropdown entries with the wildcard first. A data value spelled exactly
    /// like the wildcard cannot be told apart from it and is folded into it.
    pub fn choices(values: &[String]) -> Vec<String> {
        std::iter::once(WILDCARD.to_string())
            .chain(values.iter().filter(|v| *v != WILDCARD).cloned())
            .collect()
    }
}

/// The rows of a [`Dataset`] that pass the current filters, in sheet order.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredTable<'a> {
    pub columns: &'a [String],
    pub records: Vec<&'a LabRecord>,
}

impl FilteredTable<'_> {
    pub fn to_dataset(&self) -> Dataset {
        Dataset {
            columns: self.columns.to_vec(),
            records: self.records.iter().map(|record| (*record).clone()).collect(),
        }
    }
}

/// Runs the three stages and returns the surviving rows plus the options each
/// dropdown should offer.
pub fn apply_filters<'a>(
    dataset: &'a Dataset,
    selection: &FilterSelection,
) -> (FilteredTable<'a>, FilterOptions) {
    let rows: Vec<&LabRecord> = dataset.records.iter().collect();

    let (clients, rows) = stage(rows, &selection.client, |r| r.client.as_str());
    let (categories, rows) = stage(rows, &selection.category, |r| r.sample_category.as_str());
    let (conclusions, rows) = stage(rows, &selection.conclusion, |r| r.conclusion.as_str());

    let table = FilteredTable {
        columns: &dataset.columns,
        records: rows,
    };
    let options = FilterOptions {
        clients,
        categories,
        conclusions,
    };
    (table, options)
}

fn stage<'a>(
    rows: Vec<&'a LabRecord>,
    selection: &Selection,
    field: fn(&LabRecord) -> &str,
) -> (Vec<String>, Vec<&'a LabRecord>) {
    let options = distinct_in_order(rows.iter().map(|r| field(r)));
    if selection.is_all() {
        return (options, rows);
    }

    let kept = rows
        .into_iter()
        .filter(|r| selection.matches(field(r)))
        .collect();
    (options, kept)
}

pub(crate) fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from_text_rows(
            &["Client", "Sample Category", "Conclusion", "Parameter", "Lab"],
            &[
                ["A", "Water", "Pass", "pH", "North"],
                ["A", "Water", "Fail", "Lead", "North"],
                ["B", "Soil", "Pass", "pH", "South"],
                ["A", "Food", "Marginal", "Salmonella", "North"],
                ["C", "Water", "Pass", "Nitrate", "East"],
            ],
        )
        .unwrap()
    }

    fn clients<'a>(table: &'a FilteredTable<'a>) -> Vec<&'a str> {
        table.records.iter().map(|r| r.client.as_str()).collect()
    }

    #[test]
    fn wildcard_everywhere_returns_raw_table() {
        let dataset = sample();
        let (table, options) = apply_filters(&dataset, &FilterSelection::all());

        assert_eq!(table.to_dataset(), dataset);
        assert_eq!(options.clients, vec!["A", "B", "C"]);
        assert_eq!(options.categories, vec!["Water", "Soil", "Food"]);
        assert_eq!(options.conclusions, vec!["Pass", "Fail", "Marginal"]);
    }

    #[test]
    fn category_options_follow_client() {
        let dataset = sample();
        let selection = FilterSelection {
            client: Selection::value("A"),
            ..FilterSelection::all()
        };
        let (table, options) = apply_filters(&dataset, &selection);

        assert_eq!(clients(&table), vec!["A", "A", "A"]);
        assert_eq!(options.clients, vec!["A", "B", "C"]);
        assert_eq!(options.categories, vec!["Water", "Food"]);
        assert_eq!(options.conclusions, vec!["Pass", "Fail", "Marginal"]);
    }

    #[test]
    fn conclusion_options_follow_category() {
        let dataset = sample();
        let selection = FilterSelection {
            client: Selection::value("A"),
            category: Selection::value("Water"),
            conclusion: Selection::value("Fail"),
        };
        let (table, options) = apply_filters(&dataset, &selection);

        assert_eq!(table.records.len(), 1);
        assert_eq!(table.records[0].parameter, "Lead");
        assert_eq!(options.conclusions, vec!["Pass", "Fail"]);
    }

    #[test]
    fn stale_downstream_selection_yields_empty_table() {
        let dataset = sample();
        let selection = FilterSelection {
            client: Selection::value("B"),
            category: Selection::value("Water"),
            conclusion: Selection::All,
        };
        let (table, options) = apply_filters(&dataset, &selection);

        assert!(table.records.is_empty());
        assert_eq!(options.categories, vec!["Soil"]);
        assert!(options.conclusions.is_empty());
        assert_eq!(table.columns.len(), 5);
    }

    #[test]
    fn matching_is_exact() {
        let dataset = Dataset::from_text_rows(
            &["Client", "Sample Category", "Conclusion", "Parameter"],
            &[
                ["acme", "Water", "Pass", "pH"],
                ["Acme", "Water", "Pass", "pH"],
                ["Acme ", "Water", "Pass", "pH"],
                ["Acme Labs", "Water", "Pass", "pH"],
            ],
        )
        .unwrap();
        let selection = FilterSelection {
            client: Selection::value("Acme"),
            ..FilterSelection::all()
        };

        let (table, options) = apply_filters(&dataset, &selection);
        assert_eq!(clients(&table), vec!["Acme"]);
        assert_eq!(options.clients.len(), 4);
    }

    #[test]
    fn reapplying_a_selection_is_idempotent() {
        let dataset = sample();
        let selections = [
            FilterSelection::all(),
            FilterSelection {
                client: Selection::value("A"),
                ..FilterSelection::all()
            },
            FilterSelection {
                client: Selection::value("A"),
                category: Selection::value("Water"),
                conclusion: Selection::value("Pass"),
            },
            FilterSelection {
                client: Selection::value("Z"),
                ..FilterSelection::all()
            },
        ];

        for selection in selections {
            let once = apply_filters(&dataset, &selection).0.to_dataset();
            let twice = apply_filters(&once, &selection).0.to_dataset();
            assert_eq!(once, twice, "selection {selection:?}");
        }
    }

    #[test]
    fn empty_dataset_offers_only_wildcard() {
        let dataset = Dataset::empty();
        let (table, options) = apply_filters(&dataset, &FilterSelection::all());

        assert!(table.records.is_empty());
        assert_eq!(FilterOptions::choices(&options.clients), vec![WILDCARD]);
    }

    #[test]
    fn wildcard_spelled_value_is_folded() {
        let values = vec!["Water".to_string(), "All".to_string()];
        assert_eq!(FilterOptions::choices(&values), vec!["All", "Water"]);
    }

    #[test]
    fn choices_map_back_to_selections() {
        assert_eq!(Selection::from_choice("All"), Selection::All);
        assert_eq!(Selection::from_choice("Water"), Selection::value("Water"));
        assert_eq!(Selection::value("Water").label(), "Water");
        assert_eq!(Selection::All.label(), WILDCARD);
    }
}
