//! Per-category aggregation: counts, stat means, filtering.
//!
//! All aggregates are derived views over the current record set and are
//! recomputed on every render.

use crate::record::{Record, StatAxis};
use pokedash_core::stats;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A category and how many records belong to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// Primary category label
    pub category: String,
    /// Number of member records
    pub count: usize,
}

/// A category with per-stat arithmetic means over its members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAggregate {
    /// Primary category label
    pub category: String,
    /// Number of member records
    pub count: usize,
    means: [f64; 6],
}

impl CategoryAggregate {
    /// Mean value of one stat axis across the category's members.
    #[must_use]
    pub fn stat_mean(&self, axis: StatAxis) -> f64 {
        let index = StatAxis::ALL
            .iter()
            .position(|a| *a == axis)
            .unwrap_or_default();
        self.means[index]
    }
}

/// The active category filter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Filter {
    /// No filtering: every record passes
    #[default]
    All,
    /// Only records whose primary category matches
    Category(String),
}

impl Filter {
    /// Whether a record passes the filter.
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => record.primary_type == *category,
        }
    }
}

/// Count records per primary category, sorted by descending count.
///
/// Ties are broken alphabetically so repeated renders are deterministic.
#[must_use]
pub fn category_counts(records: &[Record]) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.primary_type.as_str()).or_default() += 1;
    }
    let mut result: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect();
    result.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));
    result
}

/// Compute per-category stat means, sorted by descending member count.
#[must_use]
pub fn aggregate_by_category(records: &[Record]) -> Vec<CategoryAggregate> {
    let mut groups: BTreeMap<&str, Vec<&Record>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.primary_type.as_str())
            .or_default()
            .push(record);
    }

    let mut result: Vec<CategoryAggregate> = groups
        .into_iter()
        .map(|(category, members)| {
            let mut means = [0.0; 6];
            for (slot, axis) in means.iter_mut().zip(StatAxis::ALL) {
                let values: Vec<f64> = members.iter().map(|r| r.stat(axis)).collect();
                *slot = stats::mean(&values).unwrap_or_default();
            }
            CategoryAggregate {
                category: category.to_string(),
                count: members.len(),
                means,
            }
        })
        .collect();
    result.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));
    result
}

/// Records passing the filter, in dataset order.
#[must_use]
pub fn filter_records<'a>(records: &'a [Record], filter: &Filter) -> Vec<&'a Record> {
    records.iter().filter(|r| filter.matches(r)).collect()
}

/// Distinct primary categories, sorted alphabetically.
#[must_use]
pub fn distinct_categories(records: &[Record]) -> Vec<String> {
    let mut categories: Vec<String> = records
        .iter()
        .map(|r| r.primary_type.clone())
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .collect();
    categories.sort();
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, primary: &str, hp: f64, attack: f64) -> Record {
        Record {
            name: name.to_string(),
            primary_type: primary.to_string(),
            secondary_type: None,
            total: 300.0,
            hp,
            attack,
            defense: 50.0,
            sp_atk: 50.0,
            sp_def: 50.0,
            speed: 50.0,
            catch_rate: 45.0,
        }
    }

    fn sample_set() -> Vec<Record> {
        vec![
            record("a1", "Water", 40.0, 60.0),
            record("a2", "Water", 60.0, 80.0),
            record("b1", "Fire", 70.0, 90.0),
        ]
    }

    #[test]
    fn counts_sum_to_record_total_and_sort_descending() {
        let records = sample_set();
        let counts = category_counts(&records);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].category, "Water");
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[1].category, "Fire");
        let total: usize = counts.iter().map(|c| c.count).sum();
        assert_eq!(total, records.len());
    }

    #[test]
    fn count_ties_break_alphabetically() {
        let records = vec![
            record("z", "Water", 1.0, 1.0),
            record("y", "Fire", 1.0, 1.0),
        ];
        let counts = category_counts(&records);
        assert_eq!(counts[0].category, "Fire");
        assert_eq!(counts[1].category, "Water");
    }

    #[test]
    fn aggregates_compute_arithmetic_means() {
        let aggregates = aggregate_by_category(&sample_set());
        let water = aggregates
            .iter()
            .find(|a| a.category == "Water")
            .expect("Water aggregate");
        assert_eq!(water.count, 2);
        assert_eq!(water.stat_mean(StatAxis::Hp), 50.0);
        assert_eq!(water.stat_mean(StatAxis::Attack), 70.0);
        assert_eq!(water.stat_mean(StatAxis::Speed), 50.0);
    }

    #[test]
    fn filter_all_is_identity() {
        let records = sample_set();
        let filtered = filter_records(&records, &Filter::All);
        assert_eq!(filtered.len(), records.len());
    }

    #[test]
    fn filter_by_category_selects_subset() {
        let records = sample_set();
        let filtered = filter_records(&records, &Filter::Category("Water".to_string()));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.primary_type == "Water"));
    }

    #[test]
    fn filter_round_trip_restores_full_set() {
        // Selecting All after any category filter restores everything.
        let records = sample_set();
        let narrowed = filter_records(&records, &Filter::Category("Fire".to_string()));
        assert_eq!(narrowed.len(), 1);
        let restored = filter_records(&records, &Filter::All);
        assert_eq!(restored.len(), records.len());
    }

    #[test]
    fn distinct_categories_sorted() {
        let categories = distinct_categories(&sample_set());
        assert_eq!(categories, vec!["Fire".to_string(), "Water".to_string()]);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn counts_always_sum_to_record_total(
                assignments in proptest::collection::vec(0u8..6, 1..80),
            ) {
                let names = ["Water", "Fire", "Grass", "Rock", "Ice", "Dark"];
                let records: Vec<Record> = assignments
                    .iter()
                    .enumerate()
                    .map(|(i, t)| record(&format!("r{i}"), names[*t as usize], 50.0, 50.0))
                    .collect();
                let counts = category_counts(&records);
                let total: usize = counts.iter().map(|c| c.count).sum();
                prop_assert_eq!(total, records.len());
                for pair in counts.windows(2) {
                    prop_assert!(pair[0].count >= pair[1].count);
                }
            }
        }
    }
}
