//! Categorical frequency tables.
//!
//! Groups records by a string field and counts occurrences. Records whose
//! field is missing are excluded from the table but still count toward the
//! request's total, so table sums plus null counts always reconcile.

use std::collections::HashMap;

use crime_dash_models::{CategoryCount, CrimeRecord};

/// Tallies the non-null values of `field`, returning one entry per distinct
/// label in first-encountered order.
pub(crate) fn tally<F>(records: &[&CrimeRecord], field: F) -> Vec<CategoryCount>
where
    F: for<'a> Fn(&'a CrimeRecord) -> Option<&'a str>,
{
    let mut entries: Vec<CategoryCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for &record in records {
        let Some(label) = field(record) else {
            continue;
        };
        if let Some(&i) = index.get(label) {
            entries[i].count += 1;
        } else {
            index.insert(label.to_owned(), entries.len());
            entries.push(CategoryCount {
                category: label.to_owned(),
                count: 1,
            });
        }
    }

    entries
}

/// Frequency table for one categorical field, ordered by descending count.
///
/// Ties keep first-encountered label order (the sort is stable), matching
/// the frequency-table convention for the status, race, and gender
/// breakdowns.
#[must_use]
pub fn count_by<F>(records: &[&CrimeRecord], field: F) -> Vec<CategoryCount>
where
    F: for<'a> Fn(&'a CrimeRecord) -> Option<&'a str>,
{
    let mut entries = tally(records, field);
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

#[cfg(test)]
mod tests {
    use crate::test_support::record;

    use super::*;

    #[test]
    fn orders_by_descending_count() {
        let records = vec![
            record("X", Some("Theft")),
            record("X", Some("Assault")),
            record("X", Some("Theft")),
            record("X", Some("Theft")),
            record("X", Some("Assault")),
            record("X", Some("Fraud")),
        ];
        let refs: Vec<&_> = records.iter().collect();

        let table = count_by(&refs, |r| r.crime_type.as_deref());

        let labels: Vec<&str> = table.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(labels, ["Theft", "Assault", "Fraud"]);
        assert_eq!(table[0].count, 3);
    }

    #[test]
    fn ties_keep_first_encountered_order() {
        let records = vec![
            record("X", Some("Vandalism")),
            record("X", Some("Arson")),
            record("X", Some("Arson")),
            record("X", Some("Vandalism")),
        ];
        let refs: Vec<&_> = records.iter().collect();

        let table = count_by(&refs, |r| r.crime_type.as_deref());

        let labels: Vec<&str> = table.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(labels, ["Vandalism", "Arson"]);
    }

    #[test]
    fn null_fields_are_excluded_from_the_table() {
        let records = vec![
            record("X", Some("Theft")),
            record("X", None),
            record("X", None),
        ];
        let refs: Vec<&_> = records.iter().collect();

        let table = count_by(&refs, |r| r.crime_type.as_deref());

        assert_eq!(table.len(), 1);
        let sum: u64 = table.iter().map(|c| c.count).sum();
        assert_eq!(sum, 1);
    }

    #[test]
    fn empty_input_yields_empty_table() {
        let table = count_by(&[], |r| r.crime_type.as_deref());
        assert!(table.is_empty());
    }
}
