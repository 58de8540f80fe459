//! Usage ranking: grouped counts sorted ascending into a league table.

use crime_dash_models::{CategoryCount, CrimeRecord};

use crate::counts;

/// League table for one categorical field, ordered by ascending count.
///
/// The ascending order is a functional requirement of the result, not a
/// rendering detail: a horizontal ranking chart reads the sequence as-is and
/// places the largest entry last. Ties keep first-encountered label order.
/// Used on the `weapon` field; records without one are excluded.
#[must_use]
pub fn rank_by<F>(records: &[&CrimeRecord], field: F) -> Vec<CategoryCount>
where
    F: for<'a> Fn(&'a CrimeRecord) -> Option<&'a str>,
{
    let mut entries = counts::tally(records, field);
    entries.sort_by(|a, b| a.count.cmp(&b.count));
    entries
}

#[cfg(test)]
mod tests {
    use crate::test_support::record;

    use super::*;

    #[test]
    fn ranks_ascending_by_count() {
        let mut records = vec![
            record("X", None),
            record("X", None),
            record("X", None),
            record("X", None),
            record("X", None),
            record("X", None),
        ];
        let weapons = ["Firearm", "Knife", "Firearm", "Firearm", "Blunt", "Knife"];
        for (r, weapon) in records.iter_mut().zip(weapons) {
            r.weapon = Some(weapon.to_owned());
        }
        let refs: Vec<&_> = records.iter().collect();

        let table = rank_by(&refs, |r| r.weapon.as_deref());

        let counts: Vec<u64> = table.iter().map(|c| c.count).collect();
        assert_eq!(counts, [1, 2, 3]);
        assert_eq!(table[0].category, "Blunt");
        assert_eq!(table[2].category, "Firearm");
    }

    #[test]
    fn sequence_is_non_decreasing() {
        let mut records: Vec<_> = (0..10).map(|_| record("X", None)).collect();
        let weapons = ["A", "B", "A", "C", "B", "A", "D", "C", "B", "A"];
        for (r, weapon) in records.iter_mut().zip(weapons) {
            r.weapon = Some(weapon.to_owned());
        }
        let refs: Vec<&_> = records.iter().collect();

        let table = rank_by(&refs, |r| r.weapon.as_deref());

        assert!(table.windows(2).all(|w| w[0].count <= w[1].count));
    }
}
