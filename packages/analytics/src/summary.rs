//! Headline scalars: total count and the modal crime type.

use crime_dash_models::{CategoryCount, CrimeRecord};

use crate::counts;

/// Computes the headline statistics for a subset of records.
///
/// The second element is the mode of the non-null `crime_type` values, or
/// `None` when the subset is empty or every crime type is missing (rendered
/// as "not available" by a presentation layer). Ties resolve to the label
/// encountered first in the subset's iteration order.
#[must_use]
pub fn summarize(records: &[&CrimeRecord]) -> (u64, Option<CategoryCount>) {
    let total = records.len() as u64;

    let tallies = counts::tally(records, |r| r.crime_type.as_deref());
    let mut top: Option<&CategoryCount> = None;
    for entry in &tallies {
        if top.is_none_or(|current| entry.count > current.count) {
            top = Some(entry);
        }
    }

    (total, top.cloned())
}
