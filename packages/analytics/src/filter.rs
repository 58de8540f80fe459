//! Jurisdiction filtering.

use crime_dash_dataset::{ALL_JURISDICTIONS, Dataset};
use crime_dash_models::CrimeRecord;

use crate::AnalyticsError;

/// Selects the records matching `jurisdiction`, preserving source order.
///
/// The [`ALL_JURISDICTIONS`] sentinel selects every record. The subset
/// borrows from the dataset, so the caller can never mutate the original
/// records through it.
///
/// # Errors
///
/// Returns [`AnalyticsError::UnknownJurisdiction`] if `jurisdiction` is
/// neither the sentinel nor present in the dataset.
pub fn filter<'a>(
    dataset: &'a Dataset,
    jurisdiction: &str,
) -> Result<Vec<&'a CrimeRecord>, AnalyticsError> {
    if jurisdiction == ALL_JURISDICTIONS {
        return Ok(dataset.records().iter().collect());
    }

    if !dataset.has_jurisdiction(jurisdiction) {
        return Err(AnalyticsError::UnknownJurisdiction {
            jurisdiction: jurisdiction.to_owned(),
        });
    }

    Ok(dataset
        .records()
        .iter()
        .filter(|record| record.jurisdiction == jurisdiction)
        .collect())
}
