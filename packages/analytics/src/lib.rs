#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Aggregation engine for the crime dashboard.
//!
//! [`aggregate`] is the whole API: a pure, synchronous transformation from
//! (dataset, jurisdiction filter) to an [`AggregationResult`]. The dataset is
//! immutable and each call allocates its own filtered subset and result, so
//! concurrent callers need no coordination. The five aggregators applied to
//! the filtered subset are mutually independent; none observes another's
//! output.

pub mod buckets;
pub mod counts;
pub mod filter;
pub mod geo;
pub mod rank;
pub mod summary;

use crime_dash_dataset::Dataset;
use crime_dash_models::AggregationResult;
use thiserror::Error;

/// Errors that can occur during an aggregation request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    /// The requested jurisdiction does not appear in the dataset. Never
    /// silently treated as an empty match.
    #[error("unknown jurisdiction '{jurisdiction}'")]
    UnknownJurisdiction {
        /// The jurisdiction that was requested.
        jurisdiction: String,
    },
}

/// Runs one aggregation request: filters the dataset down to the requested
/// jurisdiction and applies every aggregator to the subset.
///
/// Passing [`crime_dash_dataset::ALL_JURISDICTIONS`] selects every record.
/// All-or-nothing per request: no partial result is ever returned.
///
/// # Errors
///
/// Returns [`AnalyticsError::UnknownJurisdiction`] if the jurisdiction is
/// neither the sentinel nor a member of the dataset's jurisdiction set.
pub fn aggregate(
    dataset: &Dataset,
    jurisdiction: &str,
) -> Result<AggregationResult, AnalyticsError> {
    let subset = filter::filter(dataset, jurisdiction)?;
    let (total_count, top_crime_type) = summary::summarize(&subset);

    Ok(AggregationResult {
        status_counts: counts::count_by(&subset, |r| r.case_closed.as_deref()),
        race_counts: counts::count_by(&subset, |r| r.race_ethnicity.as_deref()),
        gender_counts: counts::count_by(&subset, |r| r.gender.as_deref()),
        hourly_counts: buckets::hourly(&subset),
        monthly_counts: buckets::monthly(&subset),
        weapon_usage: rank::rank_by(&subset, |r| r.weapon.as_deref()),
        map_points: geo::project(&subset),
        total_count,
        top_crime_type,
    })
}
