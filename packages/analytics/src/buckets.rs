//! Time bucketing: hour-of-day and calendar-month counts.

use chrono::{Datelike as _, Timelike as _};
use crime_dash_models::{CrimeRecord, HourCount, Month, MonthCount};

/// Incidents per hour of day, ascending by hour.
///
/// Hours with no incidents are absent from the output; a consumer must
/// treat missing hours as zero.
#[must_use]
pub fn hourly(records: &[&CrimeRecord]) -> Vec<HourCount> {
    let mut buckets = [0_u64; 24];
    for record in records {
        buckets[record.occurred_at.hour() as usize] += 1;
    }

    (0_u8..24)
        .zip(buckets)
        .filter(|&(_, count)| count > 0)
        .map(|(hour, count)| HourCount { hour, count })
        .collect()
}

/// Incidents per calendar month, always all 12 months in Jan..Dec order.
///
/// Months with no incidents are included with count 0 so that chart axes
/// stay identical across jurisdictions and requests.
#[must_use]
pub fn monthly(records: &[&CrimeRecord]) -> Vec<MonthCount> {
    let mut buckets = [0_u64; 12];
    for record in records {
        buckets[record.occurred_at.month0() as usize] += 1;
    }

    Month::ALL
        .into_iter()
        .zip(buckets)
        .map(|(month, count)| MonthCount { month, count })
        .collect()
}
