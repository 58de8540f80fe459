//! Map point projection.

use crime_dash_models::{CrimeRecord, GeoPoint};

/// Projects every record to a [`GeoPoint`], including records without
/// coordinates.
///
/// Pure pass-through: the engine never silently drops data, so discarding
/// points with missing coordinates is the map renderer's decision.
#[must_use]
pub fn project(records: &[&CrimeRecord]) -> Vec<GeoPoint> {
    records
        .iter()
        .map(|record| GeoPoint {
            jurisdiction: record.jurisdiction.clone(),
            crime_type: record.crime_type.clone(),
            weapon: record.weapon.clone(),
            gender: record.gender.clone(),
            case_closed: record.case_closed.clone(),
            latitude: record.latitude,
            longitude: record.longitude,
        })
        .collect()
}
