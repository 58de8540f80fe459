#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Shared record and result types for the crime dashboard aggregation engine.
//!
//! [`CrimeRecord`] is the canonical in-memory incident format produced by the
//! dataset loader. [`AggregationResult`] is the structured result set the
//! engine returns per request; a presentation layer renders each field as a
//! chart or headline card.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// One crime incident, normalized from a source row.
///
/// Records are immutable once loaded; the dataset owns them for the lifetime
/// of the process. Fields other than `jurisdiction` and `occurred_at` are
/// optional — incidents with missing demographics or coordinates are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrimeRecord {
    /// City the incident is attributed to.
    pub jurisdiction: String,
    /// Case status (e.g., "Closed" or "Open").
    pub case_closed: Option<String>,
    /// Race/ethnicity of the involved party, as reported by the source.
    pub race_ethnicity: Option<String>,
    /// Gender of the involved party, as reported by the source.
    pub gender: Option<String>,
    /// When the incident occurred.
    pub occurred_at: DateTime<Utc>,
    /// Weapon involved, if any was recorded.
    pub weapon: Option<String>,
    /// Crime type label (e.g., "Theft", "Assault").
    pub crime_type: Option<String>,
    /// Latitude (WGS84). `None` if the source lacks coordinates.
    pub latitude: Option<f64>,
    /// Longitude (WGS84). `None` if the source lacks coordinates.
    pub longitude: Option<f64>,
}

/// Count of incidents sharing one category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    /// Category label (case status, race, gender, weapon, or crime type).
    pub category: String,
    /// Number of incidents.
    pub count: u64,
}

/// Count of incidents in one hour-of-day bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourCount {
    /// Hour of day, 0-23.
    pub hour: u8,
    /// Number of incidents in this hour.
    pub count: u64,
}

/// Calendar month, ordered Jan through Dec.
///
/// The `Display`/serde label is the three-letter abbreviation used on chart
/// axes ("Jan", "Feb", ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Month {
    /// January
    Jan,
    /// February
    Feb,
    /// March
    Mar,
    /// April
    Apr,
    /// May
    May,
    /// June
    Jun,
    /// July
    Jul,
    /// August
    Aug,
    /// September
    Sep,
    /// October
    Oct,
    /// November
    Nov,
    /// December
    Dec,
}

impl Month {
    /// All months in fixed calendar order.
    pub const ALL: [Self; 12] = [
        Self::Jan,
        Self::Feb,
        Self::Mar,
        Self::Apr,
        Self::May,
        Self::Jun,
        Self::Jul,
        Self::Aug,
        Self::Sep,
        Self::Oct,
        Self::Nov,
        Self::Dec,
    ];

    /// Creates a month from a 1-based month number (chrono's convention).
    #[must_use]
    pub const fn from_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(Self::Jan),
            2 => Some(Self::Feb),
            3 => Some(Self::Mar),
            4 => Some(Self::Apr),
            5 => Some(Self::May),
            6 => Some(Self::Jun),
            7 => Some(Self::Jul),
            8 => Some(Self::Aug),
            9 => Some(Self::Sep),
            10 => Some(Self::Oct),
            11 => Some(Self::Nov),
            12 => Some(Self::Dec),
            _ => None,
        }
    }
}

/// Count of incidents in one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthCount {
    /// Calendar month.
    pub month: Month,
    /// Number of incidents in this month, zero when no incidents occurred.
    pub count: u64,
}

/// A geo-tagged incident for map rendering.
///
/// Pass-through of the record fields a map popup shows. Coordinates stay
/// optional: the projector never drops records, so a renderer must discard
/// or otherwise handle points without coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    /// City the incident is attributed to.
    pub jurisdiction: String,
    /// Crime type label.
    pub crime_type: Option<String>,
    /// Weapon involved.
    pub weapon: Option<String>,
    /// Gender of the involved party.
    pub gender: Option<String>,
    /// Case status.
    pub case_closed: Option<String>,
    /// Latitude (WGS84).
    pub latitude: Option<f64>,
    /// Longitude (WGS84).
    pub longitude: Option<f64>,
}

/// The full structured result set for one aggregation request.
///
/// Produced fresh per request and owned by the caller; never shared or
/// mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationResult {
    /// Case status breakdown, descending by count.
    pub status_counts: Vec<CategoryCount>,
    /// Race/ethnicity breakdown, descending by count.
    pub race_counts: Vec<CategoryCount>,
    /// Gender breakdown, descending by count.
    pub gender_counts: Vec<CategoryCount>,
    /// Incidents per hour of day, ascending by hour. Hours with no
    /// incidents are absent; a consumer treats missing hours as zero.
    pub hourly_counts: Vec<HourCount>,
    /// Incidents per calendar month, always all 12 months in Jan..Dec
    /// order, zero-filled so chart axes stay consistent across requests.
    pub monthly_counts: Vec<MonthCount>,
    /// Weapon usage league table, ascending by count.
    pub weapon_usage: Vec<CategoryCount>,
    /// Geo-tagged incidents for the map, one per record in the subset.
    pub map_points: Vec<GeoPoint>,
    /// Total incidents in the filtered subset.
    pub total_count: u64,
    /// Most frequent crime type and its count. `None` when the subset is
    /// empty or every record's crime type is missing; a presentation layer
    /// renders that as "not available".
    pub top_crime_type: Option<CategoryCount>,
}
