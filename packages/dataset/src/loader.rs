//! CSV row parsing into [`CrimeRecord`]s.
//!
//! Column lookup is by header name, so column order in the source file is
//! irrelevant and extra columns are ignored. Every required column must be
//! present and every row must parse; a bad row fails the whole load rather
//! than being silently dropped.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use crime_dash_models::CrimeRecord;

use crate::DatasetError;

/// Timestamp formats accepted for the `date_time` column, tried in order.
const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
];

/// Resolved header positions for the required columns.
struct Columns {
    city: usize,
    case_closed: usize,
    race_ethnicity: usize,
    gender: usize,
    date_time: usize,
    weapon: usize,
    crime_type: usize,
    latitude: usize,
    longitude: usize,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, DatasetError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|header| header == column)
                .ok_or(DatasetError::MissingColumn { column })
        };

        Ok(Self {
            city: find("city")?,
            case_closed: find("case_closed")?,
            race_ethnicity: find("race_ethnicity")?,
            gender: find("gender")?,
            date_time: find("date_time")?,
            weapon: find("weapon")?,
            crime_type: find("crime_type")?,
            latitude: find("latitude")?,
            longitude: find("longitude")?,
        })
    }
}

/// Reads every row of the CSV source into a [`CrimeRecord`].
pub(crate) fn read_records<R: std::io::Read>(
    mut reader: csv::Reader<R>,
) -> Result<Vec<CrimeRecord>, DatasetError> {
    let columns = Columns::from_headers(reader.headers()?)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let line = row.position().map_or(0, csv::Position::line);
        records.push(parse_row(&columns, &row, line)?);
    }

    Ok(records)
}

fn parse_row(
    columns: &Columns,
    row: &csv::StringRecord,
    line: u64,
) -> Result<CrimeRecord, DatasetError> {
    let field = |index: usize| row.get(index).map_or("", str::trim);

    let jurisdiction = field(columns.city);
    if jurisdiction.is_empty() {
        return Err(invalid(line, "missing city".to_owned()));
    }

    let date_time = field(columns.date_time);
    let occurred_at = parse_date_time(date_time)
        .ok_or_else(|| invalid(line, format!("unparseable date_time '{date_time}'")))?;

    Ok(CrimeRecord {
        jurisdiction: jurisdiction.to_owned(),
        case_closed: optional(field(columns.case_closed)),
        race_ethnicity: optional(field(columns.race_ethnicity)),
        gender: optional(field(columns.gender)),
        occurred_at,
        weapon: optional(field(columns.weapon)),
        crime_type: optional(field(columns.crime_type)),
        latitude: parse_coordinate(field(columns.latitude), "latitude", line)?,
        longitude: parse_coordinate(field(columns.longitude), "longitude", line)?,
    })
}

fn invalid(line: u64, message: String) -> DatasetError {
    DatasetError::InvalidRow { line, message }
}

/// Maps an empty field to `None`.
fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

/// Parses a timestamp string, trying each supported format and falling back
/// to a bare date at midnight.
fn parse_date_time(value: &str) -> Option<DateTime<Utc>> {
    for format in DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

/// Parses an optional coordinate field. Empty means absent; anything else
/// must be a valid float.
fn parse_coordinate(
    value: &str,
    column: &'static str,
    line: u64,
) -> Result<Option<f64>, DatasetError> {
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<f64>()
        .map(Some)
        .map_err(|_| invalid(line, format!("unparseable {column} '{value}'")))
}

#[cfg(test)]
mod tests {
    use crate::Dataset;

    const HEADER: &str =
        "city,case_closed,race_ethnicity,gender,date_time,weapon,crime_type,latitude,longitude";

    #[test]
    fn parses_full_rows() {
        let csv = format!(
            "{HEADER}\n\
             Fresno,Closed,Hispanic,Male,2024-03-05 14:30:00,Knife,Assault,36.7378,-119.7871\n\
             Oakland,Open,White,Female,2024-07-21 02:15:00,Firearm,Robbery,37.8044,-122.2712\n"
        );

        let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 2);
        let first = &dataset.records()[0];
        assert_eq!(first.jurisdiction, "Fresno");
        assert_eq!(first.case_closed.as_deref(), Some("Closed"));
        assert_eq!(first.crime_type.as_deref(), Some("Assault"));
        assert_eq!(first.occurred_at.to_string(), "2024-03-05 14:30:00 UTC");
        assert!((first.latitude.unwrap() - 36.7378).abs() < f64::EPSILON);
        assert!((first.longitude.unwrap() - -119.7871).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_fields_become_none() {
        let csv = format!("{HEADER}\nFresno,,,,2024-03-05 14:30:00,,,,\n");

        let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();

        let record = &dataset.records()[0];
        assert_eq!(record.case_closed, None);
        assert_eq!(record.race_ethnicity, None);
        assert_eq!(record.gender, None);
        assert_eq!(record.weapon, None);
        assert_eq!(record.crime_type, None);
        assert_eq!(record.latitude, None);
        assert_eq!(record.longitude, None);
    }

    #[test]
    fn column_order_is_irrelevant_and_extras_ignored() {
        let csv = "date_time,city,notes,longitude,latitude,crime_type,weapon,gender,race_ethnicity,case_closed\n\
                   2024-03-05 14:30:00,Fresno,some extra text,-119.7871,36.7378,Theft,None,Male,White,Open\n";

        let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();

        let record = &dataset.records()[0];
        assert_eq!(record.jurisdiction, "Fresno");
        assert_eq!(record.crime_type.as_deref(), Some("Theft"));
        assert!((record.latitude.unwrap() - 36.7378).abs() < f64::EPSILON);
    }

    #[test]
    fn accepts_iso_and_us_timestamp_formats() {
        let csv = format!(
            "{HEADER}\n\
             Fresno,Open,,,2024-03-05T14:30:00.000,,,,\n\
             Fresno,Open,,,03/05/2024 14:30,,,,\n\
             Fresno,Open,,,2024-03-05,,,,\n"
        );

        let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(
            dataset.records()[2].occurred_at.to_string(),
            "2024-03-05 00:00:00 UTC"
        );
    }

    #[test]
    fn missing_required_column_fails() {
        let csv = "city,case_closed,race_ethnicity,gender,weapon,crime_type,latitude,longitude\n";

        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();

        assert_eq!(err.to_string(), "missing required column 'date_time'");
    }

    #[test]
    fn unparseable_timestamp_identifies_the_row() {
        let csv = format!(
            "{HEADER}\n\
             Fresno,Open,,,2024-03-05 14:30:00,,,,\n\
             Oakland,Open,,,not-a-date,,,,\n"
        );

        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();

        assert_eq!(err.to_string(), "row 3: unparseable date_time 'not-a-date'");
    }

    #[test]
    fn unparseable_coordinate_identifies_the_row() {
        let csv = format!("{HEADER}\nFresno,Open,,,2024-03-05 14:30:00,,,north,-119.7\n");

        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();

        assert_eq!(err.to_string(), "row 2: unparseable latitude 'north'");
    }

    #[test]
    fn missing_city_fails() {
        let csv = format!("{HEADER}\n,Open,,,2024-03-05 14:30:00,,,,\n");

        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();

        assert_eq!(err.to_string(), "row 2: missing city");
    }
}
