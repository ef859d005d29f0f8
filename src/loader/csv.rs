use crate::errors::{AppError, AppResult};
use crate::models::{Column, Dataset, TripRecord};
use crate::utils::date::parse_timestamp;
use chrono::NaiveDateTime;
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub fn read_path(path: &Path) -> AppResult<Dataset> {
    let file = File::open(path).map_err(|e| {
        AppError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {e}", path.display()),
        ))
    })?;
    read_dataset(file)
}

/// Parse a trip CSV. Columns are located by header; unknown columns (such as
/// the unnamed index column) are ignored.
pub fn read_dataset<R: Read>(reader: R) -> AppResult<Dataset> {
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = rdr.headers()?.clone();
    let index: HashMap<Column, usize> = headers
        .iter()
        .enumerate()
        .filter_map(|(i, h)| Column::from_header(h).map(|c| (c, i)))
        .collect();

    if let Some(missing) = Column::REQUIRED.iter().find(|c| !index.contains_key(*c)) {
        return Err(AppError::InvalidColumn(missing.header().to_string()));
    }

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let line = row.position().map_or(0, |p| p.line());
        records.push(parse_row(&row, &index, line)?);
    }

    debug!(rows = records.len(), columns = index.len(), "csv parsed");
    Ok(Dataset::new(index.keys().copied(), records))
}

fn cell<'r>(row: &'r StringRecord, index: &HashMap<Column, usize>, col: Column) -> Option<&'r str> {
    index
        .get(&col)
        .and_then(|i| row.get(*i))
        .filter(|s| !s.is_empty())
}

fn required<'r>(row: &'r StringRecord, index: &HashMap<Column, usize>, col: Column) -> &'r str {
    cell(row, index, col).unwrap_or("")
}

/// Birth years are stored as floats ("1992.0") in some files; anything with a
/// fractional part is rejected.
fn year(value: &str, line: u64) -> AppResult<i32> {
    let y = number(value, line)?;
    if y.fract() != 0.0 || y < f64::from(i32::MIN) || y > f64::from(i32::MAX) {
        return Err(AppError::InvalidNumber {
            line,
            value: value.to_string(),
        });
    }
    Ok(y as i32)
}

fn timestamp(value: &str, line: u64) -> AppResult<NaiveDateTime> {
    parse_timestamp(value).ok_or_else(|| AppError::InvalidTimestamp {
        line,
        value: value.to_string(),
    })
}

fn number(value: &str, line: u64) -> AppResult<f64> {
    value.parse::<f64>().map_err(|_| AppError::InvalidNumber {
        line,
        value: value.to_string(),
    })
}

fn parse_row(row: &StringRecord, index: &HashMap<Column, usize>, line: u64) -> AppResult<TripRecord> {
    let start_time = timestamp(required(row, index, Column::StartTime), line)?;
    let end_time = timestamp(required(row, index, Column::EndTime), line)?;
    let trip_duration = number(required(row, index, Column::TripDuration), line)?;

    let birth_year = cell(row, index, Column::BirthYear)
        .map(|v| year(v, line))
        .transpose()?;

    Ok(TripRecord::new(
        start_time,
        end_time,
        trip_duration,
        cell(row, index, Column::StartStation),
        cell(row, index, Column::EndStation),
        cell(row, index, Column::UserType),
    )
    .with_demographics(cell(row, index, Column::Gender), birth_year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    const CHICAGO: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1423854,2017-06-23 15:09:32,2017-06-23 15:14:53,321,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0
955915,2017-05-25 18:19:03,2017-05-25 18:45:53,1610,Theater on the Lake,Sheffield Ave & Waveland Ave,Subscriber,,
";

    const WASHINGTON: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
";

    #[test]
    fn reads_full_schema() {
        let ds = read_dataset(CHICAGO.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert!(ds.has_column(Column::Gender));
        assert!(ds.has_column(Column::BirthYear));

        let first = &ds.records()[0];
        assert_eq!(first.start_time.month(), 6);
        assert_eq!(first.trip_duration, 321.0);
        assert_eq!(first.gender.as_deref(), Some("Male"));
        assert_eq!(first.birth_year, Some(1992));

        let second = &ds.records()[1];
        assert_eq!(second.gender, None);
        assert_eq!(second.birth_year, None);
    }

    #[test]
    fn reads_schema_without_demographics() {
        let ds = read_dataset(WASHINGTON.as_bytes()).unwrap();
        assert_eq!(ds.len(), 1);
        assert!(!ds.has_column(Column::Gender));
        assert!(!ds.has_column(Column::BirthYear));
        assert_eq!(ds.records()[0].trip_duration, 489.066);
    }

    #[test]
    fn missing_required_header() {
        let data = "Start Time,End Time\n2017-01-01 00:00:00,2017-01-01 00:01:00\n";
        let err = read_dataset(data.as_bytes()).unwrap_err();
        assert!(matches!(err, AppError::InvalidColumn(c) if c == "Trip Duration"));
    }

    #[test]
    fn bad_timestamp_reports_line() {
        let data = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-01-01 00:00:00,2017-01-01 00:01:00,60,A,B,Subscriber
yesterday,2017-01-01 00:01:00,60,A,B,Subscriber
";
        let err = read_dataset(data.as_bytes()).unwrap_err();
        assert!(matches!(err, AppError::InvalidTimestamp { line: 3, .. }));
    }

    #[test]
    fn blank_categories_are_missing() {
        let data = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-01-01 00:00:00,2017-01-01 00:01:00,60,A,B,Subscriber
2017-01-01 00:00:00,2017-01-01 00:01:00,60,A,B,
2017-01-01 00:00:00,2017-01-01 00:01:00,60,,,Customer
";
        let ds = read_dataset(data.as_bytes()).unwrap();
        let r = ds.records();
        assert_eq!(r[0].start_station.as_deref(), Some("A"));
        assert_eq!(r[1].user_type, None);
        assert_eq!(r[2].start_station, None);
        assert_eq!(r[2].end_station, None);
        assert_eq!(r[2].user_type.as_deref(), Some("Customer"));
    }

    #[test]
    fn fractional_birth_year_is_rejected() {
        let data = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
2017-01-01 00:00:00,2017-01-01 00:01:00,60,A,B,Subscriber,Male,1992.7
";
        assert!(matches!(
            read_dataset(data.as_bytes()),
            Err(AppError::InvalidNumber { line: 2, value }) if value == "1992.7"
        ));
    }

    #[test]
    fn bad_duration() {
        let data = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-01-01 00:00:00,2017-01-01 00:01:00,long,A,B,Subscriber
";
        assert!(matches!(
            read_dataset(data.as_bytes()),
            Err(AppError::InvalidNumber { line: 2, .. })
        ));
    }
}
