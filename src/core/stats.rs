//! Aggregations over the query engine output.
//!
//! Every function takes the full dataset plus the active filter, runs one
//! query with a fixed column set / time mode, and reduces it to a typed value.
//! An empty filtered result yields `AppError::EmptyResult`.

use super::mode::{frequencies, mode, most_frequent};
use super::query::query;
use crate::errors::{AppError, AppResult};
use crate::models::{Column, Dataset, Filter, TimeMode};
use crate::utils::date::weekday_name;
use chrono::{Datelike, Timelike};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TripDuration {
    pub total: f64,
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationPair {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthYears {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// Most frequent start month.
pub fn popular_month(ds: &Dataset, filter: Filter) -> AppResult<u32> {
    let r = query(ds, filter, &[Column::StartTime], TimeMode::Start)?.non_empty()?;
    mode(r.months()).ok_or(AppError::EmptyResult)
}

/// Most frequent weekday name of the start time.
pub fn popular_day(ds: &Dataset, filter: Filter) -> AppResult<String> {
    let r = query(ds, filter, &[Column::StartTime], TimeMode::Start)?.non_empty()?;
    let starts = r.timestamps(Column::StartTime)?;
    mode(starts.iter().map(|t| weekday_name(t.weekday())))
        .map(str::to_string)
        .ok_or(AppError::EmptyResult)
}

/// Most frequent start hour (0-23).
pub fn popular_hour(ds: &Dataset, filter: Filter) -> AppResult<u32> {
    let r = query(ds, filter, &[Column::StartTime], TimeMode::Start)?.non_empty()?;
    let starts = r.timestamps(Column::StartTime)?;
    mode(starts.iter().map(|t| t.hour())).ok_or(AppError::EmptyResult)
}

pub fn trip_duration(ds: &Dataset, filter: Filter) -> AppResult<TripDuration> {
    let r = query(ds, filter, &[Column::TripDuration], TimeMode::Start)?.non_empty()?;
    let durations = r.numbers(Column::TripDuration)?;
    if durations.is_empty() {
        return Err(AppError::EmptyResult);
    }
    let total: f64 = durations.iter().sum();
    Ok(TripDuration {
        total,
        average: total / durations.len() as f64,
    })
}

/// Most popular start and end station.
///
/// The end station is taken from trips whose *end* time falls in the filter,
/// so a trip crossing midnight at a month boundary counts for the end month.
pub fn popular_stations(ds: &Dataset, filter: Filter) -> AppResult<StationPair> {
    let starts = query(ds, filter, &[Column::StartStation], TimeMode::Start)?.non_empty()?;
    let start = mode(starts.texts(Column::StartStation)?).ok_or(AppError::EmptyResult)?;

    let ends = query(ds, filter, &[Column::EndStation], TimeMode::End)?.non_empty()?;
    let end = mode(ends.texts(Column::EndStation)?).ok_or(AppError::EmptyResult)?;

    Ok(StationPair {
        start: start.to_string(),
        end: end.to_string(),
    })
}

/// Most frequent (start station, end station) combination.
pub fn popular_trip(ds: &Dataset, filter: Filter) -> AppResult<StationPair> {
    let r = query(
        ds,
        filter,
        &[Column::StartStation, Column::EndStation],
        TimeMode::Start,
    )?
    .non_empty()?;
    let (start, end) = mode(r.text_pairs(Column::StartStation, Column::EndStation)?)
        .ok_or(AppError::EmptyResult)?;
    Ok(StationPair {
        start: start.to_string(),
        end: end.to_string(),
    })
}

fn category_counts(ds: &Dataset, filter: Filter, column: Column) -> AppResult<BTreeMap<String, usize>> {
    let r = query(ds, filter, &[column], TimeMode::Start)?.non_empty()?;
    let counts = frequencies(r.texts(column)?.into_iter().map(str::to_string));
    if counts.is_empty() {
        return Err(AppError::EmptyResult);
    }
    Ok(counts)
}

/// Trips per user type, keys in ascending order.
pub fn users(ds: &Dataset, filter: Filter) -> AppResult<BTreeMap<String, usize>> {
    category_counts(ds, filter, Column::UserType)
}

/// Trips per gender; trips without gender are not counted.
pub fn gender(ds: &Dataset, filter: Filter) -> AppResult<BTreeMap<String, usize>> {
    category_counts(ds, filter, Column::Gender)
}

/// Earliest, latest and most common birth year among trips that have one.
pub fn birth_years(ds: &Dataset, filter: Filter) -> AppResult<BirthYears> {
    let r = query(ds, filter, &[Column::BirthYear], TimeMode::Start)?.non_empty()?;
    let counts = frequencies(r.years(Column::BirthYear)?);

    let (Some(earliest), Some(most_recent)) = (
        counts.keys().next().copied(),
        counts.keys().next_back().copied(),
    ) else {
        return Err(AppError::EmptyResult);
    };
    let most_common = most_frequent(counts).ok_or(AppError::EmptyResult)?;

    Ok(BirthYears {
        earliest,
        most_recent,
        most_common,
    })
}
