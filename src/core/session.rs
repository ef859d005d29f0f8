use super::stats::{self, BirthYears, StationPair, TripDuration};
use crate::errors::AppResult;
use crate::models::{Column, Dataset, Filter, TimePeriod};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Statistic {
    PopularMonth,
    PopularDay,
    PopularHour,
    TripDuration,
    PopularStations,
    PopularTrip,
    UserTypes,
    Gender,
    BirthYears,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    Month(u32),
    Weekday(String),
    Hour(u32),
    Duration(TripDuration),
    Stations(StationPair),
    Counts(BTreeMap<String, usize>),
    BirthYears(BirthYears),
}

impl Statistic {
    pub const ALL: [Statistic; 9] = [
        Statistic::PopularMonth,
        Statistic::PopularDay,
        Statistic::PopularHour,
        Statistic::TripDuration,
        Statistic::PopularStations,
        Statistic::PopularTrip,
        Statistic::UserTypes,
        Statistic::Gender,
        Statistic::BirthYears,
    ];

    /// Statistics worth computing for a period on this dataset.
    ///
    /// A month filter makes "popular month" trivial; a day filter also makes
    /// "popular weekday" trivial. Demographic statistics need their column.
    pub fn plan(period: TimePeriod, ds: &Dataset) -> Vec<Statistic> {
        Statistic::ALL
            .into_iter()
            .filter(|s| match s {
                Statistic::PopularMonth => period == TimePeriod::None,
                Statistic::PopularDay => period != TimePeriod::Day,
                Statistic::Gender => ds.has_column(Column::Gender),
                Statistic::BirthYears => ds.has_column(Column::BirthYear),
                _ => true,
            })
            .collect()
    }

    pub fn compute(&self, ds: &Dataset, filter: Filter) -> AppResult<StatValue> {
        let value = match self {
            Statistic::PopularMonth => StatValue::Month(stats::popular_month(ds, filter)?),
            Statistic::PopularDay => StatValue::Weekday(stats::popular_day(ds, filter)?),
            Statistic::PopularHour => StatValue::Hour(stats::popular_hour(ds, filter)?),
            Statistic::TripDuration => StatValue::Duration(stats::trip_duration(ds, filter)?),
            Statistic::PopularStations => {
                StatValue::Stations(stats::popular_stations(ds, filter)?)
            }
            Statistic::PopularTrip => StatValue::Stations(stats::popular_trip(ds, filter)?),
            Statistic::UserTypes => StatValue::Counts(stats::users(ds, filter)?),
            Statistic::Gender => StatValue::Counts(stats::gender(ds, filter)?),
            Statistic::BirthYears => StatValue::BirthYears(stats::birth_years(ds, filter)?),
        };
        Ok(value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Statistic::PopularMonth => "popular_month",
            Statistic::PopularDay => "popular_day",
            Statistic::PopularHour => "popular_hour",
            Statistic::TripDuration => "trip_duration",
            Statistic::PopularStations => "popular_stations",
            Statistic::PopularTrip => "popular_trip",
            Statistic::UserTypes => "user_types",
            Statistic::Gender => "gender",
            Statistic::BirthYears => "birth_years",
        }
    }
}

/// Result of one statistic. A failed statistic keeps its error here and
/// does not affect the others.
#[derive(Debug)]
pub struct Outcome {
    pub statistic: Statistic,
    pub result: AppResult<StatValue>,
    pub elapsed: Duration,
}

impl Outcome {
    pub fn evaluate(statistic: Statistic, ds: &Dataset, filter: Filter) -> Self {
        let started = Instant::now();
        let result = statistic.compute(ds, filter);
        let elapsed = started.elapsed();

        match &result {
            Ok(_) => debug!(stat = statistic.as_str(), ?elapsed, "statistic computed"),
            Err(e) if e.is_empty_result() => {
                debug!(stat = statistic.as_str(), "no trips for period")
            }
            Err(e) => warn!(stat = statistic.as_str(), error = %e, "statistic failed"),
        }

        Self {
            statistic,
            result,
            elapsed,
        }
    }
}

/// Compute every planned statistic, handing each outcome to `on_outcome` as
/// soon as it is ready.
pub fn run_with<F>(ds: &Dataset, filter: Filter, mut on_outcome: F) -> Vec<Outcome>
where
    F: FnMut(&Outcome),
{
    Statistic::plan(filter.period(), ds)
        .into_iter()
        .map(|s| {
            let outcome = Outcome::evaluate(s, ds, filter);
            on_outcome(&outcome);
            outcome
        })
        .collect()
}

pub fn run_all(ds: &Dataset, filter: Filter) -> Vec<Outcome> {
    run_with(ds, filter, |_| {})
}
