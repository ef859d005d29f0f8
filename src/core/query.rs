//! Trip query engine.
//!
//! `query` projects a dataset down to a set of columns, attaches the month and
//! day derived from the start or end timestamp, and keeps only the rows that
//! match the filter. The source dataset is only borrowed; every call derives
//! month/day again from the timestamps.

use crate::errors::{AppError, AppResult};
use crate::models::{Column, Dataset, Filter, TimeMode, TripRecord};
use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;
use tracing::debug;

/// A single projected cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value<'a> {
    Timestamp(NaiveDateTime),
    Number(f64),
    Text(&'a str),
    Year(i32),
    Missing,
}

impl Value<'_> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    pub fn render(&self) -> String {
        match self {
            Value::Timestamp(t) => t.format("%Y-%m-%d %H:%M:%S").to_string(),
            Value::Number(n) => n.to_string(),
            Value::Text(s) => s.to_string(),
            Value::Year(y) => y.to_string(),
            Value::Missing => String::new(),
        }
    }
}

fn text_or_missing(s: Option<&str>) -> Value<'_> {
    s.map_or(Value::Missing, Value::Text)
}

fn value_of(record: &TripRecord, column: Column) -> Value<'_> {
    match column {
        Column::StartTime => Value::Timestamp(record.start_time),
        Column::EndTime => Value::Timestamp(record.end_time),
        Column::TripDuration => Value::Number(record.trip_duration),
        Column::StartStation => text_or_missing(record.start_station.as_deref()),
        Column::EndStation => text_or_missing(record.end_station.as_deref()),
        Column::UserType => text_or_missing(record.user_type.as_deref()),
        Column::Gender => text_or_missing(record.gender.as_deref()),
        Column::BirthYear => record.birth_year.map_or(Value::Missing, Value::Year),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryRow<'a> {
    pub month: u32,
    pub day: u32,
    pub values: Vec<Value<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<'a> {
    columns: Vec<Column>,
    rows: Vec<QueryRow<'a>>,
}

impl<'a> QueryResult<'a> {
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[QueryRow<'a>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Fails with `EmptyResult` when no row survived the filter.
    pub fn non_empty(self) -> AppResult<Self> {
        if self.rows.is_empty() {
            Err(AppError::EmptyResult)
        } else {
            Ok(self)
        }
    }

    pub fn months(&self) -> impl Iterator<Item = u32> + '_ {
        self.rows.iter().map(|r| r.month)
    }

    fn index_of(&self, column: Column) -> AppResult<usize> {
        self.columns
            .iter()
            .position(|c| *c == column)
            .ok_or_else(|| AppError::InvalidColumn(format!("{column} (not selected)")))
    }

    /// Present cells of a projected column, missing values skipped.
    pub fn cells(&self, column: Column) -> AppResult<impl Iterator<Item = &Value<'a>> + '_> {
        let idx = self.index_of(column)?;
        Ok(self
            .rows
            .iter()
            .map(move |r| &r.values[idx])
            .filter(|v| !v.is_missing()))
    }

    pub fn timestamps(&self, column: Column) -> AppResult<Vec<NaiveDateTime>> {
        self.cells(column)?
            .map(|v| match v {
                Value::Timestamp(t) => Ok(*t),
                _ => Err(type_mismatch(column, "timestamp")),
            })
            .collect()
    }

    pub fn texts(&self, column: Column) -> AppResult<Vec<&'a str>> {
        self.cells(column)?
            .map(|v| match v {
                Value::Text(s) => Ok(*s),
                _ => Err(type_mismatch(column, "text")),
            })
            .collect()
    }

    pub fn numbers(&self, column: Column) -> AppResult<Vec<f64>> {
        self.cells(column)?
            .map(|v| match v {
                Value::Number(n) => Ok(*n),
                _ => Err(type_mismatch(column, "number")),
            })
            .collect()
    }

    pub fn years(&self, column: Column) -> AppResult<Vec<i32>> {
        self.cells(column)?
            .map(|v| match v {
                Value::Year(y) => Ok(*y),
                _ => Err(type_mismatch(column, "year")),
            })
            .collect()
    }

    /// Rows where both text columns are present, as (first, second).
    pub fn text_pairs(&self, first: Column, second: Column) -> AppResult<Vec<(&'a str, &'a str)>> {
        let a = self.index_of(first)?;
        let b = self.index_of(second)?;
        let mut out = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            match (&row.values[a], &row.values[b]) {
                (Value::Text(x), Value::Text(y)) => out.push((*x, *y)),
                (Value::Missing, _) | (_, Value::Missing) => {}
                _ => return Err(type_mismatch(first, "text")),
            }
        }
        Ok(out)
    }
}

fn type_mismatch(column: Column, expected: &str) -> AppError {
    AppError::InvalidColumn(format!("{column} is not a {expected} column"))
}

/// Project `dataset` to `columns`, derive month/day from the timestamp chosen
/// by `mode` and keep the rows matching `filter`. Source order is preserved.
///
/// Month and day are not range checked: values that never occur in the data
/// just produce an empty result.
pub fn query<'a>(
    dataset: &'a Dataset,
    filter: Filter,
    columns: &[Column],
    mode: TimeMode,
) -> AppResult<QueryResult<'a>> {
    if let Some(missing) = columns.iter().find(|c| !dataset.has_column(**c)) {
        return Err(AppError::InvalidColumn(missing.header().to_string()));
    }

    let rows: Vec<QueryRow<'a>> = dataset
        .records()
        .iter()
        .filter_map(|record| {
            let ts = match mode {
                TimeMode::Start => record.start_time,
                TimeMode::End => record.end_time,
            };
            let (month, day) = (ts.month(), ts.day());
            if !filter.matches(month, day) {
                return None;
            }
            Some(QueryRow {
                month,
                day,
                values: columns.iter().map(|c| value_of(record, *c)).collect(),
            })
        })
        .collect();

    debug!(
        mode = %mode,
        month = filter.month,
        day = filter.day,
        total = dataset.len(),
        matched = rows.len(),
        "query"
    );

    Ok(QueryResult {
        columns: columns.to_vec(),
        rows,
    })
}
