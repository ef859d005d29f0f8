use super::column::Column;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,     // ⇔ "Start Time"
    pub end_time: NaiveDateTime,       // ⇔ "End Time"
    pub trip_duration: f64,            // ⇔ "Trip Duration" (seconds)
    pub start_station: Option<String>, // ⇔ "Start Station"
    pub end_station: Option<String>,   // ⇔ "End Station"
    pub user_type: Option<String>,     // ⇔ "User Type"
    pub gender: Option<String>,        // ⇔ "Gender" (Chicago / NYC only)
    pub birth_year: Option<i32>,       // ⇔ "Birth Year" (Chicago / NYC only)
}

impl TripRecord {
    pub fn new(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        trip_duration: f64,
        start_station: Option<&str>,
        end_station: Option<&str>,
        user_type: Option<&str>,
    ) -> Self {
        Self {
            start_time,
            end_time,
            trip_duration,
            start_station: start_station.map(str::to_string),
            end_station: end_station.map(str::to_string),
            user_type: user_type.map(str::to_string),
            gender: None,
            birth_year: None,
        }
    }

    pub fn with_demographics(mut self, gender: Option<&str>, birth_year: Option<i32>) -> Self {
        self.gender = gender.map(str::to_string);
        self.birth_year = birth_year;
        self
    }
}

/// All trips of one city, loaded once per session and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    schema: BTreeSet<Column>,
    records: Vec<TripRecord>,
}

impl Dataset {
    pub fn new(schema: impl IntoIterator<Item = Column>, records: Vec<TripRecord>) -> Self {
        Self {
            schema: schema.into_iter().collect(),
            records,
        }
    }

    /// Dataset with the full schema (demographic columns included).
    pub fn with_all_columns(records: Vec<TripRecord>) -> Self {
        Self::new(Column::ALL, records)
    }

    /// Dataset without gender / birth year, like the Washington file.
    pub fn without_demographics(records: Vec<TripRecord>) -> Self {
        Self::new(Column::REQUIRED, records)
    }

    pub fn has_column(&self, column: Column) -> bool {
        self.schema.contains(&column)
    }

    pub fn columns(&self) -> Vec<Column> {
        self.schema.iter().copied().collect()
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
