//! Small in-memory datasets shared by the unit tests.

use crate::models::{Dataset, TripRecord};
use chrono::NaiveDateTime;

pub(crate) fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("valid test timestamp")
}

pub(crate) fn trip(start: &str, end: &str, duration: f64, from: &str, to: &str) -> TripRecord {
    TripRecord::new(
        ts(start),
        ts(end),
        duration,
        Some(from),
        Some(to),
        Some("Subscriber"),
    )
}

/// Three trips: two in January (1st and 2nd), one in February.
pub(crate) fn sample() -> Dataset {
    Dataset::with_all_columns(vec![
        trip("2017-01-01 09:07:57", "2017-01-01 09:20:53", 60.0, "A", "B")
            .with_demographics(Some("Male"), Some(1990)),
        trip("2017-01-02 10:00:00", "2017-01-02 10:02:00", 120.0, "A", "B"),
        trip("2017-02-03 17:15:00", "2017-02-03 17:18:00", 180.0, "A", "C")
            .with_demographics(Some("Female"), Some(1985)),
    ])
}
