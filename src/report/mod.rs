//! Question/answer rendering of statistic outcomes.

mod model;

pub use model::{OutcomeExport, SessionReport};

use crate::core::{Outcome, StatValue, Statistic};
use crate::errors::AppResult;
use crate::models::month::month_name;
use crate::models::{Filter, TimePeriod};
use crate::utils::formatting::{ordinal, secs2readable};
use ansi_term::Colour;
use std::io::Write;

fn month_label(month: u32) -> String {
    month_name(month)
        .map(str::to_string)
        .unwrap_or_else(|| format!("month {month}"))
}

/// Period suffix appended to every question: "", " in March", " at 3rd of March".
pub fn period_suffix(filter: Filter) -> String {
    match filter.period() {
        TimePeriod::None => String::new(),
        TimePeriod::Month => format!(" in {}", month_label(filter.month)),
        TimePeriod::Day => format!(" at {} of {}", ordinal(filter.day), month_label(filter.month)),
    }
}

pub fn question(stat: Statistic, filter: Filter) -> String {
    let base = match stat {
        Statistic::PopularMonth => "What is the most popular month for start time",
        Statistic::PopularDay => "What is the most popular day of week for start time",
        Statistic::PopularHour => "What is the most popular hour of day for start time",
        Statistic::TripDuration => "What is the total trip duration and average trip duration",
        Statistic::PopularStations => "What is the most popular start station and end station",
        Statistic::PopularTrip => "What is the most popular trip",
        Statistic::UserTypes => "What are the counts of each user type",
        Statistic::Gender => "What are the counts of gender",
        Statistic::BirthYears => {
            "What are the earliest, most recent and most popular birth years"
        }
    };
    format!("{base}{}?", period_suffix(filter))
}

pub fn answers(stat: Statistic, value: &StatValue) -> Vec<String> {
    match value {
        StatValue::Month(m) => vec![month_label(*m)],
        StatValue::Weekday(d) => vec![d.clone()],
        StatValue::Hour(h) => vec![format!("{h}:00")],
        StatValue::Duration(d) => vec![
            format!("Total trip duration: {} ({})", d.total, secs2readable(d.total)),
            format!(
                "Average trip duration: {:.2} ({})",
                d.average,
                secs2readable(d.average)
            ),
        ],
        StatValue::Stations(p) if stat == Statistic::PopularTrip => vec![
            format!("Departure: {}", p.start),
            format!("Arrival: {}", p.end),
        ],
        StatValue::Stations(p) => vec![
            format!("Most popular start station: {}", p.start),
            format!("Most popular end station: {}", p.end),
        ],
        StatValue::Counts(counts) => {
            let label = if stat == Statistic::Gender {
                "Gender"
            } else {
                "User Type"
            };
            counts
                .iter()
                .map(|(k, v)| format!("{label}: {k}, Count: {v}"))
                .collect()
        }
        StatValue::BirthYears(b) => vec![
            format!("The earliest birth year: {}", b.earliest),
            format!("The most recent birth year: {}", b.most_recent),
            format!("The most popular birth year: {}", b.most_common),
        ],
    }
}

/// Writes outcomes as "*** Q:" / "*** A:" blocks.
pub struct Reporter<W: Write> {
    out: W,
    color: bool,
    show_timing: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, color: bool, show_timing: bool) -> Self {
        Self {
            out,
            color,
            show_timing,
        }
    }

    fn paint(&self, colour: Colour, s: &str) -> String {
        if self.color {
            colour.paint(s).to_string()
        } else {
            s.to_string()
        }
    }

    pub fn outcome(&mut self, outcome: &Outcome, filter: Filter) -> AppResult<()> {
        let q = self.paint(Colour::Cyan, &question(outcome.statistic, filter));
        writeln!(self.out, "*** Q: {q}")?;

        let lines: Vec<String> = match &outcome.result {
            Ok(value) => answers(outcome.statistic, value)
                .iter()
                .map(|a| self.paint(Colour::Green, a))
                .collect(),
            Err(e) if e.is_empty_result() => {
                vec![self.paint(Colour::Yellow, "No trips found for this period.")]
            }
            Err(e) => vec![self.paint(Colour::Red, &format!("Could not compute: {e}"))],
        };
        for line in lines {
            writeln!(self.out, "*** A: {line}")?;
        }

        if self.show_timing {
            writeln!(
                self.out,
                "That took {:.6} seconds.",
                outcome.elapsed.as_secs_f64()
            )?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    pub fn json(&mut self, report: &SessionReport) -> AppResult<()> {
        serde_json::to_writer_pretty(&mut self.out, report)?;
        writeln!(self.out)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stats::{StationPair, TripDuration};
    use crate::errors::AppError;
    use crate::models::City;
    use std::time::Duration;

    fn outcome(statistic: Statistic, result: AppResult<StatValue>) -> Outcome {
        Outcome {
            statistic,
            result,
            elapsed: Duration::from_millis(3),
        }
    }

    fn render(o: &Outcome, filter: Filter) -> String {
        let mut r = Reporter::new(Vec::new(), false, false);
        r.outcome(o, filter).unwrap();
        String::from_utf8(r.into_inner()).unwrap()
    }

    #[test]
    fn questions_follow_the_period() {
        assert_eq!(
            question(Statistic::PopularTrip, Filter::NONE),
            "What is the most popular trip?"
        );
        assert_eq!(
            question(Statistic::PopularTrip, Filter::month(3)),
            "What is the most popular trip in March?"
        );
        assert_eq!(
            question(Statistic::PopularHour, Filter::new(1, 2)),
            "What is the most popular hour of day for start time at 2nd of January?"
        );
    }

    #[test]
    fn renders_trip_answer() {
        let o = outcome(
            Statistic::PopularTrip,
            Ok(StatValue::Stations(StationPair {
                start: "A".into(),
                end: "B".into(),
            })),
        );
        let text = render(&o, Filter::NONE);
        assert!(text.contains("*** Q: What is the most popular trip?"));
        assert!(text.contains("*** A: Departure: A"));
        assert!(text.contains("*** A: Arrival: B"));
        assert!(!text.contains("That took"));
    }

    #[test]
    fn renders_empty_result_as_answer() {
        let o = outcome(Statistic::PopularMonth, Err(AppError::EmptyResult));
        assert!(render(&o, Filter::month(5)).contains("*** A: No trips found for this period."));
    }

    #[test]
    fn renders_duration_with_readable_form() {
        let lines = answers(
            Statistic::TripDuration,
            &StatValue::Duration(TripDuration {
                total: 360.0,
                average: 120.0,
            }),
        );
        assert_eq!(lines[0], "Total trip duration: 360 (6m 00s)");
        assert_eq!(lines[1], "Average trip duration: 120.00 (2m 00s)");
    }

    #[test]
    fn timing_line_when_enabled() {
        let o = outcome(Statistic::PopularHour, Ok(StatValue::Hour(8)));
        let mut r = Reporter::new(Vec::new(), false, true);
        r.outcome(&o, Filter::NONE).unwrap();
        let text = String::from_utf8(r.into_inner()).unwrap();
        assert!(text.contains("*** A: 8:00"));
        assert!(text.contains("That took 0.003000 seconds."));
    }

    #[test]
    fn json_report_shape() {
        let outcomes = vec![
            outcome(Statistic::PopularHour, Ok(StatValue::Hour(17))),
            outcome(Statistic::Gender, Err(AppError::EmptyResult)),
        ];
        let report = SessionReport::new(City::Chicago, Filter::month(2), 10, &outcomes);
        let v = serde_json::to_value(&report).unwrap();
        assert_eq!(v["city"], "chicago");
        assert_eq!(v["period"], "month");
        assert_eq!(v["statistics"][0]["statistic"], "popular_hour");
        assert_eq!(v["statistics"][0]["value"], 17);
        assert!(v["statistics"][1].get("value").is_none());
        assert_eq!(
            v["statistics"][1]["error"],
            "No trips match the selected period"
        );
    }
}
