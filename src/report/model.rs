// src/report/model.rs

use super::question;
use crate::core::{Outcome, StatValue, Statistic};
use crate::models::{City, Filter, TimePeriod};
use serde::Serialize;

/// Flat view of an outcome for JSON output.
#[derive(Serialize, Clone, Debug)]
pub struct OutcomeExport {
    pub statistic: Statistic,
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<StatValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub elapsed_ms: f64,
}

impl OutcomeExport {
    pub fn from_outcome(outcome: &Outcome, filter: Filter) -> Self {
        let (value, error) = match &outcome.result {
            Ok(v) => (Some(v.clone()), None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            statistic: outcome.statistic,
            question: question(outcome.statistic, filter),
            value,
            error,
            elapsed_ms: outcome.elapsed.as_secs_f64() * 1000.0,
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct SessionReport {
    pub city: City,
    pub period: TimePeriod,
    pub filter: Filter,
    pub trips: usize,
    pub statistics: Vec<OutcomeExport>,
}

impl SessionReport {
    pub fn new(city: City, filter: Filter, trips: usize, outcomes: &[Outcome]) -> Self {
        Self {
            city,
            period: filter.period(),
            filter,
            trips,
            statistics: outcomes
                .iter()
                .map(|o| OutcomeExport::from_outcome(o, filter))
                .collect(),
        }
    }
}
