use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Which trip timestamp drives the derived month/day fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeMode {
    Start,
    End,
}

impl TimeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeMode::Start => "start",
            TimeMode::End => "end",
        }
    }
}

impl FromStr for TimeMode {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s {
            "start" => Ok(TimeMode::Start),
            "end" => Ok(TimeMode::End),
            other => Err(AppError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for TimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Month/day filter. `0` means "no filter on this field".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Filter {
    pub month: u32,
    pub day: u32,
}

impl Filter {
    pub const NONE: Filter = Filter { month: 0, day: 0 };

    pub fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    pub fn month(month: u32) -> Self {
        Self { month, day: 0 }
    }

    pub fn period(&self) -> TimePeriod {
        match (self.month, self.day) {
            (0, 0) => TimePeriod::None,
            (_, 0) => TimePeriod::Month,
            _ => TimePeriod::Day,
        }
    }

    pub fn matches(&self, month: u32, day: u32) -> bool {
        (self.month == 0 || self.month == month) && (self.day == 0 || self.day == day)
    }
}

/// Kind of time period the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimePeriod {
    None,
    Month,
    Day,
}

impl TimePeriod {
    /// Prompt letter: N / M / D.
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "N" => Some(TimePeriod::None),
            "M" => Some(TimePeriod::Month),
            "D" => Some(TimePeriod::Day),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parsing() {
        assert_eq!("start".parse::<TimeMode>().unwrap(), TimeMode::Start);
        assert_eq!("end".parse::<TimeMode>().unwrap(), TimeMode::End);
        assert!(matches!(
            "middle".parse::<TimeMode>(),
            Err(AppError::InvalidMode(_))
        ));
    }

    #[test]
    fn period_from_filter() {
        assert_eq!(Filter::NONE.period(), TimePeriod::None);
        assert_eq!(Filter::month(3).period(), TimePeriod::Month);
        assert_eq!(Filter::new(3, 14).period(), TimePeriod::Day);
    }

    #[test]
    fn zero_means_any() {
        assert!(Filter::NONE.matches(2, 7));
        assert!(Filter::month(2).matches(2, 7));
        assert!(!Filter::new(2, 8).matches(2, 7));
    }
}
