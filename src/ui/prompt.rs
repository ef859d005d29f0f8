//! Interactive input collection.
//!
//! Every question loops until the answer parses. End of input (or running out
//! of attempts, when a limit is set) ends the loop with `InvalidUserInput`.

use crate::errors::{AppError, AppResult};
use crate::models::month::{MONTH_TABLE, month_name, month_number};
use crate::models::{City, Filter, TimePeriod};
use crate::utils::formatting::ordinal;
use std::io::{BufRead, Write};

const WRAP_WIDTH: usize = 78;
const NOT_VALID: &str = "Your input is not valid.";

pub struct Prompt<R: BufRead, W: Write> {
    input: R,
    out: W,
    max_attempts: Option<usize>,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            input,
            out,
            max_attempts: None,
        }
    }

    /// Give up after `n` invalid answers to the same question.
    pub fn with_max_attempts(mut self, n: usize) -> Self {
        self.max_attempts = Some(n);
        self
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    fn read_line(&mut self) -> AppResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InvalidUserInput("input closed".into()));
        }
        Ok(line.trim().to_string())
    }

    /// Ask `question` until `parse` accepts the answer.
    pub fn ask<T, F>(&mut self, question: &str, invalid: &str, parse: F) -> AppResult<T>
    where
        F: Fn(&str) -> Option<T>,
    {
        let mut attempts = 0;
        loop {
            writeln!(self.out, "\n{}", textwrap::fill(question, WRAP_WIDTH))?;
            self.out.flush()?;

            let answer = self.read_line()?;
            if let Some(v) = parse(&answer) {
                return Ok(v);
            }

            attempts += 1;
            writeln!(self.out, "{invalid}")?;
            if self.max_attempts.is_some_and(|max| attempts >= max) {
                return Err(AppError::InvalidUserInput(format!(
                    "no valid answer after {attempts} attempts"
                )));
            }
        }
    }

    pub fn city(&mut self) -> AppResult<City> {
        let city = self.ask(
            "Hello! Let's explore some US bikeshare data!\n\
             Would you like to see data for Chicago, New York, or Washington?\n\
             Press C for Chicago, NY for New York and W for Washington.",
            NOT_VALID,
            City::from_code,
        )?;
        writeln!(self.out, "{} selected", city.name())?;
        Ok(city)
    }

    pub fn time_period(&mut self) -> AppResult<TimePeriod> {
        let period = self.ask(
            "Would you like to filter the data by month, day, or not at all?\n\
             Press M for month, D for month and day and N for no filter.",
            NOT_VALID,
            TimePeriod::from_code,
        )?;
        if period == TimePeriod::None {
            writeln!(self.out, "No filter selected")?;
        }
        Ok(period)
    }

    /// Month number in the covered range; names ("March", "mar") are accepted too.
    pub fn month(&mut self) -> AppResult<u32> {
        let question = format!(
            "Which month? January, February, March, April, May, or June?\n\
             The data contains only from January to June.\n\
             Please type it in the number of months. (ex. January -> {}, June -> {})",
            MONTH_TABLE.first(),
            MONTH_TABLE.last()
        );
        let month = self.ask(&question, NOT_VALID, parse_month)?;
        if let Some(name) = month_name(month) {
            writeln!(self.out, "{name} selected")?;
        }
        Ok(month)
    }

    pub fn day(&mut self) -> AppResult<u32> {
        let day = self.ask(
            "Which day? Please type your response as an integer.",
            NOT_VALID,
            parse_day,
        )?;
        writeln!(self.out, "{} selected", ordinal(day))?;
        Ok(day)
    }

    pub fn yes_no(&mut self, question: &str) -> AppResult<bool> {
        self.ask(
            question,
            "The input is not valid. Press 'Y' for yes or 'N' for no.",
            |s| match s.to_uppercase().as_str() {
                "Y" | "YES" => Some(true),
                "N" | "NO" => Some(false),
                _ => None,
            },
        )
    }

    /// Period question followed by the month/day questions it implies.
    pub fn filter(&mut self) -> AppResult<Filter> {
        Ok(match self.time_period()? {
            TimePeriod::None => Filter::NONE,
            TimePeriod::Month => Filter::month(self.month()?),
            TimePeriod::Day => {
                let month = self.month()?;
                Filter::new(month, self.day()?)
            }
        })
    }
}

pub fn parse_month(s: &str) -> Option<u32> {
    match s.parse::<u32>() {
        Ok(n) if MONTH_TABLE.contains(n) => Some(n),
        Ok(_) => None,
        Err(_) => month_number(s),
    }
}

pub fn parse_day(s: &str) -> Option<u32> {
    s.parse::<u32>().ok().filter(|d| (1..=31).contains(d))
}
