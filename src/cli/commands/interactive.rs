use crate::config::Config;
use crate::core::{query, session};
use crate::errors::AppResult;
use crate::loader;
use crate::models::{City, Dataset, TimeMode};
use crate::report::Reporter;
use crate::ui::{Prompt, pager};
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::warn;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let color = stdout.is_terminal();
    let mut prompt = Prompt::new(stdin.lock(), stdout.lock());
    run_session(&mut prompt, cfg, color, |city| loader::load_city(cfg, city))
}

/// Interactive loop: city → period → statistics → raw rows → restart?
pub fn run_session<R, W, L>(
    prompt: &mut Prompt<R, W>,
    cfg: &Config,
    color: bool,
    mut load: L,
) -> AppResult<()>
where
    R: BufRead,
    W: Write,
    L: FnMut(City) -> AppResult<Dataset>,
{
    loop {
        let city = prompt.city()?;
        let ds = match load(city) {
            Ok(ds) => ds,
            Err(e) => {
                warn!(city = city.name(), error = %e, "load failed");
                writeln!(prompt.out(), "Could not load data for {city}: {e}")?;
                continue;
            }
        };

        let filter = prompt.filter()?;
        writeln!(prompt.out(), "Calculating the first statistic...\n")?;

        let mut reporter = Reporter::new(prompt.out(), color, cfg.show_timing);
        let mut write_err = None;
        session::run_with(&ds, filter, |outcome| {
            if write_err.is_none()
                && let Err(e) = reporter.outcome(outcome, filter)
            {
                write_err = Some(e);
            }
        });
        if let Some(e) = write_err {
            return Err(e);
        }

        if prompt.yes_no("Would you like to view individual trip data? Type 'Y' or 'N'.")? {
            let rows = query(&ds, filter, &ds.columns(), TimeMode::Start)?;
            pager::page(prompt, &rows, cfg.page_size)?;
        }

        if !prompt.yes_no("Would you like to restart? Type 'Y' or 'N'.")? {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testutil::sample;
    use crate::errors::AppError;
    use std::io::Cursor;

    fn run(input: &str) -> (AppResult<()>, String, Vec<City>) {
        let cfg = Config {
            show_timing: false,
            ..Config::default()
        };
        let mut loaded = Vec::new();
        let mut prompt = Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let res = run_session(&mut prompt, &cfg, false, |city| {
            loaded.push(city);
            if city == City::Washington {
                Err(AppError::Io(io::Error::other("washington.csv not found")))
            } else {
                Ok(sample())
            }
        });
        let out = String::from_utf8(prompt.out().clone()).unwrap();
        (res, out, loaded)
    }

    #[test]
    fn single_pass_without_filter() {
        let (res, out, loaded) = run("C\nN\nN\nN\n");
        assert!(res.is_ok());
        assert_eq!(loaded, vec![City::Chicago]);
        assert!(out.contains("*** Q: What is the most popular month for start time?"));
        assert!(out.contains("*** A: January"));
        assert!(out.contains("*** A: Total trip duration: 360 (6m 00s)"));
    }

    #[test]
    fn restart_loops_again() {
        let (res, out, loaded) = run("C\nM\n1\nN\nY\nNY\nD\n2\n3\nN\nN\n");
        assert!(res.is_ok());
        assert_eq!(loaded, vec![City::Chicago, City::NewYorkCity]);
        assert!(out.contains("in January?"));
        assert!(out.contains("at 3rd of February?"));
    }

    #[test]
    fn load_failure_asks_again() {
        let (res, out, loaded) = run("W\nC\nN\nN\nN\n");
        assert!(res.is_ok());
        assert_eq!(loaded, vec![City::Washington, City::Chicago]);
        assert!(out.contains("Could not load data for Washington"));
    }

    #[test]
    fn shows_raw_rows() {
        let (res, out, _) = run("C\nN\nY\nN\nN\n");
        assert!(res.is_ok());
        assert!(out.contains("Start Station"));
        assert!(out.contains("Would you like to view 5 rows more?") || out.contains("No more trips"));
    }

    #[test]
    fn eof_ends_with_error() {
        let (res, _, _) = run("C\n");
        assert!(matches!(res, Err(AppError::InvalidUserInput(_))));
    }
}
