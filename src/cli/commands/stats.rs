use crate::cli::parser::{Commands, OutputFormat};
use crate::config::Config;
use crate::core::{query, session};
use crate::errors::{AppError, AppResult};
use crate::loader;
use crate::models::month::MONTH_TABLE;
use crate::models::{City, Dataset, Filter, TimeMode};
use crate::report::{Reporter, SessionReport, period_suffix};
use crate::ui::pager::render_page;
use std::io::{self, IsTerminal, Write};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats {
        city,
        month,
        day,
        format,
        raw,
        no_timing,
    } = cmd
    {
        let filter = validate_filter(*month, *day)?;
        let ds = loader::load_city(cfg, *city)?;

        let stdout = io::stdout();
        let color = stdout.is_terminal();
        let options = StatsOptions {
            format: format.clone(),
            raw: *raw,
            show_timing: cfg.show_timing && !*no_timing,
            color,
        };
        render_stats(&mut stdout.lock(), *city, &ds, filter, &options)?;
    }
    Ok(())
}

/// Range-check CLI month/day before they reach the query engine.
pub fn validate_filter(month: Option<u32>, day: Option<u32>) -> AppResult<Filter> {
    let month = match month {
        None => 0,
        Some(m) if MONTH_TABLE.contains(m) => m,
        Some(m) => {
            return Err(AppError::InvalidUserInput(format!(
                "month {m} is outside the data range ({}-{})",
                MONTH_TABLE.first(),
                MONTH_TABLE.last()
            )));
        }
    };
    let day = match day {
        None => 0,
        Some(d) if (1..=31).contains(&d) => d,
        Some(d) => {
            return Err(AppError::InvalidUserInput(format!(
                "day {d} is not a valid day of month"
            )));
        }
    };
    Ok(Filter::new(month, day))
}

pub struct StatsOptions {
    pub format: OutputFormat,
    pub raw: Option<usize>,
    pub show_timing: bool,
    pub color: bool,
}

pub fn render_stats<W: Write>(
    out: &mut W,
    city: City,
    ds: &Dataset,
    filter: Filter,
    options: &StatsOptions,
) -> AppResult<()> {
    let outcomes = session::run_all(ds, filter);

    match options.format {
        OutputFormat::Json => {
            let report = SessionReport::new(city, filter, ds.len(), &outcomes);
            Reporter::new(out, false, false).json(&report)?;
        }
        OutputFormat::Text => {
            let title = format!("{city}{} ({} trips loaded)", period_suffix(filter), ds.len());
            writeln!(out, "====================== {title}\n")?;

            let mut reporter = Reporter::new(&mut *out, options.color, options.show_timing);
            for outcome in &outcomes {
                reporter.outcome(outcome, filter)?;
            }

            if let Some(n) = options.raw {
                let rows = query(ds, filter, &ds.columns(), TimeMode::Start)?;
                write!(out, "{}", render_page(&rows, 0, n))?;
            }
        }
    }
    Ok(())
}
