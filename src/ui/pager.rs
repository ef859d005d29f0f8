//! Paged display of raw trip rows.

use super::prompt::Prompt;
use crate::core::QueryResult;
use crate::errors::AppResult;
use crate::utils::table::Table;
use std::io::{BufRead, Write};

/// Render rows `[from, from + count)` of a query result as a table.
pub fn render_page(result: &QueryResult<'_>, from: usize, count: usize) -> String {
    let mut table = Table::new(result.columns().iter().map(|c| c.header()));
    for row in result.rows().iter().skip(from).take(count) {
        table.add_row(row.values.iter().map(|v| v.render()).collect());
    }
    table.render()
}

/// Show `page_size` rows at a time, asking before each further page.
/// Returns how many rows were shown.
pub fn page<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    result: &QueryResult<'_>,
    page_size: usize,
) -> AppResult<usize> {
    let total = result.len();
    if total == 0 {
        writeln!(prompt.out(), "No trips to show for this period.")?;
        return Ok(0);
    }

    let mut shown = 0;
    loop {
        let count = page_size.min(total - shown);
        write!(prompt.out(), "\n{}", render_page(result, shown, count))?;
        shown += count;

        if shown >= total {
            writeln!(prompt.out(), "\nNo more trips to show ({total} in total).")?;
            return Ok(shown);
        }

        let more = prompt.yes_no(&format!(
            "Would you like to view {page_size} rows more? Type 'Y' or 'N'."
        ))?;
        if !more {
            return Ok(shown);
        }
    }
}
