pub mod mode;
pub mod query;
pub mod session;
pub mod stats;

pub use query::{QueryResult, QueryRow, Value, query};
pub use session::{Outcome, StatValue, Statistic};

#[cfg(test)]
pub(crate) mod testutil;
