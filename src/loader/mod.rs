//! Loading city trip files into a `Dataset`.

mod csv;

pub use self::csv::{read_dataset, read_path};

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{City, Dataset};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Path of the trip file for `city` according to the configuration.
pub fn city_path(cfg: &Config, city: City) -> PathBuf {
    cfg.data_path().join(cfg.files.file_for(city))
}

pub fn load_city(cfg: &Config, city: City) -> AppResult<Dataset> {
    let path = city_path(cfg, city);
    let started = Instant::now();
    let ds = read_path(&path)?;
    info!(
        city = city.name(),
        path = %path.display(),
        rows = ds.len(),
        elapsed = ?started.elapsed(),
        "dataset loaded"
    );
    Ok(ds)
}
