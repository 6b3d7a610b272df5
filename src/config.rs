use std::path::PathBuf;

use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::domain::schedule::DateRange;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub range: DateRange,
    pub workspace_root: PathBuf,
}

impl AppConfig {
    /// Resolve the run configuration. "Now" is captured here, once, so the
    /// sampler itself stays pure.
    pub fn resolve(start: NaiveDate, end: Option<NaiveDateTime>, workspace_root: PathBuf) -> Self {
        let end = end.unwrap_or_else(|| Local::now().naive_local());
        Self {
            range: DateRange::new(start, end),
            workspace_root,
        }
    }
}
