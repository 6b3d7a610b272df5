use chrono::{NaiveDate, NaiveDateTime};

/// Serialization format used for commit metadata, commit messages and the
/// tracked file: local time, no zone suffix.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// The window commits are synthesized for. `start` is a whole day, `end` is an
/// instant (usually "now", injected by the caller).
#[derive(Debug, Clone, Copy)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDateTime,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDateTime) -> Self {
        Self { start, end }
    }
}

/// Ordered sequence of instants at which commits should appear to have been
/// made. Always ascending; duplicates are legal.
#[derive(Debug, Clone)]
pub struct CommitSchedule(Vec<NaiveDateTime>);

impl CommitSchedule {
    pub fn from_unsorted(mut timestamps: Vec<NaiveDateTime>) -> Self {
        timestamps.sort();
        Self(timestamps)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NaiveDateTime> {
        self.0.iter()
    }

    pub fn timestamps(&self) -> &[NaiveDateTime] {
        &self.0
    }
}
