use chrono::Days;
use rand::Rng;

use crate::domain::schedule::{CommitSchedule, DateRange};

const MIN_WEEKLY_COMMITS: u32 = 3;
const MAX_WEEKLY_COMMITS: u32 = 5;
const DAYS_PER_WEEK: u64 = 7;

// Commits land during typical working hours, 09:00 through 20:59.
const FIRST_COMMIT_HOUR: u32 = 9;
const LAST_COMMIT_HOUR: u32 = 20;

/// Build the commit schedule for a date range.
///
/// The range is partitioned into consecutive 7-day windows starting at
/// `range.start`; each window gets 3 to 5 commits at random working-hour
/// instants within it. Days past the end of the range are clamped onto the
/// final day, so a partial last week keeps its full draw and clusters at the
/// boundary. A degenerate range (start date on or after the end date) yields
/// an empty schedule.
pub fn generate(range: &DateRange, rng: &mut impl Rng) -> CommitSchedule {
    let mut timestamps = Vec::new();
    let end_date = range.end.date();

    let mut window_start = range.start;
    while window_start < end_date {
        let commits_this_week = rng.random_range(MIN_WEEKLY_COMMITS..=MAX_WEEKLY_COMMITS);
        for _ in 0..commits_this_week {
            let day_offset = rng.random_range(0..DAYS_PER_WEEK);
            let mut day = window_start + Days::new(day_offset);
            if day > end_date {
                day = end_date;
            }

            let hour = rng.random_range(FIRST_COMMIT_HOUR..=LAST_COMMIT_HOUR);
            let minute = rng.random_range(0..60);
            let second = rng.random_range(0..60);
            let timestamp = day
                .and_hms_opt(hour, minute, second)
                .expect("drawn time components are always in range");

            // The date clamp alone can still land past the end instant on the
            // final day; clamp the instant so start <= timestamp <= end holds.
            timestamps.push(timestamp.min(range.end));
        }
        window_start = window_start + Days::new(DAYS_PER_WEEK);
    }

    CommitSchedule::from_unsorted(timestamps)
}
