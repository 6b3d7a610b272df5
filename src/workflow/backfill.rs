use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use rand::Rng;

use crate::context::AppContext;
use crate::domain::sampler;
use crate::domain::schedule::{CommitSchedule, format_timestamp};
use crate::error::{AppError, AppResult};

/// Single file mutated before each commit so the commit carries a real delta.
pub const TRACKED_FILE: &str = "activity.log";

#[derive(Debug)]
pub struct BackfillOutcome {
    pub commits_applied: usize,
}

/// Full run: precondition check, schedule generation, sequential apply, push.
///
/// The first failing tool invocation aborts the run; commits already recorded
/// stay in the repository and nothing is rolled back.
pub async fn run_backfill(ctx: &AppContext, rng: &mut impl Rng) -> AppResult<BackfillOutcome> {
    if !ctx.version_control.is_inside_work_tree().await? {
        return Err(AppError::Precondition(
            "not inside a git work tree; run from within a repository".to_string(),
        ));
    }

    let schedule = sampler::generate(&ctx.config.range, rng);
    println!(
        "Generating {} commits from {} to {}...",
        schedule.len(),
        ctx.config.range.start,
        ctx.config.range.end.date()
    );

    let commits_applied = apply_schedule(ctx, &schedule).await?;

    ctx.version_control.push().await?;

    Ok(BackfillOutcome { commits_applied })
}

/// Replay the schedule in order: append a tracked-file line, stage it, commit
/// with the timestamp override, report progress. Strictly sequential; each
/// tool invocation completes before the next begins.
pub async fn apply_schedule(ctx: &AppContext, schedule: &CommitSchedule) -> AppResult<usize> {
    let tracked_path = ctx.config.workspace_root.join(TRACKED_FILE);
    let mut commits_applied = 0;

    for timestamp in schedule.iter() {
        let stamp = format_timestamp(*timestamp);
        append_line(&tracked_path, &format!("Backfill commit at {stamp}\n"))?;

        ctx.version_control.stage(Path::new(TRACKED_FILE)).await?;

        let message = format!("Backfill commit for {stamp}");
        ctx.version_control.commit(&message, *timestamp).await?;
        println!("Committed: {message}");
        commits_applied += 1;
    }

    Ok(commits_applied)
}

fn append_line(path: &Path, line: &str) -> AppResult<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(line.as_bytes())?;
    Ok(())
}
