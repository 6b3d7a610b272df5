use crate::context::AppContext;
use crate::error::AppResult;
use crate::workflow::backfill::{BackfillOutcome, run_backfill};

/// Production entry point for the backfill workflow; supplies the ambient
/// randomness source so the workflow itself stays seedable under test.
pub async fn run(ctx: &AppContext) -> AppResult<BackfillOutcome> {
    run_backfill(ctx, &mut rand::rng()).await
}
