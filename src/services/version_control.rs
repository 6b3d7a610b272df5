use std::path::Path;

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::error::AppResult;

/// Narrow command port over the external version control tool. The applier
/// only ever needs these four operations, issued one at a time.
#[async_trait]
pub trait VersionControlService: Send + Sync {
    /// Whether the workspace root sits inside a work tree.
    async fn is_inside_work_tree(&self) -> AppResult<bool>;

    /// Stage a single file, path relative to the workspace root.
    async fn stage(&self, file: &Path) -> AppResult<()>;

    /// Record a commit whose authored-at and committed-at metadata are both
    /// `timestamp` rather than the tool's wall clock. Must tolerate an empty
    /// staged delta.
    async fn commit(&self, message: &str, timestamp: NaiveDateTime) -> AppResult<()>;

    /// Publish local history to the configured remote.
    async fn push(&self) -> AppResult<()>;
}
