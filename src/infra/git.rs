use std::path::{Path, PathBuf};
use std::process::Output;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use tokio::process::Command;

use crate::domain::schedule::format_timestamp;
use crate::error::{AppError, AppResult};
use crate::services::VersionControlService;

pub struct GitCli {
    workspace_root: PathBuf,
}

impl GitCli {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self { workspace_root }
    }

    async fn run_git(&self, args: &[&str]) -> AppResult<Output> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workspace_root)
            .output()
            .await?;
        Ok(output)
    }

    fn ensure_success(step: &str, output: &Output) -> AppResult<()> {
        if output.status.success() {
            return Ok(());
        }
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(AppError::VersionControl(format!(
            "git {step} failed: {}",
            stderr.trim()
        )))
    }
}

#[async_trait]
impl VersionControlService for GitCli {
    async fn is_inside_work_tree(&self) -> AppResult<bool> {
        // A failing exit status means "not a repository", not a tool error.
        let output = self.run_git(&["rev-parse", "--is-inside-work-tree"]).await?;
        Ok(output.status.success())
    }

    async fn stage(&self, file: &Path) -> AppResult<()> {
        let output = Command::new("git")
            .arg("add")
            .arg(file)
            .current_dir(&self.workspace_root)
            .output()
            .await?;
        Self::ensure_success("add", &output)
    }

    async fn commit(&self, message: &str, timestamp: NaiveDateTime) -> AppResult<()> {
        let stamp = format_timestamp(timestamp);
        // The date overrides are scoped to this one child process; the
        // orchestrator's own environment is never touched.
        let output = Command::new("git")
            .args(["commit", "--allow-empty", "-m", message])
            .env("GIT_AUTHOR_DATE", &stamp)
            .env("GIT_COMMITTER_DATE", &stamp)
            .current_dir(&self.workspace_root)
            .output()
            .await?;
        Self::ensure_success("commit", &output)
    }

    async fn push(&self) -> AppResult<()> {
        let output = self.run_git(&["push"]).await?;
        Self::ensure_success("push", &output)
    }
}
