use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("precondition failed: {0}")]
    Precondition(String),
    #[error("version control error: {0}")]
    VersionControl(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
