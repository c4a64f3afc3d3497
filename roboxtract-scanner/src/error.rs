use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),

    #[error("Concurrency limit must be at least 1")]
    InvalidConcurrency,

    #[error("Interrupted by user after {completed}/{total} hosts")]
    Interrupted { completed: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, ScanError>;
