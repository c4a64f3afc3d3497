/// Result of fetching a single host's robots.txt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The server answered with exactly 200 and the body was read in full.
    Success {
        url: String,
        status_code: u16,
        body: Vec<u8>,
    },
    Failure {
        reason: String,
    },
}

impl FetchOutcome {
    pub fn failure(reason: impl Into<String>) -> Self {
        FetchOutcome::Failure {
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success { .. })
    }
}

/// A successful fetch, split out of [`FetchOutcome`] once classification is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotsFile {
    /// Host string as it appeared in the input list.
    pub host: String,
    /// Final request URL, used as the base for extracted endpoints.
    pub url: String,
    pub body: Vec<u8>,
}

/// Snapshot of coordinator progress, taken after each completed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FetchProgress {
    pub completed: usize,
    pub total: usize,
    pub found: usize,
}
