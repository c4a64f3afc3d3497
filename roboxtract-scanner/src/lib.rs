pub mod coordinator;
pub mod error;
pub mod fetcher;
pub mod outcome;

pub use coordinator::{Coordinator, ProgressCallback, DEFAULT_CONCURRENCY};
pub use error::ScanError;
pub use fetcher::{Fetcher, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use outcome::{FetchOutcome, FetchProgress, RobotsFile};
