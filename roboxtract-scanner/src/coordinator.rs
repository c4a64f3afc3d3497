use crate::error::{Result, ScanError};
use crate::fetcher::Fetcher;
use crate::outcome::{FetchOutcome, FetchProgress, RobotsFile};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::debug;

pub const DEFAULT_CONCURRENCY: usize = 10;

/// Called from the coordinating loop after every completed fetch, in
/// completion order.
pub type ProgressCallback = Arc<dyn Fn(&FetchProgress, &FetchOutcome) + Send + Sync>;

/// Runs one fetch task per host with a bounded number in flight.
///
/// Workers only fetch and classify. The loop in [`Coordinator::run`] is the
/// sole owner of the counters and the collected results.
pub struct Coordinator {
    fetcher: Arc<Fetcher>,
    concurrency: usize,
    progress_callback: Option<ProgressCallback>,
}

impl Coordinator {
    pub fn new(fetcher: Fetcher) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            concurrency: DEFAULT_CONCURRENCY,
            progress_callback: None,
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Fetch every host and return the robots.txt files that came back with 200.
    ///
    /// When `shutdown` resolves first, outstanding tasks are aborted and
    /// [`ScanError::Interrupted`] reports how far the run got.
    pub async fn run<F>(&self, hosts: &[String], shutdown: F) -> Result<Vec<RobotsFile>>
    where
        F: Future<Output = ()>,
    {
        if self.concurrency == 0 {
            return Err(ScanError::InvalidConcurrency);
        }

        let total = hosts.len();
        // Callers may be drawing a progress bar; stay below INFO while running
        debug!(
            "Fetching robots.txt from {} hosts with {} workers",
            total, self.concurrency
        );

        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut tasks = JoinSet::new();

        for host in hosts {
            let fetcher = self.fetcher.clone();
            let semaphore = semaphore.clone();
            let host = host.clone();

            tasks.spawn(async move {
                let outcome = match semaphore.acquire_owned().await {
                    Ok(_permit) => fetcher.fetch(&host).await,
                    Err(_) => FetchOutcome::failure("worker pool closed"),
                };
                (host, outcome)
            });
        }

        tokio::pin!(shutdown);

        let mut progress = FetchProgress {
            completed: 0,
            total,
            found: 0,
        };
        let mut found = Vec::new();

        loop {
            tokio::select! {
                biased;

                _ = &mut shutdown => {
                    tasks.abort_all();
                    debug!("Interrupted after {}/{} hosts", progress.completed, total);
                    return Err(ScanError::Interrupted {
                        completed: progress.completed,
                        total,
                    });
                }

                joined = tasks.join_next() => {
                    let Some(joined) = joined else {
                        break;
                    };

                    let (host, outcome) = match joined {
                        Ok(pair) => pair,
                        Err(e) => {
                            debug!("Fetch task failed: {}", e);
                            (String::new(), FetchOutcome::failure(format!("task failed: {}", e)))
                        }
                    };

                    progress.completed += 1;
                    if outcome.is_success() {
                        progress.found += 1;
                    }

                    if let Some(ref callback) = self.progress_callback {
                        callback(&progress, &outcome);
                    }

                    if let FetchOutcome::Success { url, body, .. } = outcome {
                        found.push(RobotsFile { host, url, body });
                    }
                }
            }
        }

        debug!(
            "Fetch complete. {} of {} hosts served robots.txt",
            found.len(),
            total
        );
        Ok(found)
    }
}
