use crate::error::Result;
use crate::extract::{EndpointSet, extract_endpoints};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use roboxtract_scanner::{
    Coordinator, DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT, FetchOutcome, FetchProgress, Fetcher,
    ProgressCallback, RobotsFile,
};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Options for configuring a scan
pub struct ScanOptions {
    pub hosts: Vec<String>,
    pub threads: usize,
    /// Raw `Key: Value` header strings
    pub headers: Vec<String>,
    pub timeout: Duration,
    /// Print each successful fetch above the progress bar
    pub verbose: bool,
    pub show_progress_bar: bool,
    pub color: bool,
}

impl ScanOptions {
    pub fn new(hosts: Vec<String>) -> Self {
        Self {
            hosts,
            threads: DEFAULT_CONCURRENCY,
            headers: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
            verbose: false,
            show_progress_bar: false,
            color: false,
        }
    }
}

/// Endpoint count for a single robots.txt file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSummary {
    /// Host entry the file was fetched for
    pub host: String,
    pub url: String,
    pub endpoint_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Number of hosts that served robots.txt with status 200
    pub robots_found: usize,
    pub sources: Vec<SourceSummary>,
    pub endpoints: EndpointSet,
}

fn progress_style(color: bool) -> ProgressStyle {
    let template = if color {
        "[{bar:50.cyan/blue}] {pos}/{len} ({percent}%) | Found: {msg}"
    } else {
        "[{bar:50}] {pos}/{len} ({percent}%) | Found: {msg}"
    };

    ProgressStyle::default_bar()
        .template(template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█░")
}

/// Fetch robots.txt from every host in `options`, drawing a progress bar as
/// fetches complete. Returns only the files served with status 200.
pub async fn fetch_robots<F>(options: &ScanOptions, shutdown: F) -> Result<Vec<RobotsFile>>
where
    F: Future<Output = ()>,
{
    let fetcher = Fetcher::with_options(options.timeout, &options.headers)?;

    info!(
        "Fetching robots.txt from {} hosts with {} workers",
        options.hosts.len(),
        options.threads
    );

    let progress_bar = if options.show_progress_bar {
        let pb = ProgressBar::new(options.hosts.len() as u64);
        pb.set_style(progress_style(options.color));
        pb.set_message("0");
        Arc::new(pb)
    } else {
        Arc::new(ProgressBar::hidden())
    };

    let verbose = options.verbose;
    let pb_clone = progress_bar.clone();
    let progress_callback: ProgressCallback =
        Arc::new(move |progress: &FetchProgress, outcome: &FetchOutcome| {
            if verbose && let FetchOutcome::Success { url, .. } = outcome {
                pb_clone.suspend(|| println!("{} {}", "[✓]".green(), url));
            }
            pb_clone.set_position(progress.completed as u64);
            pb_clone.set_message(progress.found.to_string());
        });

    let coordinator = Coordinator::new(fetcher)
        .with_concurrency(options.threads)
        .with_progress_callback(progress_callback);

    let result = coordinator.run(&options.hosts, shutdown).await;

    // Log only once the bar is done drawing
    match result {
        Ok(files) => {
            progress_bar.finish();
            info!(
                "Fetch complete. {} of {} hosts served robots.txt",
                files.len(),
                options.hosts.len()
            );
            Ok(files)
        }
        Err(e) => {
            progress_bar.finish_and_clear();
            info!("Fetch stopped: {}", e);
            Err(e.into())
        }
    }
}

/// Extract and merge the endpoints of every fetched robots.txt file.
pub fn extract_all(files: &[RobotsFile]) -> ScanReport {
    let mut report = ScanReport {
        robots_found: files.len(),
        ..ScanReport::default()
    };

    for file in files {
        if file.body.is_empty() {
            continue;
        }

        let endpoints = extract_endpoints(&file.body, &file.url);
        debug!("{} yielded {} endpoints", file.host, endpoints.len());
        report.sources.push(SourceSummary {
            host: file.host.clone(),
            url: file.url.clone(),
            endpoint_count: endpoints.len(),
        });
        report.endpoints.extend(endpoints);
    }

    info!(
        "Extracted {} unique endpoints from {} robots.txt files",
        report.endpoints.len(),
        report.robots_found
    );
    report
}

/// Run a full scan: fetch every host, then extract and merge endpoints.
pub async fn execute_scan<F>(options: ScanOptions, shutdown: F) -> Result<ScanReport>
where
    F: Future<Output = ()>,
{
    let files = fetch_robots(&options, shutdown).await?;
    Ok(extract_all(&files))
}
