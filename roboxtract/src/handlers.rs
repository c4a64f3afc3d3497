use clap::ArgMatches;
use colored::Colorize;
use roboxtract_core::scan::{ScanOptions, extract_all, fetch_robots};
use roboxtract_core::{CoreError, load_hosts, render_endpoints, write_endpoints};
use roboxtract_scanner::{DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT, RobotsFile, ScanError};
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;
use tokio::task::JoinError;

/// Process exit code used when the run is interrupted by the operator.
pub const INTERRUPT_EXIT_CODE: i32 = 130;

/// Settings for a single run, built from the command line.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub list: PathBuf,
    pub output: Option<PathBuf>,
    pub threads: usize,
    pub headers: Vec<String>,
    pub timeout: Duration,
    pub verbose: bool,
    pub color: bool,
    pub quiet: bool,
}

impl ScanConfig {
    pub fn new(list: PathBuf) -> Self {
        Self {
            list,
            output: None,
            threads: DEFAULT_CONCURRENCY,
            headers: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
            verbose: false,
            color: false,
            quiet: false,
        }
    }

    pub fn from_matches(matches: &ArgMatches) -> Self {
        let list = matches
            .get_one::<PathBuf>("list")
            .cloned()
            .unwrap_or_default();
        let headers = matches
            .get_many::<String>("header")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();
        let timeout = matches
            .get_one::<u64>("timeout")
            .map(|secs| Duration::from_secs(*secs))
            .unwrap_or(DEFAULT_TIMEOUT);

        Self {
            list,
            output: matches.get_one::<PathBuf>("output").cloned(),
            threads: *matches
                .get_one::<usize>("threads")
                .unwrap_or(&DEFAULT_CONCURRENCY),
            headers,
            timeout,
            verbose: matches.get_flag("verbose"),
            color: !matches.get_flag("no-color"),
            quiet: matches.get_flag("quiet"),
        }
    }

    /// Per-host and per-source lines are only printed outside quiet mode,
    /// where stdout is reserved for endpoints.
    pub fn verbose_listing(&self) -> bool {
        self.verbose && !self.quiet
    }

    fn status(&self, line: String) {
        if self.quiet {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

/// Resolves on Ctrl-C. If the handler cannot be installed it never resolves,
/// so a broken signal setup does not look like an interrupt.
pub async fn interrupt_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

/// Run blocking `work` off the async threads unless `shutdown` resolves first.
///
/// Returns `None` on shutdown. The work is abandoned, not stopped; the caller
/// is expected to exit.
pub async fn run_unless_interrupted<S, W, T>(shutdown: S, work: W) -> Option<Result<T, JoinError>>
where
    S: Future<Output = ()>,
    W: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let work = tokio::task::spawn_blocking(work);
    tokio::select! {
        biased;
        _ = shutdown => None,
        joined = work => Some(joined),
    }
}

fn print_divider() {
    println!("{}", "─".repeat(60).cyan());
}

fn print_error(msg: impl std::fmt::Display) {
    eprintln!("{} {}", "[✗]".red(), msg);
}

/// Run a full scan and return the process exit code.
///
/// The flow stops at the first fatal error. `shutdown` is watched for the
/// whole run: during fetching it skips extraction and output, afterwards it
/// abandons them. Either way the result is [`INTERRUPT_EXIT_CODE`].
pub async fn handle_scan<F>(config: &ScanConfig, shutdown: F) -> i32
where
    F: Future<Output = ()>,
{
    let status = |line: String| config.status(line);
    tokio::pin!(shutdown);

    status(format!(
        "{} Loading domains from {}",
        "[*]".blue(),
        config.list.display().to_string().bold()
    ));

    let hosts = match load_hosts(&config.list) {
        Ok(hosts) => hosts,
        Err(e) => {
            print_error(e);
            return 1;
        }
    };

    status(format!(
        "{} Loaded {} unique domains",
        "[✓]".green(),
        hosts.len().to_string().bold()
    ));
    status(format!(
        "{} Using {} concurrent threads",
        "[*]".blue(),
        config.threads.to_string().bold()
    ));
    status(format!("\n{} Fetching robots.txt files...", "[*]".blue()));
    if !config.quiet {
        print_divider();
    }

    let domain_count = hosts.len();
    let options = ScanOptions {
        hosts,
        threads: config.threads,
        headers: config.headers.clone(),
        timeout: config.timeout,
        verbose: config.verbose_listing(),
        show_progress_bar: !config.quiet,
        color: config.color,
    };

    let files = match fetch_robots(&options, &mut shutdown).await {
        Ok(files) => files,
        Err(CoreError::Scan(ScanError::Interrupted { completed, total })) => {
            status(format!("\n{} Interrupted by user", "[!]".yellow()));
            status(format!(
                "{} Processed {}/{} domains",
                "[*]".blue(),
                completed,
                total
            ));
            return INTERRUPT_EXIT_CODE;
        }
        Err(e) => {
            print_error(e);
            return 1;
        }
    };

    if !config.quiet {
        print_divider();
    }
    status(format!(
        "{} Found {} accessible robots.txt files (of {} domains)",
        "[✓]".green(),
        files.len().to_string().bold(),
        domain_count
    ));

    if files.is_empty() {
        status(format!("{} No robots.txt files found", "[!]".yellow()));
        return 0;
    }

    let finish_config = config.clone();
    match run_unless_interrupted(&mut shutdown, move || finish_scan(&finish_config, files)).await {
        Some(Ok(code)) => code,
        Some(Err(e)) => {
            print_error(format!("Extraction failed: {}", e));
            1
        }
        None => {
            status(format!("\n{} Interrupted by user", "[!]".yellow()));
            INTERRUPT_EXIT_CODE
        }
    }
}

/// Extraction and output. Blocking: large lists go to disk or stdout here.
fn finish_scan(config: &ScanConfig, files: Vec<RobotsFile>) -> i32 {
    let status = |line: String| config.status(line);

    status(format!(
        "\n{} Extracting disallowed endpoints...",
        "[*]".blue()
    ));

    let report = extract_all(&files);

    if config.verbose_listing() {
        for source in report.sources.iter().filter(|s| s.endpoint_count > 0) {
            status(format!(
                "{} {} → {} endpoints",
                "[+]".green(),
                source.url,
                source.endpoint_count
            ));
        }
    }

    status(format!(
        "{} Extracted {} unique endpoints",
        "[✓]".green(),
        report.endpoints.len().to_string().bold()
    ));

    match config.output {
        Some(ref output) => {
            status(format!(
                "\n{} Saving results to {}",
                "[*]".blue(),
                output.display().to_string().bold()
            ));

            if let Err(e) = write_endpoints(output, &report.endpoints) {
                print_error(e);
                return 1;
            }

            status(format!(
                "{} Successfully saved {} endpoints",
                "[✓]".green(),
                report.endpoints.len()
            ));
        }
        None => {
            if !config.quiet {
                println!();
                print_divider();
                println!("{}\n", "Extracted Endpoints:".bold());
            }
            print!("{}", render_endpoints(&report.endpoints));
        }
    }

    status(format!("\n{}", "[✓] Done!".green().bold()));
    0
}
