use roboxtract::commands::{command_argument_builder, parse_threads, parse_timeout};
use roboxtract::handlers::{INTERRUPT_EXIT_CODE, ScanConfig, handle_scan, run_unless_interrupted};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tempfile::{NamedTempFile, TempDir};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn host_list(hosts: &[String]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    for host in hosts {
        writeln!(temp_file, "{}", host).unwrap();
    }
    temp_file
}

fn quiet_config(list: PathBuf) -> ScanConfig {
    let mut config = ScanConfig::new(list);
    config.quiet = true;
    config
}

// ============================================================================
// Argument Parsing Tests
// ============================================================================

#[test]
fn test_parse_threads() {
    assert_eq!(parse_threads("20"), Ok(20));
    assert!(parse_threads("0").is_err());
    assert!(parse_threads("-3").is_err());
    assert!(parse_threads("many").is_err());
}

#[test]
fn test_parse_timeout() {
    assert_eq!(parse_timeout("5"), Ok(5));
    assert!(parse_timeout("0").is_err());
    assert!(parse_timeout("-1").is_err());
    assert!(parse_timeout("soon").is_err());
}

#[test]
fn test_config_from_matches_defaults() {
    let matches = command_argument_builder()
        .try_get_matches_from(["roboxtract", "-l", "domains.txt"])
        .unwrap();
    let config = ScanConfig::from_matches(&matches);

    assert_eq!(config.list, PathBuf::from("domains.txt"));
    assert_eq!(config.output, None);
    assert_eq!(config.threads, 10);
    assert_eq!(config.timeout, Duration::from_secs(20));
    assert!(config.headers.is_empty());
    assert!(!config.verbose);
    assert!(config.color);
    assert!(!config.quiet);
}

#[test]
fn test_config_from_matches_all_flags() {
    let matches = command_argument_builder()
        .try_get_matches_from([
            "roboxtract",
            "--list",
            "domains.txt",
            "-o",
            "out/endpoints.txt",
            "-t",
            "25",
            "-H",
            "Cookie: session=abc",
            "-H",
            "X-Team: red",
            "--timeout",
            "5",
            "-v",
            "--no-color",
            "-q",
        ])
        .unwrap();
    let config = ScanConfig::from_matches(&matches);

    assert_eq!(config.output, Some(PathBuf::from("out/endpoints.txt")));
    assert_eq!(config.threads, 25);
    assert_eq!(config.headers, vec!["Cookie: session=abc", "X-Team: red"]);
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert!(config.verbose);
    assert!(!config.color);
    assert!(config.quiet);
}

#[test]
fn test_list_is_required() {
    let result = command_argument_builder().try_get_matches_from(["roboxtract", "-t", "5"]);
    assert!(result.is_err());
}

#[test]
fn test_zero_threads_rejected() {
    let result =
        command_argument_builder().try_get_matches_from(["roboxtract", "-l", "d.txt", "-t", "0"]);
    assert!(result.is_err());
}

#[test]
fn test_zero_timeout_rejected() {
    let result = command_argument_builder()
        .try_get_matches_from(["roboxtract", "-l", "d.txt", "--timeout", "0"]);
    assert!(result.is_err());
}

#[test]
fn test_verbose_listing_off_in_quiet_mode() {
    let mut config = ScanConfig::new(PathBuf::from("domains.txt"));
    assert!(!config.verbose_listing());

    config.verbose = true;
    assert!(config.verbose_listing());

    config.quiet = true;
    assert!(!config.verbose_listing());
}

// ============================================================================
// Interrupt Tests
// ============================================================================

#[tokio::test]
async fn test_interrupt_abandons_blocking_work() {
    let started = Instant::now();
    let result = run_unless_interrupted(tokio::time::sleep(Duration::from_millis(50)), || {
        std::thread::sleep(Duration::from_secs(2));
        0
    })
    .await;

    assert!(result.is_none());
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[tokio::test]
async fn test_blocking_work_completes_without_interrupt() {
    let result = run_unless_interrupted(std::future::pending::<()>(), || 7).await;
    assert_eq!(result.unwrap().unwrap(), 7);
}

#[tokio::test]
async fn test_blocking_work_panic_is_reported() {
    let result = run_unless_interrupted(std::future::pending::<()>(), || -> i32 {
        panic!("extraction blew up")
    })
    .await;
    assert!(result.unwrap().is_err());
}

// ============================================================================
// Scan Handler Tests
// ============================================================================

#[tokio::test]
async fn test_handle_scan_missing_list() {
    let dir = TempDir::new().unwrap();
    let config = quiet_config(dir.path().join("missing.txt"));

    let code = handle_scan(&config, std::future::pending()).await;

    assert_eq!(code, 1);
}

#[tokio::test]
async fn test_handle_scan_empty_list() {
    let list = host_list(&["# only a comment".to_string(), "".to_string()]);
    let config = quiet_config(list.path().to_path_buf());

    let code = handle_scan(&config, std::future::pending()).await;

    assert_eq!(code, 1);
}

#[tokio::test]
async fn test_handle_scan_writes_sorted_output() {
    let first = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("User-agent: *\nDisallow: /zeta\nDisallow: /admin # staff\n"),
        )
        .mount(&first)
        .await;

    let second = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&second)
        .await;

    let list = host_list(&[first.uri(), second.uri(), first.uri()]);
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("reports").join("endpoints.txt");

    let mut config = quiet_config(list.path().to_path_buf());
    config.output = Some(output.clone());

    let code = handle_scan(&config, std::future::pending()).await;

    assert_eq!(code, 0);
    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        format!("{0}/admin\n{0}/zeta\n", first.uri())
    );
}

#[tokio::test]
async fn test_handle_scan_no_results_writes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let list = host_list(&[server.uri()]);
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("endpoints.txt");

    let mut config = quiet_config(list.path().to_path_buf());
    config.output = Some(output.clone());

    let code = handle_scan(&config, std::future::pending()).await;

    assert_eq!(code, 0);
    assert!(!output.exists());
}

#[tokio::test]
async fn test_handle_scan_interrupted_skips_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("Disallow: /never\n")
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let list = host_list(&[server.uri(), format!("{}/other", server.uri())]);
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("endpoints.txt");

    let mut config = quiet_config(list.path().to_path_buf());
    config.output = Some(output.clone());

    let shutdown = tokio::time::sleep(Duration::from_millis(100));
    let code = handle_scan(&config, shutdown).await;

    assert_eq!(code, INTERRUPT_EXIT_CODE);
    assert!(!output.exists());
}

#[tokio::test]
async fn test_handle_scan_output_write_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Disallow: /admin\n"))
        .mount(&server)
        .await;

    let list = host_list(&[server.uri()]);
    let dir = TempDir::new().unwrap();

    // A directory cannot be written as a file
    let mut config = quiet_config(list.path().to_path_buf());
    config.output = Some(dir.path().to_path_buf());

    let code = handle_scan(&config, std::future::pending()).await;

    assert_eq!(code, 1);
}
