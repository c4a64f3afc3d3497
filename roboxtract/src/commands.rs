use crate::CLAP_STYLING;
use clap::{ArgAction, arg};
use std::path::PathBuf;

/// Parse a strictly positive worker count.
pub fn parse_threads(value: &str) -> Result<usize, String> {
    let threads: usize = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", value))?;
    if threads == 0 {
        return Err("thread count must be at least 1".to_string());
    }
    Ok(threads)
}

/// Parse a strictly positive timeout in seconds.
pub fn parse_timeout(value: &str) -> Result<u64, String> {
    let secs: u64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid number of seconds", value))?;
    if secs == 0 {
        return Err("timeout must be at least 1 second".to_string());
    }
    Ok(secs)
}

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("roboxtract")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("roboxtract")
        .about("Extract hidden endpoints from robots.txt files")
        .after_help("Example: roboxtract -l domains.txt -o endpoints.txt -t 20 -v")
        .styles(CLAP_STYLING)
        .arg(
            arg!(-l --"list" <FILE>)
                .required(true)
                .help("File containing list of domains (one per line)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(-o --"output" <FILE>)
                .required(false)
                .help("Output file for extracted endpoints (default: print to screen)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(-t --"threads" <N>)
                .required(false)
                .help("Number of concurrent requests")
                .value_parser(parse_threads)
                .default_value("10"),
        )
        .arg(
            arg!(-H --"header" <HEADER>)
                .required(false)
                .help("Custom header (format: \"Key: Value\"), may be repeated")
                .action(ArgAction::Append),
        )
        .arg(
            arg!(--"timeout" <SECONDS>)
                .required(false)
                .help("Request timeout in seconds")
                .value_parser(parse_timeout)
                .default_value("20"),
        )
        .arg(arg!(-v --"verbose" "Enable verbose output").required(false))
        .arg(arg!(--"no-color" "Disable colored output").required(false))
        .arg(arg!(-q --"quiet" "Suppress the banner and send status output to stderr").required(false))
}
