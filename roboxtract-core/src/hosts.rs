// Host list loading

use crate::error::{CoreError, Result};
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Parse a newline-delimited host list.
///
/// Blank lines and `#` comments are dropped; duplicates are removed by exact
/// string equality, keeping the first occurrence.
pub fn parse_hosts(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !line.starts_with('#'))
        .filter(|line| seen.insert(line.to_string()))
        .map(String::from)
        .collect()
}

/// Load hosts from a file
pub fn load_hosts(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => CoreError::HostsFileNotFound(path.to_path_buf()),
        _ => CoreError::HostsFileRead {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let hosts = parse_hosts(&content);
    if hosts.is_empty() {
        return Err(CoreError::EmptyHostList(path.to_path_buf()));
    }

    debug!("Loaded {} unique hosts from {}", hosts.len(), path.display());
    Ok(hosts)
}
