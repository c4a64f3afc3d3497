// Disallow-directive extraction from robots.txt bodies

use std::collections::BTreeSet;

/// Absolute endpoint URLs, deduplicated and kept in lexicographic order.
pub type EndpointSet = BTreeSet<String>;

const ROBOTS_SUFFIX: &str = "/robots.txt";
const DISALLOW_PREFIX: &str = "disallow:";

/// Strip a trailing `/robots.txt` and any trailing slashes from a source URL.
pub fn base_domain(source_url: &str) -> &str {
    source_url
        .strip_suffix(ROBOTS_SUFFIX)
        .unwrap_or(source_url)
        .trim_end_matches('/')
}

/// Collect every actionable `Disallow` path in `content` as an absolute URL
/// rooted at `source_url`.
///
/// Invalid UTF-8 is replaced rather than rejected. Empty paths, the bare root
/// and wildcard patterns are skipped since they point at nothing concrete.
pub fn extract_endpoints(content: impl AsRef<[u8]>, source_url: &str) -> EndpointSet {
    let mut endpoints = EndpointSet::new();

    let content = content.as_ref();
    if content.is_empty() {
        return endpoints;
    }

    let text = String::from_utf8_lossy(content);
    let base = base_domain(source_url);

    for line in text.split('\n') {
        if let Some(path) = disallowed_path(line) {
            endpoints.insert(format!("{}{}", base, path));
        }
    }

    endpoints
}

/// The usable path of a single `Disallow:` line, if there is one.
fn disallowed_path(line: &str) -> Option<&str> {
    let line = line.trim();

    let is_disallow = line
        .get(..DISALLOW_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(DISALLOW_PREFIX));
    if !is_disallow {
        return None;
    }

    let (_, path) = line.split_once(':')?;
    let mut path = path.trim();

    if path.is_empty() || path == "/" || path.contains('*') {
        return None;
    }

    // Truncate on '#' first, then on a tab in whatever is left.
    for delimiter in ['#', '\t'] {
        if let Some((kept, _)) = path.split_once(delimiter) {
            path = kept.trim();
        }
    }

    if path.is_empty() { None } else { Some(path) }
}
