// Endpoint list output

use crate::error::{CoreError, Result};
use crate::extract::EndpointSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// One endpoint per line in lexicographic order, each line newline-terminated.
pub fn render_endpoints(endpoints: &EndpointSet) -> String {
    let mut rendered = String::new();
    for endpoint in endpoints {
        rendered.push_str(endpoint);
        rendered.push('\n');
    }
    rendered
}

/// Write the endpoint list to `path`, creating parent directories as needed.
pub fn write_endpoints(path: &Path, endpoints: &EndpointSet) -> Result<()> {
    let map_err = |source: std::io::Error| match source.kind() {
        ErrorKind::PermissionDenied => CoreError::OutputPermissionDenied(path.to_path_buf()),
        _ => CoreError::OutputWrite {
            path: path.to_path_buf(),
            source,
        },
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(map_err)?;
    }

    fs::write(path, render_endpoints(endpoints)).map_err(map_err)
}
