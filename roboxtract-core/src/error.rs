use roboxtract_scanner::ScanError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("File not found: {}", .0.display())]
    HostsFileNotFound(PathBuf),

    #[error("Error loading file {}: {source}", .path.display())]
    HostsFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No domains found in {}", .0.display())]
    EmptyHostList(PathBuf),

    #[error("Permission denied: {}", .0.display())]
    OutputPermissionDenied(PathBuf),

    #[error("Error writing file {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Scan(#[from] ScanError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
