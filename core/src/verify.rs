use std::fmt;
use std::io;
use std::path::Path;

/// What the filesystem says about a converted path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStatus {
    File,
    Directory,
    /// Exists, but is neither a regular file nor a directory.
    Other,
    Missing,
    Unreadable(String),
}

impl PathStatus {
    pub fn exists(&self) -> bool {
        matches!(
            self,
            PathStatus::File | PathStatus::Directory | PathStatus::Other
        )
    }
}

impl fmt::Display for PathStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStatus::File => f.write_str("file exists"),
            PathStatus::Directory => f.write_str("directory exists"),
            PathStatus::Other => f.write_str("path exists (other type)"),
            PathStatus::Missing => f.write_str("path does not exist"),
            PathStatus::Unreadable(message) => write!(f, "verification failed: {message}"),
        }
    }
}

/// Checks whether `path` exists. Symlinks are followed.
pub fn verify_path(path: impl AsRef<Path>) -> PathStatus {
    match std::fs::metadata(path.as_ref()) {
        Ok(metadata) if metadata.is_file() => PathStatus::File,
        Ok(metadata) if metadata.is_dir() => PathStatus::Directory,
        Ok(_) => PathStatus::Other,
        Err(err) if err.kind() == io::ErrorKind::NotFound => PathStatus::Missing,
        Err(err) => PathStatus::Unreadable(err.to_string()),
    }
}
