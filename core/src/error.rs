use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DrivemapErr>;

/// Failures while assembling a [`crate::config::Config`]. Scanning and
/// rewriting text never fail.
#[derive(Debug, Error)]
pub enum DrivemapErr {
    #[error("could not find the user's home directory; set DRIVEMAP_HOME")]
    NoHomeDir,

    #[error("DRIVEMAP_HOME points to {}, which is not a directory", .0.display())]
    InvalidHome(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] toml::de::Error),

    #[error("invalid mount_root {0:?}: expected an absolute path without `:` or `\\`")]
    InvalidMountRoot(String),
}
