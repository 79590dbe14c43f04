//! Root of the `drivemap-core` library.
//!
//! Finds Windows drive paths in free-form text and, inside an interop
//! environment, rewrites them to their mount paths (`C:\Users` becomes
//! `/mnt/c/Users`).

// Library code reports through `tracing`; stdout belongs to the binary.
#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod config;
pub mod convert;
pub mod env;
pub mod error;
pub mod grammar;
pub mod rewrite;
pub mod verify;

pub use config::Config;
pub use config::ConfigOverrides;
pub use config::InteropMode;
pub use convert::DEFAULT_MOUNT_ROOT;
pub use convert::convert_path;
pub use convert::convert_path_under;
pub use convert::win_path_to_mount;
pub use env::EnvironmentDetector;
pub use env::InteropDetector;
pub use env::InteropProbe;
pub use env::is_interop_environment;
pub use error::DrivemapErr;
pub use grammar::CandidateMatch;
pub use grammar::MatchKind;
pub use grammar::classify;
pub use grammar::extract_windows_paths;
pub use grammar::is_windows_path;
pub use rewrite::ConversionRecord;
pub use rewrite::Rewrite;
pub use rewrite::TextRewriter;
pub use rewrite::rewrite_text;
pub use verify::PathStatus;
pub use verify::verify_path;
