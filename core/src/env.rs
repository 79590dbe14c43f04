//! Detection of interop environments that expose host drives under a mount
//! namespace (WSL-style `/mnt/<drive>`).
//!
//! Nothing here is cached: every call re-runs the probes, so tests can point
//! an [`InteropProbe`] at temporary files instead of `/proc`.

use std::io;
use std::path::Path;
use std::path::PathBuf;

use crate::convert::DEFAULT_MOUNT_ROOT;

pub const DEFAULT_KERNEL_VERSION_PATH: &str = "/proc/version";
pub const DEFAULT_KERNEL_RELEASE_PATH: &str = "/proc/sys/kernel/osrelease";
pub const DEFAULT_MARKERS: &[&str] = &["microsoft", "wsl"];

/// Answers whether the current process runs inside an interop environment.
pub trait EnvironmentDetector {
    fn is_interop(&self) -> bool;
}

impl<T: EnvironmentDetector + ?Sized> EnvironmentDetector for &T {
    fn is_interop(&self) -> bool {
        (**self).is_interop()
    }
}

/// A fixed answer, for callers that already know (or want to force) the result.
impl EnvironmentDetector for bool {
    fn is_interop(&self) -> bool {
        *self
    }
}

/// Filesystem probes used to recognize an interop environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteropProbe {
    /// Kernel identification string, checked first.
    pub kernel_version: PathBuf,
    /// Alternate kernel release descriptor, checked second.
    pub kernel_release: PathBuf,
    /// `<mount_root>/c` existing is the last resort.
    pub mount_root: PathBuf,
    /// Vendor markers, matched case-insensitively as substrings.
    pub markers: Vec<String>,
}

impl Default for InteropProbe {
    fn default() -> Self {
        Self {
            kernel_version: PathBuf::from(DEFAULT_KERNEL_VERSION_PATH),
            kernel_release: PathBuf::from(DEFAULT_KERNEL_RELEASE_PATH),
            mount_root: PathBuf::from(DEFAULT_MOUNT_ROOT),
            markers: DEFAULT_MARKERS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl InteropProbe {
    /// Runs the probes in order and stops at the first positive one. A probe
    /// that cannot be read counts as negative.
    pub fn detect(&self) -> bool {
        if self.file_mentions_marker(&self.kernel_version) {
            tracing::debug!(
                "interop environment detected via {}",
                self.kernel_version.display()
            );
            return true;
        }
        if self.file_mentions_marker(&self.kernel_release) {
            tracing::debug!(
                "interop environment detected via {}",
                self.kernel_release.display()
            );
            return true;
        }
        let drive_mount = self.mount_root.join("c");
        if path_exists(&drive_mount) {
            tracing::debug!(
                "interop environment detected via {}",
                drive_mount.display()
            );
            return true;
        }
        tracing::debug!("no interop environment detected");
        false
    }

    fn file_mentions_marker(&self, path: &Path) -> bool {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                let contents = contents.to_lowercase();
                self.markers
                    .iter()
                    .filter(|marker| !marker.is_empty())
                    .any(|marker| contents.contains(&marker.to_lowercase()))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("{} not found", path.display());
                false
            }
            Err(err) => {
                tracing::warn!("failed to read {}: {err}", path.display());
                false
            }
        }
    }
}

impl EnvironmentDetector for InteropProbe {
    fn is_interop(&self) -> bool {
        self.detect()
    }
}

fn path_exists(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(_) => true,
        Err(err) if err.kind() == io::ErrorKind::NotFound => false,
        Err(err) => {
            tracing::warn!("failed to stat {}: {err}", path.display());
            false
        }
    }
}

/// Either runs the probes or reports a fixed answer, depending on configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteropDetector {
    Probe(InteropProbe),
    Fixed(bool),
}

impl EnvironmentDetector for InteropDetector {
    fn is_interop(&self) -> bool {
        match self {
            InteropDetector::Probe(probe) => probe.detect(),
            InteropDetector::Fixed(value) => *value,
        }
    }
}

/// Returns true if the current process is running in an interop environment,
/// using the default probes.
pub fn is_interop_environment() -> bool {
    InteropProbe::default().detect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn probe_in(dir: &TempDir) -> InteropProbe {
        InteropProbe {
            kernel_version: dir.path().join("version"),
            kernel_release: dir.path().join("osrelease"),
            mount_root: dir.path().join("mnt"),
            ..InteropProbe::default()
        }
    }

    #[test]
    fn kernel_version_marker_is_case_insensitive() {
        let dir = TempDir::new().expect("tempdir");
        fs::write(
            dir.path().join("version"),
            "Linux version 5.15.167.4-Microsoft-standard-WSL2 (gcc 11.2.0)",
        )
        .expect("write version");
        assert!(probe_in(&dir).detect());
    }

    #[test]
    fn kernel_release_is_checked_when_version_is_missing() {
        let dir = TempDir::new().expect("tempdir");
        fs::write(dir.path().join("osrelease"), "4.4.0-19041-MICROSOFT\n").expect("write");
        assert!(probe_in(&dir).detect());
    }

    #[test]
    fn drive_mount_directory_is_the_last_resort() {
        let dir = TempDir::new().expect("tempdir");
        fs::write(dir.path().join("version"), "Linux version 6.8.0-generic").expect("write");
        fs::create_dir_all(dir.path().join("mnt").join("c")).expect("mkdir");
        assert!(probe_in(&dir).detect());
    }

    #[test]
    fn plain_linux_is_not_interop() {
        let dir = TempDir::new().expect("tempdir");
        fs::write(dir.path().join("version"), "Linux version 6.8.0-generic").expect("write");
        fs::write(dir.path().join("osrelease"), "6.8.0-generic").expect("write");
        assert!(!probe_in(&dir).detect());
    }

    #[test]
    fn unreadable_probes_count_as_negative() {
        let dir = TempDir::new().expect("tempdir");
        // A directory cannot be read as a string.
        fs::create_dir_all(dir.path().join("version")).expect("mkdir");
        assert!(!probe_in(&dir).detect());
    }

    #[test]
    fn empty_markers_never_match() {
        let dir = TempDir::new().expect("tempdir");
        fs::write(dir.path().join("version"), "anything").expect("write");
        let probe = InteropProbe {
            markers: vec![String::new()],
            ..probe_in(&dir)
        };
        assert!(!probe.detect());
    }

    #[test]
    fn fixed_detectors() {
        assert!(InteropDetector::Fixed(true).is_interop());
        assert!(!InteropDetector::Fixed(false).is_interop());
        assert!(true.is_interop());
    }
}
