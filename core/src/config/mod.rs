//! Runtime configuration assembled from `~/.drivemap/config.toml`, `-c`
//! overrides and dedicated command-line flags, in increasing precedence.

use std::io;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use toml::Value as TomlValue;

use crate::convert::DEFAULT_MOUNT_ROOT;
use crate::env::DEFAULT_KERNEL_RELEASE_PATH;
use crate::env::DEFAULT_KERNEL_VERSION_PATH;
use crate::env::DEFAULT_MARKERS;
use crate::env::InteropDetector;
use crate::env::InteropProbe;
use crate::error::DrivemapErr;
use crate::error::Result;
use crate::rewrite::TextRewriter;

mod home;
mod overrides;

pub use home::DRIVEMAP_HOME_ENV_VAR;
pub use home::find_drivemap_home;
use overrides::build_cli_overrides_layer;
use overrides::merge_toml_values;

pub const CONFIG_TOML_FILE: &str = "config.toml";

/// How the interop environment flag is obtained.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InteropMode {
    /// Run the environment probes.
    #[default]
    Auto,
    /// Behave as if running in an interop environment.
    Always,
    /// Never rewrite anything.
    Never,
}

/// Base config deserialized from ~/.drivemap/config.toml.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigToml {
    pub interop: Option<InteropMode>,

    /// Directory under which host drives are mounted.
    pub mount_root: Option<String>,

    /// Vendor markers looked for in the kernel descriptors.
    pub markers: Option<Vec<String>>,

    #[serde(default)]
    pub probes: ProbesToml,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProbesToml {
    pub kernel_version: Option<PathBuf>,
    pub kernel_release: Option<PathBuf>,
}

/// Options that take precedence over anything in `config.toml` or `-c`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub interop: Option<InteropMode>,
    pub mount_root: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub interop: InteropMode,
    /// Absolute, without a trailing `/` (empty for the filesystem root).
    pub mount_root: String,
    pub markers: Vec<String>,
    pub kernel_version_path: PathBuf,
    pub kernel_release_path: PathBuf,
    pub drivemap_home: PathBuf,
}

impl Config {
    /// This is the preferred way to create an instance of [Config].
    pub fn load_with_cli_overrides(
        cli_overrides: Vec<(String, TomlValue)>,
        overrides: ConfigOverrides,
    ) -> Result<Self> {
        let drivemap_home = find_drivemap_home()?;
        Self::load_from_home(drivemap_home, cli_overrides, overrides)
    }

    /// Like [Config::load_with_cli_overrides], with an explicit home directory.
    pub fn load_from_home(
        drivemap_home: PathBuf,
        cli_overrides: Vec<(String, TomlValue)>,
        overrides: ConfigOverrides,
    ) -> Result<Self> {
        let config_path = drivemap_home.join(CONFIG_TOML_FILE);
        let mut merged = read_config_from_path(&config_path)?
            .unwrap_or_else(|| TomlValue::Table(toml::Table::new()));
        let cli_layer = build_cli_overrides_layer(&cli_overrides);
        merge_toml_values(&mut merged, &cli_layer);

        let config_toml: ConfigToml = merged.try_into()?;
        Self::load_from_base_config_with_overrides(config_toml, overrides, drivemap_home)
    }

    pub fn load_from_base_config_with_overrides(
        cfg: ConfigToml,
        overrides: ConfigOverrides,
        drivemap_home: PathBuf,
    ) -> Result<Self> {
        let ConfigOverrides {
            interop,
            mount_root,
        } = overrides;

        let mount_root = normalize_mount_root(
            mount_root
                .or(cfg.mount_root)
                .unwrap_or_else(|| DEFAULT_MOUNT_ROOT.to_string()),
        )?;

        Ok(Self {
            interop: interop.or(cfg.interop).unwrap_or_default(),
            mount_root,
            markers: cfg
                .markers
                .unwrap_or_else(|| DEFAULT_MARKERS.iter().map(ToString::to_string).collect()),
            kernel_version_path: cfg
                .probes
                .kernel_version
                .unwrap_or_else(|| PathBuf::from(DEFAULT_KERNEL_VERSION_PATH)),
            kernel_release_path: cfg
                .probes
                .kernel_release
                .unwrap_or_else(|| PathBuf::from(DEFAULT_KERNEL_RELEASE_PATH)),
            drivemap_home,
        })
    }

    pub fn interop_probe(&self) -> InteropProbe {
        InteropProbe {
            kernel_version: self.kernel_version_path.clone(),
            kernel_release: self.kernel_release_path.clone(),
            mount_root: PathBuf::from(self.mount_root_dir()),
            markers: self.markers.clone(),
        }
    }

    pub fn interop_detector(&self) -> InteropDetector {
        match self.interop {
            InteropMode::Auto => InteropDetector::Probe(self.interop_probe()),
            InteropMode::Always => InteropDetector::Fixed(true),
            InteropMode::Never => InteropDetector::Fixed(false),
        }
    }

    pub fn text_rewriter(&self) -> TextRewriter<InteropDetector> {
        TextRewriter::new(self.interop_detector()).with_mount_root(self.mount_root.clone())
    }

    fn mount_root_dir(&self) -> &str {
        if self.mount_root.is_empty() {
            "/"
        } else {
            &self.mount_root
        }
    }
}

fn normalize_mount_root(raw: String) -> Result<String> {
    if !raw.starts_with('/') || raw.contains([':', '\\']) {
        return Err(DrivemapErr::InvalidMountRoot(raw));
    }
    Ok(raw.trim_end_matches('/').to_string())
}

fn read_config_from_path(path: &Path) -> Result<Option<TomlValue>> {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<TomlValue>(&contents) {
            Ok(value) => Ok(Some(value)),
            Err(source) => {
                tracing::error!("Failed to parse {}: {source}", path.display());
                Err(DrivemapErr::ParseConfig {
                    path: path.to_path_buf(),
                    source,
                })
            }
        },
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("{} not found, using defaults", path.display());
            Ok(None)
        }
        Err(source) => {
            tracing::error!("Failed to read {}: {source}", path.display());
            Err(DrivemapErr::ReadConfig {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}
