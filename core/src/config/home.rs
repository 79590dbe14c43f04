use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::DrivemapErr;
use crate::error::Result;

/// Relocates the directory holding `config.toml`.
pub const DRIVEMAP_HOME_ENV_VAR: &str = "DRIVEMAP_HOME";

const DEFAULT_HOME_DIR: &str = ".drivemap";

/// `$DRIVEMAP_HOME` when set to an existing directory, otherwise
/// `~/.drivemap` (which may not exist yet).
pub fn find_drivemap_home() -> Result<PathBuf> {
    resolve_home(std::env::var_os(DRIVEMAP_HOME_ENV_VAR), dirs::home_dir())
}

fn resolve_home(env_value: Option<OsString>, user_home: Option<PathBuf>) -> Result<PathBuf> {
    let Some(path) = env_value.filter(|value| !value.is_empty()).map(PathBuf::from) else {
        return user_home
            .map(|home| home.join(DEFAULT_HOME_DIR))
            .ok_or(DrivemapErr::NoHomeDir);
    };
    if path.is_dir() {
        Ok(path)
    } else {
        Err(DrivemapErr::InvalidHome(path))
    }
}
