//! Standard type to use with the `--interop` CLI option.

use clap::ValueEnum;
use drivemap_core::InteropMode;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum InteropModeCliArg {
    /// Probe the kernel descriptors and the drive mount.
    Auto,
    /// Rewrite as if inside an interop environment.
    Always,
    /// Never rewrite.
    Never,
}

impl From<InteropModeCliArg> for InteropMode {
    fn from(value: InteropModeCliArg) -> Self {
        match value {
            InteropModeCliArg::Auto => InteropMode::Auto,
            InteropModeCliArg::Always => InteropMode::Always,
            InteropModeCliArg::Never => InteropMode::Never,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn maps_cli_args_to_config_modes() {
        assert_eq!(InteropMode::Auto, InteropModeCliArg::Auto.into());
        assert_eq!(InteropMode::Always, InteropModeCliArg::Always.into());
        assert_eq!(InteropMode::Never, InteropModeCliArg::Never.into());
    }
}
