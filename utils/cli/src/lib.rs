mod config_override;
mod interop_mode_cli_arg;

pub use config_override::CliConfigOverrides;
pub use interop_mode_cli_arg::InteropModeCliArg;
