//! Support for `-c key=value` overrides shared by every subcommand.
//!
//! The value half is parsed as TOML so that `-c 'markers=["lxss"]'` yields an
//! array. Anything that does not parse as TOML is taken as a plain string,
//! which keeps `-c mount_root=/media` working without quoting.

use clap::ArgAction;
use clap::Parser;
use toml::Value;

#[derive(Parser, Debug, Default, Clone)]
pub struct CliConfigOverrides {
    /// Override a configuration value that would otherwise be loaded from
    /// `~/.drivemap/config.toml`. Use a dotted path (`probes.kernel_version`)
    /// to reach nested values. The value is parsed as TOML, falling back to a
    /// literal string.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "key=value",
        action = ArgAction::Append,
        global = true
    )]
    pub raw_overrides: Vec<String>,
}

impl CliConfigOverrides {
    /// Splits every raw override into its dotted key and parsed value.
    pub fn parse_overrides(&self) -> Result<Vec<(String, Value)>, String> {
        self.raw_overrides
            .iter()
            .map(|raw| {
                let Some((key, value)) = raw.split_once('=') else {
                    return Err(format!("Invalid override (missing '='): {raw}"));
                };
                let key = key.trim();
                if key.is_empty() {
                    return Err(format!("Empty key in override: {raw}"));
                }
                let value = value.trim();
                let value = parse_toml_value(value).unwrap_or_else(|| {
                    Value::String(value.trim_matches(|c| c == '"' || c == '\'').to_string())
                });
                Ok((key.to_string(), value))
            })
            .collect()
    }
}

fn parse_toml_value(raw: &str) -> Option<Value> {
    // A bare value is not a TOML document; wrap it in a throwaway key.
    let wrapped = format!("_x_ = {raw}");
    let mut table: toml::Table = toml::from_str(&wrapped).ok()?;
    table.remove("_x_")
}
