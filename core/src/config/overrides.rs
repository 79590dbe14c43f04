use toml::Value as TomlValue;

/// Builds a TOML table from `-c key=value` pairs. Dotted keys address nested
/// tables, so `probes.kernel_version=/tmp/v` becomes `[probes] kernel_version`.
pub(crate) fn build_cli_overrides_layer(cli_overrides: &[(String, TomlValue)]) -> TomlValue {
    let mut root = TomlValue::Table(toml::Table::new());
    for (path, value) in cli_overrides {
        apply_toml_override(&mut root, path, value.clone());
    }
    root
}

fn apply_toml_override(root: &mut TomlValue, path: &str, value: TomlValue) {
    let segments: Vec<&str> = path.split('.').collect();
    let mut current = root;

    for (idx, segment) in segments.iter().enumerate() {
        let is_last = idx == segments.len() - 1;
        if !current.is_table() {
            *current = TomlValue::Table(toml::Table::new());
        }
        let TomlValue::Table(table) = current else {
            return;
        };
        if is_last {
            table.insert((*segment).to_string(), value);
            return;
        }
        current = table
            .entry((*segment).to_string())
            .or_insert_with(|| TomlValue::Table(toml::Table::new()));
    }
}

/// Merges `overlay` into `base`: tables merge key by key, anything else is
/// replaced.
pub(crate) fn merge_toml_values(base: &mut TomlValue, overlay: &TomlValue) {
    if let TomlValue::Table(overlay_table) = overlay
        && let TomlValue::Table(base_table) = base
    {
        for (key, value) in overlay_table {
            if let Some(existing) = base_table.get_mut(key) {
                merge_toml_values(existing, value);
            } else {
                base_table.insert(key.clone(), value.clone());
            }
        }
    } else {
        *base = overlay.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dotted_keys_create_nested_tables() {
        let layer = build_cli_overrides_layer(&[
            (
                "probes.kernel_version".to_string(),
                TomlValue::String("/tmp/version".to_string()),
            ),
            ("interop".to_string(), TomlValue::String("never".to_string())),
        ]);
        let expected: TomlValue = toml::from_str(
            r#"
interop = "never"

[probes]
kernel_version = "/tmp/version"
"#,
        )
        .expect("parse expected");
        assert_eq!(layer, expected);
    }

    #[test]
    fn overlay_wins_and_tables_merge() {
        let mut base: TomlValue = toml::from_str(
            r#"
mount_root = "/mnt"

[probes]
kernel_version = "/proc/version"
kernel_release = "/proc/sys/kernel/osrelease"
"#,
        )
        .expect("parse base");
        let overlay: TomlValue = toml::from_str(
            r#"
mount_root = "/media"

[probes]
kernel_release = "/tmp/osrelease"
"#,
        )
        .expect("parse overlay");

        merge_toml_values(&mut base, &overlay);

        let expected: TomlValue = toml::from_str(
            r#"
mount_root = "/media"

[probes]
kernel_version = "/proc/version"
kernel_release = "/tmp/osrelease"
"#,
        )
        .expect("parse expected");
        assert_eq!(base, expected);
    }
}
