//! Human-readable report written to stderr after a command runs.

use drivemap_core::ConversionRecord;
use drivemap_core::PathStatus;
use drivemap_core::Rewrite;
use owo_colors::OwoColorize;

/// Lines describing what [`drivemap_core::TextRewriter::rewrite`] did.
pub fn format_rewrite_report(rewrite: &Rewrite, color_enabled: bool) -> Vec<String> {
    if !rewrite.interop {
        return vec![format_interop_warning(color_enabled)];
    }
    if rewrite.conversions.is_empty() {
        return vec!["No Windows paths detected.".to_string()];
    }

    let mut lines = vec![format!(
        "Converted {} Windows path(s):",
        rewrite.conversions.len()
    )];
    lines.extend(
        rewrite
            .conversions
            .iter()
            .map(|record| format_conversion(record, color_enabled)),
    );
    lines
}

pub fn format_interop_warning(color_enabled: bool) -> String {
    let warning = "Not running in an interop environment; paths left unchanged.";
    if color_enabled {
        warning.yellow().to_string()
    } else {
        warning.to_string()
    }
}

fn format_conversion(record: &ConversionRecord, color_enabled: bool) -> String {
    let converted = if color_enabled {
        record.converted.green().to_string()
    } else {
        record.converted.clone()
    };
    format!("  {} → {converted}", record.original)
}

/// One line per `convert` argument.
pub fn format_convert_line(
    original: &str,
    converted: &str,
    status: Option<&PathStatus>,
    color_enabled: bool,
) -> String {
    let mut line = if original == converted {
        format!("{original}: unchanged")
    } else {
        format!("{original} → {converted}")
    };
    if let Some(status) = status {
        let status = match (status.exists(), color_enabled) {
            (true, true) => status.to_string().green().to_string(),
            (false, true) => status.to_string().red().to_string(),
            (_, false) => status.to_string(),
        };
        line = format!("{line} ({status})");
    }
    line
}

pub fn format_environment_status(interop: bool, mount_root: &str, color_enabled: bool) -> String {
    if !interop {
        return "Interop environment: not detected".to_string();
    }
    let active = if color_enabled {
        "active".green().to_string()
    } else {
        "active".to_string()
    };
    let mount_root = if mount_root.is_empty() { "/" } else { mount_root };
    format!("Interop environment: {active} (drives under {mount_root})")
}
