// stdout carries the command's result and nothing else: the rewritten text,
// the JSON object in --json mode, converted or extracted paths. Reports and
// logs go to stderr.
#![deny(clippy::print_stdout)]

mod cli;
pub mod report;

pub use cli::Cli;
pub use cli::Color;
pub use cli::Command;
pub use cli::ConvertArgs;
pub use cli::ExtractArgs;
pub use cli::RewriteArgs;

use std::io::IsTerminal;
use std::io::Read;
use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::CommandFactory;
use clap_complete::Shell;
use clap_complete::generate;
use drivemap_core::Config;
use drivemap_core::ConfigOverrides;
use drivemap_core::ConversionRecord;
use drivemap_core::EnvironmentDetector;
use drivemap_core::convert_path_under;
use drivemap_core::extract_windows_paths;
use drivemap_core::verify_path;
use serde::Serialize;
use supports_color::Stream;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use crate::report::format_convert_line;
use crate::report::format_environment_status;
use crate::report::format_interop_warning;
use crate::report::format_rewrite_report;

/// Shape of the `--json` output.
#[derive(Serialize)]
struct RewriteJson<'a> {
    text: &'a str,
    conversions: &'a [ConversionRecord],
    interop: bool,
}

/// Where the stderr report goes and how it looks.
struct Reporter {
    color_enabled: bool,
    quiet: bool,
}

impl Reporter {
    fn emit(&self, lines: impl IntoIterator<Item = String>) {
        if self.quiet {
            return;
        }
        for line in lines {
            eprintln!("{line}");
        }
    }
}

pub fn run_main(cli: Cli) -> anyhow::Result<ExitCode> {
    let Cli {
        config_overrides,
        interop,
        mount_root,
        color,
        quiet,
        rewrite,
        command,
    } = cli;

    let (stdout_with_ansi, stderr_with_ansi) = match color {
        Color::Always => (true, true),
        Color::Never => (false, false),
        Color::Auto => (
            supports_color::on_cached(Stream::Stdout).is_some(),
            supports_color::on_cached(Stream::Stderr).is_some(),
        ),
    };
    init_tracing(stderr_with_ansi);

    let reporter = Reporter {
        color_enabled: stderr_with_ansi,
        quiet,
    };
    let load_config = || -> anyhow::Result<Config> {
        let cli_kv_overrides = config_overrides
            .parse_overrides()
            .map_err(|err| anyhow::anyhow!("Error parsing -c overrides: {err}"))?;
        let config = Config::load_with_cli_overrides(
            cli_kv_overrides,
            ConfigOverrides {
                interop: interop.map(Into::into),
                mount_root,
            },
        )
        .context("Error loading configuration")?;
        tracing::debug!(?config, "loaded configuration");
        Ok(config)
    };

    match command {
        None => run_rewrite(&load_config()?, rewrite, &reporter),
        Some(Command::Rewrite(args)) => run_rewrite(&load_config()?, args, &reporter),
        Some(Command::Convert(args)) => run_convert(&load_config()?, args, &reporter),
        Some(Command::Extract(args)) => run_extract(args),
        Some(Command::CheckEnv) => run_check_env(&load_config()?, stdout_with_ansi),
        Some(Command::Completion(completion)) => {
            print_completion(completion.shell);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing(with_ansi: bool) {
    let default_level = "warn";
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(with_ansi)
        .with_writer(std::io::stderr)
        .with_filter(env_filter);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}

fn run_rewrite(
    config: &Config,
    args: RewriteArgs,
    reporter: &Reporter,
) -> anyhow::Result<ExitCode> {
    let RewriteArgs { json, text } = args;
    let text = resolve_text(text)?;
    let rewrite = config.text_rewriter().rewrite(&text);

    let mut stdout = std::io::stdout().lock();
    if json {
        let payload = RewriteJson {
            text: &rewrite.text,
            conversions: &rewrite.conversions,
            interop: rewrite.interop,
        };
        serde_json::to_writer(&mut stdout, &payload)?;
        writeln!(stdout)?;
    } else {
        stdout.write_all(rewrite.text.as_bytes())?;
        if !rewrite.text.ends_with('\n') {
            writeln!(stdout)?;
        }
    }
    stdout.flush()?;

    reporter.emit(format_rewrite_report(&rewrite, reporter.color_enabled));
    Ok(ExitCode::SUCCESS)
}

fn run_convert(
    config: &Config,
    args: ConvertArgs,
    reporter: &Reporter,
) -> anyhow::Result<ExitCode> {
    let ConvertArgs {
        paths,
        verify,
        verbose,
    } = args;
    let interop = config.interop_detector().is_interop();
    if !interop {
        reporter.emit([format_interop_warning(reporter.color_enabled)]);
    }

    let mut stdout = std::io::stdout().lock();
    let mut any_missing = false;
    for path in &paths {
        let converted = if interop {
            convert_path_under(&config.mount_root, path)
        } else {
            path.clone()
        };
        writeln!(stdout, "{converted}")?;

        // Paths that were passed through unchanged have nothing to verify.
        let status = (verify && converted != *path).then(|| verify_path(&converted));
        if let Some(status) = &status
            && !status.exists()
        {
            any_missing = true;
        }
        if verbose {
            reporter.emit([format_convert_line(
                path,
                &converted,
                status.as_ref(),
                reporter.color_enabled,
            )]);
        }
    }
    stdout.flush()?;

    Ok(if any_missing {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn run_extract(args: ExtractArgs) -> anyhow::Result<ExitCode> {
    let text = resolve_text(args.text)?;
    let mut stdout = std::io::stdout().lock();
    for path in extract_windows_paths(&text) {
        writeln!(stdout, "{path}")?;
    }
    stdout.flush()?;
    Ok(ExitCode::SUCCESS)
}

fn run_check_env(config: &Config, color_enabled: bool) -> anyhow::Result<ExitCode> {
    let interop = config.interop_detector().is_interop();
    let mut stdout = std::io::stdout().lock();
    writeln!(
        stdout,
        "{}",
        format_environment_status(interop, &config.mount_root, color_enabled)
    )?;
    Ok(if interop {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_completion(shell: Shell) {
    let mut app = Cli::command();
    let name = "drivemap";
    generate(shell, &mut app, name, &mut std::io::stdout());
}

/// Returns the text argument, or all of stdin when it is absent or `-`.
fn resolve_text(text: Option<String>) -> anyhow::Result<String> {
    match text {
        Some(text) if text != "-" => Ok(text),
        maybe_dash => {
            let force_stdin = matches!(maybe_dash.as_deref(), Some("-"));
            if std::io::stdin().is_terminal() && !force_stdin {
                anyhow::bail!(
                    "No text provided. Either pass it as an argument or pipe it into stdin."
                );
            }
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read text from stdin")?;
            if buffer.is_empty() {
                anyhow::bail!("No text provided via stdin.");
            }
            Ok(buffer)
        }
    }
}
