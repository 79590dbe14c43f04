use clap::Args;
use clap::Parser;
use clap::ValueEnum;
use clap_complete::Shell;
use drivemap_utils_cli::CliConfigOverrides;
use drivemap_utils_cli::InteropModeCliArg;

/// Rewrite Windows drive paths in text to their interop mount paths.
///
/// If no subcommand is specified, TEXT (or stdin) is rewritten.
#[derive(Parser, Debug)]
#[command(
    version,
    // If a sub-command is given, ignore requirements of the default args.
    subcommand_negates_reqs = true,
    bin_name = "drivemap",
    override_usage = "drivemap [OPTIONS] [TEXT]\n       drivemap [OPTIONS] <COMMAND> [ARGS]"
)]
pub struct Cli {
    #[clap(flatten)]
    pub config_overrides: CliConfigOverrides,

    /// Probe the environment (`auto`) or force the interop check either way.
    #[arg(long = "interop", value_enum, global = true)]
    pub interop: Option<InteropModeCliArg>,

    /// Directory under which host drives are mounted.
    #[arg(long = "mount-root", value_name = "DIR", global = true)]
    pub mount_root: Option<String>,

    /// Specifies color settings for the report written to stderr.
    #[arg(long = "color", value_enum, default_value_t = Color::Auto, global = true)]
    pub color: Color,

    /// Do not write the conversion report to stderr.
    #[arg(long = "quiet", short = 'q', default_value_t = false, global = true)]
    pub quiet: bool,

    #[clap(flatten)]
    pub rewrite: RewriteArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Rewrite every Windows path in TEXT. Same as running without a subcommand.
    Rewrite(RewriteArgs),

    /// Convert individual paths, printing one result per line.
    Convert(ConvertArgs),

    /// List the Windows paths found in TEXT without converting them.
    Extract(ExtractArgs),

    /// Report whether an interop environment is active (exit code 1 if not).
    CheckEnv,

    /// Generate shell completion scripts.
    Completion(CompletionCommand),
}

#[derive(Args, Debug, Default)]
pub struct RewriteArgs {
    /// Print a JSON object with the text and the conversions to stdout.
    #[arg(long = "json", default_value_t = false)]
    pub json: bool,

    /// Text to rewrite. If not provided (or if `-` is used), it is read from
    /// stdin.
    #[arg(value_name = "TEXT", value_hint = clap::ValueHint::Other)]
    pub text: Option<String>,
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Windows paths to convert. Anything else is printed unchanged.
    #[arg(value_name = "PATH", required = true, num_args = 1..)]
    pub paths: Vec<String>,

    /// Check that each converted path exists; exit with 1 if one does not.
    #[arg(long = "verify", short = 'v', default_value_t = false)]
    pub verify: bool,

    /// Write a per-path report to stderr.
    #[arg(long = "verbose", default_value_t = false)]
    pub verbose: bool,
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Text to scan. If not provided (or if `-` is used), it is read from
    /// stdin.
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,
}

#[derive(Args, Debug)]
pub struct CompletionCommand {
    /// Shell to generate completions for
    #[clap(value_enum, default_value_t = Shell::Bash)]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum Color {
    Always,
    Never,
    #[default]
    Auto,
}
