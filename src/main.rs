use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use launchargs::args::{expand_command_line, ArgProcessor, EnvSource, ExpandedArgs};
use launchargs::config::{Config, LauncherMode};
use launchargs::logging::init_tracing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One argument per line.
    Lines,
    /// JSON object with args, app_arg_index and notes.
    Json,
}

/// Expand launcher arguments: @argfiles, environment options and the
/// application boundary.
#[derive(Debug, Parser)]
#[command(name = "launchargs", version)]
struct Cli {
    /// Config file (default: platform config dir /launchargs/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Generic tool mode: no application boundary, expansion never stops early
    #[arg(long)]
    tool: bool,

    /// Start with @argfile expansion disabled
    #[arg(long)]
    disable_argfiles: bool,

    /// Environment variable to read launcher options from
    #[arg(long, value_name = "NAME", conflicts_with = "no_env")]
    env_var: Option<String>,

    /// Do not read launcher options from the environment
    #[arg(long)]
    no_env: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Lines)]
    format: OutputFormat,

    /// Program name followed by its raw arguments
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Config::load().context("loading default config"),
    }
}

fn print_result(result: &ExpandedArgs, format: OutputFormat) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Lines => {
            for arg in &result.args {
                writeln!(stdout, "{}", arg)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut stdout, result)?;
            writeln!(stdout)?;
        }
    }
    stdout.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let log_path = init_tracing();
    let cli = Cli::parse();
    if let Some(path) = &log_path {
        tracing::debug!(log = %path.display(), "logging enabled");
    }

    let config = load_config(cli.config.as_ref())?;
    let mode = if cli.tool {
        LauncherMode::Tool
    } else {
        config.launcher.mode
    };
    let disable_argfiles = cli.disable_argfiles || config.launcher.disable_argfiles;
    let env_var = cli.env_var.as_deref().unwrap_or(config.launcher.env_var.as_str());
    let env = if cli.no_env {
        EnvSource::Disabled
    } else {
        EnvSource::Process(env_var)
    };

    let Some((program, raw_args)) = cli.command.split_first() else {
        anyhow::bail!("missing program name");
    };

    let _span = tracing::info_span!("expand", program = %program, ?mode, env = ?env).entered();

    let mut processor = ArgProcessor::from_config(&config);
    let result = match expand_command_line(
        &mut processor,
        mode,
        disable_argfiles,
        program,
        env,
        raw_args,
    ) {
        Ok(result) => result,
        Err(err) => {
            tracing::error!(diagnostic = err.diagnostic_id(), "{}", err);
            eprintln!("{}", err);
            std::process::exit(err.exit_code());
        }
    };

    for note in &result.notes {
        eprintln!("{}", note);
    }

    print_result(&result, cli.format)
}
