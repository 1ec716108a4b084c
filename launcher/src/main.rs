//! Launch the eBay bot script and keep the console open if it fails.

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use launcher::config::{DEFAULT_CONFIG_FILE, LauncherConfig, load_config};
use launcher::exit_codes;
use launcher::launch::Launcher;
use launcher::logging;
use launcher::process::InterpreterRunner;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "launcher",
    version,
    about = "Run the eBay bot script and report when it fails"
)]
struct Cli {
    /// Config file (TOML). `launcher.toml` is used when present.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Interpreter executable (default `python`).
    #[arg(long)]
    interpreter: Option<String>,

    /// Script to run (default `ebay_bot.py`).
    #[arg(long)]
    script: Option<String>,

    /// Exit with the script's status instead of 0.
    #[arg(long)]
    propagate_exit_code: bool,

    /// Do not wait for Enter after a failure.
    #[arg(long)]
    no_pause: bool,

    /// Arguments passed to the script.
    #[arg(last = true)]
    script_args: Vec<String>,
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config = resolve_config(cli)?;
    debug!(?config, "resolved config");

    let runner = InterpreterRunner::new();
    runner.install_interrupt_handler()?;

    let stdout = io::stdout();
    let launcher = Launcher::new(config, runner).set_title(stdout.is_terminal());
    let report = launcher.run(&mut stdout.lock(), &mut io::stdin().lock())?;
    Ok(report.exit_code)
}

/// Defaults, then the config file, then command line flags.
fn resolve_config(cli: Cli) -> Result<LauncherConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            if !path.exists() {
                bail!("config file {} not found", path.display());
            }
            load_config(path)?
        }
        None => load_config(Path::new(DEFAULT_CONFIG_FILE))?,
    };

    if let Some(interpreter) = cli.interpreter {
        config.interpreter = interpreter;
    }
    if let Some(script) = cli.script {
        config.script = script;
    }
    config.args.extend(cli.script_args);
    if cli.propagate_exit_code {
        config.propagate_exit_code = true;
    }
    if cli.no_pause {
        config.pause_on_failure = false;
    }
    config.validate().context("invalid launcher config")?;
    Ok(config)
}
