//! The launch sequence: banner, child run, status check, diagnostic and pause.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{info, instrument, warn};

use crate::banner::{
    PAUSE_PROMPT, TITLE_SEQUENCE_SUPPORTED, banner, emit, failure_diagnostic, title_sequence,
};
use crate::config::LauncherConfig;
use crate::exit_codes;
use crate::process::{ChildOutcome, ChildRunner, LaunchCommand};

/// What happened during one launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchReport {
    pub outcome: ChildOutcome,
    /// Whether a line of input was awaited after the diagnostic.
    pub paused: bool,
    /// Code the launcher process should exit with.
    pub exit_code: i32,
}

pub struct Launcher<R: ChildRunner> {
    config: LauncherConfig,
    runner: R,
    set_title: bool,
}

impl<R: ChildRunner> Launcher<R> {
    pub fn new(config: LauncherConfig, runner: R) -> Self {
        Self {
            config,
            runner,
            set_title: false,
        }
    }

    /// Emit the window title sequence before the banner. Only useful on a
    /// terminal, and never done on Windows consoles.
    pub fn set_title(mut self, enabled: bool) -> Self {
        self.set_title = enabled && TITLE_SEQUENCE_SUPPORTED;
        self
    }

    pub fn command(&self) -> LaunchCommand {
        LaunchCommand::new(&self.config.interpreter, &self.config.script)
            .args(&self.config.args)
            .working_dir(self.config.working_dir.clone())
    }

    /// Run the launch sequence once.
    ///
    /// `out` receives the banner and diagnostic and is flushed before the child
    /// starts. `input` is read only after a failed run, one line at most.
    /// Child failures are reported in the returned [`LaunchReport`]; errors are
    /// reserved for console I/O.
    #[instrument(skip_all, fields(interpreter = %self.config.interpreter, script = %self.config.script))]
    pub fn run<W: Write, I: BufRead>(&self, out: &mut W, input: &mut I) -> Result<LaunchReport> {
        if self.set_title {
            emit(out, &title_sequence(&self.config.title))?;
        }
        emit(out, &banner())?;

        let outcome = self.runner.run(&self.command());
        if outcome.is_success() {
            info!("child exited cleanly");
            return Ok(self.report(outcome, false));
        }

        warn!(?outcome, "child invocation failed");
        emit(out, &failure_diagnostic(&self.config.script))?;

        let paused = self.config.pause_on_failure;
        if paused {
            emit(out, PAUSE_PROMPT)?;
            wait_for_enter(input)?;
        }
        Ok(self.report(outcome, paused))
    }

    fn report(&self, outcome: ChildOutcome, paused: bool) -> LaunchReport {
        let exit_code = if self.config.propagate_exit_code {
            exit_codes::from_outcome(&outcome)
        } else {
            exit_codes::OK
        };
        LaunchReport {
            outcome,
            paused,
            exit_code,
        }
    }
}

/// Read and discard one line. End of input also releases the pause.
fn wait_for_enter<I: BufRead>(input: &mut I) -> Result<()> {
    let mut line = String::new();
    input.read_line(&mut line).context("read console")?;
    Ok(())
}
