//! Child interpreter invocation.
//!
//! The [`ChildRunner`] trait decouples the launch sequence from actually
//! spawning a process. Tests use scripted runners that return predetermined
//! outcomes without touching the OS.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

use crate::exit_codes;

/// How the child process ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildOutcome {
    /// Child exited with this code.
    Exited(i32),
    /// Child was killed by a signal and has no exit code.
    Terminated { signal: i32 },
    /// Interpreter could not be started (missing binary, permissions, ...).
    SpawnFailed { reason: String },
}

impl ChildOutcome {
    /// Only a clean `0` exit counts as success.
    pub fn is_success(&self) -> bool {
        matches!(self, ChildOutcome::Exited(0))
    }
}

impl From<ExitStatus> for ChildOutcome {
    fn from(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return ChildOutcome::Exited(code);
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return ChildOutcome::Terminated { signal };
            }
        }
        ChildOutcome::Exited(1)
    }
}

/// Fully resolved command line for the child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: OsString,
    pub args: Vec<OsString>,
    pub working_dir: Option<PathBuf>,
}

impl LaunchCommand {
    /// `program script [args...]`, no shell involved.
    pub fn new(program: impl Into<OsString>, script: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: vec![script.into()],
            working_dir: None,
        }
    }

    pub fn args<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(extra.into_iter().map(Into::into));
        self
    }

    pub fn working_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.working_dir = dir;
        self
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

/// Abstraction over running the child to completion.
pub trait ChildRunner {
    /// Run `command`, blocking until it terminates.
    ///
    /// Never fails: a child that cannot be started is reported as
    /// [`ChildOutcome::SpawnFailed`] so callers treat it like any other failed run.
    fn run(&self, command: &LaunchCommand) -> ChildOutcome;
}

/// Runner that spawns the interpreter attached to the launcher's console.
///
/// The child shares the launcher's process group, so Ctrl-C reaches both.
/// With [`InterpreterRunner::install_interrupt_handler`] the launcher keeps
/// waiting while the child handles the interrupt and winds down.
#[derive(Debug, Clone, Default)]
pub struct InterpreterRunner {
    child_running: Arc<AtomicBool>,
}

impl InterpreterRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route Ctrl-C through a process-wide handler.
    ///
    /// While a child runs the interrupt is left to the child. Outside a child
    /// run (banner, pause) the launcher exits with [`exit_codes::INTERRUPTED`].
    /// Can only be installed once per process.
    pub fn install_interrupt_handler(&self) -> Result<()> {
        let child_running = Arc::clone(&self.child_running);
        ctrlc::set_handler(move || {
            if !child_running.load(Ordering::SeqCst) {
                std::process::exit(exit_codes::INTERRUPTED);
            }
        })
        .context("install Ctrl-C handler")
    }

    pub fn child_running(&self) -> bool {
        self.child_running.load(Ordering::SeqCst)
    }
}

impl ChildRunner for InterpreterRunner {
    #[instrument(skip_all, fields(program = ?command.program))]
    fn run(&self, command: &LaunchCommand) -> ChildOutcome {
        let mut cmd = command.to_command();
        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        debug!(args = ?command.args, "spawning child process");
        self.child_running.store(true, Ordering::SeqCst);
        let status = cmd.status();
        self.child_running.store(false, Ordering::SeqCst);
        let status = match status {
            Ok(status) => status,
            Err(e) => {
                info!(err = %e, "failed to spawn interpreter");
                return ChildOutcome::SpawnFailed {
                    reason: e.to_string(),
                };
            }
        };

        let outcome = ChildOutcome::from(status);
        debug!(?outcome, "child finished");
        outcome
    }
}
