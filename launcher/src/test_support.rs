//! Test-only helpers: scripted child runners, capturable console output and
//! on-disk script fixtures.

use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::process::{ChildOutcome, ChildRunner, LaunchCommand};

/// Console output buffer that can be cloned and inspected after being written.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Rc<RefCell<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Child runner that returns a fixed outcome without spawning anything.
///
/// Records every command it receives. When observing a [`SharedBuffer`], it
/// also snapshots the console contents at the moment the child would start.
pub struct ScriptedRunner {
    outcome: ChildOutcome,
    observed: Option<SharedBuffer>,
    calls: RefCell<Vec<LaunchCommand>>,
    seen_output: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new(outcome: ChildOutcome) -> Self {
        Self {
            outcome,
            observed: None,
            calls: RefCell::new(Vec::new()),
            seen_output: RefCell::new(Vec::new()),
        }
    }

    pub fn observe(mut self, buffer: SharedBuffer) -> Self {
        self.observed = Some(buffer);
        self
    }

    pub fn calls(&self) -> Vec<LaunchCommand> {
        self.calls.borrow().clone()
    }

    pub fn seen_output(&self) -> Vec<String> {
        self.seen_output.borrow().clone()
    }
}

impl ChildRunner for ScriptedRunner {
    fn run(&self, command: &LaunchCommand) -> ChildOutcome {
        self.calls.borrow_mut().push(command.clone());
        if let Some(buffer) = &self.observed {
            self.seen_output.borrow_mut().push(buffer.contents());
        }
        self.outcome.clone()
    }
}

/// Temporary working directory holding a script for the launcher to run.
pub struct ScriptDir {
    dir: TempDir,
}

impl ScriptDir {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp dir")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `name` with `body` and return its path.
    pub fn write_script(&self, name: &str, body: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, body).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    /// Write `launcher.toml` into the directory.
    pub fn write_config(&self, contents: &str) -> Result<PathBuf> {
        self.write_script(crate::config::DEFAULT_CONFIG_FILE, contents)
    }
}
