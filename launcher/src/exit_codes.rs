//! Stable exit codes for the launcher binary.

use crate::process::ChildOutcome;

/// Launch completed (or the child's status is not being propagated).
pub const OK: i32 = 0;
/// Launcher failed before or around the child: bad config, unwritable console.
pub const INVALID: i32 = 1;
/// The interpreter could not be started at all. Mirrors the shell convention.
pub const SPAWN_FAILED: i32 = 127;
/// Base added to a signal number when the child was killed by a signal.
pub const SIGNAL_BASE: i32 = 128;
/// Ctrl-C while no child was running (at the banner or the pause prompt).
pub const INTERRUPTED: i32 = SIGNAL_BASE + 2;

/// Exit code that mirrors the child's outcome.
pub fn from_outcome(outcome: &ChildOutcome) -> i32 {
    match outcome {
        ChildOutcome::Exited(code) => *code,
        ChildOutcome::Terminated { signal } => SIGNAL_BASE + signal,
        ChildOutcome::SpawnFailed { .. } => SPAWN_FAILED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exited_code_is_verbatim() {
        assert_eq!(from_outcome(&ChildOutcome::Exited(0)), OK);
        assert_eq!(from_outcome(&ChildOutcome::Exited(42)), 42);
    }

    #[test]
    fn signal_death_maps_above_base() {
        assert_eq!(from_outcome(&ChildOutcome::Terminated { signal: 9 }), 137);
    }

    #[test]
    fn spawn_failure_maps_to_127() {
        let outcome = ChildOutcome::SpawnFailed {
            reason: "No such file or directory".to_string(),
        };
        assert_eq!(from_outcome(&outcome), SPAWN_FAILED);
    }
}
