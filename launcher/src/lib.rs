//! Console launcher for the eBay bot script.
//!
//! Prints a banner, runs `python ebay_bot.py` attached to the console, and
//! when the child does not exit cleanly prints a diagnostic and waits for
//! Enter so the operator can read it before the window closes.
//!
//! - **[`launch`]**: the launch sequence and its [`launch::LaunchReport`].
//! - **[`process`]**: the [`process::ChildRunner`] seam and the real
//!   interpreter runner. Tests swap in scripted runners.
//! - **[`config`]**: optional `launcher.toml`; defaults reproduce the stock launch.

pub mod banner;
pub mod config;
pub mod exit_codes;
pub mod launch;
pub mod logging;
pub mod process;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
