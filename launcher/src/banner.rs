//! Console text shown by the launcher.

use std::io::Write;

use anyhow::{Context, Result};

const RULE: &str = "===========================================";

/// Banner printed before the interpreter starts.
pub fn banner() -> String {
    format!(
        "{RULE}\n   EBAY BOT - EXECUTABLE RUNNER\n{RULE}\nStatus: Checking for Python environment...\n"
    )
}

/// Text printed when the child did not exit cleanly.
///
/// The pause prompt is kept separate so it can be skipped with `--no-pause`.
pub fn failure_diagnostic(script: &str) -> String {
    format!(
        "\n[ERROR] Could not run Python script.\nMake sure Python is installed and '{script}' exists.\n"
    )
}

pub const PAUSE_PROMPT: &str = "Press Enter to exit...";

/// Whether the console understands [`title_sequence`].
///
/// The classic Windows console host prints VT escapes literally unless the
/// program opts in, so the title is left alone there.
pub const TITLE_SEQUENCE_SUPPORTED: bool = cfg!(not(windows));

/// OSC 0 sequence that sets the terminal window title.
pub fn title_sequence(title: &str) -> String {
    let clean: String = title.chars().filter(|c| !c.is_control()).collect();
    format!("\x1b]0;{clean}\x07")
}

/// Write `text` and flush so it lands before anything the child prints.
pub fn emit<W: Write>(out: &mut W, text: &str) -> Result<()> {
    out.write_all(text.as_bytes()).context("write console")?;
    out.flush().context("flush console")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_has_rules_and_status_line() {
        let text = banner();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], RULE);
        assert_eq!(lines[1], "   EBAY BOT - EXECUTABLE RUNNER");
        assert_eq!(lines[2], RULE);
        assert_eq!(lines[3], "Status: Checking for Python environment...");
    }

    #[test]
    fn diagnostic_names_the_script() {
        let text = failure_diagnostic("ebay_bot.py");
        assert!(text.starts_with("\n[ERROR] Could not run Python script.\n"));
        assert!(text.contains("'ebay_bot.py' exists."));
    }

    #[test]
    fn title_sequence_strips_control_characters() {
        assert_eq!(title_sequence("Bot\x07\nName"), "\x1b]0;BotName\x07");
    }
}
