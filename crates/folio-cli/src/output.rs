//! Shared output layer for pretty/text/JSON parity across all CLI commands.
//!
//! Every command handler receives an [`OutputMode`] and formats its output
//! accordingly: pretty output for humans, compact text for pipes, or stable
//! JSON.
//!
//! # Output mode resolution
//!
//! Precedence (highest wins):
//! 1. `--json` flag
//! 2. `FOLIO_FORMAT` env var → `"pretty"` | `"text"` | `"json"`
//! 3. Default: [`OutputMode::Pretty`] if stdout is a TTY; [`OutputMode::Text`] if piped.

use folio_core::error::FolioError;
use serde::Serialize;
use std::io::{self, IsTerminal, Write};

/// The three output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-optimized output (sections, unicode bars).
    Pretty,
    /// Token-efficient plain text for pipes.
    Text,
    /// Machine-readable JSON (one object per result, or a JSON array).
    Json,
}

impl OutputMode {
    /// Returns `true` if JSON output was requested.
    pub fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Core resolution logic, separated from I/O for testability.
///
/// `json_flag` — the `--json` flag.
/// `format_env` — the value of `FOLIO_FORMAT` if set.
/// `is_tty` — true if stdout is a TTY.
fn resolve_output_mode_inner(json_flag: bool, format_env: Option<&str>, is_tty: bool) -> OutputMode {
    if json_flag {
        return OutputMode::Json;
    }

    if let Some(val) = format_env {
        match val.to_lowercase().as_str() {
            "json" => return OutputMode::Json,
            "text" => return OutputMode::Text,
            "pretty" => return OutputMode::Pretty,
            _ => {} // unknown value — fall through to TTY detection
        }
    }

    if is_tty {
        OutputMode::Pretty
    } else {
        OutputMode::Text
    }
}

/// Resolve the output mode from the `--json` flag, environment, and TTY.
pub fn resolve_output_mode(json_flag: bool) -> OutputMode {
    let env_val = std::env::var("FOLIO_FORMAT").ok();
    let is_tty = io::stdout().is_terminal();
    resolve_output_mode_inner(json_flag, env_val.as_deref(), is_tty)
}

/// A structured error with optional suggestion and error code.
#[derive(Debug, Serialize)]
pub struct CliError {
    /// Human-readable error message.
    pub message: String,
    /// Optional suggestion for how to fix the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Machine-readable error code (e.g. "E1101").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl CliError {
    /// Create a simple error with just a message.
    #[allow(dead_code)]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: None,
            error_code: None,
        }
    }
}

/// Convert a [`FolioError`] into a [`CliError`].
impl From<&FolioError> for CliError {
    fn from(err: &FolioError) -> Self {
        Self {
            message: err.to_string(),
            suggestion: Some(err.suggestion().to_string()),
            error_code: Some(err.error_code().to_string()),
        }
    }
}

/// Render a serializable value to stdout in the requested format.
///
/// In JSON mode, the value is serialized with `serde_json`. In pretty/text
/// mode, the provided `human_fn` closure produces the text output.
pub fn render<T: Serialize>(
    mode: OutputMode,
    value: &T,
    human_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match mode {
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut out, value)?;
            writeln!(out)?;
        }
        OutputMode::Pretty | OutputMode::Text => {
            human_fn(value, &mut out)?;
        }
    }
    Ok(())
}

/// Render an error to stderr in the requested format.
pub fn render_error(mode: OutputMode, error: &CliError) -> anyhow::Result<()> {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    match mode {
        OutputMode::Json => {
            let wrapper = serde_json::json!({
                "error": error,
            });
            serde_json::to_writer_pretty(&mut out, &wrapper)?;
            writeln!(out)?;
        }
        OutputMode::Pretty | OutputMode::Text => {
            writeln!(out, "error: {}", error.message)?;
            if let Some(ref suggestion) = error.suggestion {
                writeln!(out, "  suggestion: {suggestion}")?;
            }
        }
    }
    Ok(())
}

/// Report a core error to the diagnostic channel and fail the command.
///
/// Logs it, renders the structured error to stderr, and bails so nothing
/// further is rendered — no partial output, no retry.
pub fn report_folio_error(mode: OutputMode, error: &FolioError) -> anyhow::Result<()> {
    tracing::error!(code = error.error_code(), "{error}");
    render_error(mode, &CliError::from(error))?;
    anyhow::bail!("{error}")
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── OutputMode ──────────────────────────────────────────────────────────

    #[test]
    fn output_mode_is_json() {
        assert!(OutputMode::Json.is_json());
        assert!(!OutputMode::Pretty.is_json());
        assert!(!OutputMode::Text.is_json());
    }

    // ── resolve_output_mode_inner (testable pure function) ──────────────────

    #[test]
    fn resolve_json_flag_wins_over_env() {
        let mode = resolve_output_mode_inner(true, Some("pretty"), true);
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn resolve_format_env_json() {
        let mode = resolve_output_mode_inner(false, Some("json"), false);
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn resolve_format_env_pretty_forces_pretty_without_tty() {
        let mode = resolve_output_mode_inner(false, Some("pretty"), false);
        assert_eq!(mode, OutputMode::Pretty);
    }

    #[test]
    fn resolve_format_env_case_insensitive() {
        let mode = resolve_output_mode_inner(false, Some("TEXT"), false);
        assert_eq!(mode, OutputMode::Text);
    }

    #[test]
    fn resolve_format_env_unknown_falls_through_to_tty() {
        let mode_tty = resolve_output_mode_inner(false, Some("fancy"), true);
        assert_eq!(mode_tty, OutputMode::Pretty);
        let mode_pipe = resolve_output_mode_inner(false, Some("fancy"), false);
        assert_eq!(mode_pipe, OutputMode::Text);
    }

    #[test]
    fn resolve_default_tty_is_pretty() {
        let mode = resolve_output_mode_inner(false, None, true);
        assert_eq!(mode, OutputMode::Pretty);
    }

    #[test]
    fn resolve_default_no_tty_is_text() {
        let mode = resolve_output_mode_inner(false, None, false);
        assert_eq!(mode, OutputMode::Text);
    }

    // ── CliError ────────────────────────────────────────────────────────────

    #[test]
    fn cli_error_simple() {
        let err = CliError::new("something went wrong");
        assert_eq!(err.message, "something went wrong");
        assert!(err.suggestion.is_none());
        assert!(err.error_code.is_none());
    }

    #[test]
    fn cli_error_from_folio_error() {
        let err = FolioError::SourceRead {
            path: "details.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let cli_err = CliError::from(&err);
        assert!(cli_err.message.contains("details.json"));
        assert!(cli_err.suggestion.is_some());
        assert_eq!(cli_err.error_code.as_deref(), Some("E1101"));
    }

    #[test]
    fn render_json_output() {
        #[derive(Serialize)]
        struct TestData {
            name: String,
            count: u32,
        }
        let data = TestData {
            name: "test".into(),
            count: 42,
        };
        let result = render(OutputMode::Json, &data, |_, _| Ok(()));
        assert!(result.is_ok());
    }

    #[test]
    fn render_human_output() {
        #[derive(Serialize)]
        struct TestData {
            name: String,
        }
        let data = TestData {
            name: "test".into(),
        };
        let result = render(OutputMode::Pretty, &data, |d, w| {
            writeln!(w, "Name: {}", d.name)
        });
        assert!(result.is_ok());
    }

    #[test]
    fn render_error_json() {
        let err = CliError::from(&FolioError::MalformedData {
            source: serde_json::from_str::<Vec<u8>>("{").expect_err("must fail"),
        });
        let result = render_error(OutputMode::Json, &err);
        assert!(result.is_ok());
    }

    #[test]
    fn report_folio_error_always_fails() {
        let err = FolioError::SourceRead {
            path: "nope.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let result = report_folio_error(OutputMode::Text, &err);
        assert!(result.is_err());
    }
}
