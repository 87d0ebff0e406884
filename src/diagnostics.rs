use std::cell::RefCell;

use crate::error::Error;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Sink for non-fatal problems found while resolving links. Reporting never
/// interrupts a run.
pub trait Diagnostics {
    /// Report one issue. `context` names the doclet or input it concerns.
    fn report_issue(&self, message: &str, context: &str);
}

/// One issue captured by `RecordingDiagnostics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Doclet or input the issue concerns.
    pub context: String,
    /// Human-readable description.
    pub message: String,
}

/// Discards every issue.
#[derive(Debug, Default)]
pub struct NoopDiagnostics;

/// Keeps every issue in memory, in report order.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    /// Issues reported so far.
    issues: RefCell<Vec<Issue>>,
}

/// Forwards issues to the `tracing` subscriber at warn level.
#[derive(Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for NoopDiagnostics {
    fn report_issue(&self, _message: &str, _context: &str) {}
}

impl Diagnostics for RecordingDiagnostics {
    fn report_issue(&self, message: &str, context: &str) {
        self.issues.borrow_mut().push(Issue {
            context: context.to_string(),
            message: message.to_string(),
        });
    }
}

impl Diagnostics for TracingDiagnostics {
    fn report_issue(&self, message: &str, context: &str) {
        tracing::warn!(context, "{message}");
    }
}

impl RecordingDiagnostics {
    /// Snapshot of the issues reported so far.
    pub fn issues(&self) -> Vec<Issue> {
        return self.issues.borrow().clone();
    }
}

/// Render an error as valid markdown with bold headings and print to stderr.
pub fn print_error(e: &Error) {
    let md = render_error(e);
    for line in md.lines() {
        if line.starts_with('#') {
            eprintln!("{BOLD}{line}{RESET}");
        } else {
            eprintln!("{line}");
        }
    }
}

/// Render an error as a structured markdown diagnostic: what happened, then how to fix it.
pub fn render_error(e: &Error) -> String {
    return match e {
        Error::DocletsNotFound { path } => format!("\
# Error: Doclets Not Found

`{}` does not exist.

## Fix

Export the doclet database first, then point `doclets` in `.doclinks.toml` at it:

    jsdoc -X src > doclets.json
", path.display()),

        Error::Io(e) => format!("\
# Error: I/O

{e}
"),

        Error::Json(e) => format!("\
# Error: Invalid Doclet JSON

{e}

## Fix

The doclet file must be a JSON array of doclets, as produced by `jsdoc -X`.
"),

        Error::OutputPathEscapes { path } => format!("\
# Error: Output Path Escapes Destination

Refusing to write `{}` outside the destination directory.
", path.display()),

        Error::TemplateDirNotFound { path } => format!("\
# Error: Template Directory Not Found

`{}` does not exist.

## Fix

Set `templates` in `.doclinks.toml` to a directory containing at least `symbol.html`.
", path.display()),

        Error::TemplateNotFound { name } => format!("\
# Error: Template Not Found

No template named `{name}` was loaded.

## Fix

Add `{name}` to the template directory, or provide the `symbol.html` fallback.
"),

        Error::TomlDe(e) => format!("\
# Error: Invalid TOML

{e}
"),
    };
}
