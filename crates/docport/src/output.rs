//! Colored terminal output utilities.
//!
//! Diagnostics go to stderr so stdout stays clean for generated data
//! (sidebar JSON, rewritten markdown) that build scripts pipe onward.

use console::{Style, Term};

/// Terminal output formatter.
pub(crate) struct Output {
    stdout: Term,
    stderr: Term,
    yellow: Style,
    red: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            stdout: Term::stdout(),
            stderr: Term::stderr(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
        }
    }

    /// Print generated data to stdout.
    pub(crate) fn data(&self, msg: &str) {
        let _ = self.stdout.write_line(msg);
    }

    /// Print a warning message (yellow, stderr).
    pub(crate) fn warning(&self, msg: &str) {
        let _ = self.stderr.write_line(&self.yellow.apply_to(msg).to_string());
    }

    /// Print an error message (red, stderr).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.stderr.write_line(&self.red.apply_to(msg).to_string());
    }
}
