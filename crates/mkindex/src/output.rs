//! Colored terminal output utilities.

use console::{Style, Term};

/// Terminal output formatter.
///
/// Status messages go to stderr; [`Output::item`] writes listing results to
/// stdout so they can be piped.
pub(crate) struct Output {
    status: Term,
    items: Term,
    green: Style,
    yellow: Style,
    red: Style,
    cyan_bold: Style,
    dim: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            status: Term::stderr(),
            items: Term::stdout(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Print an info message.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.status.write_line(msg);
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        let _ = self.status.write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print a warning message (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        let _ = self.status.write_line(&self.yellow.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.status.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Print a heading (cyan bold) followed by a rule.
    pub(crate) fn heading(&self, msg: &str) {
        let _ = self
            .status
            .write_line(&self.cyan_bold.apply_to(msg).to_string());
        let _ = self.status.write_line(&"-".repeat(msg.chars().count()));
    }

    /// Print a listing line to stdout, dimmed when `muted`.
    pub(crate) fn item(&self, msg: &str, muted: bool) {
        let line = if muted {
            self.dim.apply_to(msg).to_string()
        } else {
            msg.to_owned()
        };
        let _ = self.items.write_line(&line);
    }
}
