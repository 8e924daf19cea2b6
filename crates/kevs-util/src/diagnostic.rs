//! Diagnostic sink — the single formatted message a scan or parse produces.
//!
//! At most one error message is recorded, prefixed with `file:line:` and a
//! phase tag (`scan: ` or `parse: `), then either returned to the caller or
//! printed with the process aborted immediately after.
//!
//! Structured errors (see [`crate::error`]) still flow back to the caller
//! independently of this sink; the sink exists purely to render the
//! human-readable form the CLI prints.

use std::fmt;

/// Which phase produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Scan,
    Parse,
}

impl Phase {
    fn tag(self) -> &'static str {
        match self {
            Phase::Scan => "scan",
            Phase::Parse => "parse",
        }
    }
}

/// Accumulates the first error of a scan/parse and renders it as
/// `<file>:<line>: error: <phase>: <reason>` (or without the `file:line:`
/// prefix, when the caller asked for terser output).
pub struct Diagnostics {
    file_name: String,
    include_location: bool,
    abort_on_error: bool,
    message: Option<String>,
}

impl Diagnostics {
    /// Creates a sink for the given source name.
    ///
    /// `include_location` controls whether rendered messages carry the
    /// `file:line:` prefix (the CLI's `--no-file` flag turns this off).
    /// `abort_on_error` is a debugging aid: the first recorded error is
    /// printed to stdout and the process is aborted immediately.
    pub fn new(file_name: impl Into<String>, include_location: bool, abort_on_error: bool) -> Self {
        Self {
            file_name: file_name.into(),
            include_location,
            abort_on_error,
            message: None,
        }
    }

    /// Records the first error of a given phase at a given source line.
    ///
    /// Subsequent calls are no-ops: the format has no error recovery, so
    /// only the first error the pipeline observes is ever rendered.
    pub fn record(&mut self, phase: Phase, line: u32, reason: impl fmt::Display) {
        if self.message.is_some() {
            return;
        }

        let rendered = if self.include_location {
            format!(
                "{}:{}: error: {}: {}",
                self.file_name,
                line,
                phase.tag(),
                reason
            )
        } else {
            format!("error: {}: {}", phase.tag(), reason)
        };

        if self.abort_on_error {
            println!("{rendered}");
            std::process::abort();
        }

        self.message = Some(rendered);
    }

    /// Whether an error has been recorded.
    pub fn has_error(&self) -> bool {
        self.message.is_some()
    }

    /// Takes the rendered message, if any.
    pub fn take_message(&mut self) -> Option<String> {
        self.message.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_file_line_phase_reason() {
        let mut d = Diagnostics::new("config.kevs", true, false);
        d.record(Phase::Scan, 3, "empty key");
        assert_eq!(
            d.take_message().as_deref(),
            Some("config.kevs:3: error: scan: empty key")
        );
    }

    #[test]
    fn omits_location_when_disabled() {
        let mut d = Diagnostics::new("config.kevs", false, false);
        d.record(Phase::Parse, 10, "bad key");
        assert_eq!(d.take_message().as_deref(), Some("error: parse: bad key"));
    }

    #[test]
    fn keeps_only_the_first_error() {
        let mut d = Diagnostics::new("f", true, false);
        d.record(Phase::Scan, 1, "first");
        d.record(Phase::Scan, 2, "second");
        assert_eq!(d.take_message().as_deref(), Some("f:1: error: scan: first"));
    }
}
