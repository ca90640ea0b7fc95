use logos::Span;
use thiserror::Error;

/// The check that rejected an input as a data URI.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[rustfmt::skip]
pub enum SchemeFault {
    #[error("missing \"data:\" prefix")]
    MissingPrefix,
    #[error("missing ',' between metadata and data")]
    MissingComma,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[rustfmt::skip]
pub enum Error {
    #[error("Invalid data URI: {0}")]
    InvalidScheme(SchemeFault, Span),
}

impl Error {
    pub fn fault(&self) -> SchemeFault {
        match self {
            Error::InvalidScheme(fault, _) => *fault,
        }
    }

    pub fn span(&self) -> &Span {
        match self {
            Error::InvalidScheme(_, span) => span,
        }
    }

    fn format_message(
        message: &dyn ToString,
        source: &str,
        range: &Span,
    ) -> String {
        let message = message.to_string();
        let start = range.start;
        let end = range.end;
        // Walk through the bytes up to `start` to find line number and line
        // start offset
        let mut line_number = 1;
        let mut line_start = 0;
        for (idx, ch) in source.char_indices() {
            if idx >= start {
                break;
            }
            if ch == '\n' {
                line_number += 1;
                line_start = idx + 1;
            }
        }
        let line = source.lines().nth(line_number - 1).unwrap_or("");
        let column = start.saturating_sub(line_start);
        // Base64 payloads may be wrapped, so clamp the underline to the line
        let line_end = line_start + line.len();
        let underline_len = end.min(line_end).saturating_sub(start).max(1);
        let caret = " ".repeat(column) + &"^".repeat(underline_len);
        format!("line {line_number}: {message}\n{line}\n{caret}")
    }

    /// Renders the error together with the offending line of `source` and a
    /// caret underline marking where the check failed.
    pub fn full_message(&self, source: &str) -> String {
        Self::format_message(self, source, self.span())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
