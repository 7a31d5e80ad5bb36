use crate::{
    pretty_print::{pretty_print, DiagnosticColorer},
    Span,
};
use colored::{ColoredString, Colorize};
use serde::Serialize;
use std::fmt;

/// Every relationship violation is reported as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
        }
    }
}

/// A rule violation found in a service description. Violations never abort
/// analysis; they are collected and handed to the caller in one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    code: String,
    message: String,
    severity: Severity,
    span: Span,
    source_path: String,
}

impl Violation {
    pub fn new_error(code: &str, message: String, span: Span, source_path: &str) -> Self {
        Violation {
            code: code.to_owned(),
            message,
            severity: Severity::Error,
            span,
            source_path: source_path.to_owned(),
        }
    }

    /// Machine readable identifier, e.g. `relationship/resolver-method`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The user-facing message.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The source span the violation applies to.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Path of the document the service description was read from.
    pub fn source_path(&self) -> &str {
        &self.source_path
    }

    pub fn pretty_print(&self, f: &mut dyn std::io::Write, file_name: &str, text: &str) -> std::io::Result<()> {
        pretty_print(f, file_name, text, self.span, &self.message, &SeverityColorer(self.severity))
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.severity, self.code, self.message)
    }
}

struct SeverityColorer(Severity);

impl DiagnosticColorer for SeverityColorer {
    fn title(&self) -> &'static str {
        match self.0 {
            Severity::Error => "error",
        }
    }

    fn primary_color(&self, token: &'_ str) -> ColoredString {
        match self.0 {
            Severity::Error => token.bright_red(),
        }
    }
}
