//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.
//!
//! The engine has no source text: expression trees are constructed programmatically, so there is
//! no span to point a diagnostic at. Instead, every [`Error`] carries the *rendering* of the
//! offending (sub)expression, and reports are built against that rendering as the source.

use ariadne::{Color, Label, Report, ReportKind, Source};
use std::{fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// The source id used for all reports. There is only ever one "file": the rendered expression
/// attached to the error.
const SRC_ID: &str = "expression";

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// The top-level message of the report.
    fn message(&self) -> String;

    /// The message of the label attached to the rendered expression.
    fn label(&self) -> String {
        "in this expression".to_string()
    }

    /// An optional help message.
    fn help(&self) -> Option<String> {
        None
    }
}

/// An error associated with the expression it originated from.
#[derive(Debug)]
pub struct Error {
    /// The rendering of the expression (or equation) this error originated from.
    pub expr: String,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given rendered expression and kind.
    pub fn new(expr: impl Into<String>, kind: impl ErrorKind + 'static) -> Self {
        Self { expr: expr.into(), kind: Box::new(kind) }
    }

    /// Build a report from this error kind, spanning the full rendered expression.
    pub fn build_report(&self) -> Report<(&'static str, Range<usize>)> {
        let mut builder = Report::build(ReportKind::Error, SRC_ID, 0)
            .with_message(self.kind.message())
            .with_label(
                Label::new((SRC_ID, 0..self.expr.len()))
                    .with_message(self.kind.label())
                    .with_color(EXPR),
            );

        if let Some(help) = self.kind.help() {
            builder.set_help(help);
        }

        builder.finish()
    }

    /// Write the report for this error to the given writer.
    pub fn write_report(&self, w: impl std::io::Write) -> std::io::Result<()> {
        self.build_report().write((SRC_ID, Source::from(&self.expr)), w)
    }

    /// Print the report for this error to standard error.
    pub fn eprint(&self) -> std::io::Result<()> {
        self.build_report().eprint((SRC_ID, Source::from(&self.expr)))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: `{}`", self.kind.message(), self.expr)
    }
}

impl std::error::Error for Error {}
