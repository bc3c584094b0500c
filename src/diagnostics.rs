//! The unified, `miette`-based diagnostic system for the generator.
//!
//! Every failure mode of the pipeline is represented by [`TestgenError`].
//! Errors are fatal: the CLI renders them with [`print_error`] and exits with
//! the variant's status code. Generation is all-or-nothing, so no error here
//! is ever recovered from.

use std::fmt;
use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, Report, SourceCode, SourceSpan};
use thiserror::Error;

// Type alias for clarity and brevity
pub type SourceArc = Arc<NamedSource<String>>;

/// Minimal, composable error context for diagnostics.
#[derive(Debug, Default)]
pub struct ErrorContext {
    /// The primary source for this error (if any).
    pub source: Option<SourceArc>,
    /// The primary span for this error (if any).
    pub span: Option<SourceSpan>,
    /// An optional help message.
    pub help: Option<String>,
}

impl ErrorContext {
    /// Returns an empty error context (no source, span, or help).
    pub fn none() -> Self {
        Self::default()
    }

    /// Creates a context with only a help message.
    pub fn with_help(help: impl Into<String>) -> Self {
        Self {
            source: None,
            span: None,
            help: Some(help.into()),
        }
    }

    /// Creates a context with source, span, and help message.
    pub fn with_all(source: SourceArc, span: SourceSpan, help: String) -> Self {
        Self {
            source: Some(source),
            span: Some(span),
            help: Some(help),
        }
    }
}

/// Unified error type for all generator failure modes.
#[derive(Debug, Error)]
pub enum TestgenError {
    #[error("Manifest error: {message}")]
    Manifest {
        message: String,
        ctx: ErrorContext,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },
    #[error("Unsupported argument: {message}")]
    UnsupportedArgument { message: String, ctx: ErrorContext },
    #[error("I/O error: {message}")]
    Io {
        message: String,
        ctx: ErrorContext,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },
}

impl TestgenError {
    fn get_ctx(&self) -> &ErrorContext {
        match self {
            TestgenError::Manifest { ctx, .. } => ctx,
            TestgenError::UnsupportedArgument { ctx, .. } => ctx,
            TestgenError::Io { ctx, .. } => ctx,
        }
    }

    /// Process exit status for this error. Each kind has a distinct status so
    /// callers of the tool can tell a bad manifest from a bad argument type.
    pub const fn exit_code(&self) -> i32 {
        match self {
            TestgenError::Io { .. } => 1,
            TestgenError::Manifest { .. } => 2,
            TestgenError::UnsupportedArgument { .. } => 3,
        }
    }

    fn primary_label(&self) -> &'static str {
        match self {
            TestgenError::Manifest { .. } => "invalid manifest here",
            TestgenError::UnsupportedArgument { .. } => "unsupported value",
            TestgenError::Io { .. } => "write failed",
        }
    }
}

impl Diagnostic for TestgenError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self {
            TestgenError::Manifest { .. } => "testgen::manifest::parse",
            TestgenError::UnsupportedArgument { .. } => "testgen::emit::unsupported_argument",
            TestgenError::Io { .. } => "testgen::io::write",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.get_ctx()
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn fmt::Display + 'a>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.get_ctx()
            .source
            .as_ref()
            .map(|s| s.as_ref() as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        self.get_ctx().span.map(|span| {
            let label = LabeledSpan::new_with_span(Some(self.primary_label().to_string()), span);
            Box::new(std::iter::once(label)) as Box<dyn Iterator<Item = LabeledSpan> + '_>
        })
    }
}

/// Prints a [`TestgenError`] with full miette diagnostics.
///
/// This provides rich error formatting with source spans, help text, and the
/// underlying cause chain. Use this for user-facing error display in the CLI.
pub fn print_error(error: TestgenError) {
    let report = Report::new(error);
    eprintln!("{report:?}");
}
