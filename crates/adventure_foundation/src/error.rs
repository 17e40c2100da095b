//! Error types for the Adventure system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Game rules never surface these to the player as failures: a rejected
//! behavior hook is rendered as response text at the point where it is
//! invoked. The remaining kinds cover catalog construction and the
//! terminal shell.

use std::fmt;

use thiserror::Error;

/// The main error type for Adventure operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a hook rejection carrying the text shown to the player.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::HookRejected(message.into()))
    }

    /// Creates a duplicate place error.
    #[must_use]
    pub fn duplicate_place(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicatePlace(name.into()))
    }

    /// Creates an error for an adjacency entry that names no place.
    #[must_use]
    pub fn unknown_path(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownPath {
            from: from.into(),
            to: to.into(),
        })
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns the hook rejection message, if this is a hook rejection.
    #[must_use]
    pub fn rejection_message(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::HookRejected(message) => Some(message),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A behavior hook refused the action. Displays as the bare message.
    #[error("{0}")]
    HookRejected(String),

    /// A place name was registered twice.
    #[error("duplicate place: {0}")]
    DuplicatePlace(String),

    /// An adjacency entry names a place that was never registered.
    #[error("unknown path from {from} to {to}")]
    UnknownPath {
        /// The place declaring the path.
        from: String,
        /// The missing destination.
        to: String,
    },

    /// A command-line or configuration value was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Terminal I/O failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Place, item or subsystem the error originated from.
    pub source: Option<String>,
    /// Chain of operations that led to the error.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
