//! Errors for the giorgi units library

mod context;
mod traits;

use std::fmt;

pub use context::Context;
pub use traits::AsGiorgiError;

/// Unified error representation for giorgi
///
/// This struct holds an error in a form that is ready to be displayed: the
/// human-readable message and the context items that go with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiorgiError {
    /// Human-readable error message
    message: String,
    /// Optional context information
    context: Vec<Context>,
}

impl GiorgiError {
    /// Creates a new `GiorgiError` from an error that implements `AsGiorgiError`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use giorgi_shared::error::{AsGiorgiError, GiorgiError};
    ///
    /// struct SimpleError(String);
    ///
    /// impl AsGiorgiError for SimpleError {
    ///     fn message(&self) -> String {
    ///         self.0.clone()
    ///     }
    /// }
    ///
    /// let error = SimpleError("unknown unit `furlong`".to_string());
    /// let giorgi_error = GiorgiError::from_error(&error);
    /// assert_eq!(giorgi_error.message(), "unknown unit `furlong`");
    /// ```
    pub fn from_error(error: &impl AsGiorgiError) -> Self {
        Self {
            message: error.message(),
            context: error.context(),
        }
    }

    /// Creates a new `GiorgiError` from a bare message, without context.
    #[must_use]
    pub const fn from_message(message: String) -> Self {
        Self {
            message,
            context: vec![],
        }
    }

    /// Adds a context item to the error.
    #[must_use]
    pub fn with_context(mut self, context: Context) -> Self {
        self.context.push(context);
        self
    }

    /// Returns the human-readable error message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the context information
    #[must_use]
    pub fn context(&self) -> &[Context] {
        &self.context
    }
}

impl fmt::Display for GiorgiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        for context in &self.context {
            match context {
                Context::Note(message) => write!(f, "\n  note: {message}")?,
                Context::Help(message) => write!(f, "\n  help: {message}")?,
            }
        }

        Ok(())
    }
}

impl std::error::Error for GiorgiError {}
