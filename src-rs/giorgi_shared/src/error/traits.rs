use crate::error::Context;

/// Trait for errors that can be shown to a user.
///
/// This gives every error enum in the workspace the same shape: one concise
/// message plus optional notes and help text.
pub trait AsGiorgiError {
    /// Returns the primary error message.
    ///
    /// The message should be a short, lowercase description of what went
    /// wrong, without trailing punctuation.
    fn message(&self) -> String;

    /// Returns additional context information about the error.
    ///
    /// Returns an empty vector if no context is available.
    fn context(&self) -> Vec<Context> {
        vec![]
    }
}
