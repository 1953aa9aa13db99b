/// Extra information attached to an error message.
///
/// Context items are printed after the main message and are used to point
/// the user at the registered units of a dimension, or to suggest how a
/// definition should be written instead.
///
/// # Examples
///
/// ```rust
/// use giorgi_shared::error::Context;
///
/// let note = Context::Note("`Length` has units: m, km, ft".to_string());
/// let help = Context::Help("convert both values to the same dimension first".to_string());
///
/// let contexts = vec![note, help];
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Context {
    /// Additional information about the error.
    Note(String),

    /// A suggestion for resolving the error.
    Help(String),
}

impl Context {
    /// Returns the message carried by this context item.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Note(message) | Self::Help(message) => message,
        }
    }
}
