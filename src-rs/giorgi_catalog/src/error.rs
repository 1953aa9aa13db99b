use std::fmt;

use giorgi_shared::error::{AsGiorgiError, Context};
use giorgi_unit::UnitError;

/// Errors raised when looking things up in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// An error from the unit system itself.
    Unit(UnitError),
    /// No catalog dimension has the given name.
    UnknownDimension {
        /// The name that was looked up
        name: String,
    },
    /// No catalog dimension has a unit with the given key.
    UnknownUnit {
        /// The symbol or name that was looked up
        key: String,
    },
    /// More than one catalog dimension has a unit with the given key.
    AmbiguousUnit {
        /// The symbol or name that was looked up
        key: String,
        /// The dimensions that have a unit with the key
        dimensions: Vec<String>,
    },
    /// Two units that were expected to share a dimension do not.
    IncompatibleUnits {
        /// The unit converted from
        from: String,
        /// The dimension of `from`
        from_dimension: String,
        /// The unit converted to
        to: String,
        /// The dimension of `to`
        to_dimension: String,
    },
}

impl From<UnitError> for CatalogError {
    fn from(error: UnitError) -> Self {
        Self::Unit(error)
    }
}

impl AsGiorgiError for CatalogError {
    fn message(&self) -> String {
        match self {
            Self::Unit(error) => error.message(),
            Self::UnknownDimension { name } => format!("unknown dimension `{name}`"),
            Self::UnknownUnit { key } => format!("unknown unit `{key}`"),
            Self::AmbiguousUnit { key, .. } => {
                format!("unit `{key}` is defined for more than one dimension")
            }
            Self::IncompatibleUnits {
                from,
                from_dimension,
                to,
                to_dimension,
            } => format!(
                "cannot convert `{from}` ({from_dimension}) to `{to}` ({to_dimension})"
            ),
        }
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::Unit(error) => error.context(),
            Self::UnknownDimension { .. } => vec![Context::Help(
                "run `giorgi dimensions` to list the known dimensions".to_string(),
            )],
            Self::UnknownUnit { .. } => vec![Context::Help(
                "run `giorgi units` to list the known units".to_string(),
            )],
            Self::AmbiguousUnit { dimensions, .. } => vec![Context::Note(format!(
                "it is defined for {}",
                dimensions.join(", ")
            ))],
            Self::IncompatibleUnits { .. } => vec![Context::Note(
                "only units of the same dimension can be converted".to_string(),
            )],
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unit(error) => Some(error),
            Self::UnknownDimension { .. }
            | Self::UnknownUnit { .. }
            | Self::AmbiguousUnit { .. }
            | Self::IncompatibleUnits { .. } => None,
        }
    }
}
