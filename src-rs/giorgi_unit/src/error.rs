use std::fmt;

use giorgi_shared::error::{AsGiorgiError, Context};

/// Errors raised by the dimension algebra, unit registry and quantities.
#[derive(Debug, Clone, PartialEq)]
pub enum UnitError {
    /// Two quantities of different dimensions were added, subtracted or
    /// compared.
    DimensionMismatch {
        /// The name of the left-hand dimension
        left: String,
        /// The name of the right-hand dimension
        right: String,
    },
    /// A unit symbol or name is not registered on a dimension.
    UnitNotFound {
        /// The dimension that was searched
        dimension: String,
        /// The symbol or name that was looked up
        key: String,
        /// The keys that are registered on the dimension
        available: Vec<String>,
    },
    /// A unit with a nonzero bias was inverted, multiplied or divided.
    AffineComposition {
        /// The symbol of the biased unit
        symbol: String,
        /// The bias of the unit
        bias: f64,
    },
    /// A dimension's main unit was defined with a scale other than 1 or a
    /// nonzero bias.
    InvalidMainUnit {
        /// The dimension being defined
        dimension: String,
        /// The symbol of the rejected main unit
        symbol: String,
        /// The scale of the rejected main unit
        scale: f64,
        /// The bias of the rejected main unit
        bias: f64,
    },
    /// A dimension was explicitly defined twice.
    DuplicateDimension {
        /// The name used in the rejected definition
        name: String,
        /// The name of the dimension that already exists
        existing: String,
    },
    /// A prefix scale is not an integer power of the requested radix.
    NonIntegerPrefixExponent {
        /// The name of the prefix
        prefix: String,
        /// The scale of the prefix
        scale: f64,
        /// The requested radix
        radix: u32,
    },
    /// An exponent of a dimension left the range of an `i32`.
    ExponentOverflow,
    /// A string could not be read as a quantity.
    InvalidQuantity {
        /// The input that failed to parse
        input: String,
        /// The dimension the input was parsed against
        dimension: String,
    },
}

impl AsGiorgiError for UnitError {
    fn message(&self) -> String {
        match self {
            Self::DimensionMismatch { left, right } => {
                format!("dimension mismatch between `{left}` and `{right}`")
            }
            Self::UnitNotFound { dimension, key, .. } => {
                format!("unit `{key}` is not defined for `{dimension}`")
            }
            Self::AffineComposition { symbol, bias } => {
                format!("unit `{symbol}` has bias {bias} and cannot be composed")
            }
            Self::InvalidMainUnit {
                dimension,
                symbol,
                scale,
                bias,
            } => format!(
                "main unit `{symbol}` of `{dimension}` must have scale 1 and bias 0, found scale {scale} and bias {bias}"
            ),
            Self::DuplicateDimension { name, existing } => {
                format!("`{name}` has the same dimension as `{existing}`, which is already defined")
            }
            Self::NonIntegerPrefixExponent {
                prefix,
                scale,
                radix,
            } => format!("prefix `{prefix}` with scale {scale} is not a power of {radix}"),
            Self::ExponentOverflow => "dimension exponent is out of range".to_string(),
            Self::InvalidQuantity { input, dimension } => {
                format!("`{input}` is not a valid `{dimension}` quantity")
            }
        }
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::DimensionMismatch { .. } => vec![Context::Help(
                "only quantities of the same dimension can be added, subtracted or compared"
                    .to_string(),
            )],
            Self::UnitNotFound { available, .. } if !available.is_empty() => {
                vec![Context::Note(format!(
                    "available units are: {}",
                    available.join(", ")
                ))]
            }
            Self::AffineComposition { .. } => vec![Context::Note(
                "units with a shifted zero point can only be used to construct and display quantities"
                    .to_string(),
            )],
            Self::DuplicateDimension { .. } => vec![Context::Help(
                "reuse the existing dimension handle instead of defining it again".to_string(),
            )],
            Self::ExponentOverflow => vec![Context::Note(format!(
                "exponents must lie between {} and {}",
                i32::MIN,
                i32::MAX
            ))],
            Self::InvalidQuantity { .. } => vec![Context::Help(
                "quantities are written as a number followed by an optional unit, like `12.5 km`"
                    .to_string(),
            )],
            Self::UnitNotFound { .. }
            | Self::InvalidMainUnit { .. }
            | Self::NonIntegerPrefixExponent { .. } => vec![],
        }
    }
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for UnitError {}
