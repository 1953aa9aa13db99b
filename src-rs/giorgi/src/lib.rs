//! Physical quantities with checked dimensions and affine units
//!
//! This crate re-exports the giorgi crates behind features:
//!
//! - `unit`: the dimension algebra, units and quantities
//! - `catalog`: the predefined dimensions and units
//!
//! Both are enabled by default.

pub use giorgi_shared as shared;

#[cfg(feature = "catalog")]
pub use giorgi_catalog as catalog;
#[cfg(feature = "unit")]
pub use giorgi_unit as unit;

#[cfg(feature = "unit")]
pub use giorgi_unit::{Dimension, NumberFormat, Quantity, Unit, UnitError};
