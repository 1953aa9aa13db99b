#![doc = include_str!("../README.md")]
//! # Example
//!
//! ```
//! use giorgi_unit::{Dimension, DimensionMap, NumberFormat, Quantity, Unit, UnitDef, UnitFamilyDef};
//!
//! let length = Dimension::base("Length", &UnitFamilyDef::new("m").with_name("metre"))?;
//! let time = Dimension::base("Time", &UnitFamilyDef::new("s").with_name("second"))?;
//! Unit::define(time, &UnitDef::new("h", 3600.0).with_name("hour"));
//!
//! let distance = length.parse_quantity("42 km")?;
//! let duration = Quantity::in_unit(time, 2.0, Some("h"))?;
//! let speed = (distance / duration)?;
//!
//! assert_eq!(speed.dimension(), Dimension::compose(DimensionMap::of([(length, 1), (time, -1)])?));
//! assert_eq!(speed.format(NumberFormat::Fixed(3), None)?, "5.833 m×s⁻¹");
//! # Ok::<(), giorgi_unit::UnitError>(())
//! ```

pub mod dimension;
mod error;
pub mod prefix;
pub mod quantity;
pub mod unit;
pub mod util;

pub use dimension::{BaseDimension, Dimension, DimensionMap};
pub use error::UnitError;
pub use prefix::{Prefix, PrefixFamily};
pub use quantity::{NumberFormat, Quantity};
pub use unit::{Unit, UnitDef, UnitFamilyDef};
