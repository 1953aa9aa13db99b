//! Dimensions and the algebra over them
//!
//! A [`Dimension`] is a handle to the one canonical entry for its
//! [`DimensionMap`]. Composing the same map twice, by any route, gives the
//! same handle, so dimensions are compared by identity.

use std::{fmt, ops};

use crate::{
    UnitError,
    prefix::PrefixFamily,
    quantity::Quantity,
    unit::{Unit, UnitFamilyDef},
};

mod base;
mod map;
pub(crate) mod registry;

pub use base::BaseDimension;
pub use map::DimensionMap;

/// A handle to a canonical physical dimension.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension(usize);

impl Dimension {
    pub(crate) const DIMENSIONLESS: Self = Self(0);

    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub(crate) const fn index(self) -> usize {
        self.0
    }

    /// Returns the dimension of plain numbers.
    #[must_use]
    pub const fn dimensionless() -> Self {
        Self::DIMENSIONLESS
    }

    /// Creates a new base dimension and returns its dimension.
    ///
    /// Base dimensions are never merged by name: two calls with the same
    /// name give two distinct dimensions.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::InvalidMainUnit` if the main member of `unit`
    /// does not have scale 1 and bias 0.
    pub fn base(name: &str, unit: &UnitFamilyDef) -> Result<Self, UnitError> {
        BaseDimension::create(name, unit).map(BaseDimension::dimension)
    }

    /// Names the dimension of `map`.
    ///
    /// With a unit family, its main member becomes the main unit and every
    /// member is registered. Without one, the main unit is synthesized from
    /// the base main units, as in `m×s⁻¹`.
    ///
    /// If the dimension was already produced by algebra, it is named in
    /// place and existing handles see the new name and units.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::DuplicateDimension` if the dimension was already
    /// named, and `UnitError::InvalidMainUnit` if the main member of `unit`
    /// does not have scale 1 and bias 0.
    pub fn derive(
        name: &str,
        map: DimensionMap,
        unit: Option<&UnitFamilyDef>,
    ) -> Result<Self, UnitError> {
        registry::write().derive(name, map, unit)
    }

    /// Returns the canonical dimension of `map`, creating it if needed.
    #[must_use]
    pub fn compose(map: DimensionMap) -> Self {
        registry::write().compose(map)
    }

    /// Returns every dimension created so far, in creation order.
    #[must_use]
    pub fn all() -> Vec<Self> {
        registry::read().dimensions().collect()
    }

    /// Multiplies two dimensions by adding their exponents.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::ExponentOverflow` if an exponent leaves the `i32`
    /// range.
    pub fn multiply(self, rhs: Self) -> Result<Self, UnitError> {
        self.dimension_map()
            .multiply(&rhs.dimension_map())
            .map(Self::compose)
    }

    /// Divides two dimensions by subtracting their exponents.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::ExponentOverflow` if an exponent leaves the `i32`
    /// range.
    pub fn divide(self, rhs: Self) -> Result<Self, UnitError> {
        self.dimension_map()
            .divide(&rhs.dimension_map())
            .map(Self::compose)
    }

    /// Negates the exponents of the dimension.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::ExponentOverflow` if an exponent is `i32::MIN`.
    pub fn invert(self) -> Result<Self, UnitError> {
        self.dimension_map().invert().map(Self::compose)
    }

    /// Scales the exponents of the dimension. The power 0 is dimensionless.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::ExponentOverflow` if an exponent leaves the `i32`
    /// range.
    pub fn power(self, exponent: i32) -> Result<Self, UnitError> {
        self.dimension_map().power(exponent).map(Self::compose)
    }

    /// Checks if this is the dimension of plain numbers.
    #[must_use]
    pub fn is_dimensionless(self) -> bool {
        self == Self::DIMENSIONLESS
    }

    /// Returns the name of the dimension.
    ///
    /// Dimensions produced by algebra are named after their base
    /// dimensions, as in `Length·Time⁻¹`, until they are derived.
    #[must_use]
    pub fn name(self) -> String {
        registry::read().dimension(self).name.clone()
    }

    /// Checks if the dimension was created or derived by name.
    #[must_use]
    pub fn is_named(self) -> bool {
        registry::read().dimension(self).explicit
    }

    /// Returns the base dimensions and exponents of the dimension.
    #[must_use]
    pub fn dimension_map(self) -> DimensionMap {
        registry::read().dimension(self).map.clone()
    }

    /// Returns the exponent of `base` in the dimension.
    #[must_use]
    pub fn exponent(self, base: BaseDimension) -> i32 {
        registry::read().dimension(self).map.exponent(base)
    }

    /// Returns the base dimension if this is one.
    #[must_use]
    pub fn as_base(self) -> Option<BaseDimension> {
        registry::read().dimension(self).map.as_base()
    }

    /// Returns the main unit, in which quantities of this dimension store
    /// their value.
    #[must_use]
    pub fn main_unit(self) -> Unit {
        registry::read().dimension(self).main_unit.clone()
    }

    /// Finds a unit by symbol or name.
    ///
    /// Names may be given with spaces or with `_`, so `light year` and
    /// `light_year` both work.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::UnitNotFound` if no unit is registered under
    /// `key`.
    pub fn unit(self, key: &str) -> Result<Unit, UnitError> {
        let registry = registry::read();
        let entry = registry.dimension(self);

        entry.find(key).cloned().ok_or_else(|| UnitError::UnitNotFound {
            dimension: entry.name.clone(),
            key: key.to_string(),
            available: entry
                .distinct_units()
                .iter()
                .map(|unit| unit.symbol().to_string())
                .filter(|symbol| !symbol.is_empty())
                .collect(),
        })
    }

    /// Finds a unit by key, or returns the main unit when there is no key.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::UnitNotFound` if no unit is registered under
    /// `key`.
    pub fn unit_or_main(self, key: Option<&str>) -> Result<Unit, UnitError> {
        key.map_or_else(|| Ok(self.main_unit()), |key| self.unit(key))
    }

    /// Returns each unit registered on the dimension once, in registration
    /// order.
    #[must_use]
    pub fn units(self) -> Vec<Unit> {
        registry::read().dimension(self).distinct_units()
    }

    /// Returns every key under which a unit is registered.
    #[must_use]
    pub fn unit_keys(self) -> Vec<String> {
        registry::read()
            .dimension(self)
            .units
            .keys()
            .cloned()
            .collect()
    }

    /// Reads a quantity of this dimension, such as `12 ft`.
    ///
    /// # Errors
    ///
    /// See [`Quantity::parse`].
    pub fn parse_quantity(self, input: &str) -> Result<Quantity, UnitError> {
        Quantity::parse(self, input)
    }

    /// Returns the unprefixed symbol and prefixes of the main unit's family,
    /// if the main unit was defined as one.
    #[must_use]
    pub fn unit_family(self) -> Option<(String, PrefixFamily)> {
        registry::read().dimension(self).family.clone()
    }
}

impl ops::Mul for Dimension {
    type Output = Result<Self, UnitError>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl ops::Div for Dimension {
    type Output = Result<Self, UnitError>;

    fn div(self, rhs: Self) -> Self::Output {
        self.divide(rhs)
    }
}

impl fmt::Debug for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Dimension").field(&self.name()).finish()
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
