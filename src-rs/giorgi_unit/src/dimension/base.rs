use std::fmt;

use crate::{
    UnitError,
    dimension::{Dimension, registry},
    prefix::PrefixFamily,
    unit::{Unit, UnitFamilyDef},
};

/// An irreducible physical dimension, such as length or time.
///
/// Base dimensions are ordered by creation, which is the order used when
/// composing symbols and names of derived dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BaseDimension(usize);

impl BaseDimension {
    /// Creates a base dimension and the family of units that measures it.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::InvalidMainUnit` if the member of `unit` carrying
    /// the main prefix does not have scale 1 and bias 0. Nothing is
    /// registered in that case.
    pub fn create(name: &str, unit: &UnitFamilyDef) -> Result<Self, UnitError> {
        registry::write().define_base(name, unit)
    }

    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub(crate) const fn index(self) -> usize {
        self.0
    }

    /// Returns the dimension whose map is this base dimension to the first
    /// power.
    #[must_use]
    pub fn dimension(self) -> Dimension {
        registry::read().base(self).dimension
    }

    /// Returns the name of the base dimension.
    #[must_use]
    pub fn name(self) -> String {
        registry::read().base(self).name.clone()
    }

    /// Returns the main unit of the base dimension.
    #[must_use]
    pub fn main_unit(self) -> Unit {
        self.dimension().main_unit()
    }

    /// Returns the prefixes of the base dimension's unit family.
    #[must_use]
    pub fn prefixes(self) -> PrefixFamily {
        self.dimension()
            .unit_family()
            .map_or_else(PrefixFamily::unprefixed, |(_, prefixes)| prefixes)
    }
}

impl fmt::Display for BaseDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
