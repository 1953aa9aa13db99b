use std::hash::{Hash, Hasher};

use indexmap::IndexMap;

use crate::{
    UnitError,
    dimension::{BaseDimension, Dimension},
};

/// A map of base dimensions and their exponents.
///
/// For example, speed is represented as
/// `DimensionMap::new([(length, 1), (time, -1)])`.
///
/// The map is kept canonical: entries with a zero exponent are dropped and
/// the remaining entries are sorted by base dimension. An empty map is the
/// dimensionless type.
///
/// Exponent arithmetic is checked. Any operation whose exponent would leave
/// the `i32` range fails with `UnitError::ExponentOverflow`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DimensionMap(IndexMap<BaseDimension, i32>);

impl DimensionMap {
    /// Creates a map from base dimensions and their exponents.
    ///
    /// Repeated base dimensions have their exponents summed.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::ExponentOverflow` if a summed exponent does not
    /// fit in an `i32`.
    pub fn new(exponents: impl IntoIterator<Item = (BaseDimension, i32)>) -> Result<Self, UnitError> {
        let mut map: IndexMap<BaseDimension, i32> = IndexMap::new();

        for (base, exponent) in exponents {
            let total = map.entry(base).or_insert(0);
            *total = total
                .checked_add(exponent)
                .ok_or(UnitError::ExponentOverflow)?;
        }

        Ok(Self::canonical(map))
    }

    /// Creates the map of a single base dimension with exponent 1.
    #[must_use]
    pub fn base(base: BaseDimension) -> Self {
        Self(IndexMap::from([(base, 1)]))
    }

    /// Creates the map of a product of dimensions raised to powers.
    ///
    /// For example, pressure is `DimensionMap::of([(force, 1), (length, -2)])`.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::ExponentOverflow` if an exponent of the product
    /// does not fit in an `i32`.
    pub fn of(factors: impl IntoIterator<Item = (Dimension, i32)>) -> Result<Self, UnitError> {
        factors
            .into_iter()
            .try_fold(Self::dimensionless(), |product, (dimension, exponent)| {
                product.multiply(&dimension.dimension_map().power(exponent)?)
            })
    }

    /// Creates the empty map, which has no dimensions.
    #[must_use]
    pub fn dimensionless() -> Self {
        Self(IndexMap::new())
    }

    fn canonical(mut map: IndexMap<BaseDimension, i32>) -> Self {
        map.retain(|_, exponent| *exponent != 0);
        map.sort_keys();

        Self(map)
    }

    /// Checks if the map has no dimensions.
    #[must_use]
    pub fn is_dimensionless(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the exponent of `base`, which is 0 if it does not appear.
    #[must_use]
    pub fn exponent(&self, base: BaseDimension) -> i32 {
        self.0.get(&base).copied().unwrap_or(0)
    }

    /// Iterates over the base dimensions and their exponents in canonical
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (BaseDimension, i32)> + '_ {
        self.0.iter().map(|(base, exponent)| (*base, *exponent))
    }

    /// Returns the number of base dimensions with a nonzero exponent.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the single base dimension with exponent 1, if that is all the
    /// map contains.
    #[must_use]
    pub fn as_base(&self) -> Option<BaseDimension> {
        match self.0.first() {
            Some((base, 1)) if self.0.len() == 1 => Some(*base),
            _ => None,
        }
    }

    /// Multiplies two maps by adding their exponents.
    ///
    /// For example, `(m/s) * (kg) = (kg*m/s)`.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::ExponentOverflow` if a sum does not fit in an
    /// `i32`.
    pub fn multiply(&self, rhs: &Self) -> Result<Self, UnitError> {
        Self::new(self.iter().chain(rhs.iter()))
    }

    /// Divides two maps by subtracting their exponents.
    ///
    /// For example, `(kg*m/s) / (kg) = (m/s)`.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::ExponentOverflow` if a difference does not fit in
    /// an `i32`.
    pub fn divide(&self, rhs: &Self) -> Result<Self, UnitError> {
        self.multiply(&rhs.invert()?)
    }

    /// Raises the map to the power of the given exponent.
    ///
    /// Raising to the power 0 gives the dimensionless map.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::ExponentOverflow` if a product does not fit in an
    /// `i32`.
    pub fn power(&self, exponent: i32) -> Result<Self, UnitError> {
        self.0
            .iter()
            .map(|(base, value)| {
                value
                    .checked_mul(exponent)
                    .map(|value| (*base, value))
                    .ok_or(UnitError::ExponentOverflow)
            })
            .collect::<Result<IndexMap<_, _>, _>>()
            .map(Self::canonical)
    }

    /// Negates every exponent.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::ExponentOverflow` if an exponent is `i32::MIN`.
    pub fn invert(&self) -> Result<Self, UnitError> {
        self.power(-1)
    }
}

impl Hash for DimensionMap {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // entries are kept sorted, so iteration order is canonical
        state.write_usize(self.0.len());
        for (base, exponent) in &self.0 {
            base.hash(state);
            exponent.hash(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use super::*;

    fn hash_of(map: &DimensionMap) -> u64 {
        let mut hasher = DefaultHasher::new();
        map.hash(&mut hasher);
        hasher.finish()
    }

    fn map(exponents: impl IntoIterator<Item = (BaseDimension, i32)>) -> DimensionMap {
        DimensionMap::new(exponents).expect("exponents should be in range")
    }

    #[test]
    fn zero_exponents_are_dropped() {
        let a = BaseDimension::from_index(0);
        let b = BaseDimension::from_index(1);

        assert!(map([(a, 2), (b, 0), (a, -2)]).is_dimensionless());
    }

    #[test]
    fn entry_order_does_not_matter() {
        let a = BaseDimension::from_index(0);
        let b = BaseDimension::from_index(1);

        let forward = map([(a, 1), (b, -2)]);
        let backward = map([(b, -2), (a, 1)]);

        assert_eq!(forward, backward);
        assert_eq!(hash_of(&forward), hash_of(&backward));
    }

    #[test]
    fn multiply_and_divide() {
        let a = BaseDimension::from_index(0);
        let b = BaseDimension::from_index(1);

        let speed = map([(a, 1), (b, -1)]);
        let time = DimensionMap::base(b);

        assert_eq!(speed.multiply(&time), Ok(DimensionMap::base(a)));
        assert_eq!(speed.divide(&time), Ok(map([(a, 1), (b, -2)])));
        assert!(
            speed
                .divide(&speed)
                .expect("exponents should be in range")
                .is_dimensionless()
        );
    }

    #[test]
    fn power() {
        let a = BaseDimension::from_index(0);
        let b = BaseDimension::from_index(1);
        let speed = map([(a, 1), (b, -1)]);

        assert_eq!(speed.power(3), Ok(map([(a, 3), (b, -3)])));
        assert_eq!(speed.power(0), Ok(DimensionMap::dimensionless()));
        assert_eq!(speed.invert(), Ok(map([(a, -1), (b, 1)])));
    }

    #[test]
    fn exponent_overflow_is_an_error() {
        let a = BaseDimension::from_index(0);
        let area = map([(a, 2)]);

        assert_eq!(area.power(i32::MAX / 2 + 1), Err(UnitError::ExponentOverflow));
        assert_eq!(
            DimensionMap::new([(a, i32::MAX), (a, 1)]),
            Err(UnitError::ExponentOverflow)
        );

        let lowest = map([(a, i32::MIN)]);
        assert_eq!(lowest.invert(), Err(UnitError::ExponentOverflow));
        assert_eq!(lowest.multiply(&lowest), Err(UnitError::ExponentOverflow));
        assert_eq!(
            DimensionMap::base(a).divide(&lowest),
            Err(UnitError::ExponentOverflow)
        );
    }

    #[test]
    fn single_base() {
        let a = BaseDimension::from_index(0);
        let b = BaseDimension::from_index(1);

        assert_eq!(DimensionMap::base(a).as_base(), Some(a));
        assert_eq!(map([(a, 2)]).as_base(), None);
        assert_eq!(map([(a, 1), (b, 1)]).as_base(), None);
        assert_eq!(DimensionMap::dimensionless().as_base(), None);
    }
}
