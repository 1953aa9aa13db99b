#![doc = include_str!("../README.md")]

use std::sync::LazyLock;

use giorgi_unit::{Dimension, Unit, UnitError};

mod additional;
mod base;
mod derived;
mod error;

pub use base::{BaseDimensions, Currencies};
pub use derived::DerivedDimensions;
pub use error::CatalogError;

static CATALOG: LazyLock<Result<Catalog, UnitError>> = LazyLock::new(Catalog::build);

/// Returns the catalog, building it on first use.
///
/// # Errors
///
/// Returns the error raised while building the catalog, if any. Building
/// is only attempted once.
pub fn catalog() -> Result<&'static Catalog, UnitError> {
    CATALOG.as_ref().map_err(Clone::clone)
}

/// Handles to the predefined dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    /// The base dimensions
    pub base: BaseDimensions,
    /// The currencies
    pub currency: Currencies,
    /// The derived dimensions
    pub derived: DerivedDimensions,
}

impl Catalog {
    fn build() -> Result<Self, UnitError> {
        let base = BaseDimensions::define()?;
        let currency = Currencies::define()?;
        let derived = DerivedDimensions::define(&base)?;
        additional::define(&base, &derived);

        let catalog = Self {
            base,
            currency,
            derived,
        };
        tracing::debug!(
            dimensions = catalog.dimensions().len(),
            "catalog built"
        );

        Ok(catalog)
    }

    /// Returns every catalog dimension: the base dimensions, then the
    /// currencies, then the derived dimensions.
    #[must_use]
    pub fn dimensions(&self) -> Vec<Dimension> {
        self.base
            .all()
            .into_iter()
            .chain(self.currency.all())
            .chain(self.derived.all())
            .collect()
    }

    /// Finds a catalog dimension by name, ignoring case. Underscores match
    /// spaces, so `magnetic_flux` finds `Magnetic flux`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownDimension` if no dimension matches.
    pub fn dimension(&self, name: &str) -> Result<Dimension, CatalogError> {
        let wanted = normalize(name);

        self.dimensions()
            .into_iter()
            .find(|dimension| normalize(&dimension.name()) == wanted)
            .ok_or_else(|| CatalogError::UnknownDimension {
                name: name.to_string(),
            })
    }

    /// Returns the unit registered under `key` on each catalog dimension
    /// that has one.
    #[must_use]
    pub fn find_units(&self, key: &str) -> Vec<Unit> {
        self.dimensions()
            .into_iter()
            .filter_map(|dimension| dimension.unit(key).ok())
            .collect()
    }

    /// Finds the one catalog unit registered under `key`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownUnit` if no dimension has the key, and
    /// `CatalogError::AmbiguousUnit` if several do.
    pub fn unit(&self, key: &str) -> Result<Unit, CatalogError> {
        let mut units = self.find_units(key);

        match units.len() {
            0 => Err(CatalogError::UnknownUnit {
                key: key.to_string(),
            }),
            1 => Ok(units.remove(0)),
            _ => Err(CatalogError::AmbiguousUnit {
                key: key.to_string(),
                dimensions: units.iter().map(|unit| unit.dimension().name()).collect(),
            }),
        }
    }

    /// Finds a pair of units registered under `from` and `to` on the same
    /// dimension.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownUnit` if either key is not registered
    /// anywhere, and `CatalogError::IncompatibleUnits` if they are never
    /// registered on the same dimension.
    pub fn conversion(&self, from: &str, to: &str) -> Result<(Unit, Unit), CatalogError> {
        let from_units = self.find_units(from);
        let to_units = self.find_units(to);

        for from_unit in &from_units {
            if let Some(to_unit) = to_units
                .iter()
                .find(|to_unit| to_unit.dimension() == from_unit.dimension())
            {
                return Ok((from_unit.clone(), to_unit.clone()));
            }
        }

        match (from_units.first(), to_units.first()) {
            (None, _) => Err(CatalogError::UnknownUnit {
                key: from.to_string(),
            }),
            (_, None) => Err(CatalogError::UnknownUnit {
                key: to.to_string(),
            }),
            (Some(from_unit), Some(to_unit)) => Err(CatalogError::IncompatibleUnits {
                from: from.to_string(),
                from_dimension: from_unit.dimension().name(),
                to: to.to_string(),
                to_dimension: to_unit.dimension().name(),
            }),
        }
    }
}

fn normalize(name: &str) -> String {
    name.to_lowercase().replace('_', " ")
}
