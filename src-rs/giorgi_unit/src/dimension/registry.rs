//! The process-wide table of base dimensions, dimensions and their units
//!
//! Every operation that reads or changes the table takes the lock once and
//! does its work through the methods on [`Registry`]. Methods here never
//! call back into the public handles, which would try to take the lock again.

use std::{collections::HashMap, sync::LazyLock};

use indexmap::IndexMap;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    UnitError,
    dimension::{BaseDimension, Dimension, DimensionMap},
    prefix::PrefixFamily,
    unit::{Unit, UnitDef, UnitFamilyDef},
    util::{exponent_superscript, is_close},
};

static REGISTRY: LazyLock<RwLock<Registry>> = LazyLock::new(|| RwLock::new(Registry::new()));

pub fn read() -> RwLockReadGuard<'static, Registry> {
    REGISTRY.read()
}

pub fn write() -> RwLockWriteGuard<'static, Registry> {
    REGISTRY.write()
}

pub struct BaseEntry {
    pub name: String,
    pub dimension: Dimension,
}

pub struct DimensionEntry {
    pub name: String,
    pub map: DimensionMap,
    /// Whether the dimension was named through `derive` or `create`, rather
    /// than produced by algebra.
    pub explicit: bool,
    pub main_unit: Unit,
    /// The unprefixed symbol and prefixes of the main unit's family.
    pub family: Option<(String, PrefixFamily)>,
    pub units: IndexMap<String, Unit>,
}

impl DimensionEntry {
    fn new(name: String, map: DimensionMap, explicit: bool, main_unit: Unit) -> Self {
        let mut entry = Self {
            name,
            map,
            explicit,
            main_unit: main_unit.clone(),
            family: None,
            units: IndexMap::new(),
        };
        entry.register(main_unit);
        entry
    }

    /// Adds a unit under its symbol and name. A key that is already taken
    /// is overwritten.
    fn register(&mut self, unit: Unit) {
        for key in unit.keys() {
            if key.is_empty() {
                continue;
            }

            tracing::trace!(dimension = %self.name, key = %key, "registering unit");
            if let Some(previous) = self.units.insert(key.clone(), unit.clone())
                && previous != unit
            {
                tracing::warn!(
                    dimension = %self.name,
                    key = %key,
                    previous = previous.symbol(),
                    replacement = unit.symbol(),
                    "unit key redefined"
                );
            }
        }
    }

    /// Finds a unit by symbol or name. Names with spaces also match their
    /// `_` form.
    pub fn find(&self, key: &str) -> Option<&Unit> {
        self.units
            .get(key)
            .or_else(|| self.units.get(&key.replace(' ', "_")))
    }

    /// Returns each registered unit once, in registration order.
    pub fn distinct_units(&self) -> Vec<Unit> {
        let mut units: Vec<Unit> = Vec::new();
        for unit in self.units.values() {
            if !units.iter().any(|seen| seen.ptr_eq(unit)) {
                units.push(unit.clone());
            }
        }
        units
    }
}

pub struct Registry {
    bases: Vec<BaseEntry>,
    dimensions: Vec<DimensionEntry>,
    canonical: HashMap<DimensionMap, Dimension>,
}

impl Registry {
    fn new() -> Self {
        let dimensionless = Dimension::DIMENSIONLESS;
        let main_unit = Unit::from_def(dimensionless, &UnitDef::new("", 1.0));

        Self {
            bases: Vec::new(),
            dimensions: vec![DimensionEntry::new(
                "Number".to_string(),
                DimensionMap::dimensionless(),
                true,
                main_unit,
            )],
            canonical: HashMap::from([(DimensionMap::dimensionless(), dimensionless)]),
        }
    }

    pub fn base(&self, base: BaseDimension) -> &BaseEntry {
        &self.bases[base.index()]
    }

    pub fn dimension(&self, dimension: Dimension) -> &DimensionEntry {
        &self.dimensions[dimension.index()]
    }

    fn dimension_mut(&mut self, dimension: Dimension) -> &mut DimensionEntry {
        &mut self.dimensions[dimension.index()]
    }

    pub fn dimensions(&self) -> impl Iterator<Item = Dimension> + use<> {
        (0..self.dimensions.len()).map(Dimension::from_index)
    }

    fn next_dimension(&self) -> Dimension {
        Dimension::from_index(self.dimensions.len())
    }

    fn push(&mut self, entry: DimensionEntry) -> Dimension {
        let dimension = self.next_dimension();
        self.canonical.insert(entry.map.clone(), dimension);
        self.dimensions.push(entry);
        dimension
    }

    /// Returns the dimension for `map`, creating an unnamed one if none
    /// exists yet.
    pub fn compose(&mut self, map: DimensionMap) -> Dimension {
        if let Some(dimension) = self.canonical.get(&map) {
            return *dimension;
        }

        let dimension = self.next_dimension();
        let name = self.synthesized_name(&map);
        let main_unit = self.synthesized_main_unit(dimension, &map);

        tracing::debug!(name = %name, symbol = main_unit.symbol(), "composing dimension");

        self.push(DimensionEntry::new(name, map, false, main_unit))
    }

    pub fn define_base(&mut self, name: &str, unit: &UnitFamilyDef) -> Result<BaseDimension, UnitError> {
        let base = BaseDimension::from_index(self.bases.len());
        let dimension = self.next_dimension();
        let (main_unit, members) = validated_family(name, dimension, unit)?;

        tracing::debug!(name, symbol = main_unit.symbol(), "creating base dimension");

        self.bases.push(BaseEntry {
            name: name.to_string(),
            dimension,
        });

        let mut entry = DimensionEntry::new(
            name.to_string(),
            DimensionMap::base(base),
            true,
            main_unit,
        );
        entry.family = Some((unit.symbol().to_string(), unit.prefixes().clone()));
        for member in members {
            entry.register(member);
        }
        self.push(entry);

        Ok(base)
    }

    /// Names the dimension of `map`.
    ///
    /// A dimension that was only produced by algebra so far is promoted in
    /// place, so handles obtained before the definition see the new name and
    /// units.
    pub fn derive(
        &mut self,
        name: &str,
        map: DimensionMap,
        unit: Option<&UnitFamilyDef>,
    ) -> Result<Dimension, UnitError> {
        let existing = self.canonical.get(&map).copied();

        if let Some(existing) = existing {
            let entry = self.dimension(existing);
            if entry.explicit {
                return Err(UnitError::DuplicateDimension {
                    name: name.to_string(),
                    existing: entry.name.clone(),
                });
            }
        }

        let dimension = existing.unwrap_or_else(|| self.next_dimension());
        let family = unit
            .map(|unit| validated_family(name, dimension, unit))
            .transpose()?;
        let main_unit = match &family {
            Some((main_unit, _)) => main_unit.clone(),
            None => self.synthesized_main_unit(dimension, &map),
        };

        if existing.is_some() {
            tracing::debug!(name, symbol = main_unit.symbol(), "naming composed dimension");
            let entry = self.dimension_mut(dimension);
            entry.name = name.to_string();
            entry.explicit = true;
            entry.main_unit = main_unit.clone();
            entry.register(main_unit);
        } else {
            tracing::debug!(name, symbol = main_unit.symbol(), "deriving dimension");
            self.push(DimensionEntry::new(name.to_string(), map, true, main_unit));
        }

        if let (Some(unit), Some((_, members))) = (unit, family) {
            let entry = self.dimension_mut(dimension);
            entry.family = Some((unit.symbol().to_string(), unit.prefixes().clone()));
            for member in members {
                entry.register(member);
            }
        }

        Ok(dimension)
    }

    pub fn register_unit(&mut self, unit: Unit) {
        let dimension = unit.dimension();
        self.dimension_mut(dimension).register(unit);
    }

    /// Joins the names of the base dimensions, as in `Length·Time⁻¹`.
    fn synthesized_name(&self, map: &DimensionMap) -> String {
        map.iter()
            .map(|(base, exponent)| {
                format!("{}{}", self.base(base).name, exponent_superscript(exponent))
            })
            .collect::<Vec<_>>()
            .join("·")
    }

    /// Joins the main units of the base dimensions, as in `m×s⁻¹`.
    fn synthesized_main_unit(&self, dimension: Dimension, map: &DimensionMap) -> Unit {
        let (symbols, scale) = map.iter().fold(
            (Vec::new(), 1.0),
            |(mut symbols, scale), (base, exponent)| {
                let main_unit = &self.dimension(self.base(base).dimension).main_unit;
                symbols.push(format!("{}{}", main_unit.symbol(), exponent_superscript(exponent)));
                (symbols, scale * main_unit.scale().powi(exponent))
            },
        );

        Unit::from_def(dimension, &UnitDef::new(symbols.join("×"), scale))
    }
}

/// Builds the members of a dimension's main family, checking that the main
/// member can serve as the main unit.
fn validated_family(
    name: &str,
    dimension: Dimension,
    unit: &UnitFamilyDef,
) -> Result<(Unit, Vec<Unit>), UnitError> {
    let (main_unit, members) = Unit::family_from_def(dimension, unit);

    if !is_close(main_unit.scale(), 1.0) || main_unit.is_affine() {
        return Err(UnitError::InvalidMainUnit {
            dimension: name.to_string(),
            symbol: main_unit.symbol().to_string(),
            scale: main_unit.scale(),
            bias: main_unit.bias(),
        });
    }

    Ok((main_unit, members))
}
