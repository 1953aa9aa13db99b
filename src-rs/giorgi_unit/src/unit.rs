//! Affine units and their definitions
//!
//! A [`Unit`] converts values of one dimension between its own terms and the
//! dimension's main unit:
//!
//! ```text
//! to_main(v)   = (v + bias) * scale
//! from_main(v) = v / scale - bias
//! ```
//!
//! The bias is expressed in the unit's own degree size, so Celsius is
//! `scale = 1, bias = 273.15` and Fahrenheit is `scale = 5/9, bias = 459.67`.
//!
//! Only unbiased units can be inverted, multiplied or divided.

use std::{fmt, iter, sync::Arc};

use crate::{
    UnitError,
    dimension::{Dimension, registry},
    prefix::{Prefix, PrefixFamily},
    util::{exponent_superscript, is_relatively_close},
};

/// The definition of a single unit, passed to [`Unit::define`].
#[derive(Debug, Clone, PartialEq)]
pub struct UnitDef {
    symbol: String,
    scale: f64,
    bias: f64,
    name: Option<String>,
    prefix: Prefix,
    no_space_before_symbol: bool,
}

impl UnitDef {
    /// Creates a definition for a unit worth `scale` main units.
    pub fn new(symbol: impl Into<String>, scale: f64) -> Self {
        Self {
            symbol: symbol.into(),
            scale,
            bias: 0.0,
            name: None,
            prefix: Prefix::unit(),
            no_space_before_symbol: false,
        }
    }

    /// Sets the name of the unit, such as `foot`.
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    /// Sets the bias of the unit, expressed in the unit's own terms.
    #[must_use]
    pub fn with_bias(self, bias: f64) -> Self {
        Self { bias, ..self }
    }

    /// Applies a prefix to the symbol, name and scale of the unit.
    #[must_use]
    pub fn with_prefix(self, prefix: Prefix) -> Self {
        Self { prefix, ..self }
    }

    /// Renders quantities in this unit without a space before the symbol,
    /// as in `90°`.
    #[must_use]
    pub fn without_space(self) -> Self {
        Self {
            no_space_before_symbol: true,
            ..self
        }
    }
}

/// The definition of a family of prefixed units, passed to
/// [`Unit::define_family`] and used for the main unit of a dimension.
///
/// The `scale` is the scale of the member carrying `main_prefix`. For mass,
/// the family is `g` with the kilo main prefix and scale 1: the kilogram is
/// the main unit and the gram has scale 1/1000.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitFamilyDef {
    symbol: String,
    scale: f64,
    bias: f64,
    name: Option<String>,
    prefixes: PrefixFamily,
    main_prefix: Prefix,
    no_space_before_symbol: bool,
}

impl UnitFamilyDef {
    /// Creates a family definition using the decimal prefixes.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            scale: 1.0,
            bias: 0.0,
            name: None,
            prefixes: PrefixFamily::decimal().clone(),
            main_prefix: Prefix::unit(),
            no_space_before_symbol: false,
        }
    }

    /// Sets the unprefixed name of the family, such as `gram`.
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    /// Sets the scale of the member carrying the main prefix.
    #[must_use]
    pub fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    /// Sets the bias shared by every member of the family.
    #[must_use]
    pub fn with_bias(self, bias: f64) -> Self {
        Self { bias, ..self }
    }

    /// Sets the prefixes that generate the members of the family.
    #[must_use]
    pub fn with_prefixes(self, prefixes: &PrefixFamily) -> Self {
        Self {
            prefixes: prefixes.clone(),
            ..self
        }
    }

    /// Sets the prefix of the member returned by [`Unit::define_family`].
    #[must_use]
    pub fn with_main_prefix(self, main_prefix: Prefix) -> Self {
        Self {
            main_prefix,
            ..self
        }
    }

    /// Returns the unprefixed symbol of the family.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the prefixes of the family.
    #[must_use]
    pub const fn prefixes(&self) -> &PrefixFamily {
        &self.prefixes
    }
}

#[derive(Debug)]
struct UnitData {
    dimension: Dimension,
    symbol: String,
    name: Option<String>,
    scale: f64,
    bias: f64,
    no_space_before_symbol: bool,
}

/// An affine conversion between values of a dimension and its main unit.
///
/// Units are cheap to clone and never change once created.
#[derive(Clone)]
pub struct Unit(Arc<UnitData>);

impl Unit {
    /// Creates a unit and registers it on `dimension` under its symbol and,
    /// if it has one, its name (with spaces replaced by `_`).
    ///
    /// A unit registered under a key that is already in use replaces the
    /// previous unit for that key.
    pub fn define(dimension: Dimension, definition: &UnitDef) -> Self {
        let unit = Self::from_def(dimension, definition);
        registry::write().register_unit(unit.clone());
        unit
    }

    /// Creates and registers one unit per prefix of the family, returning
    /// the member that carries the family's main prefix.
    pub fn define_family(dimension: Dimension, definition: &UnitFamilyDef) -> Self {
        let (main, members) = Self::family_from_def(dimension, definition);

        let mut registry = registry::write();
        for member in members {
            registry.register_unit(member);
        }

        main
    }

    /// Builds a unit without registering it.
    pub(crate) fn from_def(dimension: Dimension, definition: &UnitDef) -> Self {
        let prefix = definition.prefix;

        Self(Arc::new(UnitData {
            dimension,
            symbol: format!("{}{}", prefix.symbol(), definition.symbol),
            name: definition
                .name
                .as_ref()
                .map(|name| format!("{}{name}", prefix.name())),
            scale: definition.scale * prefix.scale(),
            bias: definition.bias,
            no_space_before_symbol: definition.no_space_before_symbol,
        }))
    }

    /// Builds the members of a family without registering them.
    ///
    /// Returns the main member and every member in family order. The main
    /// member is appended if its prefix is not part of the family.
    pub(crate) fn family_from_def(
        dimension: Dimension,
        definition: &UnitFamilyDef,
    ) -> (Self, Vec<Self>) {
        let base_scale = definition.scale / definition.main_prefix.scale();
        let member = |prefix: Prefix| {
            let unit_definition = UnitDef {
                symbol: definition.symbol.clone(),
                scale: base_scale,
                bias: definition.bias,
                name: definition.name.clone(),
                prefix,
                no_space_before_symbol: definition.no_space_before_symbol,
            };
            Self::from_def(dimension, &unit_definition)
        };

        let main = member(definition.main_prefix);
        let has_main = definition
            .prefixes
            .members()
            .contains(&definition.main_prefix);

        let members = definition
            .prefixes
            .iter()
            .map(|prefix| {
                if prefix == definition.main_prefix {
                    main.clone()
                } else {
                    member(prefix)
                }
            })
            .chain((!has_main).then(|| main.clone()))
            .collect();

        (main, members)
    }

    /// Creates an unbiased unit for the result of unit algebra and registers
    /// it on its dimension.
    fn composite(dimension: Dimension, symbol: String, scale: f64) -> Self {
        let unit = Self::from_def(dimension, &UnitDef::new(symbol, scale));
        registry::write().register_unit(unit.clone());
        unit
    }

    /// Returns the dimension of the unit.
    #[must_use]
    pub fn dimension(&self) -> Dimension {
        self.0.dimension
    }

    /// Returns the symbol of the unit, such as `km`.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.0.symbol
    }

    /// Returns the name of the unit, such as `kilometre`.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    /// Returns the name under which the unit is registered, with spaces
    /// replaced by `_`.
    #[must_use]
    pub fn lookup_name(&self) -> Option<String> {
        self.name().map(|name| name.replace(' ', "_"))
    }

    /// Returns how many main units one of this unit is worth, ignoring bias.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.0.scale
    }

    /// Returns the offset of the unit's zero point, in the unit's own terms.
    #[must_use]
    pub fn bias(&self) -> f64 {
        self.0.bias
    }

    /// Determines if the unit has a shifted zero point.
    #[must_use]
    pub fn is_affine(&self) -> bool {
        self.bias() != 0.0
    }

    /// Determines if quantities are rendered without a space before the
    /// symbol.
    #[must_use]
    pub fn no_space_before_symbol(&self) -> bool {
        self.0.no_space_before_symbol
    }

    /// Converts a value in this unit to the dimension's main unit.
    #[must_use]
    pub fn to_main(&self, value: f64) -> f64 {
        (value + self.bias()) * self.scale()
    }

    /// Converts a value in the dimension's main unit to this unit.
    #[must_use]
    pub fn from_main(&self, value: f64) -> f64 {
        value / self.scale() - self.bias()
    }

    /// Returns the reciprocal unit, such as `s⁻¹` for `s`.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::AffineComposition` if the unit has a bias, and
    /// `UnitError::ExponentOverflow` if the inverted dimension is out of
    /// range.
    pub fn invert(&self) -> Result<Self, UnitError> {
        self.ensure_unbiased()?;

        let dimension = self.dimension().invert()?;
        let symbol = format!("{}{}", self.symbol(), exponent_superscript(-1));

        Ok(Self::composite(dimension, symbol, 1.0 / self.scale()))
    }

    /// Returns the product unit, such as `N×m` for `N` and `m`.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::AffineComposition` if either unit has a bias, and
    /// `UnitError::ExponentOverflow` if the product dimension is out of range.
    pub fn multiply(&self, rhs: &Self) -> Result<Self, UnitError> {
        self.ensure_unbiased()?;
        rhs.ensure_unbiased()?;

        let dimension = self.dimension().multiply(rhs.dimension())?;
        let symbol = format!("{}×{}", self.symbol(), rhs.symbol());

        Ok(Self::composite(
            dimension,
            symbol,
            self.scale() * rhs.scale(),
        ))
    }

    /// Returns the quotient unit, such as `km/h` for `km` and `h`.
    ///
    /// A compound divisor is parenthesized, as in `J/(kg×K)`.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::AffineComposition` if either unit has a bias, and
    /// `UnitError::ExponentOverflow` if the quotient dimension is out of
    /// range.
    pub fn divide(&self, rhs: &Self) -> Result<Self, UnitError> {
        self.ensure_unbiased()?;
        rhs.ensure_unbiased()?;

        let dimension = self.dimension().divide(rhs.dimension())?;
        let symbol = if rhs.symbol().contains(['×', '/']) {
            format!("{}/({})", self.symbol(), rhs.symbol())
        } else {
            format!("{}/{}", self.symbol(), rhs.symbol())
        };

        Ok(Self::composite(
            dimension,
            symbol,
            self.scale() / rhs.scale(),
        ))
    }

    /// Returns the keys under which the unit is registered.
    pub(crate) fn keys(&self) -> impl Iterator<Item = String> + use<> {
        iter::once(self.symbol().to_string()).chain(self.lookup_name())
    }

    /// Determines if two handles refer to the same unit instance.
    pub(crate) fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    fn ensure_unbiased(&self) -> Result<(), UnitError> {
        if self.is_affine() {
            return Err(UnitError::AffineComposition {
                symbol: self.symbol().to_string(),
                bias: self.bias(),
            });
        }

        Ok(())
    }
}

impl PartialEq for Unit {
    /// Units are equal if they belong to the same dimension and have the
    /// same symbol, scale and bias.
    fn eq(&self, other: &Self) -> bool {
        self.dimension() == other.dimension()
            && self.symbol() == other.symbol()
            && is_relatively_close(self.scale(), other.scale())
            && is_relatively_close(self.bias(), other.bias())
    }
}

impl fmt::Debug for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unit")
            .field("dimension", &self.dimension())
            .field("symbol", &self.symbol())
            .field("name", &self.name())
            .field("scale", &self.scale())
            .field("bias", &self.bias())
            .finish()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dimension::{BaseDimension, DimensionMap},
        util::is_close,
    };

    fn length() -> Dimension {
        BaseDimension::create("Length", &UnitFamilyDef::new("m").with_name("metre"))
            .expect("length should be defined")
            .dimension()
    }

    fn time() -> Dimension {
        BaseDimension::create("Time", &UnitFamilyDef::new("s").with_name("second"))
            .expect("time should be defined")
            .dimension()
    }

    fn temperature() -> Dimension {
        BaseDimension::create("Temperature", &UnitFamilyDef::new("K").with_name("kelvin"))
            .expect("temperature should be defined")
            .dimension()
    }

    #[test]
    fn define_applies_prefix() {
        let length = length();
        let kilo = PrefixFamily::decimal().by_symbol("k").expect("kilo should exist");

        let unit = Unit::define(
            length,
            &UnitDef::new("ft", 0.3048)
                .with_name("foot")
                .with_prefix(kilo),
        );

        assert_eq!(unit.symbol(), "kft");
        assert_eq!(unit.name(), Some("kilofoot"));
        assert!(is_close(unit.scale(), 304.8));
        assert_eq!(length.unit("kft").expect("kft should exist"), unit);
        assert_eq!(length.unit("kilofoot").expect("kilofoot should exist"), unit);
    }

    #[test]
    fn names_are_registered_with_underscores() {
        let length = length();
        let unit = Unit::define(length, &UnitDef::new("ly", 9.460_730_472_580_8e15).with_name("light year"));

        assert_eq!(length.unit("light_year").expect("name should resolve"), unit);
        assert_eq!(unit.lookup_name(), Some("light_year".to_string()));
    }

    #[test]
    fn later_definitions_replace_earlier_ones() {
        let length = length();
        Unit::define(length, &UnitDef::new("x", 2.0));
        let replacement = Unit::define(length, &UnitDef::new("x", 3.0));

        let found = length.unit("x").expect("x should exist");
        assert!(found.ptr_eq(&replacement));
    }

    #[test]
    fn family_returns_main_member() {
        let length = length();
        let hecto = PrefixFamily::decimal().by_symbol("h").expect("hecto should exist");

        let main = Unit::define_family(
            length,
            &UnitFamilyDef::new("l")
                .with_name("litre-metre")
                .with_scale(2.0)
                .with_main_prefix(hecto),
        );

        assert_eq!(main.symbol(), "hl");
        assert!(is_close(main.scale(), 2.0));

        let plain = length.unit("l").expect("l should exist");
        assert!(is_close(plain.scale(), 0.02));
        let kilo = length.unit("kl").expect("kl should exist");
        assert!(is_close(kilo.scale(), 20.0));
        let micro = length.unit("μl").expect("μl should exist");
        assert!(is_relatively_close(micro.scale(), 2e-8));
    }

    #[test]
    fn conversion_round_trip() {
        let length = length();
        let foot = Unit::define(length, &UnitDef::new("ft", 0.3048));

        assert!(is_close(foot.to_main(1.0), 0.3048));
        assert!(is_close(foot.from_main(0.3048), 1.0));

        for value in [-1e6, -3.5, 0.0, 1.0, 12.25, 1e9] {
            assert!(is_close(foot.from_main(foot.to_main(value)), value));
        }
    }

    #[test]
    fn biased_conversion() {
        let temperature = temperature();
        let celsius = Unit::define(
            temperature,
            &UnitDef::new("°C", 1.0).with_bias(273.15).with_name("celsius"),
        );
        let fahrenheit = Unit::define(
            temperature,
            &UnitDef::new("°F", 5.0 / 9.0).with_bias(459.67),
        );

        assert!(is_close(celsius.to_main(0.0), 273.15));
        assert!(is_close(celsius.from_main(273.15), 0.0));
        assert!(is_close(fahrenheit.to_main(32.0), 273.15));
        assert!(is_close(fahrenheit.from_main(373.15), 212.0));
    }

    #[test]
    fn composition() {
        let length = length();
        let time = time();
        let kilometre = length.unit("km").expect("km should exist");
        let hour = Unit::define(time, &UnitDef::new("h", 3600.0));

        let speed = kilometre.divide(&hour).expect("unbiased units divide");
        assert_eq!(speed.symbol(), "km/h");
        assert!(is_close(speed.scale(), 1000.0 / 3600.0));
        assert_eq!(
            speed.dimension(),
            Dimension::compose(
                DimensionMap::of([(length, 1), (time, -1)]).expect("exponents should be in range")
            )
        );

        let area = kilometre.multiply(&kilometre).expect("unbiased units multiply");
        assert_eq!(area.symbol(), "km×km");
        assert!(is_close(area.scale(), 1e6));

        let per_area = kilometre.divide(&area).expect("unbiased units divide");
        assert_eq!(per_area.symbol(), "km/(km×km)");

        let frequency = hour.invert().expect("unbiased units invert");
        assert_eq!(frequency.symbol(), "h⁻¹");
        assert!(is_close(frequency.scale(), 1.0 / 3600.0));
        assert_eq!(Ok(frequency.dimension()), time.invert());
    }

    #[test]
    fn composite_units_are_registered() {
        let length = length();
        let time = time();
        let metre = length.main_unit();
        let second = time.main_unit();

        let speed = metre.divide(&second).expect("unbiased units divide");

        assert_eq!(speed.dimension().unit("m/s").expect("m/s should exist"), speed);
    }

    #[test]
    fn biased_units_do_not_compose() {
        let temperature = temperature();
        let time = time();
        let celsius = Unit::define(temperature, &UnitDef::new("°C", 1.0).with_bias(273.15));
        let second = time.main_unit();

        let expected = UnitError::AffineComposition {
            symbol: "°C".to_string(),
            bias: 273.15,
        };

        assert_eq!(celsius.invert(), Err(expected.clone()));
        assert_eq!(celsius.multiply(&second), Err(expected.clone()));
        assert_eq!(second.divide(&celsius), Err(expected));
    }
}
