//! Dimensioned values
//!
//! A [`Quantity`] stores its value in the main unit of its dimension. Units
//! only matter when a quantity is built or rendered.

use std::{cmp::Ordering, fmt, ops};

use nom::{
    IResult, Parser as _,
    character::complete::{char, digit0, digit1, multispace0, one_of},
    combinator::{opt, recognize},
    sequence::preceded,
};

use crate::{UnitError, dimension::Dimension, unit::Unit, util::is_relatively_close};

/// How the number of a rendered quantity is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    /// A fixed number of decimal places, as in `12.000`
    Fixed(usize),
    /// Scientific notation with a fixed number of decimal places, as in
    /// `1.200e1`
    Scientific(usize),
    /// The shortest representation that reads back as the same float
    General,
}

impl NumberFormat {
    /// Writes `value` in this format.
    #[must_use]
    pub fn apply(self, value: f64) -> String {
        match self {
            Self::Fixed(precision) => format!("{value:.precision$}"),
            Self::Scientific(precision) => format!("{value:.precision$e}"),
            Self::General => format!("{value}"),
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::Fixed(3)
    }
}

/// A value with a dimension.
#[derive(Clone, Copy)]
pub struct Quantity {
    dimension: Dimension,
    value: f64,
}

impl Quantity {
    /// Creates a quantity from a value in the dimension's main unit.
    #[must_use]
    pub const fn new(dimension: Dimension, value: f64) -> Self {
        Self { dimension, value }
    }

    /// Creates a quantity from a value in `unit`.
    #[must_use]
    pub fn of(value: f64, unit: &Unit) -> Self {
        Self::new(unit.dimension(), unit.to_main(value))
    }

    /// Creates a quantity from a value in the unit registered under `key`,
    /// or in the main unit when there is no key.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::UnitNotFound` if `key` is not registered on
    /// `dimension`.
    pub fn in_unit(dimension: Dimension, value: f64, key: Option<&str>) -> Result<Self, UnitError> {
        let unit = dimension.unit_or_main(key)?;
        Ok(Self::of(value, &unit))
    }

    /// Creates a quantity from several values in named units, summed in
    /// main-unit terms.
    ///
    /// For example, `[("h", 1.0), ("min", 3.0), ("s", 5.0)]` is 3785 seconds.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::UnitNotFound` if any key is not registered on
    /// `dimension`.
    pub fn from_contributions<'a>(
        dimension: Dimension,
        contributions: impl IntoIterator<Item = (&'a str, f64)>,
    ) -> Result<Self, UnitError> {
        contributions
            .into_iter()
            .try_fold(Self::zero(dimension), |total, (key, value)| {
                let unit = dimension.unit(key)?;
                Ok(Self::new(dimension, total.value + unit.to_main(value)))
            })
    }

    /// Creates a zero quantity of `dimension`.
    #[must_use]
    pub const fn zero(dimension: Dimension) -> Self {
        Self::new(dimension, 0.0)
    }

    /// Adds up quantities of `dimension`. An empty iterator sums to zero.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::DimensionMismatch` if any quantity has another
    /// dimension.
    pub fn checked_sum(
        dimension: Dimension,
        quantities: impl IntoIterator<Item = Self>,
    ) -> Result<Self, UnitError> {
        quantities
            .into_iter()
            .try_fold(Self::zero(dimension), Self::checked_add)
    }

    /// Reads a quantity written as a number followed by an optional unit
    /// key, such as `12 ft`, `1.5e3 km` or `42`.
    ///
    /// An exponent is only read when digits follow it, so `3eV` is three
    /// electronvolts.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::InvalidQuantity` if the input does not start with
    /// a number, and `UnitError::UnitNotFound` if the unit key is not
    /// registered on `dimension`.
    pub fn parse(dimension: Dimension, input: &str) -> Result<Self, UnitError> {
        let invalid = || UnitError::InvalidQuantity {
            input: input.to_string(),
            dimension: dimension.name(),
        };

        let (rest, number) = preceded(multispace0, number)
            .parse(input)
            .map_err(|_| invalid())?;
        let value = number.parse::<f64>().map_err(|_| invalid())?;

        let key = rest.trim();
        let key = (!key.is_empty()).then_some(key);

        Self::in_unit(dimension, value, key)
    }

    /// Returns the dimension of the quantity.
    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Returns the value in the dimension's main unit.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Returns the value in `unit`.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::DimensionMismatch` if `unit` belongs to another
    /// dimension.
    pub fn value_in(&self, unit: &Unit) -> Result<f64, UnitError> {
        self.ensure_same_dimension(unit.dimension())?;
        Ok(unit.from_main(self.value))
    }

    /// Returns the value in the unit registered under `key`.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::UnitNotFound` if `key` is not registered on the
    /// quantity's dimension.
    pub fn value_in_key(&self, key: &str) -> Result<f64, UnitError> {
        let unit = self.dimension.unit(key)?;
        self.value_in(&unit)
    }

    /// Converts a dimensionless quantity to a plain number.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::DimensionMismatch` if the quantity has a
    /// dimension.
    pub fn to_number(&self) -> Result<f64, UnitError> {
        self.ensure_same_dimension(Dimension::dimensionless())?;
        Ok(self.value)
    }

    /// Adds two quantities of the same dimension.
    ///
    /// A dimensionless zero on either side is the identity, so sums can
    /// start from a plain `0`.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::DimensionMismatch` if the dimensions differ.
    pub fn checked_add(self, rhs: Self) -> Result<Self, UnitError> {
        if rhs.is_plain_zero() {
            return Ok(self);
        }
        if self.is_plain_zero() {
            return Ok(rhs);
        }

        self.ensure_same_dimension(rhs.dimension)?;
        Ok(Self::new(self.dimension, self.value + rhs.value))
    }

    /// Subtracts two quantities of the same dimension.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::DimensionMismatch` if the dimensions differ.
    pub fn checked_sub(self, rhs: Self) -> Result<Self, UnitError> {
        self.checked_add(-rhs)
    }

    /// Multiplies the value by a plain number.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.dimension, self.value * factor)
    }

    /// Multiplies two quantities, multiplying their dimensions.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::ExponentOverflow` if the product dimension is out
    /// of range.
    pub fn multiply(self, rhs: Self) -> Result<Self, UnitError> {
        let dimension = self.dimension.multiply(rhs.dimension)?;
        Ok(Self::new(dimension, self.value * rhs.value))
    }

    /// Divides two quantities, dividing their dimensions.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::ExponentOverflow` if the quotient dimension is out
    /// of range.
    pub fn divide(self, rhs: Self) -> Result<Self, UnitError> {
        let dimension = self.dimension.divide(rhs.dimension)?;
        Ok(Self::new(dimension, self.value / rhs.value))
    }

    /// Returns the reciprocal of the quantity.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::ExponentOverflow` if the inverted dimension is
    /// out of range.
    pub fn invert(self) -> Result<Self, UnitError> {
        let dimension = self.dimension.invert()?;
        Ok(Self::new(dimension, self.value.recip()))
    }

    /// Raises the quantity to an integer power. Negative powers invert the
    /// dimension.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::ExponentOverflow` if an exponent of the resulting
    /// dimension is out of range.
    pub fn power(self, exponent: i32) -> Result<Self, UnitError> {
        let dimension = self.dimension.power(exponent)?;
        Ok(Self::new(dimension, self.value.powi(exponent)))
    }

    /// Compares two quantities of the same dimension, treating values within
    /// a relative tolerance of 1e-9 as equal. Zero only equals zero.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::DimensionMismatch` if the dimensions differ.
    pub fn checked_eq(&self, other: &Self) -> Result<bool, UnitError> {
        self.ensure_same_dimension(other.dimension)?;
        Ok(is_relatively_close(self.value, other.value))
    }

    /// Orders two quantities of the same dimension. Values within tolerance
    /// are equal, and `None` means one of the values is NaN.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::DimensionMismatch` if the dimensions differ.
    pub fn checked_partial_cmp(&self, other: &Self) -> Result<Option<Ordering>, UnitError> {
        if self.checked_eq(other)? {
            return Ok(Some(Ordering::Equal));
        }

        Ok(self.value.partial_cmp(&other.value))
    }

    /// Checks if `self` is less than `other`.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::DimensionMismatch` if the dimensions differ.
    pub fn checked_lt(&self, other: &Self) -> Result<bool, UnitError> {
        Ok(self.checked_partial_cmp(other)? == Some(Ordering::Less))
    }

    /// Checks if `self` is less than or equal to `other`.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::DimensionMismatch` if the dimensions differ.
    pub fn checked_le(&self, other: &Self) -> Result<bool, UnitError> {
        Ok(matches!(
            self.checked_partial_cmp(other)?,
            Some(Ordering::Less | Ordering::Equal)
        ))
    }

    /// Checks if `self` is greater than `other`.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::DimensionMismatch` if the dimensions differ.
    pub fn checked_gt(&self, other: &Self) -> Result<bool, UnitError> {
        Ok(self.checked_partial_cmp(other)? == Some(Ordering::Greater))
    }

    /// Checks if `self` is greater than or equal to `other`.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::DimensionMismatch` if the dimensions differ.
    pub fn checked_ge(&self, other: &Self) -> Result<bool, UnitError> {
        Ok(matches!(
            self.checked_partial_cmp(other)?,
            Some(Ordering::Greater | Ordering::Equal)
        ))
    }

    /// Renders the quantity in `unit`, as in `12.000 in`.
    ///
    /// The number and symbol are separated by a space unless the unit asks
    /// for none or has no symbol.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::DimensionMismatch` if `unit` belongs to another
    /// dimension.
    pub fn to_string_in(&self, unit: &Unit, format: NumberFormat) -> Result<String, UnitError> {
        let number = format.apply(self.value_in(unit)?);

        let rendered = if unit.symbol().is_empty() {
            number
        } else if unit.no_space_before_symbol() {
            format!("{number}{}", unit.symbol())
        } else {
            format!("{number} {}", unit.symbol())
        };

        Ok(rendered)
    }

    /// Renders the quantity in the unit registered under `key`, or in the
    /// main unit when there is no key.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::UnitNotFound` if `key` is not registered on the
    /// quantity's dimension.
    pub fn format(&self, format: NumberFormat, key: Option<&str>) -> Result<String, UnitError> {
        let unit = self.dimension.unit_or_main(key)?;
        self.to_string_in(&unit, format)
    }

    /// Renders the quantity in the member of the main unit's family that
    /// gives the most readable number, as in `1.500 km` for 1500 m.
    ///
    /// Dimensions without a unit family are rendered in their main unit.
    #[must_use]
    pub fn to_best_fit_string(&self, format: NumberFormat) -> String {
        let unit = self
            .best_fit_unit()
            .unwrap_or_else(|| self.dimension.main_unit());

        self.to_string_in(&unit, format)
            .unwrap_or_else(|_| format.apply(self.value))
    }

    fn best_fit_unit(&self) -> Option<Unit> {
        let (symbol, prefixes) = self.dimension.unit_family()?;
        let unprefixed = self.dimension.unit(&symbol).ok()?;
        let prefix = prefixes.best_fit(unprefixed.from_main(self.value))?;

        self.dimension
            .unit(&format!("{}{symbol}", prefix.symbol()))
            .ok()
    }

    fn is_plain_zero(&self) -> bool {
        self.dimension.is_dimensionless() && self.value == 0.0
    }

    fn ensure_same_dimension(&self, other: Dimension) -> Result<(), UnitError> {
        if self.dimension == other {
            return Ok(());
        }

        Err(UnitError::DimensionMismatch {
            left: self.dimension.name(),
            right: other.name(),
        })
    }
}

/// Reads a decimal number with an optional sign, fraction and exponent.
fn number(input: &str) -> IResult<&str, &str> {
    recognize((
        opt(one_of("+-")),
        digit1,
        opt((char('.'), digit0)),
        opt((one_of("eE"), opt(one_of("+-")), digit1)),
    ))
    .parse(input)
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Self::new(Dimension::dimensionless(), value)
    }
}

impl TryFrom<Quantity> for f64 {
    type Error = UnitError;

    fn try_from(quantity: Quantity) -> Result<Self, Self::Error> {
        quantity.to_number()
    }
}

impl PartialEq for Quantity {
    /// Quantities of different dimensions are never equal. Use
    /// [`Quantity::checked_eq`] to treat that as an error.
    fn eq(&self, other: &Self) -> bool {
        self.checked_eq(other).unwrap_or(false)
    }
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.checked_partial_cmp(other).ok().flatten()
    }
}

impl ops::Neg for Quantity {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(self.dimension, -self.value)
    }
}

impl ops::Mul for Quantity {
    type Output = Result<Self, UnitError>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl ops::Div for Quantity {
    type Output = Result<Self, UnitError>;

    fn div(self, rhs: Self) -> Self::Output {
        self.divide(rhs)
    }
}

impl ops::Mul<f64> for Quantity {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl ops::Div<f64> for Quantity {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.dimension, self.value / rhs)
    }
}

impl ops::Mul<Quantity> for f64 {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Self::Output {
        rhs.scale(self)
    }
}

impl ops::Div<Quantity> for f64 {
    type Output = Result<Quantity, UnitError>;

    fn div(self, rhs: Quantity) -> Self::Output {
        rhs.invert().map(|inverse| inverse.scale(self))
    }
}

impl fmt::Display for Quantity {
    /// Renders in the main unit with the formatter's precision, or 3 decimal
    /// places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = NumberFormat::Fixed(f.precision().unwrap_or(3));
        let rendered = self
            .format(format, None)
            .map_err(|_| fmt::Error)?;
        write!(f, "{rendered}")
    }
}

impl fmt::Debug for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .format(NumberFormat::Fixed(6), None)
            .map_err(|_| fmt::Error)?;
        write!(f, "Quantity({rendered})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dimension::DimensionMap,
        prefix::PrefixFamily,
        unit::{UnitDef, UnitFamilyDef},
        util::is_close,
    };

    struct Fixture {
        length: Dimension,
        mass: Dimension,
        time: Dimension,
        temperature: Dimension,
        energy: Dimension,
    }

    fn fixture() -> Fixture {
        let kilo = PrefixFamily::decimal()
            .by_symbol("k")
            .expect("kilo should exist");

        let length = Dimension::base("Length", &UnitFamilyDef::new("m").with_name("metre"))
            .expect("length should be created");
        let mass = Dimension::base(
            "Mass",
            &UnitFamilyDef::new("g")
                .with_name("gram")
                .with_main_prefix(kilo),
        )
        .expect("mass should be created");
        let time = Dimension::base("Time", &UnitFamilyDef::new("s").with_name("second"))
            .expect("time should be created");
        let temperature = Dimension::base("Temperature", &UnitFamilyDef::new("K").with_name("kelvin"))
            .expect("temperature should be created");
        let energy = Dimension::derive(
            "Energy",
            DimensionMap::of([(mass, 1), (length, 2), (time, -2)])
                .expect("exponents should be in range"),
            Some(&UnitFamilyDef::new("J").with_name("joule")),
        )
        .expect("energy should be derived");

        Unit::define(length, &UnitDef::new("ft", 0.3048).with_name("foot"));
        Unit::define(length, &UnitDef::new("in", 0.0254).with_name("inch"));
        Unit::define(time, &UnitDef::new("min", 60.0).with_name("minute"));
        Unit::define(time, &UnitDef::new("h", 3600.0).with_name("hour"));
        Unit::define(
            temperature,
            &UnitDef::new("°C", 1.0).with_bias(273.15).with_name("celsius"),
        );
        Unit::define(
            temperature,
            &UnitDef::new("°F", 5.0 / 9.0).with_bias(459.67).with_name("fahrenheit"),
        );
        Unit::define(energy, &UnitDef::new("eV", 1.602_176_634e-19).with_name("electronvolt"));

        Fixture {
            length,
            mass,
            time,
            temperature,
            energy,
        }
    }

    #[test]
    fn foot_in_inches() {
        let Fixture { length, .. } = fixture();

        let foot = Quantity::in_unit(length, 1.0, Some("ft")).expect("ft should exist");

        assert_eq!(
            foot.format(NumberFormat::Fixed(3), Some("in"))
                .expect("in should exist"),
            "12.000 in"
        );
    }

    #[test]
    fn summed_contributions() {
        let Fixture { time, .. } = fixture();

        let duration = Quantity::from_contributions(time, [("h", 1.0), ("min", 3.0), ("s", 5.0)])
            .expect("all units should exist");

        assert!(is_close(duration.value(), 3785.0));
    }

    #[test]
    fn celsius_round_trip() {
        let Fixture { temperature, .. } = fixture();

        let freezing = Quantity::in_unit(temperature, 0.0, Some("°C")).expect("°C should exist");

        assert!(is_close(freezing.value(), 273.15));
        assert_eq!(
            freezing
                .format(NumberFormat::Fixed(1), Some("°C"))
                .expect("°C should exist"),
            "0.0 °C"
        );
        assert_eq!(
            freezing
                .format(NumberFormat::Fixed(2), Some("°F"))
                .expect("°F should exist"),
            "32.00 °F"
        );
    }

    #[test]
    fn mismatched_addition_is_an_error() {
        let Fixture { length, time, .. } = fixture();

        let result = Quantity::new(length, 1.0).checked_add(Quantity::new(time, 1.0));

        assert_eq!(
            result.map(|quantity| quantity.value()),
            Err(UnitError::DimensionMismatch {
                left: "Length".to_string(),
                right: "Time".to_string(),
            })
        );
    }

    #[test]
    fn addition_and_subtraction() {
        let Fixture { length, .. } = fixture();
        let a = Quantity::new(length, 1.5);
        let b = Quantity::new(length, 0.5);

        let sum = a.checked_add(b).expect("same dimension");
        let difference = a.checked_sub(b).expect("same dimension");

        assert!(is_close(sum.value(), 2.0));
        assert!(is_close(difference.value(), 1.0));
        assert!(is_close((-a).value(), -1.5));
    }

    #[test]
    fn plain_zero_is_the_additive_identity() {
        let Fixture { length, .. } = fixture();
        let distance = Quantity::new(length, 4.0);

        let sum = Quantity::from(0.0)
            .checked_add(distance)
            .expect("zero is the identity");
        assert_eq!(sum.dimension(), length);
        assert!(is_close(sum.value(), 4.0));

        let total = Quantity::checked_sum(length, [distance, distance, distance])
            .expect("same dimension");
        assert!(is_close(total.value(), 12.0));

        let empty = Quantity::checked_sum(length, []).expect("empty sum is zero");
        assert_eq!(empty.dimension(), length);
        assert!(is_close(empty.value(), 0.0));
    }

    #[test]
    fn equality_is_tolerant() {
        let Fixture { length, time, .. } = fixture();
        let a = Quantity::new(length, 0.1 + 0.2);
        let b = Quantity::new(length, 0.3);

        assert_eq!(a.checked_eq(&a), Ok(true));
        assert_eq!(a.checked_eq(&b), Ok(true));
        assert_eq!(b.checked_eq(&a), Ok(true));
        assert_eq!(a.checked_eq(&Quantity::new(length, 0.4)), Ok(false));
        assert!(matches!(
            a.checked_eq(&Quantity::new(time, 0.3)),
            Err(UnitError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn ordering() {
        let Fixture { length, time, .. } = fixture();
        let short = Quantity::new(length, 1.0);
        let long = Quantity::new(length, 2.0);

        assert_eq!(short.checked_lt(&long), Ok(true));
        assert_eq!(short.checked_le(&short), Ok(true));
        assert_eq!(long.checked_gt(&short), Ok(true));
        assert_eq!(long.checked_ge(&long), Ok(true));
        assert_eq!(long.checked_lt(&short), Ok(false));
        assert!(short < long);
        assert!(short.checked_lt(&Quantity::new(time, 2.0)).is_err());
        assert_eq!(short.partial_cmp(&Quantity::new(time, 2.0)), None);
    }

    #[test]
    fn multiplication_derives_dimensions() {
        let Fixture {
            length,
            mass,
            time,
            energy,
            ..
        } = fixture();

        let speed = (Quantity::new(length, 10.0) / Quantity::new(time, 2.0))
            .expect("exponents should be in range");
        let kinetic = (0.5 * Quantity::new(mass, 2.0)
            * speed.power(2).expect("exponents should be in range"))
        .expect("exponents should be in range");

        assert_eq!(kinetic.dimension(), energy);
        assert!(is_close(kinetic.value(), 25.0));

        let frequency = (1.0 / Quantity::new(time, 4.0)).expect("exponents should be in range");
        assert_eq!(Ok(frequency.dimension()), time.invert());
        assert!(is_close(frequency.value(), 0.25));

        let per_area = Quantity::new(length, 2.0)
            .power(-2)
            .expect("exponents should be in range");
        assert_eq!(Ok(per_area.dimension()), length.power(-2));
        assert!(is_close(per_area.value(), 0.25));

        let ratio = (Quantity::new(length, 3.0) / Quantity::new(length, 1.5))
            .expect("exponents should be in range");
        assert_eq!(ratio.to_number(), Ok(2.0));
        assert_eq!(f64::try_from(ratio), Ok(2.0));
    }

    #[test]
    fn exponent_overflow_is_an_error() {
        let Fixture { length, .. } = fixture();
        let area = Quantity::new(length.power(2).expect("exponents should be in range"), 1.0);

        assert_eq!(
            area.power(i32::MAX / 2 + 1).map(|quantity| quantity.value()),
            Err(UnitError::ExponentOverflow)
        );

        let lowest = Quantity::new(length.power(i32::MIN).expect("exponents should be in range"), 1.0);
        assert_eq!(
            lowest.invert().map(|quantity| quantity.value()),
            Err(UnitError::ExponentOverflow)
        );
        assert_eq!(
            (1.0 / lowest).map(|quantity| quantity.value()),
            Err(UnitError::ExponentOverflow)
        );
    }

    #[test]
    fn small_magnitudes_compare_relatively() {
        let Fixture { time, energy, .. } = fixture();
        Unit::define_family(
            energy,
            &UnitFamilyDef::new("eV")
                .with_name("electronvolt")
                .with_scale(1.602_176_634e-19),
        );

        let picosecond = Quantity::in_unit(time, 1.0, Some("ps")).expect("ps should exist");
        let fifty_picoseconds = Quantity::in_unit(time, 50.0, Some("ps")).expect("ps should exist");

        assert_eq!(picosecond.checked_eq(&fifty_picoseconds), Ok(false));
        assert_eq!(picosecond.checked_lt(&fifty_picoseconds), Ok(true));
        assert_eq!(fifty_picoseconds.checked_gt(&picosecond), Ok(true));
        assert_eq!(picosecond.checked_eq(&Quantity::new(time, 0.0)), Ok(false));
        assert_eq!(picosecond.checked_eq(&Quantity::new(time, 1e-12)), Ok(true));

        let electronvolt = Quantity::in_unit(energy, 1.0, Some("eV")).expect("eV should exist");
        let megaelectronvolt = Quantity::in_unit(energy, 1.0, Some("MeV")).expect("MeV should exist");

        assert_eq!(electronvolt.checked_eq(&megaelectronvolt), Ok(false));
        assert_eq!(electronvolt.checked_lt(&megaelectronvolt), Ok(true));
        assert!(electronvolt != megaelectronvolt);
        assert_eq!(
            electronvolt.checked_eq(&Quantity::new(energy, 1.602_176_634e-19)),
            Ok(true)
        );
    }

    #[test]
    fn plain_number_conversion_requires_dimensionless() {
        let Fixture { length, .. } = fixture();

        assert!(matches!(
            Quantity::new(length, 1.0).to_number(),
            Err(UnitError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn scaling_keeps_dimension() {
        let Fixture { length, .. } = fixture();
        let distance = Quantity::new(length, 3.0);

        assert_eq!((distance * 2.0).dimension(), length);
        assert!(is_close((distance * 2.0).value(), 6.0));
        assert!(is_close((distance / 2.0).value(), 1.5));
    }

    #[test]
    fn rendering() {
        let Fixture { length, mass, .. } = fixture();
        let distance = Quantity::new(length, 1234.5);

        assert_eq!(distance.to_string(), "1234.500 m");
        assert_eq!(format!("{distance:.1}"), "1234.5 m");
        assert_eq!(format!("{distance:?}"), "Quantity(1234.500000 m)");
        assert_eq!(
            distance
                .format(NumberFormat::Scientific(2), Some("km"))
                .expect("km should exist"),
            "1.23e0 km"
        );
        assert_eq!(
            distance
                .format(NumberFormat::General, Some("km"))
                .expect("km should exist"),
            "1.2345 km"
        );
        assert_eq!(Quantity::new(mass, 2.0).to_string(), "2.000 kg");
        assert_eq!(Quantity::from(0.5).to_string(), "0.500");
    }

    #[test]
    fn rendering_in_a_foreign_unit_is_an_error() {
        let Fixture { length, time, .. } = fixture();

        let result = Quantity::new(length, 1.0).to_string_in(&time.main_unit(), NumberFormat::default());

        assert!(matches!(result, Err(UnitError::DimensionMismatch { .. })));
    }

    #[test]
    fn no_space_before_symbol() {
        let Fixture { length, .. } = fixture();
        let mark = Unit::define(length, &UnitDef::new("′′", 1.0).without_space());

        assert_eq!(
            Quantity::new(length, 90.0)
                .to_string_in(&mark, NumberFormat::Fixed(0))
                .expect("same dimension"),
            "90′′"
        );
    }

    #[test]
    fn best_fit_rendering() {
        let Fixture { length, mass, time, .. } = fixture();

        assert_eq!(
            Quantity::new(length, 1500.0).to_best_fit_string(NumberFormat::Fixed(3)),
            "1.500 km"
        );
        assert_eq!(
            Quantity::new(length, 0.0005).to_best_fit_string(NumberFormat::Fixed(3)),
            "0.500 mm"
        );
        assert_eq!(
            Quantity::new(length, -1500.0).to_best_fit_string(NumberFormat::Fixed(1)),
            "-1.5 km"
        );
        assert_eq!(
            Quantity::new(mass, 0.002).to_best_fit_string(NumberFormat::Fixed(3)),
            "2.000 g"
        );
        assert_eq!(
            Quantity::new(time, 0.0).to_best_fit_string(NumberFormat::Fixed(1)),
            "0.0 s"
        );

        let speed = (length / time).expect("exponents should be in range");
        assert_eq!(
            Quantity::new(speed, 3.0).to_best_fit_string(NumberFormat::Fixed(1)),
            "3.0 m×s⁻¹"
        );
    }

    #[test]
    fn parsing() {
        let Fixture { length, energy, .. } = fixture();

        let parsed = Quantity::parse(length, "12 ft").expect("valid quantity");
        assert!(is_close(parsed.value(), 12.0 * 0.3048));

        let parsed = Quantity::parse(length, "  1.5e3 km ").expect("valid quantity");
        assert!(is_close(parsed.value(), 1.5e6));

        let parsed = Quantity::parse(length, "42").expect("valid quantity");
        assert!(is_close(parsed.value(), 42.0));

        let parsed = Quantity::parse(length, "-2 light year");
        assert!(matches!(parsed, Err(UnitError::UnitNotFound { .. })));

        let parsed = Quantity::parse(energy, "3eV").expect("valid quantity");
        assert!(is_relatively_close(parsed.value(), 3.0 * 1.602_176_634e-19));
    }

    #[test]
    fn parsing_rejects_missing_numbers() {
        let Fixture { length, .. } = fixture();

        assert_eq!(
            Quantity::parse(length, "ft").map(|quantity| quantity.value()),
            Err(UnitError::InvalidQuantity {
                input: "ft".to_string(),
                dimension: "Length".to_string(),
            })
        );
        assert!(matches!(
            Quantity::parse(length, ""),
            Err(UnitError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn unit_round_trip_through_quantities() {
        let Fixture { temperature, length, .. } = fixture();

        for key in ["K", "°C", "°F"] {
            for value in [-40.0, 0.0, 36.6, 1000.0] {
                let quantity = Quantity::in_unit(temperature, value, Some(key)).expect("unit should exist");
                let back = quantity.value_in_key(key).expect("unit should exist");
                assert!(is_close(back, value), "{key}: {value} became {back}");
            }
        }

        let quantity = Quantity::in_unit(length, 3.0, Some("ft")).expect("ft should exist");
        assert!(is_close(quantity.value_in_key("foot").expect("foot should exist"), 3.0));
    }
}
