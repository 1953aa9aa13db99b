use giorgi_unit::{Dimension, Prefix, PrefixFamily, UnitError, UnitFamilyDef};

/// The base dimensions of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseDimensions {
    /// Length, in metres
    pub length: Dimension,
    /// Time, in seconds
    pub time: Dimension,
    /// Mass, in kilograms
    pub mass: Dimension,
    /// Temperature, in kelvin
    pub temperature: Dimension,
    /// Electric current, in amperes
    pub current: Dimension,
    /// Amount of substance, in moles
    pub amount: Dimension,
    /// Luminous intensity, in candelas
    pub luminous_intensity: Dimension,
    /// Information, in bits
    pub information: Dimension,
    /// Plain angle, in radians
    pub plain_angle: Dimension,
    /// Solid angle, in steradians
    pub solid_angle: Dimension,
}

impl BaseDimensions {
    pub(crate) fn define() -> Result<Self, UnitError> {
        let kilo = Prefix::make("kilo", "k", 3, 10);
        let bits = PrefixFamily::binary().chain(PrefixFamily::decimal());

        Ok(Self {
            length: base("Length", "m", "metre")?,
            time: base("Time", "s", "second")?,
            mass: Dimension::base(
                "Mass",
                &UnitFamilyDef::new("g")
                    .with_name("gram")
                    .with_main_prefix(kilo),
            )?,
            temperature: base("Temperature", "K", "kelvin")?,
            current: base("Current", "A", "ampere")?,
            amount: base("Amount", "mol", "mole")?,
            luminous_intensity: base("Luminous intensity", "cd", "candela")?,
            information: Dimension::base(
                "Information",
                &UnitFamilyDef::new("b").with_name("bit").with_prefixes(&bits),
            )?,
            plain_angle: base("Plain angle", "rad", "radian")?,
            solid_angle: base("Solid angle", "sr", "steradian")?,
        })
    }

    /// Returns every base dimension, in definition order.
    #[must_use]
    pub const fn all(&self) -> [Dimension; 10] {
        [
            self.length,
            self.time,
            self.mass,
            self.temperature,
            self.current,
            self.amount,
            self.luminous_intensity,
            self.information,
            self.plain_angle,
            self.solid_angle,
        ]
    }
}

/// Currencies, each an independent base dimension.
///
/// Amounts in different currencies never convert implicitly. An exchange
/// rate is a quantity of its own, such as `1.05 US$ / 1 €`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currencies {
    /// The euro
    pub euro: Dimension,
    /// The US dollar
    pub us_dollar: Dimension,
}

impl Currencies {
    pub(crate) fn define() -> Result<Self, UnitError> {
        Ok(Self {
            euro: base("Euro", "€", "euro")?,
            us_dollar: base("US dollar", "US$", "US dollar")?,
        })
    }

    /// Returns every currency, in definition order.
    #[must_use]
    pub const fn all(&self) -> [Dimension; 2] {
        [self.euro, self.us_dollar]
    }
}

fn base(name: &str, symbol: &str, unit_name: &str) -> Result<Dimension, UnitError> {
    Dimension::base(name, &UnitFamilyDef::new(symbol).with_name(unit_name))
}
