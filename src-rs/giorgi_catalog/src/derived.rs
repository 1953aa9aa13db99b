use giorgi_unit::{Dimension, DimensionMap, UnitError, UnitFamilyDef};

use crate::base::BaseDimensions;

/// The derived dimensions of the catalog.
///
/// Dimensions with an SI unit of their own get its prefixed family. The
/// others use the synthesized main unit, such as `m×s⁻¹` for speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedDimensions {
    /// Length²
    pub area: Dimension,
    /// Length³
    pub volume: Dimension,
    /// Length per time
    pub speed: Dimension,
    /// Length per time²
    pub acceleration: Dimension,
    /// Newtons
    pub force: Dimension,
    /// Pascals
    pub pressure: Dimension,
    /// Joules
    pub energy: Dimension,
    /// Watts
    pub power: Dimension,
    /// Coulombs
    pub charge: Dimension,
    /// Volts
    pub voltage: Dimension,
    /// Ohms
    pub resistance: Dimension,
    /// Siemens
    pub conductance: Dimension,
    /// Farads
    pub capacitance: Dimension,
    /// Henries
    pub inductance: Dimension,
    /// Webers
    pub magnetic_flux: Dimension,
    /// Teslas
    pub magnetic_flux_density: Dimension,
    /// Volume per time
    pub volumetric_flow_rate: Dimension,
    /// Mass per volume
    pub density: Dimension,
    /// Mass per time
    pub mass_flow_rate: Dimension,
}

impl DerivedDimensions {
    pub(crate) fn define(base: &BaseDimensions) -> Result<Self, UnitError> {
        let BaseDimensions {
            length,
            time,
            mass,
            current,
            ..
        } = *base;

        Ok(Self {
            area: unnamed("Area", [(length, 2)])?,
            volume: unnamed("Volume", [(length, 3)])?,
            speed: unnamed("Speed", [(length, 1), (time, -1)])?,
            acceleration: unnamed("Acceleration", [(length, 1), (time, -2)])?,
            force: named(
                "Force",
                [(mass, 1), (length, 1), (time, -2)],
                "N",
                "newton",
            )?,
            pressure: named(
                "Pressure",
                [(mass, 1), (length, -1), (time, -2)],
                "Pa",
                "pascal",
            )?,
            energy: named(
                "Energy",
                [(mass, 1), (length, 2), (time, -2)],
                "J",
                "joule",
            )?,
            power: named(
                "Power",
                [(mass, 1), (length, 2), (time, -3)],
                "W",
                "watt",
            )?,
            charge: named("Charge", [(current, 1), (time, 1)], "C", "coulomb")?,
            voltage: named(
                "Voltage",
                [(mass, 1), (length, 2), (time, -3), (current, -1)],
                "V",
                "volt",
            )?,
            resistance: named(
                "Resistance",
                [(mass, 1), (length, 2), (time, -3), (current, -2)],
                "Ω",
                "ohm",
            )?,
            conductance: named(
                "Conductance",
                [(mass, -1), (length, -2), (time, 3), (current, 2)],
                "S",
                "siemens",
            )?,
            capacitance: named(
                "Capacitance",
                [(mass, -1), (length, -2), (time, 4), (current, 2)],
                "F",
                "farad",
            )?,
            inductance: named(
                "Inductance",
                [(mass, 1), (length, 2), (time, -2), (current, -2)],
                "H",
                "henry",
            )?,
            magnetic_flux: named(
                "Magnetic flux",
                [(mass, 1), (length, 2), (time, -2), (current, -1)],
                "Wb",
                "weber",
            )?,
            magnetic_flux_density: named(
                "Magnetic flux density",
                [(mass, 1), (time, -2), (current, -1)],
                "T",
                "tesla",
            )?,
            volumetric_flow_rate: unnamed("Volumetric flow rate", [(length, 3), (time, -1)])?,
            density: unnamed("Density", [(mass, 1), (length, -3)])?,
            mass_flow_rate: unnamed("Mass flow rate", [(mass, 1), (time, -1)])?,
        })
    }

    /// Returns every derived dimension, in definition order.
    #[must_use]
    pub const fn all(&self) -> [Dimension; 19] {
        [
            self.area,
            self.volume,
            self.speed,
            self.acceleration,
            self.force,
            self.pressure,
            self.energy,
            self.power,
            self.charge,
            self.voltage,
            self.resistance,
            self.conductance,
            self.capacitance,
            self.inductance,
            self.magnetic_flux,
            self.magnetic_flux_density,
            self.volumetric_flow_rate,
            self.density,
            self.mass_flow_rate,
        ]
    }
}

fn named(
    name: &str,
    factors: impl IntoIterator<Item = (Dimension, i32)>,
    symbol: &str,
    unit_name: &str,
) -> Result<Dimension, UnitError> {
    Dimension::derive(
        name,
        DimensionMap::of(factors)?,
        Some(&UnitFamilyDef::new(symbol).with_name(unit_name)),
    )
}

fn unnamed(
    name: &str,
    factors: impl IntoIterator<Item = (Dimension, i32)>,
) -> Result<Dimension, UnitError> {
    Dimension::derive(name, DimensionMap::of(factors)?, None)
}
