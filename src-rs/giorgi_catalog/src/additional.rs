//! Units beyond the main unit families

use std::f64::consts::PI;

use giorgi_unit::{Dimension, Prefix, PrefixFamily, Unit, UnitDef, UnitFamilyDef};

use crate::{base::BaseDimensions, derived::DerivedDimensions};

const FOOT: f64 = 0.3048;
const ACRE: f64 = 4_046.856_422_4;
const FLUID_OUNCE: f64 = 28.413_062_5e-6;
const POUND: f64 = 0.453_592_37;
const DEGREE: f64 = 2.0 * PI / 360.0;

pub fn define(base: &BaseDimensions, derived: &DerivedDimensions) {
    length(base);
    area_and_volume(derived);
    time(base);
    mass(base);
    temperature(base);
    mechanical(derived);
    electrical(derived);
    information(base);
    angle(base);
}

fn define_all(dimension: Dimension, units: &[(&str, f64, &str)]) {
    for &(symbol, scale, name) in units {
        Unit::define(dimension, &UnitDef::new(symbol, scale).with_name(name));
    }
}

fn length(base: &BaseDimensions) {
    define_all(
        base.length,
        &[
            ("Å", 1e-10, "ångström"),
            ("ly", 9_460_730_472_580_800.0, "light-year"),
            ("twip", FOOT / 17_280.0, "twip"),
            ("th", FOOT / 12_000.0, "thou"),
            ("barleycorn", FOOT / 36.0, "barleycorn"),
            ("in", FOOT / 12.0, "inch"),
            ("hh", FOOT / 3.0, "hand"),
            ("ft", FOOT, "foot"),
            ("yd", FOOT * 3.0, "yard"),
            ("ch", FOOT * 66.0, "chain"),
            ("fur", FOOT * 660.0, "furlong"),
            ("mi", FOOT * 5_280.0, "mile"),
            ("lea", FOOT * 15_840.0, "league"),
        ],
    );
}

fn area_and_volume(derived: &DerivedDimensions) {
    for prefix in PrefixFamily::decimal() {
        if prefix == Prefix::unit() {
            continue;
        }

        Unit::define(
            derived.area,
            &UnitDef::new(format!("{}m²", prefix.symbol()), prefix.scale().powi(2))
                .with_name(format!("square {}metre", prefix.name())),
        );
        Unit::define(
            derived.volume,
            &UnitDef::new(format!("{}m³", prefix.symbol()), prefix.scale().powi(3))
                .with_name(format!("cubic {}metre", prefix.name())),
        );
    }

    define_all(
        derived.area,
        &[
            ("ca", 1.0, "centiare"),
            ("a", 1e2, "are"),
            ("ha", 1e4, "hectare"),
            ("ro", ACRE / 4.0, "rood"),
            ("ac", ACRE, "acre"),
            ("sq mi", ACRE * 640.0, "square mile"),
        ],
    );

    Unit::define_family(
        derived.volume,
        &UnitFamilyDef::new("l").with_name("litre").with_scale(1e-3),
    );
    define_all(
        derived.volume,
        &[
            ("fl oz", FLUID_OUNCE, "fluid ounce"),
            ("gi", FLUID_OUNCE * 5.0, "gill"),
            ("pt", FLUID_OUNCE * 20.0, "pint"),
            ("qt", FLUID_OUNCE * 40.0, "quart"),
            ("gal", FLUID_OUNCE * 160.0, "gallon"),
        ],
    );
}

fn time(base: &BaseDimensions) {
    define_all(
        base.time,
        &[
            ("min", 60.0, "minute"),
            ("h", 3_600.0, "hour"),
            ("d", 86_400.0, "day"),
        ],
    );
}

fn mass(base: &BaseDimensions) {
    define_all(
        base.mass,
        &[
            ("t", 1e3, "tonne"),
            ("Da", 1.66e-27, "dalton"),
            ("M☉", 1.99e30, "solar mass"),
            ("gr", POUND / 7_000.0, "grain"),
            ("dr", POUND / 256.0, "drachm"),
            ("oz", POUND / 16.0, "ounce"),
            ("lb", POUND, "pound"),
            ("st", POUND * 14.0, "stone"),
            ("qr", POUND * 28.0, "quarter"),
            ("cwt", POUND * 112.0, "hundredweight"),
            ("long ton", POUND * 2_240.0, "long ton"),
            ("short ton", POUND * 2_000.0, "short ton"),
            ("slug", 14.593_902_94, "slug"),
        ],
    );
}

fn temperature(base: &BaseDimensions) {
    Unit::define(
        base.temperature,
        &UnitDef::new("°C", 1.0)
            .with_bias(273.15)
            .with_name("celsius"),
    );
    Unit::define(
        base.temperature,
        &UnitDef::new("°F", 5.0 / 9.0)
            .with_bias(459.67)
            .with_name("fahrenheit"),
    );
    Unit::define(
        base.temperature,
        &UnitDef::new("°R", 5.0 / 9.0).with_name("rankine"),
    );
}

fn mechanical(derived: &DerivedDimensions) {
    Unit::define_family(
        derived.pressure,
        &UnitFamilyDef::new("bar").with_name("bar").with_scale(1e5),
    );
    define_all(
        derived.pressure,
        &[
            ("atm", 1.013_25e5, "atmosphere"),
            ("psi", 6_894.757, "pound-force per square inch"),
        ],
    );

    Unit::define(
        derived.energy,
        &UnitDef::new("Wh", 3_600.0).with_name("watt-hour"),
    );
    Unit::define_family(
        derived.energy,
        &UnitFamilyDef::new("eV")
            .with_name("electronvolt")
            .with_scale(1.602_176_634e-19),
    );
}

fn electrical(derived: &DerivedDimensions) {
    Unit::define(derived.conductance, &UnitDef::new("℧", 1.0).with_name("mho"));
}

fn information(base: &BaseDimensions) {
    let bytes = PrefixFamily::binary().chain(PrefixFamily::decimal());

    Unit::define_family(
        base.information,
        &UnitFamilyDef::new("B")
            .with_name("byte")
            .with_scale(8.0)
            .with_prefixes(&bytes),
    );
    Unit::define(
        base.information,
        &UnitDef::new("nibble", 4.0).with_name("nibble"),
    );
}

fn angle(base: &BaseDimensions) {
    for (symbol, scale, name) in [
        ("°", DEGREE, "degree"),
        ("′", DEGREE / 60.0, "arcminute"),
        ("″", DEGREE / 3_600.0, "arcsecond"),
    ] {
        Unit::define(
            base.plain_angle,
            &UnitDef::new(symbol, scale).with_name(name).without_space(),
        );
    }
}
