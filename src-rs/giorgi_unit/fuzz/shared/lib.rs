use std::sync::LazyLock;

use giorgi_unit::{BaseDimension, Dimension, DimensionMap, UnitFamilyDef};
use libfuzzer_sys::arbitrary::{self, Result, Unstructured};

#[macro_export]
macro_rules! assert_is_close {
    ($expected:expr, $actual:expr) => {
        assert!(
            giorgi_unit::util::is_close($expected, $actual),
            "expected: {}, actual: {}",
            $expected,
            $actual
        );
    };
}

pub struct Bases {
    pub length: BaseDimension,
    pub mass: BaseDimension,
    pub time: BaseDimension,
}

static BASES: LazyLock<Bases> = LazyLock::new(|| {
    let create = |name: &str, symbol: &str| {
        BaseDimension::create(name, &UnitFamilyDef::new(symbol))
            .expect("unit-scale main units are valid")
    };

    Bases {
        length: create("Length", "m"),
        mass: create("Mass", "g"),
        time: create("Time", "s"),
    }
});

pub fn bases() -> &'static Bases {
    &BASES
}

/// A float in `-limit..=limit` that is either zero or normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounded<const LIMIT: u32>(pub f64);

impl<'a, const LIMIT: u32> arbitrary::Arbitrary<'a> for Bounded<LIMIT> {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let value = u.arbitrary::<f64>()?;

        if !(value == 0.0 || value.is_normal()) || value.abs() > f64::from(LIMIT) {
            return Err(arbitrary::Error::IncorrectFormat);
        }

        Ok(Bounded(value))
    }
}

/// Exponents of the three fuzzing bases, each in `-4..=4`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponents(pub [i32; 3]);

impl<'a> arbitrary::Arbitrary<'a> for Exponents {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let mut exponents = [0; 3];
        for exponent in &mut exponents {
            *exponent = u.int_in_range(-4..=4)?;
        }
        Ok(Exponents(exponents))
    }
}

impl Exponents {
    pub fn dimension(self) -> Dimension {
        let Bases { length, mass, time } = bases();
        let [l, m, t] = self.0;
        Dimension::compose(
            DimensionMap::new([(*length, l), (*mass, m), (*time, t)])
                .expect("small exponents are in range"),
        )
    }
}
