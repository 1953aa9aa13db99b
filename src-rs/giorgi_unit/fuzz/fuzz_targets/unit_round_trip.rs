#![no_main]

use giorgi_unit::{Unit, UnitDef};
use libfuzzer_sys::{arbitrary, fuzz_target};
use shared::{Bounded, assert_is_close, bases};

#[derive(Debug, Clone, PartialEq, arbitrary::Arbitrary)]
struct FuzzData {
    scale: Bounded<1_000_000>,
    value: Bounded<1_000_000>,
}

fuzz_target!(|data: FuzzData| {
    let Bounded(scale) = data.scale;
    let Bounded(value) = data.value;

    if scale.abs() < 1e-6 {
        return;
    }

    let unit = Unit::define(bases().length.dimension(), &UnitDef::new("u", scale));

    let main = unit.to_main(value);
    if main != 0.0 && !main.is_normal() {
        // underflowed, the value cannot come back
        return;
    }

    assert_is_close!(value, unit.from_main(main));
});
