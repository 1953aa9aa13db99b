#![no_main]

use giorgi_unit::{NumberFormat, Quantity, Unit, UnitDef};
use libfuzzer_sys::{arbitrary, fuzz_target};
use shared::{Bounded, assert_is_close, bases};

#[derive(Debug, Clone, PartialEq, arbitrary::Arbitrary)]
struct FuzzData {
    scale: Bounded<1000>,
    bias: Bounded<10_000>,
    value: Bounded<10_000>,
}

fuzz_target!(|data: FuzzData| {
    let Bounded(scale) = data.scale;
    let Bounded(bias) = data.bias;
    let Bounded(value) = data.value;

    if scale.abs() < 1e-3 {
        return;
    }

    let unit = Unit::define(
        bases().time.dimension(),
        &UnitDef::new("t", scale).with_bias(bias),
    );

    let quantity = Quantity::of(value, &unit);
    let back = quantity.value_in(&unit).expect("the unit has the quantity's dimension");
    assert_is_close!(value, back);

    let rendered = quantity
        .to_string_in(&unit, NumberFormat::General)
        .expect("the unit has the quantity's dimension");
    assert!(rendered.ends_with(" t"), "unexpected rendering: {rendered}");
});
