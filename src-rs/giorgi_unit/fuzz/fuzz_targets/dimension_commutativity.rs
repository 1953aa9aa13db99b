#![no_main]

use giorgi_unit::Dimension;
use libfuzzer_sys::{arbitrary, fuzz_target};
use shared::Exponents;

#[derive(Debug, Clone, PartialEq, arbitrary::Arbitrary)]
struct FuzzData {
    a: Exponents,
    b: Exponents,
    power: i8,
}

fuzz_target!(|data: FuzzData| {
    let a = data.a.dimension();
    let b = data.b.dimension();

    assert_eq!(a * b, b * a, "multiplication is not commutative");
    assert_eq!(
        a / b,
        (b / a).and_then(Dimension::invert),
        "division is not anti-commutative"
    );
    assert!(
        a.invert()
            .and_then(|inverse| a * inverse)
            .is_ok_and(Dimension::is_dimensionless),
        "a * 1/a has a dimension"
    );

    let power = i32::from(data.power % 4);
    let repeated = (0..power.abs()).try_fold(Dimension::dimensionless(), |product, _| product * a);
    let expected = if power < 0 {
        repeated.and_then(Dimension::invert)
    } else {
        repeated
    };
    assert_eq!(a.power(power), expected, "power disagrees with repeated multiplication");
});
