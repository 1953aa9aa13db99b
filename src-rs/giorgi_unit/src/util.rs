//! Utility functions shared by the unit modules

const TOLERANCE: f64 = 1e-10;
const RELATIVE_TOLERANCE: f64 = 1e-9;

/// Checks if two floating point numbers are close to each other.
///
/// Two values are close if their difference is within a relative tolerance
/// of the smaller magnitude or within an absolute tolerance. Both tolerances
/// are fixed at 1e-10.
#[must_use]
pub const fn is_close(a: f64, b: f64) -> bool {
    #[expect(
        clippy::float_cmp,
        reason = "this is a part of implementing better floating point comparison"
    )]
    if a == b {
        return true;
    }

    if a.is_infinite() || b.is_infinite() {
        return false;
    }

    if a.is_nan() || b.is_nan() {
        return false;
    }

    let difference = (a - b).abs();
    let relative_tolerance = TOLERANCE * f64::min(a.abs(), b.abs());
    let absolute_tolerance = TOLERANCE;

    difference <= relative_tolerance || difference <= absolute_tolerance
}

/// Checks if two measured values agree up to a relative tolerance of 1e-9.
///
/// There is no absolute tolerance, so magnitudes far below 1 (picoseconds,
/// electronvolts in joules) still compare by their leading digits, and only
/// an exact zero equals zero.
#[must_use]
pub const fn is_relatively_close(a: f64, b: f64) -> bool {
    #[expect(
        clippy::float_cmp,
        reason = "exact equality short-circuits the tolerance check"
    )]
    if a == b {
        return true;
    }

    if !a.is_finite() || !b.is_finite() {
        return false;
    }

    (a - b).abs() <= RELATIVE_TOLERANCE * f64::max(a.abs(), b.abs())
}

/// Renders an exponent as superscript digits.
///
/// An exponent of 1 renders as the empty string, so `m` stays `m` while
/// `m` squared becomes `m²`.
#[must_use]
pub fn exponent_superscript(exponent: i32) -> String {
    if exponent == 1 {
        return String::new();
    }

    exponent
        .to_string()
        .chars()
        .map(|c| match c {
            '-' => '⁻',
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            other => other,
        })
        .collect()
}

/// Returns the logarithm of `value` in the given radix.
///
/// Radix 10 and 2 use the dedicated functions so that exact powers produce
/// exact results.
pub(crate) fn log_radix(value: f64, radix: u32) -> f64 {
    match radix {
        10 => value.log10(),
        2 => value.log2(),
        radix => value.log(f64::from(radix)),
    }
}
