//! Multiplicative unit prefixes and prefix families
//!
//! A [`Prefix`] is a canonical `(name, symbol, scale)` triple: asking for the
//! same triple twice returns the same instance. A [`PrefixFamily`] is an
//! ordered collection of prefixes sharing a radix, such as the SI decimal
//! prefixes or the IEC binary prefixes.

use std::{
    collections::HashMap,
    fmt,
    hash::{Hash, Hasher},
    ptr,
    sync::LazyLock,
};

use parking_lot::Mutex;

use crate::{
    UnitError,
    util::{is_close, log_radix},
};

static PREFIXES: LazyLock<Mutex<HashMap<(String, String, u64), Prefix>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

static DECIMAL: LazyLock<PrefixFamily> = LazyLock::new(|| {
    PrefixFamily::new(
        10,
        3,
        [
            ("quetta", "Q", 30),
            ("ronna", "R", 27),
            ("yotta", "Y", 24),
            ("zetta", "Z", 21),
            ("exa", "E", 18),
            ("peta", "P", 15),
            ("tera", "T", 12),
            ("giga", "G", 9),
            ("mega", "M", 6),
            ("myria", "my", 4),
            ("kilo", "k", 3),
            ("hecto", "h", 2),
            ("deca", "da", 1),
            ("", "", 0),
            ("deci", "d", -1),
            ("centi", "c", -2),
            ("milli", "m", -3),
            ("micro", "μ", -6),
            ("nano", "n", -9),
            ("pico", "p", -12),
            ("femto", "f", -15),
            ("atto", "a", -18),
            ("zepto", "z", -21),
            ("yocto", "y", -24),
            ("ronto", "r", -27),
            ("quecto", "q", -30),
        ]
        .into_iter()
        .map(|(name, symbol, exponent)| Prefix::make(name, symbol, exponent, 10)),
    )
});

static BINARY: LazyLock<PrefixFamily> = LazyLock::new(|| {
    PrefixFamily::new(
        2,
        10,
        [
            ("yobi", "Yi", 80),
            ("zebi", "Zi", 70),
            ("exbi", "Ei", 60),
            ("pebi", "Pi", 50),
            ("tebi", "Ti", 40),
            ("gibi", "Gi", 30),
            ("mebi", "Mi", 20),
            ("kibi", "Ki", 10),
            ("", "", 0),
        ]
        .into_iter()
        .map(|(name, symbol, exponent)| Prefix::make(name, symbol, exponent, 2)),
    )
});

struct PrefixData {
    name: String,
    symbol: String,
    scale: f64,
}

/// A canonical multiplicative prefix such as `kilo` (`k`, 1000).
///
/// Prefixes are compared by identity. Because [`Prefix::make`] always
/// returns the cached instance for a given triple, identity and structural
/// equality coincide.
#[derive(Clone, Copy)]
pub struct Prefix(&'static PrefixData);

impl Prefix {
    /// Returns the canonical prefix for `(name, symbol, radix^exponent)`.
    ///
    /// Prefixes live for the rest of the process, so repeated calls with an
    /// equal triple never allocate.
    #[must_use]
    pub fn make(name: &str, symbol: &str, exponent: i32, radix: u32) -> Self {
        let scale = f64::from(radix).powi(exponent);
        let key = (name.to_string(), symbol.to_string(), scale.to_bits());

        let mut prefixes = PREFIXES.lock();
        *prefixes.entry(key).or_insert_with(|| {
            tracing::trace!(name, symbol, scale, "registering prefix");
            Self(Box::leak(Box::new(PrefixData {
                name: name.to_string(),
                symbol: symbol.to_string(),
                scale,
            })))
        })
    }

    /// Returns the identity prefix, which has an empty name and symbol and a
    /// scale of 1.
    #[must_use]
    pub fn unit() -> Self {
        Self::make("", "", 0, 10)
    }

    /// Returns the name of the prefix, such as `kilo`.
    #[must_use]
    pub fn name(self) -> &'static str {
        &self.0.name
    }

    /// Returns the symbol of the prefix, such as `k`.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        &self.0.symbol
    }

    /// Returns the multiplicative scale of the prefix.
    #[must_use]
    pub const fn scale(self) -> f64 {
        self.0.scale
    }

    /// Determines if the scale of the prefix is an integer power of `radix`.
    #[must_use]
    pub fn is_power_of(self, radix: u32) -> bool {
        self.exponent_of(radix).is_ok()
    }

    /// Returns the exponent `e` such that `radix^e` is the scale of the
    /// prefix.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::NonIntegerPrefixExponent` if the scale is not an
    /// integer power of `radix`.
    pub fn exponent_of(self, radix: u32) -> Result<i32, UnitError> {
        let error = || UnitError::NonIntegerPrefixExponent {
            prefix: self.name().to_string(),
            scale: self.scale(),
            radix,
        };

        if self.scale() <= 0.0 || radix < 2 {
            return Err(error());
        }

        let exponent = log_radix(self.scale(), radix);
        let rounded = exponent.round();
        if !is_close(exponent, rounded) {
            return Err(error());
        }

        Ok(integral_exponent(rounded))
    }
}

impl PartialEq for Prefix {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.0, other.0)
    }
}

impl Eq for Prefix {}

impl Hash for Prefix {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ptr::hash(self.0, state);
    }
}

impl fmt::Debug for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prefix")
            .field("name", &self.name())
            .field("symbol", &self.symbol())
            .field("scale", &self.scale())
            .finish()
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An ordered set of prefixes that share a radix.
///
/// The `step` is the exponent distance between the prefixes that
/// [`PrefixFamily::best_fit`] chooses from: 3 for the decimal family
/// (kilo, mega, ...) and 10 for the binary family (kibi, mebi, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixFamily {
    radix: u32,
    step: i32,
    members: Vec<Prefix>,
}

impl PrefixFamily {
    /// Creates a family from its members. Duplicate members are dropped.
    pub fn new(radix: u32, step: i32, members: impl IntoIterator<Item = Prefix>) -> Self {
        let mut unique = Vec::new();
        for prefix in members {
            if !unique.contains(&prefix) {
                unique.push(prefix);
            }
        }

        Self {
            radix,
            step: step.max(1),
            members: unique,
        }
    }

    /// The SI decimal prefixes, from quecto to quetta.
    #[must_use]
    pub fn decimal() -> &'static Self {
        &DECIMAL
    }

    /// The IEC binary prefixes, from the identity prefix to yobi.
    #[must_use]
    pub fn binary() -> &'static Self {
        &BINARY
    }

    /// A family containing only the identity prefix.
    #[must_use]
    pub fn unprefixed() -> Self {
        Self::new(10, 3, [Prefix::unit()])
    }

    /// Returns a family with the members of `self` followed by the members
    /// of `other`. The radix and step of `self` are kept.
    #[must_use]
    pub fn chain(&self, other: &Self) -> Self {
        Self::new(
            self.radix,
            self.step,
            self.members.iter().chain(&other.members).copied(),
        )
    }

    /// Returns the radix of the family.
    #[must_use]
    pub const fn radix(&self) -> u32 {
        self.radix
    }

    /// Returns the exponent step used when choosing a best-fit prefix.
    #[must_use]
    pub const fn step(&self) -> i32 {
        self.step
    }

    /// Returns the members of the family in definition order.
    #[must_use]
    pub fn members(&self) -> &[Prefix] {
        &self.members
    }

    /// Iterates over the members of the family in definition order.
    pub fn iter(&self) -> impl Iterator<Item = Prefix> + '_ {
        self.members.iter().copied()
    }

    /// Finds the member with the given symbol.
    #[must_use]
    pub fn by_symbol(&self, symbol: &str) -> Option<Prefix> {
        self.iter().find(|prefix| prefix.symbol() == symbol)
    }

    /// Finds the member whose scale is `radix^exponent`.
    #[must_use]
    pub fn by_exponent(&self, exponent: i32) -> Option<Prefix> {
        self.exponents()
            .find(|(member_exponent, _)| *member_exponent == exponent)
            .map(|(_, prefix)| prefix)
    }

    /// Returns the smallest and largest exponents among the members that are
    /// integer powers of the radix.
    #[must_use]
    pub fn exponent_range(&self) -> Option<(i32, i32)> {
        self.exponents().fold(None, |range, (exponent, _)| match range {
            None => Some((exponent, exponent)),
            Some((min, max)) => Some((min.min(exponent), max.max(exponent))),
        })
    }

    /// Chooses the prefix that gives a human-friendly magnitude for `value`.
    ///
    /// The target exponent is `step * (log_radix(|value|) / step)` with the
    /// division truncated toward zero, clamped to the family's exponent
    /// range. The chosen prefix is the largest member not above the target,
    /// so `1500` picks kilo and `0.0005` picks milli.
    ///
    /// Zero and NaN have no logarithm and pick the identity prefix when the
    /// family has one. Returns `None` if no member is a power of the radix.
    #[must_use]
    pub fn best_fit(&self, value: f64) -> Option<Prefix> {
        let (min, max) = self.exponent_range()?;
        let magnitude = value.abs();

        let target = if magnitude.is_nan() || magnitude == 0.0 {
            0.clamp(min, max)
        } else if magnitude.is_infinite() {
            max
        } else {
            let log = log_radix(magnitude, self.radix);
            let log = if is_close(log, log.round()) {
                log.round()
            } else {
                log
            };
            let step = f64::from(self.step);
            integral_exponent(((log / step).trunc() * step).clamp(f64::from(min), f64::from(max)))
        };

        self.exponents()
            .filter(|(exponent, _)| *exponent <= target)
            .max_by_key(|(exponent, _)| *exponent)
            .or_else(|| self.exponents().min_by_key(|(exponent, _)| *exponent))
            .map(|(_, prefix)| prefix)
    }

    fn exponents(&self) -> impl Iterator<Item = (i32, Prefix)> + '_ {
        self.iter().filter_map(|prefix| {
            prefix
                .exponent_of(self.radix)
                .ok()
                .map(|exponent| (exponent, prefix))
        })
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "callers only pass integral values within the range of prefix exponents"
)]
const fn integral_exponent(exponent: f64) -> i32 {
    exponent as i32
}

impl<'a> IntoIterator for &'a PrefixFamily {
    type Item = Prefix;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Prefix>>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter().copied()
    }
}
