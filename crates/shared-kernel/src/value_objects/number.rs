// crates/shared-kernel/src/value_objects/number.rs
use std::{
    cmp::Ordering,
    fmt,
    ops::AddAssign,
    str::FromStr,
};

use serde::Serialize;
use thiserror::Error;

/// Values outside `[LOWER_PLAIN, UPPER_PLAIN)` are rendered with an exponent.
const LOWER_PLAIN: f64 = 1e-4;
const UPPER_PLAIN: f64 = 1e16;

/// Numeric value held by an aggregate-role column.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Number(f64);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot interpret {input:?} as a number")]
pub struct ParseNumberError {
    pub input: String,
}

impl Number {
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Parse a textual cell. Surrounding ASCII whitespace is ignored; `inf` and `nan` are accepted.
    pub fn parse(raw: &str) -> Result<Self, ParseNumberError> {
        let trimmed = raw.trim_matches(|c: char| c.is_ascii_whitespace());
        if trimmed.is_empty() {
            return Err(ParseNumberError { input: raw.to_string() });
        }
        trimmed
            .parse::<f64>()
            .map(Self)
            .map_err(|_| ParseNumberError { input: raw.to_string() })
    }

    /// Keep the smaller value. A NaN already stored is never replaced.
    #[inline]
    pub fn keep_min(&mut self, candidate: Self) {
        if candidate.0 < self.0 {
            self.0 = candidate.0;
        }
    }

    /// Keep the larger value. A NaN already stored is never replaced.
    #[inline]
    pub fn keep_max(&mut self, candidate: Self) {
        if candidate.0 > self.0 {
            self.0 = candidate.0;
        }
    }

    /// Total ordering used for sorting: numeric order, with NaN after every number.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.0.partial_cmp(&other.0).unwrap_or_else(|| match (self.0.is_nan(), other.0.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.0.total_cmp(&other.0),
        })
    }
}

impl FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Number> for f64 {
    fn from(value: Number) -> Self {
        value.0
    }
}

impl AddAssign for Number {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

/// Shortest round-trip decimal that always shows a fractional part
/// (`40.0`, `0.1`), switching to `1e+16` / `1e-05` style at the extremes.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            return f.write_str("nan");
        }
        if v.is_infinite() {
            return f.write_str(if v > 0.0 { "inf" } else { "-inf" });
        }

        let magnitude = v.abs();
        if magnitude == 0.0 || (LOWER_PLAIN..UPPER_PLAIN).contains(&magnitude) {
            return write!(f, "{v:?}");
        }

        let scientific = format!("{v:e}");
        let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        write!(f, "{mantissa}e{sign}{digits:0>2}")
    }
}
