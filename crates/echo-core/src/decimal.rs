//! # Exact Decimals
//!
//! Areas, loads, coordinates and carbon factors are constrained on their
//! decimal representation (e.g. "at most two fractional digits"), which a
//! binary `f64` cannot answer reliably. [`Decimal`] wraps
//! `rust_decimal::Decimal` and is parsed from the shortest textual form of
//! the incoming JSON number, so `12.34` has scale 2 and `90.0001` compares
//! strictly greater than `90`.
//!
//! Input finer than 28 fractional digits is rounded to that scale, so
//! `1e-30` reads as zero. Magnitudes above about 7.9e28 cannot be held and
//! are reported as [`Reading::TooLarge`] rather than as non-numbers.
//!
//! ## Wire format
//!
//! Payloads carry decimals as JSON numbers or numeric strings. A value
//! serializes back as a JSON number whenever the `f64` rendering reproduces
//! it exactly, and as a string otherwise, so re-validating a serialized
//! record never loses precision.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::constraint::Range;
use crate::error::EchoError;

/// An exact base-10 number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal(rust_decimal::Decimal);

/// Most fractional digits a [`Decimal`] can hold.
pub const MAX_SCALE: u32 = 28;

/// Outcome of reading untrusted input as a decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    /// The value, exactly as written.
    Exact(Decimal),
    /// The value rounded half away from zero to [`MAX_SCALE`] digits.
    Rounded(Decimal),
    /// Numeric, but beyond the largest representable magnitude (about 7.9e28).
    TooLarge {
        /// Sign of the rejected value.
        negative: bool,
    },
    /// Not a number at all.
    NotNumeric,
}

impl Reading {
    /// The decimal, whether exact or rounded.
    pub fn value(self) -> Option<Decimal> {
        match self {
            Reading::Exact(d) | Reading::Rounded(d) => Some(d),
            Reading::TooLarge { .. } | Reading::NotNumeric => None,
        }
    }
}

impl Decimal {
    /// Parse plain (`"12.50"`) or scientific (`"1.2e3"`) notation. Digits
    /// beyond [`MAX_SCALE`] are rounded away.
    ///
    /// # Errors
    ///
    /// Returns `EchoError::UnknownValue` with domain `"decimal"` if the text
    /// is not a number or its magnitude is not representable.
    pub fn parse(s: &str) -> Result<Self, EchoError> {
        Self::read(s).value().ok_or_else(|| EchoError::UnknownValue {
            domain: "decimal",
            value: s.to_string(),
        })
    }

    /// Classify numeric text.
    pub fn read(s: &str) -> Reading {
        let Some(text) = NumericText::split(s) else {
            return Reading::NotNumeric;
        };
        let exact = if s.contains(['e', 'E']) {
            rust_decimal::Decimal::from_scientific(s)
        } else {
            rust_decimal::Decimal::from_str(s)
        };
        match exact {
            Ok(d) => Reading::Exact(Self(d)),
            Err(_) => text.round_to_max_scale(),
        }
    }

    /// Classify a JSON number or numeric string.
    pub fn read_json(value: &Value) -> Reading {
        match value {
            Value::Number(n) => Self::read(&n.to_string()),
            Value::String(s) => Self::read(s),
            _ => Reading::NotNumeric,
        }
    }

    /// Read a decimal from a JSON number or numeric string.
    pub fn from_json(value: &Value) -> Option<Self> {
        Self::read_json(value).value()
    }

    /// Number of digits after the decimal point, ignoring trailing zeros.
    pub fn scale(&self) -> u32 {
        self.0.normalize().scale()
    }

    /// Returns true if the value lies within `range`.
    pub fn within(&self, range: &Range) -> bool {
        let lower_ok = match range.min {
            None => true,
            Some(b) if b.inclusive => self.0 >= rust_decimal::Decimal::from(b.limit),
            Some(b) => self.0 > rust_decimal::Decimal::from(b.limit),
        };
        let upper_ok = match range.max {
            None => true,
            Some(b) if b.inclusive => self.0 <= rust_decimal::Decimal::from(b.limit),
            Some(b) => self.0 < rust_decimal::Decimal::from(b.limit),
        };
        lower_ok && upper_ok
    }

    /// Nearest `f64`, if representable.
    pub fn to_f64(&self) -> Option<f64> {
        self.0.to_f64()
    }

    /// Access the wrapped `rust_decimal::Decimal`.
    pub fn as_inner(&self) -> &rust_decimal::Decimal {
        &self.0
    }

    /// The `f64` form, but only when it renders back to exactly this value.
    fn lossless_f64(&self) -> Option<f64> {
        let f = self.to_f64()?;
        let back = Self::parse(&f.to_string()).ok()?;
        (back.0.normalize() == self.0.normalize()).then_some(f)
    }
}

/// Numeric text split into sign, digits and exponent. Accepts
/// `-?D+(.D+)?([eE][+-]?D+)?`.
struct NumericText<'a> {
    negative: bool,
    int: &'a str,
    frac: &'a str,
    exponent: i64,
}

impl<'a> NumericText<'a> {
    fn split(s: &'a str) -> Option<Self> {
        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (mantissa, exponent) = match rest.find(['e', 'E']) {
            Some(i) => (&rest[..i], rest[i + 1..].parse::<i64>().ok()?),
            None => (rest, 0),
        };
        let (int, frac) = match mantissa.split_once('.') {
            Some((int, frac)) if !frac.is_empty() => (int, frac),
            Some(_) => return None,
            None => (mantissa, ""),
        };
        let all_digits = |t: &str| t.bytes().all(|b| b.is_ascii_digit());
        if int.is_empty() || !all_digits(int) || !all_digits(frac) {
            return None;
        }
        Some(Self {
            negative,
            int,
            frac,
            exponent,
        })
    }

    /// Exact value when it fits, otherwise rounded half away from zero to
    /// at most [`MAX_SCALE`] fractional and 28 significant digits.
    fn round_to_max_scale(&self) -> Reading {
        const MAX_DIGITS: usize = 28;

        let mut digits: Vec<u8> = self
            .int
            .bytes()
            .chain(self.frac.bytes())
            .skip_while(|b| *b == b'0')
            .map(|b| b - b'0')
            .collect();
        // Value is digits * 10^exponent.
        let Some(mut exponent) = self.exponent.checked_sub(self.frac.len() as i64) else {
            return Reading::NotNumeric;
        };
        if digits.is_empty() {
            return Reading::Exact(Decimal(rust_decimal::Decimal::ZERO));
        }
        if digits.len() as i64 + exponent > MAX_DIGITS as i64 + 1 {
            return Reading::TooLarge {
                negative: self.negative,
            };
        }

        let below_scale = (-(MAX_SCALE as i64) - exponent).max(0) as usize;
        let beyond_precision = digits.len().saturating_sub(MAX_DIGITS);
        let drop = below_scale.max(beyond_precision);
        if drop > 0 {
            let round_up = drop <= digits.len() && digits[digits.len() - drop] >= 5;
            digits.truncate(digits.len().saturating_sub(drop));
            exponent += drop as i64;
            if round_up {
                increment(&mut digits);
            }
        }

        let mut text = String::with_capacity(digits.len() + 32);
        if self.negative {
            text.push('-');
        }
        let body: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        if body.is_empty() {
            text.push('0');
        } else if exponent >= 0 {
            text.push_str(&body);
            text.extend(std::iter::repeat('0').take(exponent as usize));
        } else {
            let scale = exponent.unsigned_abs() as usize;
            if body.len() <= scale {
                text.push_str("0.");
                text.extend(std::iter::repeat('0').take(scale - body.len()));
                text.push_str(&body);
            } else {
                let (int, frac) = body.split_at(body.len() - scale);
                text.push_str(int);
                text.push('.');
                text.push_str(frac);
            }
        }

        match rust_decimal::Decimal::from_str(&text) {
            Ok(d) if drop > 0 => Reading::Rounded(Decimal(d)),
            Ok(d) => Reading::Exact(Decimal(d)),
            Err(_) => Reading::TooLarge {
                negative: self.negative,
            },
        }
    }
}

/// Add one unit in the last place.
fn increment(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, 1);
}

impl From<rust_decimal::Decimal> for Decimal {
    fn from(inner: rust_decimal::Decimal) -> Self {
        Self(inner)
    }
}

impl FromStr for Decimal {
    type Err = EchoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.scale() == 0 {
            if let Some(i) = self.0.to_i64() {
                return serializer.serialize_i64(i);
            }
        }
        match self.lossless_f64() {
            Some(f) => serializer.serialize_f64(f),
            None => serializer.serialize_str(&self.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DecimalVisitor)
    }
}

struct DecimalVisitor;

impl<'de> Visitor<'de> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal number or numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
        Ok(Decimal(rust_decimal::Decimal::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
        Ok(Decimal(rust_decimal::Decimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decimal, E> {
        Decimal::parse(&v.to_string()).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
        Decimal::parse(v).map_err(E::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scale_ignores_trailing_zeros() {
        assert_eq!(Decimal::parse("12.50").unwrap().scale(), 1);
        assert_eq!(Decimal::parse("12.345").unwrap().scale(), 3);
        assert_eq!(Decimal::parse("100").unwrap().scale(), 0);
    }

    #[test]
    fn test_from_json_number_uses_shortest_form() {
        let d = Decimal::from_json(&json!(90.0001)).unwrap();
        assert_eq!(d.to_string(), "90.0001");
        assert!(!d.within(&Range::closed(-90, 90)));
        let edge = Decimal::from_json(&json!(90)).unwrap();
        assert!(edge.within(&Range::closed(-90, 90)));
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(Decimal::parse("1.5e2").unwrap().to_string(), "150");
        assert!(Decimal::parse("abc").is_err());
    }

    #[test]
    fn test_from_json_rejects_non_numbers() {
        assert!(Decimal::from_json(&json!(true)).is_none());
        assert!(Decimal::from_json(&json!("twelve")).is_none());
        assert_eq!(Decimal::from_json(&json!("12.5")).unwrap().to_string(), "12.5");
    }

    #[test]
    fn test_tiny_values_round_to_max_scale() {
        let zero = Decimal::read("1e-30").value().unwrap();
        assert_eq!(zero.to_string(), "0");
        assert!(zero.within(&Range::closed(-90, 90)));

        let reading = Decimal::read("5e-29");
        assert!(matches!(reading, Reading::Rounded(_)));
        assert_eq!(
            reading.value().unwrap().to_string(),
            "0.0000000000000000000000000001"
        );

        let long = Decimal::read("0.123456789012345678901234567891").value().unwrap();
        assert!(long.scale() <= MAX_SCALE);
        assert!(long.within(&Range::left_open(0, 1)));
    }

    #[test]
    fn test_huge_values_are_too_large_not_non_numeric() {
        assert_eq!(Decimal::read("1e300"), Reading::TooLarge { negative: false });
        assert_eq!(Decimal::read("-1e+300"), Reading::TooLarge { negative: true });
        assert_eq!(
            Decimal::read("100000000000000000000000000000000"),
            Reading::TooLarge { negative: false }
        );
        assert_eq!(
            Decimal::read_json(&json!(1e300)),
            Reading::TooLarge { negative: false }
        );
        assert!(Decimal::parse("1e300").is_err());
    }

    #[test]
    fn test_numeric_grammar() {
        for text in ["12", "-12.5", "1.5e2", "1E-3", "0.001"] {
            assert!(Decimal::read(text).value().is_some(), "{text}");
        }
        for text in ["", "-", "1.", ".5", "1_000", " 12", "1e", "twelve", "0x10"] {
            assert_eq!(Decimal::read(text), Reading::NotNumeric, "{text:?}");
        }
        assert_eq!(Decimal::read_json(&json!(true)), Reading::NotNumeric);
    }

    #[test]
    fn test_serializes_as_number_when_lossless() {
        let d = Decimal::parse("1250.75").unwrap();
        assert_eq!(serde_json::to_value(d).unwrap(), json!(1250.75));
        let whole = Decimal::parse("48000").unwrap();
        assert_eq!(serde_json::to_value(whole).unwrap(), json!(48000));
    }

    #[test]
    fn test_serializes_as_string_when_f64_would_round() {
        let d = Decimal::parse("0.1234567890123456789").unwrap();
        assert_eq!(
            serde_json::to_value(d).unwrap(),
            json!("0.1234567890123456789")
        );
    }

    #[test]
    fn test_deserialize_number_or_string() {
        let a: Decimal = serde_json::from_value(json!(3.25)).unwrap();
        let b: Decimal = serde_json::from_value(json!("3.25")).unwrap();
        let c: Decimal = serde_json::from_value(json!(7)).unwrap();
        assert_eq!(a, b);
        assert_eq!(c.to_string(), "7");
        assert!(serde_json::from_value::<Decimal>(json!([1])).is_err());
    }
}
