//! Fixed-precision decimal values
//!
//! Calculation outputs are reported with a fixed number of fractional
//! digits. The formatted text is the value of record: downstream steps that
//! need a number re-parse it rather than reaching for the unrounded float.

use std::fmt;

use serde::Serialize;

/// Largest power of ten an f64 holds exactly
const MAX_EXACT_DIGITS: usize = 22;

/// A decimal rendered with a fixed number of fractional digits
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Fixed(String);

impl Fixed {
    /// Render `value` with `digits` fractional digits, rounding half away
    /// from zero
    ///
    /// Rounding works on the stored binary value: 0.15 is really
    /// 0.1499999..., so it renders "0.1". Only values that sit exactly on a
    /// half (0.25, 1.125) are pushed away from zero. A result that rounds to
    /// zero is rendered unsigned ("0.0", never "-0.0").
    pub fn new(value: f64, digits: usize) -> Self {
        if !value.is_finite() {
            return Self(value.to_string());
        }

        let mut text = match exact_tie(value, digits) {
            Some(scaled) => {
                let away = scaled.trunc() + scaled.signum();
                format!("{:.*}", digits, away / 10f64.powi(digits as i32))
            }
            None => format!("{:.*}", digits, value),
        };

        if text.starts_with('-') && text[1..].bytes().all(|b| b == b'0' || b == b'.') {
            text.remove(0);
        }

        Self(text)
    }

    /// One fractional digit
    pub fn one(value: f64) -> Self {
        Self::new(value, 1)
    }

    /// Two fractional digits
    pub fn two(value: f64) -> Self {
        Self::new(value, 2)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the formatted text back into a number
    pub fn to_f64(&self) -> f64 {
        self.0.parse().unwrap_or(f64::NAN)
    }
}

/// `value * 10^digits` when that product is exact and ends in one half
///
/// `mul_add` recovers the rounding error of the product, so a non-zero
/// residue means the stored value is not on a decimal tie.
fn exact_tie(value: f64, digits: usize) -> Option<f64> {
    if digits > MAX_EXACT_DIGITS {
        return None;
    }

    let scale = 10f64.powi(digits as i32);
    let scaled = value * scale;
    if !scaled.is_finite() || value.mul_add(scale, -scaled) != 0.0 {
        return None;
    }

    (scaled.fract().abs() == 0.5).then_some(scaled)
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_digits() {
        assert_eq!(Fixed::one(1.0).as_str(), "1.0");
        assert_eq!(Fixed::one(960.0).as_str(), "960.0");
        assert_eq!(Fixed::two(800.0 / 480.0).as_str(), "1.67");
        assert_eq!(Fixed::two(640.0 / 480.0).as_str(), "1.33");
        assert_eq!(Fixed::two(0.0).as_str(), "0.00");
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        assert_eq!(Fixed::one(0.25).as_str(), "0.3");
        assert_eq!(Fixed::one(2.5 / 2.0).as_str(), "1.3");
        assert_eq!(Fixed::one(-0.25).as_str(), "-0.3");
    }

    #[test]
    fn test_rounds_stored_value_not_scaled_value() {
        // 0.15 is stored below the half, 0.35 above it
        assert_eq!(Fixed::one(0.3 / 2.0).as_str(), "0.1");
        assert_eq!(Fixed::one(0.35).as_str(), "0.3");
        assert_eq!(Fixed::two(1.005).as_str(), "1.00");
        assert_eq!(Fixed::two(1.125).as_str(), "1.13");
    }

    #[test]
    fn test_large_values_do_not_overflow() {
        let value = Fixed::one(5e307);
        assert_ne!(value.as_str(), "inf");
        assert!(value.as_str().ends_with(".0"));
        assert_eq!(value.to_f64(), 5e307);
    }

    #[test]
    fn test_negative_zero_is_unsigned() {
        assert_eq!(Fixed::one(-0.04).as_str(), "0.0");
        assert_eq!(Fixed::two(-0.0).as_str(), "0.00");
    }

    #[test]
    fn test_to_f64_reparses_rounded_text() {
        let value = Fixed::one(123.456);
        assert_eq!(value.as_str(), "123.5");
        assert_eq!(value.to_f64(), 123.5);
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&Fixed::one(4.0)).unwrap();
        assert_eq!(json, "\"4.0\"");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(Fixed::one(f64::INFINITY).as_str(), "inf");
        assert!(Fixed::one(f64::NAN).to_f64().is_nan());
    }
}
