use std::fmt;

use crate::{error::ValueError, numeric::Numeric};

/// Suffix appended to every temperature in the reports.
pub const DEGREE_SYMBOL: &str = "\u{b0}C";

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Fahrenheit(pub f64);

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Celsius(pub f64);

impl From<Fahrenheit> for Celsius {
    fn from(value: Fahrenheit) -> Self {
        Celsius((value.0 - 32.0) / 1.8)
    }
}

impl Celsius {
    /// Rounded to one decimal place, exact ties going to the even digit.
    pub fn rounded(self) -> Self {
        Celsius(round_to_tenth(self.0))
    }
}

/// Always one decimal digit, so `10.0` stays `10.0`.
impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

// `{:.1}` rounds the exact binary value, ties to even: 0.25 gives 0.2, and
// 2.35 (stored as 2.35000000000000008) gives 2.4.
fn round_to_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

/// Fahrenheit to Celsius, rounded to one decimal place.
pub fn convert_f_to_c(fahrenheit: impl Numeric) -> Result<f64, ValueError> {
    let fahrenheit = Fahrenheit(fahrenheit.to_f64()?);
    Ok(Celsius::from(fahrenheit).rounded().0)
}

/// Append the degree Celsius suffix. No conversion nor rounding happens here.
///
/// The value is rendered with its own `Display`, so a bare `f64` loses its
/// trailing `.0` (`10.0` gives `10°C`). Wrap it in [`Celsius`] to always
/// keep one decimal digit, as the reports do.
pub fn format_temperature(temp: impl fmt::Display) -> String {
    format!("{temp}{DEGREE_SYMBOL}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_points() {
        assert_eq!(convert_f_to_c(32).unwrap(), 0.0);
        assert_eq!(convert_f_to_c(-40).unwrap(), -40.0);
        assert_eq!(convert_f_to_c(212).unwrap(), 100.0);
    }

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(convert_f_to_c(47).unwrap(), 8.3);
        assert_eq!(convert_f_to_c(36).unwrap(), 2.2);
        assert_eq!(convert_f_to_c(39).unwrap(), 3.9);
        assert_eq!(convert_f_to_c("90.5").unwrap(), 32.5);
        assert_eq!(convert_f_to_c(" 50 ").unwrap(), 10.0);
    }

    #[test]
    fn ties_go_to_even() {
        assert_eq!(round_to_tenth(0.25), 0.2);
        assert_eq!(round_to_tenth(0.75), 0.8);
        assert_eq!(round_to_tenth(-0.25), -0.2);
        // Not a tie once stored as binary.
        assert_eq!(round_to_tenth(2.35), 2.4);
    }

    #[test]
    fn non_numeric_input() {
        assert!(matches!(
            convert_f_to_c("warm"),
            Err(ValueError::NotNumeric(_))
        ));
    }

    #[test]
    fn formatting() {
        assert_eq!(format_temperature(10), "10°C");
        assert_eq!(format_temperature(-3.5), "-3.5°C");
        assert_eq!(format_temperature(10.0), "10°C");
        assert_eq!(format_temperature(Celsius(10.0)), "10.0°C");
        assert_eq!(format_temperature(Celsius(-0.5)), "-0.5°C");
        assert_eq!(format_temperature("12"), "12°C");
    }
}
