//! Result formatting

use std::fmt;

use crate::convert::Conversion;

impl fmt::Display for Conversion {
    /// `0.5 m = 50 cm   [length]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} = {} {}   [{}]",
            format_general(self.value),
            self.from_unit,
            format_general(self.result),
            self.to_unit,
            self.category
        )
    }
}

/// Shortest-form float rendering with six significant digits.
///
/// Switches to scientific notation outside the 1e-4..1e6 magnitude
/// window and drops trailing zeros, so `91.440000` prints as `91.44`
/// and `1234567` as `1.23457e+06`.
pub fn format_general(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }

    // Round to six significant digits first, then decide the notation
    // from the rounded exponent.
    let sci = format!("{:.5e}", value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return sci,
    };
    let exp: i32 = match exp.parse() {
        Ok(exp) => exp,
        Err(_) => return sci,
    };

    if exp < -4 || exp >= 6 {
        let mantissa = trim_zeros(mantissa);
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exp.abs());
    }

    let decimals = (5 - exp).max(0) as usize;
    trim_zeros(&format!("{:.*}", decimals, value)).to_string()
}

fn trim_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_values() {
        assert_eq!(format_general(0.0), "0");
        assert_eq!(format_general(1.0), "1");
        assert_eq!(format_general(-3.0), "-3");
        assert_eq!(format_general(91.44), "91.44");
        assert_eq!(format_general(0.5), "0.5");
    }

    #[test]
    fn test_six_significant_digits() {
        assert_eq!(format_general(11.023113109243879), "11.0231");
        assert_eq!(format_general(62.137119223733395), "62.1371");
        assert_eq!(format_general(3.141592653589793), "3.14159");
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(format_general(1234567.0), "1.23457e+06");
        assert_eq!(format_general(1e-9), "1e-09");
        assert_eq!(format_general(0.0001), "0.0001");
        assert_eq!(format_general(0.00001), "1e-05");
        assert_eq!(format_general(999999.0), "999999");
    }

    #[test]
    fn test_specials() {
        assert_eq!(format_general(f64::NAN), "nan");
        assert_eq!(format_general(f64::INFINITY), "inf");
        assert_eq!(format_general(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_display() {
        let conversion = Conversion {
            value: 3.0,
            from_unit: "ft".to_string(),
            to_unit: "cm".to_string(),
            category: "length".to_string(),
            result: 91.44000000000001,
        };
        assert_eq!(conversion.to_string(), "3 ft = 91.44 cm   [length]");
    }
}
