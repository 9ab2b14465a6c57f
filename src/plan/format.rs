//! Number formatting for the rendered plan.
//!
//! Non-finite values are written as `Infinity`, `-Infinity` and `NaN` so a
//! degenerate plan shows the trader exactly what the arithmetic produced.

fn non_finite(x: f64) -> Option<&'static str> {
    if x.is_nan() {
        Some("NaN")
    } else if x == f64::INFINITY {
        Some("Infinity")
    } else if x == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

// Avoids "-0.00" for a negative zero.
fn positive_zero(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x
    }
}

/// Two decimal places.
pub fn fixed2(x: f64) -> String {
    match non_finite(x) {
        Some(s) => s.to_string(),
        None => format!("{:.2}", positive_zero(x)),
    }
}

/// Nearest whole unit, for share and contract counts.
pub fn whole_units(x: f64) -> String {
    match non_finite(x) {
        Some(s) => s.to_string(),
        None => format!("{:.0}", positive_zero(x.round())),
    }
}

/// A fraction shown as a percentage: 1.0 -> "100.00%".
pub fn percent(fraction: f64) -> String {
    percent_units(fraction * 100.0)
}

/// A value already in percent units: 64.7 -> "64.70%".
pub fn percent_units(pct: f64) -> String {
    format!("{}%", fixed2(pct))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_decimals() {
        assert_eq!(fixed2(10.0), "10.00");
        assert_eq!(fixed2(10.0 / 3.0), "3.33");
        assert_eq!(fixed2(-2900.0), "-2900.00");
        assert_eq!(fixed2(-0.0), "0.00");
    }

    #[test]
    fn non_finite_tokens() {
        assert_eq!(fixed2(f64::INFINITY), "Infinity");
        assert_eq!(fixed2(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(fixed2(f64::NAN), "NaN");
        assert_eq!(whole_units(f64::NAN), "NaN");
        assert_eq!(percent(f64::INFINITY), "Infinity%");
    }

    #[test]
    fn units_round_to_nearest() {
        assert_eq!(whole_units(100.0 / 3.0), "33");
        assert_eq!(whole_units(66.7), "67");
        assert_eq!(whole_units(-33.4), "-33");
        assert_eq!(whole_units(-0.2), "0");
    }

    #[test]
    fn percentages() {
        assert_eq!(percent(1.0), "100.00%");
        assert_eq!(percent(-0.5), "-50.00%");
        assert_eq!(percent_units(11.0 / 17.0 * 100.0), "64.71%");
    }
}
