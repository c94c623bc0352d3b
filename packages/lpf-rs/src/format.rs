//! Copy-friendly rendering of designed coefficients.
//!
//! Values are printed with 17 significant digits so that every finite `f64`
//! survives a round trip through its text form.

use crate::types::{FilterCoefficients, FilterOrder, FilterRequest};

/// Significant digits needed to round-trip an `f64`
pub const SIGNIFICANT_DIGITS: usize = 17;

/// Format a value with 17 significant digits, trailing zeros trimmed
///
/// Uses fixed notation for decimal exponents in `-6..17` and exponential
/// notation (`9.9999999999999995e-8`, `1.2345678901234568e+17`) otherwise.
/// Non-finite values render as `NaN`.
pub fn format_value(x: f64) -> String {
    if !x.is_finite() {
        return "NaN".to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }

    // `{:.16e}` rounds to 17 significant digits; its exponent reflects any carry
    let sci = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, x);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exponent < -6 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, x)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Summary line, e.g. `10 Hz LPF (order 2) with Ts = 0.01 s (Fs = 100 Hz)`
pub fn title(request: &FilterRequest, coeffs: &FilterCoefficients) -> String {
    format!(
        "{} Hz LPF (order {}) with Ts = {} s (Fs = {} Hz)",
        format_value(request.cutoff_hz),
        coeffs.order,
        format_value(request.sample_period),
        format_value(coeffs.sample_rate_hz)
    )
}

/// The five coefficients as a paste-ready block
pub fn coefficient_block(coeffs: &FilterCoefficients) -> String {
    format!(
        "N0 = {},\nN1 = {},\nN2 = {},\nD1 = {},\nD2 = {}",
        format_value(coeffs.n0),
        format_value(coeffs.n1),
        format_value(coeffs.n2),
        format_value(coeffs.d1),
        format_value(coeffs.d2)
    )
}

/// Difference equation the coefficients plug into
pub fn recurrence(coeffs: &FilterCoefficients) -> &'static str {
    match coeffs.order {
        FilterOrder::One => "y[k] = N0*x[k] + N1*x[k-1] - D1*y[k-1]",
        FilterOrder::Two => {
            "y[k] = N0*x[k] + N1*x[k-1] + N2*x[k-2] - D1*y[k-1] - D2*y[k-2]"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::designer::design;

    #[test]
    fn test_format_fixed_notation() {
        assert_eq!(format_value(0.5), "0.5");
        assert_eq!(format_value(100.0), "100");
        assert_eq!(format_value(0.1), "0.10000000000000001");
        assert_eq!(format_value(1.0 / 3.0), "0.33333333333333331");
        assert_eq!(format_value(-0.5095254494944288), "-0.50952544949442879");
        assert_eq!(format_value(0.01), "0.01");
    }

    #[test]
    fn test_format_keeps_integral_zeros() {
        assert_eq!(format_value(1e16), "10000000000000000");
        assert_eq!(format_value(1000.0), "1000");
    }

    #[test]
    fn test_format_exponential_notation() {
        assert_eq!(format_value(1e-7), "9.9999999999999995e-8");
        assert_eq!(format_value(1e17), "1e+17");
        assert_eq!(format_value(123456789012345678.0), "1.2345678901234568e+17");
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(format_value(f64::NAN), "NaN");
        assert_eq!(format_value(f64::INFINITY), "NaN");
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(-0.0), "0");
    }

    #[test]
    fn test_format_round_trips() {
        let values = [
            0.24523727525278557,
            -1.1429805025399011,
            6.02214076e23,
            1.0e-300,
            std::f64::consts::PI,
            66666666.66666667,
        ];
        for v in values {
            let parsed: f64 = format_value(v).parse().unwrap();
            assert_eq!(parsed.to_bits(), v.to_bits(), "value {}", v);
        }
    }

    #[test]
    fn test_title_and_block() {
        let request = FilterRequest::new(FilterOrder::One, 10.0, 0.01);
        let coeffs = design(&request).unwrap();

        assert_eq!(
            title(&request, &coeffs),
            "10 Hz LPF (order 1) with Ts = 0.01 s (Fs = 100 Hz)"
        );

        let block = coefficient_block(&coeffs);
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("N0 = 0.2452372752527"));
        assert_eq!(lines[2], "N2 = 0,");
        assert_eq!(lines[4], "D2 = 0");
    }

    #[test]
    fn test_recurrence_matches_order() {
        let first = design(&FilterRequest::new(FilterOrder::One, 1.0, 0.1)).unwrap();
        let second = design(&FilterRequest::new(FilterOrder::Two, 1.0, 0.1)).unwrap();
        assert!(!recurrence(&first).contains("x[k-2]"));
        assert!(recurrence(&second).contains("D2*y[k-2]"));
    }
}
