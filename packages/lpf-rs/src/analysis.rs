//! Analytic evaluation of a designed transfer function.
//!
//! Nothing here filters a signal; the functions evaluate `H(z)` directly
//! from the coefficients.

use nalgebra::Complex;
use serde::Serialize;
use std::f64::consts::PI;

use crate::types::{FilterCoefficients, FilterOrder};

/// Response of a filter at one frequency
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResponsePoint {
    pub frequency_hz: f64,
    pub magnitude: f64,
    pub magnitude_db: f64,
    pub phase_rad: f64,
}

/// Evaluate `H(z)` at an arbitrary point of the z-plane
pub fn transfer_at(coeffs: &FilterCoefficients, z: Complex<f64>) -> Complex<f64> {
    let z1 = z.inv();
    let z2 = z1 * z1;
    let num = z1 * coeffs.n1 + z2 * coeffs.n2 + coeffs.n0;
    let den = z1 * coeffs.d1 + z2 * coeffs.d2 + 1.0;
    num / den
}

/// Steady-state gain, `H(1)`
pub fn dc_gain(coeffs: &FilterCoefficients) -> f64 {
    let [n0, n1, n2] = coeffs.numerator();
    let [one, d1, d2] = coeffs.denominator();
    (n0 + n1 + n2) / (one + d1 + d2)
}

/// Complex response on the unit circle at `frequency_hz`
pub fn frequency_response(coeffs: &FilterCoefficients, frequency_hz: f64) -> Complex<f64> {
    let omega = 2.0 * PI * frequency_hz / coeffs.sample_rate_hz;
    transfer_at(coeffs, Complex::from_polar(1.0, omega))
}

pub fn response_point(coeffs: &FilterCoefficients, frequency_hz: f64) -> ResponsePoint {
    let h = frequency_response(coeffs, frequency_hz);
    let magnitude = h.norm();

    ResponsePoint {
        frequency_hz,
        magnitude,
        magnitude_db: 20.0 * magnitude.log10(),
        phase_rad: h.arg(),
    }
}

/// Roots of the denominator polynomial `z^2 + d1 z + d2` (or `z + d1`)
pub fn poles(coeffs: &FilterCoefficients) -> Vec<Complex<f64>> {
    match coeffs.order {
        FilterOrder::One => vec![Complex::new(-coeffs.d1, 0.0)],
        FilterOrder::Two => {
            let disc = Complex::new(coeffs.d1 * coeffs.d1 - 4.0 * coeffs.d2, 0.0).sqrt();
            let b = Complex::new(-coeffs.d1, 0.0);
            vec![(b + disc) * 0.5, (b - disc) * 0.5]
        }
    }
}

/// Stability triangle test on the denominator
///
/// First order: `|d1| < 1`. Second order: `|d2| < 1` and `|d1| < 1 + d2`.
pub fn is_stable(coeffs: &FilterCoefficients) -> bool {
    match coeffs.order {
        FilterOrder::One => coeffs.d1.abs() < 1.0,
        FilterOrder::Two => coeffs.d2.abs() < 1.0 && coeffs.d1.abs() < 1.0 + coeffs.d2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::designer::design;
    use crate::types::FilterRequest;

    fn coeffs(order: FilterOrder, cutoff_hz: f64, sample_period: f64) -> FilterCoefficients {
        design(&FilterRequest::new(order, cutoff_hz, sample_period)).unwrap()
    }

    #[test]
    fn test_dc_gain_is_unity() {
        for order in [FilterOrder::One, FilterOrder::Two] {
            let c = coeffs(order, 50.0, 1.0 / 1000.0);
            assert!((dc_gain(&c) - 1.0).abs() < 1e-12);
            assert!((frequency_response(&c, 0.0).norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_nyquist_is_a_zero() {
        for order in [FilterOrder::One, FilterOrder::Two] {
            let c = coeffs(order, 50.0, 1.0 / 1000.0);
            assert!(frequency_response(&c, c.nyquist_hz).norm() < 1e-9);
        }
    }

    #[test]
    fn test_cutoff_is_half_power() {
        let c = coeffs(FilterOrder::Two, 1000.0, 1.0 / 48000.0);
        let point = response_point(&c, 1000.0);
        assert!((point.magnitude - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-9);
        assert!((point.magnitude_db + 3.0103).abs() < 1e-3);
    }

    #[test]
    fn test_first_order_pole() {
        let c = coeffs(FilterOrder::One, 10.0, 0.01);
        let p = poles(&c);
        assert_eq!(p.len(), 1);
        assert!((p[0].re + c.d1).abs() < 1e-15);
        assert_eq!(p[0].im, 0.0);
    }

    #[test]
    fn test_butterworth_poles_are_conjugate() {
        let c = coeffs(FilterOrder::Two, 10.0, 0.01);
        let p = poles(&c);
        assert_eq!(p.len(), 2);
        assert!((p[0].re - p[1].re).abs() < 1e-12);
        assert!((p[0].im + p[1].im).abs() < 1e-12);
        // Product of the roots equals d2
        assert!(((p[0] * p[1]).re - c.d2).abs() < 1e-12);
    }

    #[test]
    fn test_stability_rejects_outside_triangle() {
        let mut c = coeffs(FilterOrder::Two, 10.0, 0.01);
        assert!(is_stable(&c));
        c.d2 = 1.2;
        assert!(!is_stable(&c));

        let mut c = coeffs(FilterOrder::One, 10.0, 0.01);
        c.d1 = -1.0;
        assert!(!is_stable(&c));
    }
}
