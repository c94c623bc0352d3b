//! Low-pass coefficient design via the bilinear transform with prewarping.
//!
//! The bilinear transform maps the stable half of the s-plane onto the unit
//! disk, so a stable analog prototype always yields a stable digital filter.
//! It compresses the frequency axis nonlinearly; prewarping with
//! `K = tan(pi * fc / Fs)` makes the cutoff land exactly on the requested
//! frequency. Other points of the response are not corrected.

use std::f64::consts::{PI, SQRT_2};

use crate::error::ValidationError;
use crate::types::{FilterCoefficients, FilterOrder, FilterRequest};

/// Design a low-pass filter for the given request
///
/// Validation runs in a fixed order and the first failure wins:
/// sample period, then cutoff, then the Nyquist limit.
/// The Nyquist check is strict, so a cutoff just below `Fs / 2` is accepted
/// even though `K` grows without bound there.
pub fn design(request: &FilterRequest) -> Result<FilterCoefficients, ValidationError> {
    // Negated comparisons so NaN is rejected too
    if !(request.sample_period > 0.0) {
        return Err(ValidationError::NonPositiveInterval);
    }
    if !(request.cutoff_hz > 0.0) {
        return Err(ValidationError::NonPositiveCutoff);
    }

    let sample_rate_hz = 1.0 / request.sample_period;
    let nyquist_hz = sample_rate_hz / 2.0;
    if request.cutoff_hz >= nyquist_hz {
        return Err(ValidationError::CutoffAtOrAboveNyquist {
            sample_rate_hz,
            nyquist_hz,
        });
    }

    let k = prewarp(request.cutoff_hz, sample_rate_hz);
    let taps = match request.order {
        FilterOrder::One => first_order(k),
        FilterOrder::Two => butterworth_second_order(k),
    };

    Ok(FilterCoefficients {
        order: request.order,
        n0: taps.n0,
        n1: taps.n1,
        n2: taps.n2,
        d1: taps.d1,
        d2: taps.d2,
        sample_rate_hz,
        nyquist_hz,
    })
}

/// Prewarped analog cutoff for the bilinear transform
fn prewarp(cutoff_hz: f64, sample_rate_hz: f64) -> f64 {
    (PI * (cutoff_hz / sample_rate_hz)).tan()
}

struct Taps {
    n0: f64,
    n1: f64,
    n2: f64,
    d1: f64,
    d2: f64,
}

/// H(s) = wc / (s + wc)
fn first_order(k: f64) -> Taps {
    let norm = 1.0 / (1.0 + k);
    let n0 = k * norm;

    Taps {
        n0,
        n1: n0,
        n2: 0.0,
        d1: (k - 1.0) * norm,
        d2: 0.0,
    }
}

/// H(s) = wc^2 / (s^2 + sqrt(2) wc s + wc^2)
fn butterworth_second_order(k: f64) -> Taps {
    let k2 = k * k;
    let den = 1.0 + SQRT_2 * k + k2;
    let n0 = k2 / den;

    Taps {
        n0,
        n1: 2.0 * n0,
        n2: n0,
        d1: 2.0 * (k2 - 1.0) / den,
        d2: (1.0 - SQRT_2 * k + k2) / den,
    }
}
