use serde::{Deserialize, Serialize};

use crate::error::LpfError;

/// Supported low-pass topologies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum FilterOrder {
    /// Single real pole
    One,
    /// Butterworth biquad (Q = 1/sqrt(2))
    Two,
}

impl FilterOrder {
    pub fn as_u8(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

impl TryFrom<u8> for FilterOrder {
    type Error = LpfError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            other => Err(LpfError::UnsupportedOrder(other)),
        }
    }
}

impl From<FilterOrder> for u8 {
    fn from(order: FilterOrder) -> Self {
        order.as_u8()
    }
}

impl std::fmt::Display for FilterOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Design inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterRequest {
    pub order: FilterOrder,
    /// Desired -3 dB cutoff in Hz
    pub cutoff_hz: f64,
    /// Sampling interval in seconds
    #[serde(alias = "ts")]
    pub sample_period: f64,
}

impl FilterRequest {
    pub fn new(order: FilterOrder, cutoff_hz: f64, sample_period: f64) -> Self {
        Self {
            order,
            cutoff_hz,
            sample_period,
        }
    }
}

/// Normalized z-domain transfer function
///
/// `H(z) = (n0 + n1 z^-1 + n2 z^-2) / (1 + d1 z^-1 + d2 z^-2)`, i.e. the recurrence
/// `y[k] = n0*x[k] + n1*x[k-1] + n2*x[k-2] - d1*y[k-1] - d2*y[k-2]`.
/// `n2` and `d2` are exactly zero for a first-order design.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterCoefficients {
    pub order: FilterOrder,
    pub n0: f64,
    pub n1: f64,
    pub n2: f64,
    pub d1: f64,
    pub d2: f64,
    pub sample_rate_hz: f64,
    pub nyquist_hz: f64,
}

impl FilterCoefficients {
    /// Feed-forward taps `[n0, n1, n2]`
    pub fn numerator(&self) -> [f64; 3] {
        [self.n0, self.n1, self.n2]
    }

    /// Feedback polynomial `[1, d1, d2]`
    pub fn denominator(&self) -> [f64; 3] {
        [1.0, self.d1, self.d2]
    }
}
