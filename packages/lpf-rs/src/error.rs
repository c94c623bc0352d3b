use serde::Serialize;
use thiserror::Error;

use crate::format::format_value;

/// Rejected design inputs. Every variant is recoverable: fix the input and call again.
#[derive(Error, Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Sample period must be greater than zero (Ts > 0).")]
    NonPositiveInterval,

    #[error("Cutoff frequency must be greater than zero.")]
    NonPositiveCutoff,

    #[error(
        "Cutoff must be below Nyquist (Fs/2). Your Fs = {} Hz so Nyquist = {} Hz.",
        hz(.sample_rate_hz),
        hz(.nyquist_hz)
    )]
    CutoffAtOrAboveNyquist { sample_rate_hz: f64, nyquist_hz: f64 },
}

#[derive(Error, Debug)]
pub enum LpfError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Unsupported filter order {0}: expected 1 or 2")]
    UnsupportedOrder(u8),

    #[error("Failed to parse filter requests: {0}")]
    ParseError(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LpfError>;

fn hz(value: &f64) -> String {
    format_value(*value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nyquist_message_uses_display_precision() {
        let err = ValidationError::CutoffAtOrAboveNyquist {
            sample_rate_hz: 1.0,
            nyquist_hz: 0.5,
        };
        assert_eq!(
            err.to_string(),
            "Cutoff must be below Nyquist (Fs/2). Your Fs = 1 Hz so Nyquist = 0.5 Hz."
        );
    }

    #[test]
    fn test_validation_error_serializes_with_kind_tag() {
        let json = serde_json::to_value(ValidationError::NonPositiveCutoff).unwrap();
        assert_eq!(json["kind"], "non_positive_cutoff");

        let json = serde_json::to_value(ValidationError::CutoffAtOrAboveNyquist {
            sample_rate_hz: 100.0,
            nyquist_hz: 50.0,
        })
        .unwrap();
        assert_eq!(json["kind"], "cutoff_at_or_above_nyquist");
        assert_eq!(json["nyquist_hz"], 50.0);
    }

    #[test]
    fn test_lpf_error_wraps_validation() {
        let err: LpfError = ValidationError::NonPositiveInterval.into();
        assert!(matches!(
            err,
            LpfError::Validation(ValidationError::NonPositiveInterval)
        ));
        assert!(err.to_string().contains("Ts > 0"));
    }
}
