//! Design many filters at once.
//!
//! Requests are independent, so they are fanned out over rayon's global pool.
//! Results come back in input order.

use rayon::prelude::*;
use serde::Serialize;

use crate::designer::design;
use crate::error::{LpfError, Result, ValidationError};
use crate::types::{FilterCoefficients, FilterRequest};

/// Outcome for one request of a batch
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchOutcome {
    Designed {
        index: usize,
        request: FilterRequest,
        coefficients: FilterCoefficients,
    },
    Rejected {
        index: usize,
        request: FilterRequest,
        error: ValidationError,
        message: String,
    },
}

impl BatchOutcome {
    pub fn index(&self) -> usize {
        match self {
            Self::Designed { index, .. } | Self::Rejected { index, .. } => *index,
        }
    }

    pub fn is_designed(&self) -> bool {
        matches!(self, Self::Designed { .. })
    }
}

/// Parse a JSON array of requests
///
/// A single request object is accepted as a one-element batch.
pub fn parse_requests(json: &str) -> Result<Vec<FilterRequest>> {
    let value: serde_json::Value = serde_json::from_str(json)?;

    let requests: Vec<FilterRequest> = match value {
        serde_json::Value::Array(_) => serde_json::from_value(value)?,
        serde_json::Value::Object(_) => vec![serde_json::from_value(value)?],
        other => {
            return Err(LpfError::ParseError(format!(
                "expected an array of requests or a single request object, found {}",
                json_kind(&other)
            )))
        }
    };

    log::debug!("Parsed {} filter request(s)", requests.len());
    Ok(requests)
}

/// Design every request in parallel
pub fn design_batch(requests: &[FilterRequest]) -> Vec<BatchOutcome> {
    let outcomes: Vec<BatchOutcome> = requests
        .par_iter()
        .enumerate()
        .map(|(index, request)| match design(request) {
            Ok(coefficients) => BatchOutcome::Designed {
                index,
                request: *request,
                coefficients,
            },
            Err(error) => BatchOutcome::Rejected {
                index,
                request: *request,
                error,
                message: error.to_string(),
            },
        })
        .collect();

    let designed = outcomes.iter().filter(|o| o.is_designed()).count();
    log::debug!(
        "Batch designed {} of {} request(s), {} rejected",
        designed,
        outcomes.len(),
        outcomes.len() - designed
    );

    outcomes
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
