use crate::cli::DesignArgs;
use crate::exit_codes;
use crate::output;
use lpf_rs::analysis::{dc_gain, is_stable};
use lpf_rs::format::{coefficient_block, recurrence, title};
use lpf_rs::{design, FilterCoefficients, FilterRequest};
use serde::Serialize;

#[derive(Serialize)]
pub struct DesignOutput {
    pub cutoff_hz: f64,
    pub sample_period: f64,
    #[serde(flatten)]
    pub coefficients: FilterCoefficients,
    pub dc_gain: f64,
    pub stable: bool,
    #[serde(skip)]
    request: FilterRequest,
}

impl DesignOutput {
    pub fn new(request: FilterRequest, coefficients: FilterCoefficients) -> Self {
        Self {
            cutoff_hz: request.cutoff_hz,
            sample_period: request.sample_period,
            coefficients,
            dc_gain: dc_gain(&coefficients),
            stable: is_stable(&coefficients),
            request,
        }
    }

    /// Title, coefficient block and recurrence, blank-line separated
    pub fn render_text(&self) -> String {
        format!(
            "{}\n\n{}\n\n{}",
            title(&self.request, &self.coefficients),
            coefficient_block(&self.coefficients),
            recurrence(&self.coefficients)
        )
    }
}

pub fn execute(args: DesignArgs) -> i32 {
    let request = match args.filter.to_request() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return exit_codes::INPUT_ERROR;
        }
    };

    log::info!(
        "Designing order {} low-pass: cutoff={} Hz, Ts={} s",
        request.order,
        request.cutoff_hz,
        request.sample_period
    );

    let coefficients = match design(&request) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return exit_codes::INPUT_ERROR;
        }
    };

    log::debug!("Designed coefficients: {:?}", coefficients);

    let result = DesignOutput::new(request, coefficients);
    let code = output::emit(
        &result,
        args.json,
        args.compact,
        args.output.as_deref(),
        DesignOutput::render_text,
    );

    if code == exit_codes::SUCCESS && !args.quiet {
        if let Some(ref path) = args.output {
            eprintln!("Coefficients written to {}", path);
        }
    }

    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use lpf_rs::FilterOrder;

    #[test]
    fn test_render_text_layout() {
        let request = FilterRequest::new(FilterOrder::Two, 10.0, 0.01);
        let output = DesignOutput::new(request, design(&request).unwrap());
        let text = output.render_text();

        let sections: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(sections.len(), 3);
        assert_eq!(
            sections[0],
            "10 Hz LPF (order 2) with Ts = 0.01 s (Fs = 100 Hz)"
        );
        assert!(sections[1].starts_with("N0 = "));
        assert!(sections[2].starts_with("y[k] = "));
    }

    #[test]
    fn test_json_flattens_coefficients() {
        let request = FilterRequest::new(FilterOrder::One, 10.0, 0.01);
        let output = DesignOutput::new(request, design(&request).unwrap());
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["order"], 1);
        assert_eq!(json["sample_rate_hz"], 100.0);
        assert_eq!(json["nyquist_hz"], 50.0);
        assert_eq!(json["n2"], 0.0);
        assert_eq!(json["stable"], true);
        assert!(json.get("request").is_none());
    }
}
