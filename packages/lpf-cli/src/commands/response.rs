use crate::cli::ResponseArgs;
use crate::exit_codes;
use crate::output;
use lpf_rs::analysis::{dc_gain, is_stable, poles, response_point, ResponsePoint};
use lpf_rs::{design, format_value, FilterCoefficients};
use serde::Serialize;

#[derive(Serialize)]
struct ResponseOutput {
    #[serde(flatten)]
    coefficients: FilterCoefficients,
    cutoff_hz: f64,
    dc_gain: f64,
    pole_radii: Vec<f64>,
    stable: bool,
    points: Vec<ResponsePoint>,
}

pub fn execute(args: ResponseArgs) -> i32 {
    let request = match args.filter.to_request() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return exit_codes::INPUT_ERROR;
        }
    };

    let coefficients = match design(&request) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return exit_codes::INPUT_ERROR;
        }
    };

    if let Err(msg) = validate_freqs(&args.freqs, coefficients.nyquist_hz) {
        eprintln!("Error: {}", msg);
        return exit_codes::INPUT_ERROR;
    }

    log::info!(
        "Evaluating response of order {} filter at {} frequencies",
        request.order,
        args.freqs.len()
    );

    let result = ResponseOutput {
        coefficients,
        cutoff_hz: request.cutoff_hz,
        dc_gain: dc_gain(&coefficients),
        pole_radii: poles(&coefficients).iter().map(|p| p.norm()).collect(),
        stable: is_stable(&coefficients),
        points: args
            .freqs
            .iter()
            .map(|&f| response_point(&coefficients, f))
            .collect(),
    };

    output::emit(&result, args.json, false, None, render_table)
}

fn validate_freqs(freqs: &[f64], nyquist_hz: f64) -> Result<(), String> {
    for &f in freqs {
        if !(0.0..=nyquist_hz).contains(&f) {
            return Err(format!(
                "Frequency {} Hz is outside [0, {}] Hz (0 to Nyquist)",
                format_value(f),
                format_value(nyquist_hz)
            ));
        }
    }
    Ok(())
}

fn render_table(result: &ResponseOutput) -> String {
    let mut lines = vec![
        format!(
            "Order {} low-pass, fc = {} Hz, Fs = {} Hz",
            result.coefficients.order,
            format_value(result.cutoff_hz),
            format_value(result.coefficients.sample_rate_hz)
        ),
        format!("DC gain: {}", format_value(result.dc_gain)),
        format!(
            "Pole radii: {} ({})",
            result
                .pole_radii
                .iter()
                .map(|r| format!("{:.6}", r))
                .collect::<Vec<_>>()
                .join(", "),
            if result.stable { "stable" } else { "unstable" }
        ),
        String::new(),
        format!(
            "  {:<14} {:<14} {:<12} {:<12}",
            "Freq (Hz)", "Magnitude", "dB", "Phase (rad)"
        ),
        format!("  {}", "-".repeat(54)),
    ];

    for p in &result.points {
        lines.push(format!(
            "  {:<14} {:<14.8} {:<12.4} {:<12.6}",
            format_value(p.frequency_hz),
            p.magnitude,
            p.magnitude_db,
            p.phase_rad
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_freqs_range() {
        assert!(validate_freqs(&[0.0, 10.0, 50.0], 50.0).is_ok());
        assert!(validate_freqs(&[-1.0], 50.0).is_err());
        assert!(validate_freqs(&[50.1], 50.0)
            .unwrap_err()
            .contains("outside"));
        assert!(validate_freqs(&[f64::NAN], 50.0).is_err());
    }
}
