use crate::cli::BatchArgs;
use crate::exit_codes;
use crate::output;
use lpf_rs::{design_batch, parse_requests, BatchOutcome};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

/// One JSON Lines record on stdout
#[derive(Serialize)]
struct BatchLine<'a> {
    file: &'a str,
    #[serde(flatten)]
    outcome: &'a BatchOutcome,
}

pub fn execute(args: BatchArgs) -> i32 {
    let files = match resolve_files(&args) {
        Ok(f) => f,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return exit_codes::INPUT_ERROR;
        }
    };

    if files.is_empty() {
        eprintln!("Error: No matching files found");
        return exit_codes::INPUT_ERROR;
    }

    if args.dry_run {
        for f in &files {
            println!("{}", f);
        }
        if !args.quiet {
            eprintln!("Found {} file(s)", files.len());
        }
        return exit_codes::SUCCESS;
    }

    if let Some(ref dir) = args.output_dir {
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!("Error: Failed to create output directory '{}': {}", dir, e);
            return exit_codes::EXECUTION_ERROR;
        }
    }

    let total_files = files.len();
    let mut designed = 0usize;
    let mut failed = 0usize;
    let start_time = Instant::now();

    for (i, file_path) in files.iter().enumerate() {
        if !args.quiet {
            eprintln!("[{}/{}] {}...", i + 1, total_files, file_path);
        }

        let outcomes = match load_and_design(file_path) {
            Ok(o) => o,
            Err(msg) => {
                log::warn!("Skipping {}: {}", file_path, msg);
                eprintln!("  Error: {}", msg);
                failed += 1;
                if !args.continue_on_error {
                    break;
                }
                continue;
            }
        };

        for outcome in &outcomes {
            match outcome {
                BatchOutcome::Designed { .. } => designed += 1,
                BatchOutcome::Rejected { index, message, .. } => {
                    if !args.quiet {
                        eprintln!("  Request {} rejected: {}", index, message);
                    }
                    failed += 1;
                }
            }
        }

        let written = match args.output_dir {
            Some(ref dir) => write_file_report(dir, file_path, &outcomes, args.compact),
            None => write_json_lines(file_path, &outcomes),
        };
        if let Err(e) = written {
            eprintln!("  Error writing output: {}", e);
            return exit_codes::EXECUTION_ERROR;
        }
    }

    if !args.quiet {
        eprintln!(
            "Batch complete: {} designed, {} failed, {:.1}s",
            designed,
            failed,
            start_time.elapsed().as_secs_f64()
        );
    }

    if failed == 0 {
        exit_codes::SUCCESS
    } else if designed > 0 {
        exit_codes::PARTIAL_FAILURE
    } else {
        exit_codes::INPUT_ERROR
    }
}

fn load_and_design(file_path: &str) -> Result<Vec<BatchOutcome>, String> {
    let content = std::fs::read_to_string(file_path)
        .map_err(|e| format!("Failed to read '{}': {}", file_path, e))?;
    let requests = parse_requests(&content).map_err(|e| e.to_string())?;
    log::info!("{}: {} request(s)", file_path, requests.len());
    Ok(design_batch(&requests))
}

fn write_file_report(
    dir: &str,
    file_path: &str,
    outcomes: &[BatchOutcome],
    compact: bool,
) -> Result<(), String> {
    let stem = Path::new(file_path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("requests");
    let out_path = Path::new(dir).join(format!("{}_lpf.json", stem));
    let json = output::to_json(&outcomes, compact)?;
    output::write_output(&json, out_path.to_str())
}

fn write_json_lines(file_path: &str, outcomes: &[BatchOutcome]) -> Result<(), String> {
    for outcome in outcomes {
        let line = output::to_json(
            &BatchLine {
                file: file_path,
                outcome,
            },
            true,
        )?;
        output::write_output(&line, None)?;
    }
    Ok(())
}

fn resolve_files(args: &BatchArgs) -> Result<Vec<String>, String> {
    if let Some(ref pattern) = args.glob {
        resolve_glob(pattern)
    } else if let Some(ref files) = args.files {
        Ok(files.clone())
    } else {
        Err("One of --glob or --files must be specified".to_string())
    }
}

fn resolve_glob(pattern: &str) -> Result<Vec<String>, String> {
    let paths = glob::glob(pattern)
        .map_err(|e| format!("Invalid glob pattern '{}': {}", pattern, e))?;

    let mut files: Vec<String> = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) if path.is_file() => {
                if let Some(s) = path.to_str() {
                    files.push(s.to_string());
                }
            }
            Ok(_) => {}
            Err(e) => log::warn!("glob error: {}", e),
        }
    }
    files.sort();
    Ok(files)
}
