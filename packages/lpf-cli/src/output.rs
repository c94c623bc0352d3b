use std::io::Write;
use std::path::Path;

/// Write a rendered body to stdout or a file, newline-terminated.
pub fn write_output(body: &str, output_path: Option<&str>) -> Result<(), String> {
    let mut text = body.to_string();
    if !text.ends_with('\n') {
        text.push('\n');
    }

    match output_path {
        Some(path) => std::fs::write(Path::new(path), text)
            .map_err(|e| format!("Failed to write output file '{}': {}", path, e)),
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(text.as_bytes())
                .and_then(|_| handle.flush())
                .map_err(|e| format!("Failed to write to stdout: {}", e))
        }
    }
}

/// Serialize a value to JSON (pretty or compact).
pub fn to_json<T: serde::Serialize>(value: &T, compact: bool) -> Result<String, String> {
    let rendered = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    rendered.map_err(|e| format!("JSON serialization failed: {}", e))
}

/// Render text or JSON and write it, reporting failures on stderr.
///
/// Returns the exit code for the command.
pub fn emit<T, F>(value: &T, json: bool, compact: bool, output_path: Option<&str>, text: F) -> i32
where
    T: serde::Serialize,
    F: FnOnce(&T) -> String,
{
    let body = if json {
        match to_json(value, compact) {
            Ok(body) => body,
            Err(e) => {
                eprintln!("Error: {}", e);
                return crate::exit_codes::EXECUTION_ERROR;
            }
        }
    } else {
        text(value)
    };

    match write_output(&body, output_path) {
        Ok(()) => crate::exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            crate::exit_codes::EXECUTION_ERROR
        }
    }
}
