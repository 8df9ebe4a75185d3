//! .

use crate::{
    app::Report,
    error::{AppError, AppResult},
};

use std::io::{self, Write};
use std::process::ExitCode;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Print the dispatcher result to the process streams and pick the exit code.
pub fn render(result: AppResult<Report>) -> ExitCode {
    let code = report(result, &mut io::stdout().lock(), &mut io::stderr().lock());
    ExitCode::from(code)
}

/// Like [`render`], writing to the given streams and returning the raw status.
pub fn report(result: AppResult<Report>, out: &mut impl Write, err: &mut impl Write) -> u8 {
    match result {
        Ok(report) => match write_report(&report, out) {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                let _ = writeln!(err, "{e}");
                EXIT_FAILURE
            }
        },
        Err(AppError::Usage(text)) => {
            let _ = writeln!(out, "{text}");
            EXIT_FAILURE
        }
        Err(e) => {
            tracing::debug!(error = ?e, "preview failed");
            let _ = writeln!(err, "{e}");
            EXIT_FAILURE
        }
    }
}

fn write_report(report: &Report, out: &mut impl Write) -> Result<(), String> {
    let outcome = &report.outcome;
    if report.json {
        let json = serde_json::to_string(&serde_json::json!({
            "status": outcome.message,
            "path": outcome.path.display().to_string(),
            "format": outcome.format.to_string(),
            "fellBack": outcome.fell_back,
        }))
        .map_err(|e| format!("JSON serialization failed: {e}"))?;
        writeln!(out, "{json}").map_err(|e| format!("Failed to write to stdout: {e}"))
    } else {
        writeln!(out, "✔ {}", outcome.message).map_err(|e| format!("Failed to write to stdout: {e}"))
    }
}
