//! `whichpm detect` command implementation.
//!
//! Resolves the single package manager governing the working directory, or
//! reports `undetermined` when the signals do not narrow to one.

use miette::Result;
use serde::Serialize;
use std::path::Path;
use whichpm_core::{choose_package_manager, ChooseOptions, DetectError, PackageManagerKind};

/// Result for JSON output.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DetectResult {
    ok: bool,
    package_manager: Option<PackageManagerKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<CliError>,
}

/// Error info for JSON output.
#[derive(Serialize)]
struct CliError {
    code: String,
    message: String,
}

pub fn run(cwd: &Path, options: &ChooseOptions, json: bool) -> Result<()> {
    tracing::debug!(cwd = %cwd.display(), preferred = ?options.preferred, "detecting package manager");

    match choose_package_manager(cwd, options) {
        Ok(chosen) => {
            if json {
                let result = DetectResult {
                    ok: true,
                    package_manager: chosen,
                    error: None,
                };
                println!("{}", serde_json::to_string(&result).unwrap());
            } else {
                match chosen {
                    Some(kind) => println!("{kind}"),
                    None => println!("undetermined"),
                }
            }
            Ok(())
        }
        Err(e) => {
            report_error(&e, json);
            std::process::exit(1);
        }
    }
}

/// Print a detection failure in the requested format.
pub fn report_error(e: &DetectError, json: bool) {
    if json {
        let code = match e {
            DetectError::AmbiguousLockFiles { .. } => "AMBIGUOUS_LOCK_FILES",
            DetectError::ManifestRead { .. } => "MANIFEST_READ_FAILED",
            DetectError::ManifestParse { .. } => "MANIFEST_PARSE_FAILED",
            DetectError::Io(_) => "IO_ERROR",
        };
        let result = DetectResult {
            ok: false,
            package_manager: None,
            error: Some(CliError {
                code: code.to_string(),
                message: e.to_string(),
            }),
        };
        println!("{}", serde_json::to_string(&result).unwrap());
    } else {
        eprintln!("error: {e}");
    }
}
