use crate::kind::PackageManagerKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised during package manager detection.
///
/// Absent signals (no manifest, no enclosing workspace, no matching glob)
/// are not errors; they fold into `Option` results. The only detection-level
/// failure is finding lock files for more than one manager in the directory
/// that precedence has identified as authoritative.
#[derive(Error, Debug)]
pub enum DetectError {
    #[error("lock files for multiple package managers found: {}", kinds_list(.kinds))]
    AmbiguousLockFiles { kinds: Vec<PackageManagerKind> },

    #[error("failed to read manifest at {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest at {path}: {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn kinds_list(kinds: &[PackageManagerKind]) -> String {
    kinds
        .iter()
        .map(|kind| kind.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
