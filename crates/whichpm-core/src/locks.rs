//! Lock file probing.
//!
//! A committed lock file is authoritative proof of which manager is in use,
//! so finding more than one in the same directory is a hard error rather
//! than something to silently narrow.

use crate::error::DetectError;
use crate::kind::PackageManagerKind;
use std::path::Path;

/// Whether `dir` contains the lock file for `kind`.
#[must_use]
pub fn has_lock_file(kind: PackageManagerKind, dir: &Path) -> bool {
    dir.join(kind.lock_file_name()).is_file()
}

/// Probe `dir` for all recognized lock files.
///
/// Returns the single detected kind, `None` when no lock file exists, or
/// [`DetectError::AmbiguousLockFiles`] when more than one is present. The
/// three checks are independent stats; results are collected in canonical
/// order so the ambiguity report is deterministic.
pub fn probe_lock_file(dir: &Path) -> Result<Option<PackageManagerKind>, DetectError> {
    let found: Vec<PackageManagerKind> = PackageManagerKind::ALL
        .into_iter()
        .filter(|kind| has_lock_file(*kind, dir))
        .collect();

    match found.as_slice() {
        [] => Ok(None),
        [single] => Ok(Some(*single)),
        _ => Err(DetectError::AmbiguousLockFiles { kinds: found }),
    }
}
