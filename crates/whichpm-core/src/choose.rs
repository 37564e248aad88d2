//! Reducing a [`PackageStructure`] plus caller preferences to one answer.

use crate::error::DetectError;
use crate::kind::PackageManagerKind;
use crate::structure::detect_structure;
use std::path::Path;
use std::process::{Command, Stdio};

/// Caller-supplied knobs for [`choose_package_manager`].
#[derive(Debug, Clone, Default)]
pub struct ChooseOptions {
    /// Ordered preference list consulted when structure alone is not
    /// decisive.
    pub preferred: Vec<PackageManagerKind>,
    /// Verify that a preferred candidate is actually installed before
    /// choosing it.
    pub check_executable: bool,
    /// Skip the manifest's `packageManager` declaration.
    pub ignore_manager_field: bool,
}

/// Seam for executable verification, so tests never spawn processes.
pub trait ExecutableProbe {
    /// Whether the manager's executable is installed and runnable.
    fn is_available(&self, kind: PackageManagerKind) -> bool;
}

/// Probe that runs `<manager> --version` and checks the exit status.
///
/// Any spawn failure or non-zero exit counts as unavailable; the caller
/// moves on to the next preferred candidate.
pub struct SystemProbe;

impl ExecutableProbe for SystemProbe {
    fn is_available(&self, kind: PackageManagerKind) -> bool {
        Command::new(kind.as_str())
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }
}

/// Choose the package manager governing `dir`, or `None` if undetermined.
pub fn choose_package_manager(
    dir: &Path,
    options: &ChooseOptions,
) -> Result<Option<PackageManagerKind>, DetectError> {
    choose_with_probe(dir, options, &SystemProbe)
}

/// [`choose_package_manager`] with an explicit executable probe.
///
/// Precedence:
/// 1. A sole structural candidate wins unconditionally; a stale or wrong
///    `packageManager` field is not allowed to contradict a real lock file.
/// 2. A present, non-ignored `packageManager` field naming one of the
///    candidates wins over the preference list.
/// 3. The first preferred candidate in the candidate set wins; with
///    verification requested, the first whose executable check succeeds.
pub fn choose_with_probe(
    dir: &Path,
    options: &ChooseOptions,
    probe: &dyn ExecutableProbe,
) -> Result<Option<PackageManagerKind>, DetectError> {
    let structure = detect_structure(dir)?;
    let candidates = structure
        .compatible_package_managers
        .unwrap_or_else(|| PackageManagerKind::ALL.to_vec());

    if let [single] = candidates.as_slice() {
        return Ok(Some(*single));
    }

    if !options.ignore_manager_field {
        if let Some(field) = &structure.package_manager_field {
            if let Ok(kind) = field.name.parse::<PackageManagerKind>() {
                if candidates.contains(&kind) {
                    return Ok(Some(kind));
                }
            }
        }
    }

    for &kind in &options.preferred {
        if candidates.contains(&kind)
            && (!options.check_executable || probe.is_available(kind))
        {
            return Ok(Some(kind));
        }
    }

    Ok(None)
}
