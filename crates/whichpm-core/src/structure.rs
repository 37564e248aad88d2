//! Structural detection: one directory in, one immutable descriptor out.

use crate::ancestor::locate_ancestor_root;
use crate::error::DetectError;
use crate::kind::PackageManagerKind;
use crate::locks::probe_lock_file;
use crate::manifest::{ManagerField, PackageManifest, MANIFEST_FILE};
use crate::workspace::{classify_workspace_root, WorkspaceClassification};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// The structural signals detected for one directory.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageStructure {
    /// Set only when exactly one lock file exists at the resolved location
    /// (the queried directory, or its governing workspace root).
    pub lock_file: Option<PackageManagerKind>,

    /// Narrowed candidate set. Whenever `lock_file` is set this is exactly
    /// that one kind.
    pub compatible_package_managers: Option<Vec<PackageManagerKind>>,

    /// The manifest's `packageManager` declaration; for workspace members
    /// the root manifest's declaration.
    pub package_manager_field: Option<ManagerField>,

    /// Set only when the governing root is an ancestor directory, not the
    /// queried directory itself.
    pub workspace_root: Option<PathBuf>,
}

/// Detect the package structure governing `dir`.
///
/// Precedence, each step short-circuiting:
/// 1. No manifest in `dir` → ancestor search.
/// 2. A single lock file in `dir` is final; such a directory is never
///    treated as a workspace member even if it also declares `workspaces`.
/// 3. `dir` classifying as a workspace root governs itself.
/// 4. An ancestor root claiming `dir` as a member propagates its signals.
/// 5. Maximal fallback: all three managers remain possible.
pub fn detect_structure(dir: &Path) -> Result<PackageStructure, DetectError> {
    let manifest_path = dir.join(MANIFEST_FILE);
    let manifest = if manifest_path.is_file() {
        Some(PackageManifest::load(&manifest_path)?)
    } else {
        None
    };
    let own_field = manifest.as_ref().and_then(PackageManifest::manager_field);

    if let Some(manifest) = &manifest {
        if let Some(kind) = probe_lock_file(dir)? {
            return Ok(PackageStructure {
                lock_file: Some(kind),
                compatible_package_managers: Some(vec![kind]),
                package_manager_field: own_field,
                workspace_root: None,
            });
        }

        if let WorkspaceClassification::Root { compatible, .. } =
            classify_workspace_root(dir, manifest)
        {
            return Ok(PackageStructure {
                lock_file: None,
                compatible_package_managers: Some(compatible),
                package_manager_field: own_field,
                workspace_root: None,
            });
        }
    }

    if let Some(ancestor) = locate_ancestor_root(dir)? {
        return Ok(PackageStructure {
            lock_file: ancestor.lock_file,
            compatible_package_managers: Some(ancestor.compatible),
            package_manager_field: ancestor.manager_field,
            workspace_root: Some(ancestor.root),
        });
    }

    Ok(PackageStructure {
        lock_file: None,
        compatible_package_managers: Some(PackageManagerKind::ALL.to_vec()),
        package_manager_field: own_field,
        workspace_root: None,
    })
}
