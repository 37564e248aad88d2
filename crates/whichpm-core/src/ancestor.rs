//! Upward search for an enclosing workspace root.

use crate::error::DetectError;
use crate::kind::PackageManagerKind;
use crate::locks::probe_lock_file;
use crate::manifest::{ManagerField, PackageManifest, MANIFEST_FILE};
use crate::workspace::{classify_workspace_root, matches_membership, WorkspaceClassification};
use std::path::{Path, PathBuf};

/// An ancestor workspace root that claims the queried directory as a member.
#[derive(Debug, Clone)]
pub struct AncestorRoot {
    /// Directory of the governing root manifest.
    pub root: PathBuf,
    /// Candidate set resolved at the root: its single lock file if one
    /// exists, else whatever the classifier reported.
    pub compatible: Vec<PackageManagerKind>,
    /// The root's lock file signal, if singular.
    pub lock_file: Option<PackageManagerKind>,
    /// The root manifest's `packageManager` declaration. For workspace
    /// members the root's field is the authoritative one.
    pub manager_field: Option<ManagerField>,
}

/// Find the nearest `file_name` in `from` or any of its ancestors.
///
/// Returns the path to the file itself.
#[must_use]
pub fn find_up(file_name: &str, from: &Path) -> Option<PathBuf> {
    let mut current = from.to_path_buf();

    loop {
        let candidate = current.join(file_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Locate an enclosing workspace root that claims `dir` as a member.
///
/// Searches upward from the parent of `dir` for the nearest manifest,
/// classifies its directory as a root, and checks `dir`'s relative path
/// against the membership globs. An ancestor manifest that is not a root,
/// or whose globs do not cover `dir`, yields `None`; `dir` may simply sit
/// beneath an unrelated project. A single lock file at the root overrides
/// the classifier's candidate set.
pub fn locate_ancestor_root(dir: &Path) -> Result<Option<AncestorRoot>, DetectError> {
    let Some(parent) = dir.parent() else {
        return Ok(None);
    };
    let Some(manifest_path) = find_up(MANIFEST_FILE, parent) else {
        return Ok(None);
    };
    let Some(root) = manifest_path.parent() else {
        return Ok(None);
    };

    let manifest = PackageManifest::load(&manifest_path)?;
    let classification = classify_workspace_root(root, &manifest);

    let WorkspaceClassification::Root {
        compatible,
        membership_globs,
    } = classification
    else {
        return Ok(None);
    };

    // `root` was found by walking up from `dir`, so stripping always works.
    let Ok(relative) = dir.strip_prefix(root) else {
        return Ok(None);
    };
    if !matches_membership(relative, &membership_globs) {
        return Ok(None);
    }

    let lock_file = probe_lock_file(root)?;
    Ok(Some(AncestorRoot {
        root: root.to_path_buf(),
        compatible: lock_file.map_or(compatible, |kind| vec![kind]),
        lock_file,
        manager_field: manifest.manager_field(),
    }))
}
