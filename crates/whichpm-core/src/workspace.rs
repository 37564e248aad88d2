//! Workspace root classification and membership matching.
//!
//! A directory can be a workspace root for pnpm (marker file), npm
//! (`workspaces` array), yarn (`private` + `workspaces` array or object),
//! or several of those at once. Membership of a sub-directory is decided
//! purely by glob match against its path relative to the root, never by
//! enumerating real files.

use crate::kind::PackageManagerKind;
use crate::manifest::PackageManifest;
use std::path::Path;

/// Marker file whose presence makes a directory a pnpm workspace root.
pub const PNPM_WORKSPACE_MARKER: &str = "pnpm-workspace.yaml";

/// Result of classifying one directory as a workspace root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceClassification {
    Root {
        /// Manager families the root declaration is compatible with, in
        /// canonical order. May be empty when a `workspaces` field exists
        /// but satisfies neither family's rules.
        compatible: Vec<PackageManagerKind>,
        /// Globs deciding which relative paths are members.
        membership_globs: Vec<String>,
    },
    NotRoot,
}

/// npm reads `workspaces` only in its plain array form, independent of the
/// `private` flag.
fn npm_compatible_globs(manifest: &PackageManifest) -> Option<Vec<String>> {
    manifest.workspace_globs_array()
}

/// yarn requires the manifest to be private, and accepts the array form or
/// the `{ "packages": [...] }` object form.
fn yarn_compatible_globs(manifest: &PackageManifest) -> Option<Vec<String>> {
    if manifest.private {
        manifest.workspace_globs_any()
    } else {
        None
    }
}

/// Classify `dir` (with its parsed manifest) as a workspace root.
///
/// A pnpm marker file wins outright, with membership fixed to everything;
/// the marker's own include/exclude patterns are deliberately not parsed.
/// Otherwise the npm and yarn checks are evaluated independently and their
/// compatible kinds unioned. Both checks read the same `workspaces` value,
/// so when both are compatible the glob lists agree.
#[must_use]
pub fn classify_workspace_root(dir: &Path, manifest: &PackageManifest) -> WorkspaceClassification {
    if dir.join(PNPM_WORKSPACE_MARKER).is_file() {
        return WorkspaceClassification::Root {
            compatible: vec![PackageManagerKind::Pnpm],
            membership_globs: vec!["**".to_string()],
        };
    }

    if !manifest.has_workspaces() {
        return WorkspaceClassification::NotRoot;
    }

    let mut compatible = Vec::new();
    let mut membership_globs = Vec::new();

    if let Some(globs) = npm_compatible_globs(manifest) {
        compatible.push(PackageManagerKind::Npm);
        membership_globs = globs;
    }

    if let Some(globs) = yarn_compatible_globs(manifest) {
        compatible.push(PackageManagerKind::Yarn);
        membership_globs = globs;
    }

    WorkspaceClassification::Root {
        compatible,
        membership_globs,
    }
}

/// Whether `relative_path` matches any membership glob.
///
/// `*` stops at path separators (so `pkgs/*` covers `pkgs/a` but not
/// `pkgs/a/b`) while `**` crosses them. Patterns that fail to parse simply
/// match nothing.
#[must_use]
pub fn matches_membership(relative_path: &Path, globs: &[String]) -> bool {
    let options = glob::MatchOptions {
        require_literal_separator: true,
        ..glob::MatchOptions::new()
    };
    globs.iter().any(|g| {
        glob::Pattern::new(g)
            .map(|pattern| pattern.matches_path_with(relative_path, options))
            .unwrap_or(false)
    })
}
