//! Parsed view of a `package.json` manifest.
//!
//! Only the fields that feed detection are modeled: `private`, `workspaces`
//! (kept as a raw value because npm and yarn read it differently), and the
//! `packageManager` declaration.

use crate::error::DetectError;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// The manifest file name this crate looks for.
pub const MANIFEST_FILE: &str = "package.json";

/// The detection-relevant subset of a `package.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub private: bool,

    /// Raw `workspaces` field. An array for npm, an array or a
    /// `{ "packages": [...] }` object for yarn; interpretation lives in
    /// [`crate::workspace`].
    #[serde(default)]
    pub workspaces: Option<Value>,

    /// Raw `packageManager` declaration, e.g. `"pnpm@8.6.0"`.
    #[serde(default, rename = "packageManager")]
    pub package_manager: Option<String>,
}

impl PackageManifest {
    /// Load and parse the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self, DetectError> {
        let content = std::fs::read_to_string(path).map_err(|source| DetectError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| DetectError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Whether a `workspaces` field is present at all, regardless of shape.
    #[must_use]
    pub fn has_workspaces(&self) -> bool {
        self.workspaces.is_some()
    }

    /// The `workspaces` globs in array form, the only form npm consumes.
    #[must_use]
    pub fn workspace_globs_array(&self) -> Option<Vec<String>> {
        match self.workspaces.as_ref()? {
            Value::Array(items) => Some(string_items(items)),
            _ => None,
        }
    }

    /// The `workspaces` globs as yarn reads them: a plain array, or the
    /// `packages` array of the object form.
    #[must_use]
    pub fn workspace_globs_any(&self) -> Option<Vec<String>> {
        match self.workspaces.as_ref()? {
            Value::Array(items) => Some(string_items(items)),
            Value::Object(obj) => obj
                .get("packages")
                .and_then(Value::as_array)
                .map(|items| string_items(items)),
            _ => None,
        }
    }

    /// The parsed `packageManager` declaration, if one is present and names
    /// something.
    #[must_use]
    pub fn manager_field(&self) -> Option<ManagerField> {
        ManagerField::parse(self.package_manager.as_deref()?)
    }
}

fn string_items(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(|v| v.as_str().map(String::from))
        .collect()
}

/// An explicit `"name@version"` manager declaration.
///
/// The name is not validated against the known kinds here; that check
/// happens when the value is intersected with the structural candidate set.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ManagerField {
    pub name: String,
    pub version: Option<String>,
}

impl ManagerField {
    /// Split a raw declaration on the first `@`. An empty name segment
    /// yields `None`; a missing or empty version yields `version: None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.split_once('@') {
            Some(("", _)) => None,
            Some((name, version)) => Some(Self {
                name: name.to_string(),
                version: if version.is_empty() {
                    None
                } else {
                    Some(version.to_string())
                },
            }),
            None if raw.is_empty() => None,
            None => Some(Self {
                name: raw.to_string(),
                version: None,
            }),
        }
    }
}
