use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The package managers whichpm can tell apart.
///
/// The set is closed: the differences between the three are pure data (lock
/// file name, workspace field syntax), so they are modeled as a plain enum
/// plus lookup methods rather than anything open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManagerKind {
    Npm,
    Pnpm,
    Yarn,
}

impl PackageManagerKind {
    /// All kinds in canonical (alphabetical) order. Probes iterate this
    /// order so every reported list is deterministic.
    pub const ALL: [Self; 3] = [Self::Npm, Self::Pnpm, Self::Yarn];

    /// The lock file this manager commits at a project root.
    #[must_use]
    pub fn lock_file_name(self) -> &'static str {
        match self {
            Self::Npm => "package-lock.json",
            Self::Pnpm => "pnpm-lock.yaml",
            Self::Yarn => "yarn.lock",
        }
    }

    /// The executable / field name, e.g. `"pnpm"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
        }
    }
}

impl fmt::Display for PackageManagerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a string that names no known package manager.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown package manager: {0}")]
pub struct UnknownPackageManager(pub String);

impl FromStr for PackageManagerKind {
    type Err = UnknownPackageManager;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "npm" => Ok(Self::Npm),
            "pnpm" => Ok(Self::Pnpm),
            "yarn" => Ok(Self::Yarn),
            other => Err(UnknownPackageManager(other.to_string())),
        }
    }
}
