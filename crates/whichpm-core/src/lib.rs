#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod ancestor;
pub mod choose;
pub mod error;
pub mod kind;
pub mod locks;
pub mod manifest;
pub mod structure;
pub mod version;
pub mod workspace;

pub use ancestor::{find_up, locate_ancestor_root, AncestorRoot};
pub use choose::{choose_package_manager, choose_with_probe, ChooseOptions, ExecutableProbe, SystemProbe};
pub use error::DetectError;
pub use kind::PackageManagerKind;
pub use locks::{has_lock_file, probe_lock_file};
pub use manifest::{ManagerField, PackageManifest, MANIFEST_FILE};
pub use structure::{detect_structure, PackageStructure};
pub use version::VERSION;
pub use workspace::{
    classify_workspace_root, matches_membership, WorkspaceClassification, PNPM_WORKSPACE_MARKER,
};
