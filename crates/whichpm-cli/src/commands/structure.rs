//! `whichpm structure` command implementation.
//!
//! Exposes the raw structural signals for callers that want more than the
//! single resolved answer.

use miette::Result;
use serde::Serialize;
use std::path::Path;
use whichpm_core::{detect_structure, PackageManagerKind, PackageStructure};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StructureResult {
    ok: bool,
    #[serde(flatten)]
    structure: PackageStructure,
}

pub fn run(cwd: &Path, json: bool) -> Result<()> {
    tracing::debug!(cwd = %cwd.display(), "detecting package structure");

    let structure = match detect_structure(cwd) {
        Ok(s) => s,
        Err(e) => {
            super::detect::report_error(&e, json);
            std::process::exit(1);
        }
    };

    if json {
        let result = StructureResult {
            ok: true,
            structure,
        };
        println!("{}", serde_json::to_string(&result).unwrap());
        return Ok(());
    }

    match structure.lock_file {
        Some(kind) => println!("lock file:        {}", kind.lock_file_name()),
        None => println!("lock file:        none"),
    }

    let candidates = structure
        .compatible_package_managers
        .unwrap_or_else(|| PackageManagerKind::ALL.to_vec());
    let names: Vec<&str> = candidates.iter().map(|k| k.as_str()).collect();
    println!("candidates:       {}", names.join(", "));

    match &structure.package_manager_field {
        Some(field) => match &field.version {
            Some(version) => println!("manager field:    {}@{version}", field.name),
            None => println!("manager field:    {}", field.name),
        },
        None => println!("manager field:    none"),
    }

    match &structure.workspace_root {
        Some(root) => println!("workspace root:   {}", root.display()),
        None => println!("workspace root:   none"),
    }

    Ok(())
}
