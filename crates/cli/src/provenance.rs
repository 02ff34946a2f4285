use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Write `<artifact>.provenance.json` next to an exported shell table:
/// code revision, library version, call site, solver geometry, outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, geometry: Value) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let mut doc = summary();
    doc["callsite"] = json!({ "file": callsite.file(), "line": callsite.line() });
    doc["geometry"] = geometry;
    doc["outputs"] = json!([artifact.to_string_lossy()]);
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

/// Code revision and library version; the `report` subcommand prints this alone.
pub fn summary() -> Value {
    json!({
        "code_rev": current_git_rev(),
        "nmo_version": nmo::VERSION,
    })
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("shells"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_name_replaces_extension() {
        let derived = provenance_path(Path::new("/tmp/nmo/shells.parquet"));
        assert_eq!(derived, Path::new("/tmp/nmo/shells.provenance.json"));
    }

    #[test]
    fn sidecar_records_geometry_and_outputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("shells.csv");
        fs::write(&artifact, "mirror,b\n").unwrap();
        let prov = write_sidecar(&artifact, json!({"number": 3})).unwrap();
        assert!(prov.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov).unwrap()).unwrap();
        assert_eq!(parsed["geometry"]["number"], 3);
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["nmo_version"], nmo::VERSION);
        assert!(parsed["callsite"]["line"].as_u64().is_some());
    }
}
