use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsStr;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata used to generate a provenance sidecar.
pub struct Payload {
    pub params: Value,
    pub tag: Option<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self { params, tag: None }
    }

    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }
}

/// Provenance document for `artifact` (shared by sidecars and `report`).
#[track_caller]
pub fn document(outputs: &[&Path], payload: &Payload) -> Value {
    let callsite = Location::caller();
    json!({
        "code_rev": current_git_rev(),
        "version": hull2d::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "tag": payload.tag,
        "params": payload.params,
        "outputs": outputs.iter().map(|p| p.to_string_lossy()).collect::<Vec<_>>()
    })
}

/// Write `<artifact>.provenance.json` containing the git commit, callsite, params, and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let doc = document(&[artifact], &payload);
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

/// `dir/hull.json` → `dir/hull.provenance.json`.
fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .unwrap_or_else(|| OsStr::new("artifact"))
        .to_os_string();
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// `GIT_COMMIT` baked in at build time, else `git rev-parse HEAD`, else "unknown".
fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|rev| !rev.is_empty()) {
        return rev.to_string();
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|rev| rev.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
