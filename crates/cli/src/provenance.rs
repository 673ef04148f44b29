use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata recorded next to a layout artifact.
pub struct Payload {
    pub params: Value,
    pub tag: Option<String>,
    /// Layout outcome (`placed`, `lines`, `complete`), when one was produced.
    pub summary: Option<Value>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            tag: None,
            summary: None,
        }
    }

    pub fn with_summary(mut self, summary: Value) -> Self {
        self.summary = Some(summary);
        self
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

/// On-disk shape of `<artifact>.provenance.json`.
#[derive(Serialize)]
struct Sidecar {
    code_rev: String,
    version: &'static str,
    callsite: Callsite,
    tag: Option<String>,
    params: Value,
    summary: Option<Value>,
    outputs: Vec<String>,
}

/// Write `<artifact>.provenance.json` with the git commit, library version,
/// callsite, params and outputs. Returns the sidecar path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let target = sidecar_path(artifact);
    if let Some(dir) = target.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let at = Location::caller();
    let doc = Sidecar {
        code_rev: current_git_rev(),
        version: polyflow::VERSION,
        callsite: Callsite {
            file: at.file(),
            line: at.line(),
        },
        tag: payload.tag,
        params: payload.params,
        summary: payload.summary,
        outputs: vec![artifact.to_string_lossy().into_owned()],
    };
    fs::write(&target, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", target.display()))?;
    Ok(target)
}

/// `out/boxes.json` -> `out/boxes.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map_or_else(|| "artifact".into(), |s| s.to_string_lossy().into_owned());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Commit of the running build: `GIT_COMMIT` at compile time, then at run
/// time, then `git rev-parse HEAD`; `"unknown"` when none is available.
pub fn current_git_rev() -> String {
    let non_empty = |s: String| (!s.is_empty()).then_some(s);
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .and_then(non_empty)
        .or_else(|| std::env::var("GIT_COMMIT").ok().and_then(non_empty))
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            if !out.status.success() {
                return None;
            }
            String::from_utf8(out.stdout)
                .ok()
                .map(|s| s.trim().to_string())
                .and_then(non_empty)
        })
        .unwrap_or_else(|| "unknown".to_string())
}
