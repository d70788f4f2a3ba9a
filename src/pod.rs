//! CocoaPods interop for podspec metadata
//!
//! Shells out to `pod ipc spec` to turn a podspec into JSON when a
//! module's header directory may differ from its pod name.

use crate::module::ResolvedModule;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PodError {
    #[error("Failed to execute pod: {source}")]
    Exec { source: std::io::Error },

    #[error("pod ipc spec failed for {path}: {message}")]
    CommandFailed { path: PathBuf, message: String },

    #[error("Failed to parse podspec JSON for {path}: {source}")]
    ParseSpec {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Subset of the JSON emitted by `pod ipc spec`
#[derive(Debug, Deserialize)]
struct PodspecJson {
    header_dir: Option<String>,
}

/// Resolve the header search name for a resolved module
///
/// Defaults to the pod name. When `<podspec_dir>/<pod_name>.podspec`
/// exists and declares a non-empty `header_dir`, that value wins.
/// Tool or parse failures propagate; callers decide whether to fall
/// back to the pod name.
pub fn normalize_pod_module(module: &ResolvedModule) -> Result<String, PodError> {
    let podspec_file = module
        .podspec_dir
        .join(format!("{}.podspec", module.pod_name));

    if !podspec_file.exists() {
        return Ok(module.pod_name.clone());
    }

    let stdout = ipc_spec(&podspec_file)?;
    let podspec: PodspecJson =
        serde_json::from_str(&stdout).map_err(|source| PodError::ParseSpec {
            path: podspec_file.clone(),
            source,
        })?;

    match podspec.header_dir {
        Some(header_dir) if !header_dir.is_empty() => Ok(header_dir),
        _ => Ok(module.pod_name.clone()),
    }
}

/// Run `pod ipc spec` and capture stdout
fn ipc_spec(podspec_file: &Path) -> Result<String, PodError> {
    let output = Command::new("pod")
        .args(["ipc", "spec"])
        .arg(podspec_file)
        .output()
        .map_err(|source| PodError::Exec { source })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(PodError::CommandFailed {
            path: podspec_file.to_path_buf(),
            message: stderr.trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn module_in(podspec_dir: PathBuf) -> ResolvedModule {
        ResolvedModule {
            package_name: "expo-camera".to_string(),
            pod_name: "ExpoCamera".to_string(),
            podspec_dir,
            swift_module_name: "ExpoCamera".to_string(),
            flags: None,
            modules: Vec::new(),
            app_delegate_subscribers: Vec::new(),
            react_delegate_handlers: Vec::new(),
        }
    }

    #[test]
    fn test_parse_podspec_json_with_header_dir() {
        let json = r#"{"name": "React-Core", "version": "0.73.0", "header_dir": "React"}"#;
        let podspec: PodspecJson = serde_json::from_str(json).unwrap();
        assert_eq!(podspec.header_dir, Some("React".to_string()));
    }

    #[test]
    fn test_parse_podspec_json_without_header_dir() {
        let json = r#"{"name": "ExpoCamera", "version": "14.0.0"}"#;
        let podspec: PodspecJson = serde_json::from_str(json).unwrap();
        assert_eq!(podspec.header_dir, None);
    }

    #[test]
    fn test_normalize_without_podspec_file_returns_pod_name() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("podlink_pod_test_{}", nanos));

        // Directory does not exist, so no tool invocation happens
        let module = module_in(dir);
        let name = normalize_pod_module(&module).unwrap();
        assert_eq!(name, "ExpoCamera");
    }
}
