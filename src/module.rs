//! Module revision and resolved descriptor types
//!
//! A revision is a package directory paired with its optional module
//! configuration. Resolution turns a revision into a `ResolvedModule`
//! descriptor, which the package list generator consumes.

use crate::config::{ConfigError, ModuleConfig};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A candidate module package: root path plus optional configuration
#[derive(Debug, Clone)]
pub struct ModuleRevision {
    /// Package root directory
    pub path: PathBuf,
    /// Module configuration, absent when the package ships none
    pub config: Option<ModuleConfig>,
}

impl ModuleRevision {
    /// Load a revision from a package directory
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = ModuleConfig::load(path)?;
        Ok(ModuleRevision {
            path: path.to_path_buf(),
            config,
        })
    }
}

/// Descriptor for a package that can take part in iOS autolinking
///
/// Produced once per revision by the resolver and never mutated.
#[derive(Debug, Clone)]
pub struct ResolvedModule {
    pub package_name: String,
    /// Podspec filename without extension
    pub pod_name: String,
    /// Directory containing the podspec, joined onto the revision root
    pub podspec_dir: PathBuf,
    pub swift_module_name: String,
    /// Opaque per-run flags passed through from resolve options
    pub flags: Option<serde_json::Value>,
    pub modules: Vec<String>,
    pub app_delegate_subscribers: Vec<String>,
    pub react_delegate_handlers: Vec<String>,
}

impl ResolvedModule {
    /// Whether this module contributes anything to the generated package list
    pub fn has_swift_definitions(&self) -> bool {
        !self.modules.is_empty()
            || !self.app_delegate_subscribers.is_empty()
            || !self.react_delegate_handlers.is_empty()
    }
}

#[derive(Deserialize)]
struct PackageJson {
    name: Option<String>,
}

/// Determine the package name for a package directory
///
/// Prefers the `name` field of `package.json`, falling back to the
/// directory name. A missing or malformed `package.json` is not an
/// error.
pub fn package_name(path: &Path) -> String {
    let package_json = path.join("package.json");

    if let Ok(content) = fs::read_to_string(&package_json)
        && let Ok(parsed) = serde_json::from_str::<PackageJson>(&content)
        && let Some(name) = parsed.name
        && !name.is_empty()
    {
        return name;
    }

    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
