//! Module resolution for the iOS platform
//!
//! Turns a module revision into the descriptor the package list
//! generator consumes: podspec location, pod name, Swift module name,
//! and the class lists declared in the module configuration.

use crate::module::{ModuleRevision, ResolvedModule};
use crate::podspec::{self, PodspecError};
use std::path::Path;

/// Per-run options applied to every resolution
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Opaque flags forwarded into each resolved descriptor
    pub flags: Option<serde_json::Value>,
}

/// Derive the Swift module name for a pod
///
/// Non-alphanumeric characters in the pod name are replaced by `_` in
/// the module name. An explicit override is returned verbatim, even
/// when empty.
pub fn swift_module_name(pod_name: &str, override_name: Option<&str>) -> String {
    match override_name {
        Some(name) => name.to_string(),
        None => pod_name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect(),
    }
}

/// Resolve a revision into an iOS module descriptor
///
/// Returns `Ok(None)` when the package has no podspec, which means it
/// takes no part in iOS autolinking. A missing or partially populated
/// configuration is not an error; list-valued fields default to empty.
pub fn resolve_module(
    package_name: &str,
    revision: &ModuleRevision,
    options: &ResolveOptions,
) -> Result<Option<ResolvedModule>, PodspecError> {
    let Some(podspec_file) = podspec::find_podspec_file(revision)? else {
        return Ok(None);
    };

    let pod_name = Path::new(&podspec_file)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| podspec_file.clone());

    let podspec_dir = revision
        .path
        .join(&podspec_file)
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| revision.path.clone());

    let config = revision.config.as_ref();

    Ok(Some(ResolvedModule {
        package_name: package_name.to_string(),
        swift_module_name: swift_module_name(
            &pod_name,
            config.and_then(|c| c.ios_swift_module_name()),
        ),
        pod_name,
        podspec_dir,
        flags: options.flags.clone(),
        modules: config.map(|c| c.ios_modules().to_vec()).unwrap_or_default(),
        app_delegate_subscribers: config
            .map(|c| c.ios_app_delegate_subscribers().to_vec())
            .unwrap_or_default(),
        react_delegate_handlers: config
            .map(|c| c.ios_react_delegate_handlers().to_vec())
            .unwrap_or_default(),
    }))
}
