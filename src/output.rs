//! Output formatting for JSON and text modes
//!
//! Provides types for structured output that can be serialized to JSON
//! for machine-readable output, or displayed as text for human consumption.

use crate::module::ResolvedModule;
use serde::Serialize;

/// Result of a resolve operation
#[derive(Debug, Serialize)]
pub struct ResolveOutput {
    pub modules: Vec<ModuleEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
}

/// A single resolved module descriptor
#[derive(Debug, Serialize)]
pub struct ModuleEntry {
    pub package_name: String,
    pub pod_name: String,
    pub podspec_dir: String,
    pub swift_module_name: String,
    pub modules: Vec<String>,
    pub app_delegate_subscribers: Vec<String>,
    pub react_delegate_handlers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_dir: Option<String>,
}

/// Result of a generate operation
#[derive(Debug, Serialize)]
pub struct GenerateOutput {
    pub target: String,
    pub class_name: String,
    /// Package names that contributed to the generated list
    pub packages: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
}

impl ModuleEntry {
    pub fn new(module: &ResolvedModule) -> Self {
        Self {
            package_name: module.package_name.clone(),
            pod_name: module.pod_name.clone(),
            podspec_dir: module.podspec_dir.display().to_string(),
            swift_module_name: module.swift_module_name.clone(),
            modules: module.modules.clone(),
            app_delegate_subscribers: module.app_delegate_subscribers.clone(),
            react_delegate_handlers: module.react_delegate_handlers.clone(),
            flags: module.flags.clone(),
            header_dir: None,
        }
    }

    pub fn with_header_dir(mut self, header_dir: &str) -> Self {
        self.header_dir = Some(header_dir.to_string());
        self
    }
}

/// Print JSON output to stdout
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_module() -> ResolvedModule {
        ResolvedModule {
            package_name: "expo-camera".to_string(),
            pod_name: "ExpoCamera".to_string(),
            podspec_dir: PathBuf::from("/packages/expo-camera/ios"),
            swift_module_name: "ExpoCamera".to_string(),
            flags: None,
            modules: vec!["CameraModule".to_string()],
            app_delegate_subscribers: Vec::new(),
            react_delegate_handlers: Vec::new(),
        }
    }

    #[test]
    fn test_module_entry_serializes_without_optional_fields() {
        let entry = ModuleEntry::new(&sample_module());
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"package_name\":\"expo-camera\""));
        assert!(!json.contains("header_dir"));
        assert!(!json.contains("flags"));
    }

    #[test]
    fn test_module_entry_with_header_dir() {
        let entry = ModuleEntry::new(&sample_module()).with_header_dir("React");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"header_dir\":\"React\""));
    }

    #[test]
    fn test_resolve_output_skips_empty_skipped_list() {
        let output = ResolveOutput {
            modules: Vec::new(),
            skipped: Vec::new(),
        };
        let json = serde_json::to_string(&output).unwrap();
        assert!(!json.contains("skipped"));
    }
}
