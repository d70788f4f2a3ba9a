//! Module configuration file support
//!
//! Reads `expo-module.config.json` from a package root:
//!
//! ```json
//! {
//!   "platforms": ["ios", "android"],
//!   "ios": {
//!     "podspecPath": "ios/Custom.podspec",
//!     "swiftModuleName": "MyModule",
//!     "modules": ["MyModule"],
//!     "appDelegateSubscribers": ["MyAppLifecycleListener"],
//!     "reactDelegateHandlers": ["MyReactDelegateHandler"]
//!   }
//! }
//! ```
//!
//! Every field is optional. A package without a config file is still a
//! valid candidate for podspec discovery.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the module configuration file expected at a package root
pub const MODULE_CONFIG_FILENAME: &str = "expo-module.config.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// iOS section of a module configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct IosConfig {
    /// Explicit podspec path relative to the package root
    pub podspec_path: Option<String>,

    /// Overrides the Swift module name derived from the pod name
    pub swift_module_name: Option<String>,

    /// Module class names exported to the module provider
    #[serde(default)]
    pub modules: Vec<String>,

    /// App delegate subscriber class names
    #[serde(default)]
    pub app_delegate_subscribers: Vec<String>,

    /// React delegate handler class names
    #[serde(default)]
    pub react_delegate_handlers: Vec<String>,
}

/// Top-level module configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ModuleConfig {
    /// Platforms the module declares support for. Absent means no restriction.
    #[serde(default)]
    pub platforms: Option<Vec<String>>,

    #[serde(default)]
    ios: Option<IosConfig>,
}

impl ModuleConfig {
    /// Load the module configuration from a package directory
    ///
    /// Returns `Ok(None)` when the package has no config file.
    pub fn load(package_path: &Path) -> Result<Option<Self>, ConfigError> {
        let path = package_path.join(MODULE_CONFIG_FILENAME);

        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;

        let config =
            serde_json::from_str(&content).map_err(|source| ConfigError::ParseError { path, source })?;

        Ok(Some(config))
    }

    /// Whether the module declares support for the iOS platform
    pub fn supports_ios(&self) -> bool {
        match &self.platforms {
            Some(platforms) => platforms.iter().any(|p| p == "ios" || p == "apple"),
            None => true,
        }
    }

    /// Explicit podspec path, relative to the package root
    pub fn ios_podspec_path(&self) -> Option<&str> {
        self.ios.as_ref()?.podspec_path.as_deref()
    }

    /// Explicit Swift module name override
    pub fn ios_swift_module_name(&self) -> Option<&str> {
        self.ios.as_ref()?.swift_module_name.as_deref()
    }

    /// Module class names, empty when not configured
    pub fn ios_modules(&self) -> &[String] {
        self.ios.as_ref().map(|ios| ios.modules.as_slice()).unwrap_or_default()
    }

    /// App delegate subscriber class names, empty when not configured
    pub fn ios_app_delegate_subscribers(&self) -> &[String] {
        self.ios
            .as_ref()
            .map(|ios| ios.app_delegate_subscribers.as_slice())
            .unwrap_or_default()
    }

    /// React delegate handler class names, empty when not configured
    pub fn ios_react_delegate_handlers(&self) -> &[String] {
        self.ios
            .as_ref()
            .map(|ios| ios.react_delegate_handlers.as_slice())
            .unwrap_or_default()
    }
}
