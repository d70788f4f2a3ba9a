//! Swift package list generation
//!
//! Renders the autogenerated `ModulesProvider` subclass that registers
//! module classes, app-delegate subscribers, and react-delegate handler
//! tuples. Output is byte-stable for identical input so the generated
//! file diffs cleanly in version control.

use crate::module::ResolvedModule;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const INDENT: &str = "  ";

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Target path {path} has no file name to derive a class name from")]
    InvalidTarget { path: PathBuf },

    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to replace {path}: {source}")]
    Persist {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Derive the exported class name from the target file name
pub fn class_name_for_target(target: &Path) -> Result<String, GeneratorError> {
    target
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .ok_or_else(|| GeneratorError::InvalidTarget {
            path: target.to_path_buf(),
        })
}

/// Generate the Swift package list file at `target`
///
/// Parent directories are created as needed. The content is rendered
/// fully in memory and written through a sibling temp file, so a torn
/// write is never readable at the target path.
pub fn generate_package_list(
    modules: &[ResolvedModule],
    target: &Path,
) -> Result<(), GeneratorError> {
    let class_name = class_name_for_target(target)?;
    let content = render_package_list(modules, &class_name);

    if let Some(parent) = target.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| GeneratorError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let temp_path = temp_sibling(target);
    if let Err(source) = fs::write(&temp_path, &content) {
        let _ = fs::remove_file(&temp_path);
        return Err(GeneratorError::Write {
            path: temp_path,
            source,
        });
    }

    if let Err(source) = fs::rename(&temp_path, target) {
        let _ = fs::remove_file(&temp_path);
        return Err(GeneratorError::Persist {
            path: target.to_path_buf(),
            source,
        });
    }

    Ok(())
}

/// Temp file next to the target, so the final rename stays on one filesystem
fn temp_sibling(target: &Path) -> PathBuf {
    let file_name = target
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "package_list".to_string());
    target.with_file_name(format!(".{}.tmp", file_name))
}

/// Render the package list source
///
/// Only modules that define at least one module class, app-delegate
/// subscriber, or react-delegate handler contribute; the rest are
/// dropped entirely, import lines included.
fn render_package_list(modules: &[ResolvedModule], class_name: &str) -> String {
    let contributing: Vec<&ResolvedModule> = modules
        .iter()
        .filter(|module| module.has_swift_definitions())
        .collect();

    let module_classes = collect_class_names(&contributing, |module| &module.modules);
    let app_delegate_subscribers =
        collect_class_names(&contributing, |module| &module.app_delegate_subscribers);
    let handler_modules: Vec<&ResolvedModule> = contributing
        .iter()
        .copied()
        .filter(|module| !module.react_delegate_handlers.is_empty())
        .collect();

    let mut out = String::new();
    out.push_str("/**\n");
    out.push_str(" * Automatically generated by podlink.\n");
    out.push_str(" *\n");
    out.push_str(" * This autogenerated class provides a list of classes of native Expo modules,\n");
    out.push_str(
        " * but only these that are written in Swift and use the new API for creating Expo modules.\n",
    );
    out.push_str(" */\n");
    out.push('\n');
    out.push_str("import ExpoModulesCore\n");
    for module in &contributing {
        out.push_str("import ");
        out.push_str(&module.swift_module_name);
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&format!("@objc({})\n", class_name));
    out.push_str(&format!("public class {}: ModulesProvider {{\n", class_name));
    out.push_str("  public override func getModuleClasses() -> [AnyModule.Type] {\n");
    out.push_str(&format!("    return {}\n", format_class_array(&module_classes)));
    out.push_str("  }\n");
    out.push('\n');
    out.push_str(
        "  public override func getAppDelegateSubscribers() -> [ExpoAppDelegateSubscriber.Type] {\n",
    );
    out.push_str(&format!(
        "    return {}\n",
        format_class_array(&app_delegate_subscribers)
    ));
    out.push_str("  }\n");
    out.push('\n');
    out.push_str(
        "  public override func getReactDelegateHandlers() -> [ExpoReactDelegateHandlerTupleType] {\n",
    );
    out.push_str(&format!(
        "    return {}\n",
        format_handler_array(&handler_modules)
    ));
    out.push_str("  }\n");
    out.push_str("}\n");
    out
}

/// Flatten one class list across modules, dropping empty names
fn collect_class_names(
    modules: &[&ResolvedModule],
    pick: fn(&ResolvedModule) -> &Vec<String>,
) -> Vec<String> {
    let mut names = Vec::new();
    for module in modules {
        for name in pick(module) {
            if !name.is_empty() {
                names.push(name.clone());
            }
        }
    }
    names
}

/// Format class names as a Swift array of metatypes
fn format_class_array(class_names: &[String]) -> String {
    let values: Vec<String> = class_names
        .iter()
        .map(|name| format!("{}.self", name))
        .collect();
    format_array_literal(&values)
}

/// Format `(packageName:handler:)` tuples, one per (module, handler)
/// pair, in module order then handler order
fn format_handler_array(modules: &[&ResolvedModule]) -> String {
    let mut values = Vec::new();
    for module in modules {
        for handler in &module.react_delegate_handlers {
            values.push(format!(
                "(packageName: \"{}\", handler: {}.self)",
                module.package_name, handler
            ));
        }
    }
    format_array_literal(&values)
}

/// Multi-line Swift array literal: elements at three indent levels,
/// closing bracket at two
fn format_array_literal(values: &[String]) -> String {
    let mut out = String::from("[");
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push('\n');
        out.push_str(&INDENT.repeat(3));
        out.push_str(value);
    }
    out.push('\n');
    out.push_str(&INDENT.repeat(2));
    out.push(']');
    out
}
