mod cli;
mod config;
mod generator;
mod module;
mod output;
mod pod;
mod podspec;
mod resolver;

use clap::Parser;
use cli::{Cli, Command};
use module::{ModuleRevision, ResolvedModule};
use output::{GenerateOutput, ModuleEntry, ResolveOutput};
use resolver::ResolveOptions;
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();
    let json_output = cli.json;

    let result = match cli.command {
        Some(Command::Resolve {
            paths,
            flags,
            headers,
        }) => run_resolve(paths, flags, headers, json_output),
        Some(Command::Generate {
            paths,
            target,
            flags,
        }) => run_generate(paths, target, flags, json_output),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_resolve(
    paths: Vec<PathBuf>,
    flags: Option<String>,
    headers: bool,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = ResolveOptions {
        flags: parse_flags(flags)?,
    };
    let (modules, skipped) = resolve_packages(&paths, &options)?;

    let mut entries = Vec::new();
    for module in &modules {
        let mut entry = ModuleEntry::new(module);
        if headers {
            let header_dir = pod::normalize_pod_module(module)?;
            entry = entry.with_header_dir(&header_dir);
        }
        entries.push(entry);
    }

    if json_output {
        output::print_json(&ResolveOutput {
            modules: entries,
            skipped,
        });
        return Ok(());
    }

    if entries.is_empty() {
        println!("No iOS modules resolved.");
    }
    for entry in &entries {
        println!(
            "{} (pod {}, Swift module {})",
            entry.package_name, entry.pod_name, entry.swift_module_name
        );
        if let Some(ref header_dir) = entry.header_dir {
            println!("  header dir: {}", header_dir);
        }
    }
    for name in &skipped {
        println!("Skipped {} (not an iOS module)", name);
    }

    Ok(())
}

fn run_generate(
    paths: Vec<PathBuf>,
    target: PathBuf,
    flags: Option<String>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = ResolveOptions {
        flags: parse_flags(flags)?,
    };
    let (modules, skipped) = resolve_packages(&paths, &options)?;

    generator::generate_package_list(&modules, &target)?;

    let class_name = generator::class_name_for_target(&target)?;
    let packages: Vec<String> = modules
        .iter()
        .filter(|module| module.has_swift_definitions())
        .map(|module| module.package_name.clone())
        .collect();

    if json_output {
        output::print_json(&GenerateOutput {
            target: target.display().to_string(),
            class_name,
            packages,
            skipped,
        });
        return Ok(());
    }

    println!(
        "Generated {} ({} modules)",
        target.display(),
        packages.len()
    );
    for name in &skipped {
        println!("Skipped {} (not an iOS module)", name);
    }

    Ok(())
}

/// Resolve each package directory into a module descriptor
///
/// Packages without a podspec, or whose config excludes iOS, are
/// collected as skipped rather than failing the run.
fn resolve_packages(
    paths: &[PathBuf],
    options: &ResolveOptions,
) -> Result<(Vec<ResolvedModule>, Vec<String>), Box<dyn std::error::Error>> {
    let mut modules = Vec::new();
    let mut skipped = Vec::new();

    for path in paths {
        let package_name = module::package_name(path);
        let revision = ModuleRevision::load(path)?;

        if let Some(config) = &revision.config
            && !config.supports_ios()
        {
            skipped.push(package_name);
            continue;
        }

        match resolver::resolve_module(&package_name, &revision, options)? {
            Some(resolved) => modules.push(resolved),
            None => skipped.push(package_name),
        }
    }

    Ok((modules, skipped))
}

/// Parse the `--flags` JSON object, if given
fn parse_flags(
    flags: Option<String>,
) -> Result<Option<serde_json::Value>, Box<dyn std::error::Error>> {
    match flags {
        Some(raw) => {
            let value: serde_json::Value =
                serde_json::from_str(&raw).map_err(|e| format!("Invalid --flags JSON: {}", e))?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}
