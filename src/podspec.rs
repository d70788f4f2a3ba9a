//! Podspec discovery within a package directory
//!
//! A package is linkable on iOS when it ships a podspec. An explicit
//! `podspecPath` from the module configuration wins; otherwise the
//! package root is searched one directory deep for `*.podspec` files,
//! skipping anything under `node_modules`.

use crate::module::ModuleRevision;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PodspecError {
    #[error("Invalid podspec search pattern under {path}: {source}")]
    Pattern {
        path: PathBuf,
        source: glob::PatternError,
    },

    #[error("Failed to read a directory entry under {path}: {source}")]
    Glob {
        path: PathBuf,
        source: glob::GlobError,
    },

    #[error("Package path {path} is not valid UTF-8")]
    InvalidPath { path: PathBuf },
}

/// Find the podspec file for a revision, as a path relative to its root
///
/// A non-empty `podspecPath` override is returned as-is, without
/// checking that the file exists. Otherwise the lexicographically first
/// `*/*.podspec` match wins. `Ok(None)` means the package has no
/// podspec and contributes nothing to iOS autolinking.
pub fn find_podspec_file(revision: &ModuleRevision) -> Result<Option<String>, PodspecError> {
    if let Some(config) = &revision.config
        && let Some(path) = config.ios_podspec_path()
        && !path.is_empty()
    {
        return Ok(Some(path.to_string()));
    }

    let pattern_path = revision.path.join("*/*.podspec");
    let Some(pattern) = pattern_path.to_str() else {
        return Err(PodspecError::InvalidPath {
            path: revision.path.clone(),
        });
    };

    let entries = glob::glob(pattern).map_err(|source| PodspecError::Pattern {
        path: revision.path.clone(),
        source,
    })?;

    let mut matches = Vec::new();
    for entry in entries {
        let path = entry.map_err(|source| PodspecError::Glob {
            path: revision.path.clone(),
            source,
        })?;

        let relative = path.strip_prefix(&revision.path).unwrap_or(&path);
        if relative
            .components()
            .any(|component| component.as_os_str() == "node_modules")
        {
            continue;
        }

        matches.push(relative.to_string_lossy().into_owned());
    }

    // Lexicographic order, first match wins
    matches.sort();
    Ok(matches.into_iter().next())
}
